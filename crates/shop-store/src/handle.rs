//! # Shared Store Handle
//!
//! A cloneable handle for screens that run on different threads.
//!
//! ## Thread Safety
//! The store sits behind `Arc<Mutex<Store>>`. Writes take the lock
//! exclusively; reads take it briefly and clone what they need out.
//!
//! A panic inside a closure poisons the mutex. The store's reducer checks
//! every precondition before its first write, so the state behind a
//! poisoned lock is still consistent and the handle keeps using it.

use std::sync::{Arc, Mutex, PoisonError};

use crate::config::StoreConfig;
use crate::state::StoreState;
use crate::store::Store;

#[derive(Debug, Clone)]
pub struct StoreHandle {
    store: Arc<Mutex<Store>>,
}

impl StoreHandle {
    pub fn new(store: Store) -> Self {
        StoreHandle {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Executes a function with write access to the store.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }

    pub fn snapshot(&self) -> StoreState {
        self.with_store(Store::snapshot)
    }
}

impl Default for StoreHandle {
    fn default() -> Self {
        Self::new(Store::new(StoreConfig::default()))
    }
}

impl From<Store> for StoreHandle {
    fn from(store: Store) -> Self {
        Self::new(store)
    }
}
