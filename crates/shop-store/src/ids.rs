//! Order id generation.
//!
//! Order ids must be unique across a session. `UuidOrderIds` is the default;
//! `SequentialOrderIds` gives predictable ids for tests and the demo script.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Produces a fresh order id on every call.
pub trait OrderIdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidOrderIds;

impl OrderIdGenerator for UuidOrderIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic counter ids: `ORD-0001`, `ORD-0002`, ...
#[derive(Debug, Default)]
pub struct SequentialOrderIds {
    next: AtomicU64,
}

impl SequentialOrderIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderIdGenerator for SequentialOrderIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("ORD-{:04}", n)
    }
}
