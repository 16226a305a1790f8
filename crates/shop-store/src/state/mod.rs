//! # State Module
//!
//! The data the store owns, split into slices with their own invariants.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    StoreState                                           │
//! │                                                                         │
//! │  user: Option<User>   absent ⇒ signed out                              │
//! │  cart: Cart           product snapshots, insertion order               │
//! │  orders: OrderHistory newest first, never shrinks                      │
//! │  addresses: AddressBook  unique ids, insertion order                   │
//! │  appearance           light / dark                                     │
//! │                                                                         │
//! │  Only the reducer in `store.rs` holds `&mut StoreState`.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod addresses;
mod cart;
mod orders;

pub use addresses::AddressBook;
pub use cart::Cart;
pub use orders::OrderHistory;

use serde::{Deserialize, Serialize};
use shop_core::User;
use ts_rs::TS;

/// Light or dark colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub const fn toggled(self) -> Self {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Light,
        }
    }

    #[inline]
    pub const fn is_dark(self) -> bool {
        matches!(self, Appearance::Dark)
    }
}

/// Everything the store owns. Cloning it yields a snapshot for observers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    pub(crate) user: Option<User>,
    pub(crate) cart: Cart,
    pub(crate) orders: OrderHistory,
    pub(crate) addresses: AddressBook,
    pub(crate) appearance: Appearance,
}

impl StoreState {
    /// Fresh state: signed out, empty cart and order history.
    pub fn new(seed_address: bool) -> Self {
        StoreState {
            addresses: if seed_address {
                AddressBook::seeded()
            } else {
                AddressBook::default()
            },
            ..StoreState::default()
        }
    }

    #[inline]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[inline]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    #[inline]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[inline]
    pub fn orders(&self) -> &OrderHistory {
        &self.orders
    }

    #[inline]
    pub fn addresses(&self) -> &AddressBook {
        &self.addresses
    }

    #[inline]
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = StoreState::new(true);
        assert!(!state.is_signed_in());
        assert!(state.cart().is_empty());
        assert!(state.orders().is_empty());
        assert_eq!(state.addresses().len(), 1);
        assert_eq!(state.appearance(), Appearance::Light);

        assert!(StoreState::new(false).addresses().is_empty());
    }

    #[test]
    fn test_appearance_toggle() {
        assert_eq!(Appearance::Light.toggled(), Appearance::Dark);
        assert!(Appearance::Light.toggled().is_dark());
        assert_eq!(Appearance::Dark.toggled(), Appearance::Light);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let json = serde_json::to_value(StoreState::new(true)).unwrap();
        assert!(json["user"].is_null());
        assert_eq!(json["appearance"], "light");
        assert_eq!(json["addresses"]["addresses"][0]["city"], "Mumbai");
    }
}
