//! # Cart State
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Screen Action            Store Operation         Cart Change           │
//! │  ─────────────            ───────────────         ───────────           │
//! │                                                                         │
//! │  Tap "+" / Add to Cart ──► add_to_cart() ───────► items.push(snapshot) │
//! │                                                                         │
//! │  Tap ✕ on a line ────────► remove_from_cart(i) ─► items.remove(i)      │
//! │                                                                         │
//! │  Checkout ───────────────► checkout() ──────────► items.clear()        │
//! │                                                                         │
//! │  Sign out ───────────────► sign_out() ──────────► items.clear()        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use shop_core::{CartItem, Money, Product};
use ts_rs::TS;

/// The shopping cart.
///
/// ## Invariants
/// - Lines keep insertion order
/// - No quantities: adding the same product twice gives two lines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot of the product.
    pub(crate) fn push(&mut self, product: &Product) {
        self.items.push(product.clone());
    }

    /// Removes and returns the line at `index`, or `None` when out of range.
    pub(crate) fn remove_at(&mut self, index: usize) -> Option<CartItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Empties the cart, returning the lines in order.
    pub(crate) fn take_all(&mut self) -> Vec<CartItem> {
        std::mem::take(&mut self.items)
    }

    #[inline]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of lines (each line is one unit).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line prices.
    pub fn total(&self) -> Money {
        self.items.iter().map(|item| item.price).sum()
    }
}
