//! Order history: newest first, append-only.

use serde::{Deserialize, Serialize};
use shop_core::{Money, Order};
use ts_rs::TS;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistory {
    orders: Vec<Order>,
}

impl OrderHistory {
    /// Puts an order at the front of the history.
    pub(crate) fn prepend(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    /// Orders, newest first.
    #[inline]
    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Sum of all order totals.
    pub fn total_sales(&self) -> Money {
        self.orders.iter().map(|o| o.total).sum()
    }
}
