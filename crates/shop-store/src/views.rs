//! # Screen Read Models
//!
//! Ready-to-render shapes for each screen, built from a store and the
//! catalog. Screens never add up totals or format prices themselves.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Screen          Read model         Built by                           │
//! │  ──────          ──────────         ────────                           │
//! │  Home            HomeFeed           store.home_feed(catalog, query)    │
//! │  Details         ProductDetail      store.product_detail(catalog, id)  │
//! │  Cart            CartSummary        store.cart_summary()               │
//! │  Orders          Vec<OrderView>     store.order_views()                │
//! │  Admin           AdminDashboard     store.admin_dashboard(catalog)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shop_core::{
    estimate_arrival, format_arrival, CartItem, Catalog, InventoryRow, Money, Order, Product,
    Review,
};
use ts_rs::TS;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::store::Store;

// =============================================================================
// Product Views
// =============================================================================

/// One tile of the home grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub image: String,
    pub price: String,
    pub stars: u8,
    pub review_count: usize,
    pub available: bool,
}

impl ProductCard {
    pub fn new(product: &Product, config: &StoreConfig) -> Self {
        ProductCard {
            id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            price: config.format_price(product.price),
            stars: product.stars(),
            review_count: product.review_count(),
            available: product.is_available(),
        }
    }
}

/// The product details screen.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub card: ProductCard,
    pub description: String,
    pub stock: u32,
    pub reviews: Vec<Review>,
    /// "Get it by Wed, Oct 21" if ordered today.
    pub arrival: String,
}

/// The home screen: header plus the filtered product grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HomeFeed {
    pub greeting: String,
    pub cart_count: usize,
    pub show_admin_entry: bool,
    pub products: Vec<ProductCard>,
}

// =============================================================================
// Cart & Order Views
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub items: Vec<CartItem>,
    pub count: usize,
    pub total: Money,
    pub formatted_total: String,
}

/// One card of the order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: String,
    pub date: String,
    pub status: String,
    pub item_names: Vec<String>,
    pub total: String,
    pub arrival: String,
}

impl OrderView {
    pub fn new(order: &Order, config: &StoreConfig) -> Self {
        OrderView {
            id: order.id.clone(),
            date: order.date_label(),
            status: order.status.label().to_string(),
            item_names: order.items.iter().map(|p| p.name.clone()).collect(),
            total: config.format_price(order.total),
            arrival: order.arrival_label(),
        }
    }
}

// =============================================================================
// Admin View
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub total_sales: Money,
    pub formatted_sales: String,
    pub order_count: usize,
    pub inventory: Vec<InventoryRow>,
}

// =============================================================================
// Builders
// =============================================================================

impl Store {
    /// Greeting, badge and product grid for the home screen.
    ///
    /// An empty query lists the whole catalog. A query that matches nothing
    /// gives an empty grid, never an error.
    pub fn home_feed(&self, catalog: &Catalog, query: &str) -> StoreResult<HomeFeed> {
        let user = self.user().ok_or(StoreError::NotSignedIn)?;
        let products = catalog
            .search(query)
            .into_iter()
            .map(|p| ProductCard::new(p, self.config()))
            .collect();

        Ok(HomeFeed {
            greeting: format!("Hello, {}", user.first_name()),
            cart_count: self.cart().len(),
            show_admin_entry: user.is_admin(),
            products,
        })
    }

    pub fn product_detail(&self, catalog: &Catalog, product_id: &str) -> StoreResult<ProductDetail> {
        let product = catalog.require(product_id)?;
        let today = self.clock().now_local().date_naive();

        Ok(ProductDetail {
            card: ProductCard::new(product, self.config()),
            description: product.description.clone(),
            stock: product.stock,
            reviews: product.reviews.clone(),
            arrival: format_arrival(estimate_arrival(today, product.delivery_days)),
        })
    }

    pub fn cart_summary(&self) -> CartSummary {
        let cart = self.cart();
        let total = cart.total();
        CartSummary {
            items: cart.items().to_vec(),
            count: cart.len(),
            total,
            formatted_total: self.config().format_price(total),
        }
    }

    /// Order history cards, newest first.
    pub fn order_views(&self) -> Vec<OrderView> {
        self.orders()
            .all()
            .iter()
            .map(|o| OrderView::new(o, self.config()))
            .collect()
    }

    /// Sales and stock overview. Admins only.
    pub fn admin_dashboard(&self, catalog: &Catalog) -> StoreResult<AdminDashboard> {
        match self.user() {
            Some(user) if user.is_admin() => {}
            _ => {
                return Err(StoreError::Forbidden {
                    action: "admin_dashboard".to_string(),
                })
            }
        }

        let total_sales = self.orders().total_sales();
        Ok(AdminDashboard {
            total_sales,
            formatted_sales: self.config().format_price(total_sales),
            order_count: self.orders().len(),
            inventory: catalog.inventory(self.config().low_stock_threshold),
        })
    }
}
