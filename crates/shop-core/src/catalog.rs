//! # Catalog
//!
//! The storefront's read-only product table.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  demo_catalog()  ── built once on first use, shared by reference        │
//! │        │                                                                │
//! │        ├── all()            home grid, admin inventory                  │
//! │        ├── get(id)          product details                             │
//! │        ├── search(query)    case-insensitive name substring             │
//! │        └── inventory(n)     admin stock rows, low stock below n         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in the system writes to a catalog after it is built.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, Review};

/// One line of the admin inventory list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRow {
    pub product_id: String,
    pub name: String,
    pub stock: u32,
    /// Stock is below the configured threshold.
    pub low_stock: bool,
}

/// An immutable, ordered set of products with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The six-product mock catalog the storefront ships with.
    pub fn demo() -> Self {
        Catalog {
            products: demo_products(),
        }
    }

    /// Every product, in catalog order.
    #[inline]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`Catalog::get`], but a missing id is an error.
    pub fn require(&self, id: &str) -> CoreResult<&Product> {
        self.get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// Products whose name contains `query`, ignoring case.
    ///
    /// The query is matched as typed, spaces included. The empty query
    /// matches everything. Results keep catalog order.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::Catalog;
    ///
    /// let catalog = Catalog::demo();
    /// assert_eq!(catalog.search("").len(), catalog.len());
    /// assert!(catalog.search("toaster").is_empty());
    /// ```
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Stock rows for the admin dashboard.
    pub fn inventory(&self, low_stock_threshold: u32) -> Vec<InventoryRow> {
        self.products
            .iter()
            .map(|p| InventoryRow {
                product_id: p.id.clone(),
                name: p.name.clone(),
                stock: p.stock,
                low_stock: p.stock < low_stock_threshold,
            })
            .collect()
    }
}

/// Process-wide demo catalog, built on first access.
pub fn demo_catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(Catalog::demo)
}

// =============================================================================
// Mock Data
// =============================================================================

fn review(id: &str, user: &str, rating: u8, comment: &str, date: &str) -> Review {
    Review {
        id: id.to_string(),
        user: user.to_string(),
        rating,
        comment: comment.to_string(),
        date: date.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    price: i64,
    stock: u32,
    delivery_days: u32,
    image: &str,
    description: &str,
    rating: f32,
    reviews: Vec<Review>,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price: Money::from_units(price),
        stock,
        delivery_days,
        image: image.to_string(),
        description: description.to_string(),
        rating,
        reviews,
    }
}

fn demo_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Pro Wireless Headphones",
            2999,
            45,
            2,
            "https://images.pexels.com/photos/577769/pexels-photo-577769.jpeg?auto=compress&cs=tinysrgb&w=600",
            "Experience crystal clear sound.",
            4.5,
            vec![review("r1", "Amit P.", 5, "Bass is amazing.", "2 days ago")],
        ),
        product(
            "2",
            "Smart Watch Series 5",
            5499,
            12,
            4,
            "https://images.pexels.com/photos/267394/pexels-photo-267394.jpeg?auto=compress&cs=tinysrgb&w=600",
            "Stay connected and healthy.",
            4.0,
            vec![review("r3", "Rahul D.", 5, "Looks premium.", "Yesterday")],
        ),
        product(
            "3",
            "Sport Running Shoes",
            1850,
            8,
            3,
            "https://images.pexels.com/photos/19090/pexels-photo.jpg?auto=compress&cs=tinysrgb&w=600",
            "Lightweight and durable.",
            4.8,
            vec![review("r5", "Vikram S.", 5, "Very comfortable.", "1 month ago")],
        ),
        product(
            "4",
            "RGB Gaming Mouse",
            1200,
            60,
            1,
            "https://images.pexels.com/photos/2115256/pexels-photo-2115256.jpeg?auto=compress&cs=tinysrgb&w=600",
            "High-precision tracking.",
            4.2,
            vec![review("r6", "Gamer123", 5, "Headshots are easier now!", "5 days ago")],
        ),
        product(
            "5",
            "Mechanical Keyboard",
            4500,
            0,
            5,
            "https://images.pexels.com/photos/1772123/pexels-photo-1772123.jpeg?auto=compress&cs=tinysrgb&w=600",
            "Tactile and clicky switches.",
            4.7,
            vec![review("r8", "CodeMaster", 5, "Typing feels like heaven.", "1 day ago")],
        ),
        product(
            "6",
            "4K Camera Lens",
            15899,
            5,
            7,
            "https://images.pexels.com/photos/279906/pexels-photo-279906.jpeg?auto=compress&cs=tinysrgb&w=600",
            "Professional grade lens.",
            4.9,
            vec![review("r9", "PhotoPro", 5, "Crisp images.", "2 days ago")],
        ),
    ]
}
