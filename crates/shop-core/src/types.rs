//! # Domain Types
//!
//! Core domain types used throughout ShopApp.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │     User        │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id (UUID)      │   │  email          │       │
//! │  │  name, price    │   │  placed_at      │   │  role           │       │
//! │  │  stock          │   │  items ◄─ snap  │   │  name, phone    │       │
//! │  │  reviews[]      │   │  arrival        │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Review       │   │  OrderStatus    │   │    Address      │       │
//! │  │  rating 1..=5   │   │  Processing     │   │  id (timestamp) │       │
//! │  └─────────────────┘   └─────────────────┘   │  street, city   │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Cart lines and order items are full copies of the [`Product`] taken when
//! the customer acted. Products are never written after the catalog is
//! built, so a snapshot and its source stay equal.

use std::fmt;

use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Review
// =============================================================================

/// A customer review attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    /// Display name of the reviewer.
    pub user: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub comment: String,
    /// Human-readable age of the review ("2 days ago").
    pub date: String,
}

// =============================================================================
// Product
// =============================================================================

/// A product listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Money,
    /// Units on hand. Purely informational: purchases do not decrement it.
    pub stock: u32,
    /// Days from order to doorstep.
    pub delivery_days: u32,
    /// Image URI.
    pub image: String,
    pub description: String,
    /// Average rating, 0.0 to 5.0.
    pub rating: f32,
    pub reviews: Vec<Review>,
}

impl Product {
    /// Whether the product can be added to a cart.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    /// Rating rounded to whole stars for the product grid.
    pub fn stars(&self) -> u8 {
        // Clamped to 0..=5 first, so the cast cannot truncate.
        self.rating.clamp(0.0, 5.0).round() as u8
    }

    /// Number of reviews shown next to the stars.
    #[inline]
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }
}

/// A cart line: a full product snapshot, quantity 1.
pub type CartItem = Product;

// =============================================================================
// User
// =============================================================================

/// Authorization role of a signed-in user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// The signed-in customer's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    pub role: Role,
    pub name: String,
    pub phone: String,
}

impl User {
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// First word of the name, used in the home greeting.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }

    /// Merges the provided fields into this profile. Role is never changed.
    pub fn apply(&mut self, update: UserUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
    }
}

/// Partial profile edit from the security screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Sign-in form input.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// Order
// =============================================================================

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OrderStatus {
    /// Every order starts, and in this demo stays, here.
    #[default]
    Processing,
}

impl OrderStatus {
    /// Label shown on the order card.
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
        }
    }
}

/// A completed checkout for a single product line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
    /// Calendar date in the shopper's time zone when the order was placed.
    #[ts(as = "String")]
    pub placed_on: NaiveDate,
    pub total: Money,
    pub items: Vec<Product>,
    pub status: OrderStatus,
    #[ts(as = "String")]
    pub arrival: NaiveDate,
}

impl Order {
    /// Builds the order for one cart line.
    ///
    /// `placed_at` carries the shopper's offset: the order date is the local
    /// calendar date, while the stored instant is UTC. The total is the
    /// item's price and the arrival date is the order date plus the
    /// product's delivery days.
    pub fn for_item<Tz: TimeZone>(
        id: impl Into<String>,
        item: Product,
        placed_at: DateTime<Tz>,
    ) -> Self {
        let placed_on = placed_at.date_naive();
        let arrival = estimate_arrival(placed_on, item.delivery_days);
        Order {
            id: id.into(),
            placed_at: placed_at.with_timezone(&Utc),
            placed_on,
            total: item.price,
            items: vec![item],
            status: OrderStatus::Processing,
            arrival,
        }
    }

    /// Order date as shown on the order card: `19 Oct 2026`.
    pub fn date_label(&self) -> String {
        self.placed_on.format("%-d %b %Y").to_string()
    }

    /// Arrival date as shown on the order card: `Wed, Oct 21`.
    pub fn arrival_label(&self) -> String {
        format_arrival(self.arrival)
    }
}

/// Date a product ordered on `ordered_on` is expected to arrive.
///
/// ```rust
/// use chrono::NaiveDate;
/// use shop_core::estimate_arrival;
///
/// let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// assert_eq!(estimate_arrival(monday, 2), NaiveDate::from_ymd_opt(2026, 10, 21).unwrap());
/// ```
pub fn estimate_arrival(ordered_on: NaiveDate, delivery_days: u32) -> NaiveDate {
    ordered_on
        .checked_add_days(Days::new(u64::from(delivery_days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Short weekday/month/day label used for delivery estimates.
pub fn format_arrival(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

// =============================================================================
// Address
// =============================================================================

/// A saved delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: String,
    pub street: String,
    pub city: String,
    pub zip: String,
}

impl Address {
    pub fn from_draft(id: impl Into<String>, draft: AddressDraft) -> Self {
        Address {
            id: id.into(),
            street: draft.street,
            city: draft.city,
            zip: draft.zip,
        }
    }

    /// Merges the provided fields. The id is preserved.
    pub fn apply(&mut self, update: AddressUpdate) {
        if let Some(street) = update.street {
            self.street = street;
        }
        if let Some(city) = update.city {
            self.city = city;
        }
        if let Some(zip) = update.zip {
            self.zip = zip;
        }
    }
}

/// Address form input for a new entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AddressDraft {
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub zip: String,
}

impl AddressDraft {
    pub fn new(street: impl Into<String>, city: impl Into<String>, zip: impl Into<String>) -> Self {
        AddressDraft {
            street: street.into(),
            city: city.into(),
            zip: zip.into(),
        }
    }
}

/// Partial edit of an existing address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AddressUpdate {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn keyboard() -> Product {
        Product {
            id: "5".to_string(),
            name: "Mechanical Keyboard".to_string(),
            price: Money::from_units(4500),
            stock: 0,
            delivery_days: 5,
            image: String::new(),
            description: "Tactile and clicky switches.".to_string(),
            rating: 4.7,
            reviews: Vec::new(),
        }
    }

    #[test]
    fn test_product_availability_and_stars() {
        let product = keyboard();
        assert!(!product.is_available());
        assert_eq!(product.stars(), 5);
        assert_eq!(product.review_count(), 0);
    }

    #[test]
    fn test_order_for_item() {
        let placed_at = Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap();
        let order = Order::for_item("ord-1", keyboard(), placed_at);

        assert_eq!(order.total, Money::from_units(4500));
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.arrival, NaiveDate::from_ymd_opt(2026, 10, 24).unwrap());
        assert_eq!(order.date_label(), "19 Oct 2026");
        assert_eq!(order.arrival_label(), "Sat, Oct 24");
    }

    #[test]
    fn test_order_date_uses_shopper_offset() {
        // 20:00 UTC on the 18th is 01:30 on the 19th in India.
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let placed_at = Utc
            .with_ymd_and_hms(2026, 10, 18, 20, 0, 0)
            .unwrap()
            .with_timezone(&ist);
        let order = Order::for_item("ord-2", keyboard(), placed_at);

        assert_eq!(order.placed_on, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        assert_eq!(order.date_label(), "19 Oct 2026");
        assert_eq!(order.arrival, NaiveDate::from_ymd_opt(2026, 10, 24).unwrap());
        assert_eq!(order.placed_at, Utc.with_ymd_and_hms(2026, 10, 18, 20, 0, 0).unwrap());
    }

    #[test]
    fn test_user_apply_keeps_role() {
        let mut user = User {
            email: "admin@test.com".to_string(),
            role: Role::Admin,
            name: "Gitanjali".to_string(),
            phone: "9988776655".to_string(),
        };
        user.apply(UserUpdate {
            phone: Some("1234567890".to_string()),
            ..UserUpdate::default()
        });

        assert_eq!(user.phone, "1234567890");
        assert_eq!(user.name, "Gitanjali");
        assert!(user.is_admin());
    }

    #[test]
    fn test_first_name() {
        let user = User {
            email: "rahul@example.com".to_string(),
            role: Role::User,
            name: "Rahul Sharma".to_string(),
            phone: String::new(),
        };
        assert_eq!(user.first_name(), "Rahul");
    }

    #[test]
    fn test_address_apply_preserves_id() {
        let mut address = Address::from_draft("1", AddressDraft::new("123 Tech Park", "Mumbai", "400708"));
        address.apply(AddressUpdate {
            street: Some("New St".to_string()),
            ..AddressUpdate::default()
        });

        assert_eq!(address.id, "1");
        assert_eq!(address.street, "New St");
        assert_eq!(address.city, "Mumbai");
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("a@b.c", "hunter2");
        let printed = format!("{:?}", creds);
        assert!(printed.contains("a@b.c"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }
}
