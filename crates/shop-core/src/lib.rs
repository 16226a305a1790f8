//! # shop-core: Pure Domain Logic for ShopApp
//!
//! This crate holds the storefront's domain: product and order types, the
//! static mock catalog, price arithmetic and input validation. It performs
//! no I/O and owns no mutable state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ShopApp Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Screens (React Native)                        │   │
//! │  │   Auth ─► Home ─► Details ─► Cart ─► Orders / Profile / Admin   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ named operations + snapshots           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shop-store (Store)                           │   │
//! │  │    sign_in, add_to_cart, checkout, update_address, ...          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shop-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │  search   │  │   rules   │  │   │
//! │  │   │   Order   │  │           │  │ inventory │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO MUTABLE STATE                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Review, User, Order, Address)
//! - [`money`] - Whole-unit price type
//! - [`catalog`] - The read-only product catalog
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use shop_core::Catalog;
//!
//! let catalog = Catalog::demo();
//! let hits = catalog.search("WATCH");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].name, "Smart Watch Series 5");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{demo_catalog, Catalog, InventoryRow};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Email that the demo authenticator maps to the admin role.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@test.com";

/// Stock level below which the admin inventory flags a product.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;
