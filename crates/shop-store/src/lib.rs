//! # shop-store: The ShopApp Session Store
//!
//! Owns everything that changes while the app runs: who is signed in, the
//! cart, order history, saved addresses and the colour scheme.
//!
//! ## Module Organization
//! ```text
//! shop_store/
//! ├── lib.rs          ◄─── You are here (exports & logging setup)
//! ├── store.rs        ◄─── Store, Action reducer, named operations, observers
//! ├── handle.rs       ◄─── Cloneable Arc<Mutex<Store>> handle
//! ├── state/
//! │   ├── mod.rs      ◄─── StoreState, Appearance
//! │   ├── cart.rs     ◄─── Cart lines
//! │   ├── orders.rs   ◄─── Order history
//! │   └── addresses.rs◄─── Address book
//! ├── views.rs        ◄─── Screen read models
//! ├── auth.rs         ◄─── Authenticator trait + demo implementation
//! ├── clock.rs        ◄─── Clock trait (system / fixed)
//! ├── ids.rs          ◄─── Order id generators
//! ├── config.rs       ◄─── StoreConfig (SHOP_* environment)
//! └── error.rs        ◄─── StoreError and user-facing Alert
//! ```
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Screen ──► store.add_to_cart(&p) ──► Ok(Notice) ──► notice.alert()   │
//! │                        │                                                │
//! │                        ├──► Err(StoreError) ──► Alert::from(&err)      │
//! │                        │                                                │
//! │                        └──► observers(&StoreState, &Notice)            │
//! │                                                                         │
//! │   Screen ──► store.cart_summary() / order_views() / ...  (read only)   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod clock;
pub mod config;
pub mod error;
pub mod handle;
pub mod ids;
pub mod state;
pub mod store;
pub mod views;

pub use auth::{Authenticator, DemoAuthenticator};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::StoreConfig;
pub use error::{Alert, AlertCode, StoreError, StoreResult};
pub use handle::StoreHandle;
pub use ids::{OrderIdGenerator, SequentialOrderIds, UuidOrderIds};
pub use state::{AddressBook, Appearance, Cart, OrderHistory, StoreState};
pub use store::{Action, Notice, Observer, Store, SubscriptionId};
pub use views::{AdminDashboard, CartSummary, HomeFeed, OrderView, ProductCard, ProductDetail};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shop=trace` - Show trace for the shop crates only
/// - Default: INFO, DEBUG for the shop crates
///
/// Calling it twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shop=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
