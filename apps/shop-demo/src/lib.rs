//! # ShopApp Demo Library
//!
//! A headless walk through the storefront: the same calls the screens make,
//! in the order a shopper would make them.
//!
//! ## Session Script
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Sign in with an empty password      ──► rejected, alert logged      │
//! │  2. Sign in as the admin                                                │
//! │  3. Browse: search "s", open a product                                  │
//! │  4. Add the keyboard (out of stock)     ──► rejected, alert logged      │
//! │  5. Add headphones, watch, mouse; drop the watch                        │
//! │  6. Checkout                            ──► one order per line          │
//! │  7. Add and edit an address, update the profile, toggle the theme       │
//! │  8. Admin dashboard                                                     │
//! │  9. Sign out                            ──► cart cleared, orders kept   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shop_core::{demo_catalog, AddressDraft, AddressUpdate, Catalog, Credentials, UserUpdate};
use shop_store::{
    init_tracing, Alert, DemoAuthenticator, Notice, Store, StoreConfig, StoreError, StoreResult,
    StoreState,
};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Could not render snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Runs the demo session and prints the final snapshot as JSON.
pub fn run() -> Result<(), DemoError> {
    init_tracing();
    info!("Starting ShopApp demo session");

    let config = StoreConfig::from_env();
    let auth = DemoAuthenticator::from_config(&config);
    let mut store = Store::new(config);

    store.subscribe(|state, notice| {
        info!(
            ?notice,
            cart = state.cart().len(),
            orders = state.orders().len(),
            "state changed"
        );
    });

    let state = run_session(&mut store, &auth, demo_catalog())?;
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

/// Logs the alert a screen would show for an expected rejection.
fn expect_rejection(result: StoreResult<Notice>) -> StoreResult<()> {
    match result {
        Ok(notice) => {
            warn!(?notice, "expected a rejection");
            Ok(())
        }
        Err(err) => {
            let alert = Alert::from(&err);
            info!(title = %alert.title, message = %alert.message, "alert shown");
            Ok(())
        }
    }
}

fn show(notice: &Notice) {
    if let Some(alert) = notice.alert() {
        info!(title = %alert.title, message = %alert.message, "alert shown");
    }
}

/// Drives one scripted session against `store` and returns the final state.
pub fn run_session(
    store: &mut Store,
    auth: &DemoAuthenticator,
    catalog: &Catalog,
) -> StoreResult<StoreState> {
    let admin_email = store.config().admin_email.clone();

    expect_rejection(store.sign_in(auth, &Credentials::new(admin_email.as_str(), "")))?;
    store.sign_in(auth, &Credentials::new(admin_email, "secret"))?;

    let feed = store.home_feed(catalog, "s")?;
    info!(greeting = %feed.greeting, results = feed.products.len(), "home feed");
    let detail = store.product_detail(catalog, "1")?;
    info!(product = %detail.card.name, arrival = %detail.arrival, "product detail");

    expect_rejection(store.add_to_cart_by_id(catalog, "5"))?;
    for id in ["1", "2", "4"] {
        show(&store.add_to_cart_by_id(catalog, id)?);
    }
    store.remove_from_cart(1)?;

    let summary = store.cart_summary();
    info!(lines = summary.count, total = %summary.formatted_total, "cart");
    show(&store.checkout()?);
    for order in store.order_views() {
        info!(id = %order.id, total = %order.total, arrival = %order.arrival, "order");
    }

    if let Notice::AddressAdded { id } =
        store.add_address(AddressDraft::new("42 MG Road", "Bengaluru", "560001"))?
    {
        store.update_address(
            id,
            AddressUpdate {
                zip: Some("560002".to_string()),
                ..AddressUpdate::default()
            },
        )?;
    }
    show(&store.update_user(UserUpdate {
        phone: Some("9000000000".to_string()),
        ..UserUpdate::default()
    })?);
    store.toggle_theme()?;

    let dashboard = store.admin_dashboard(catalog)?;
    info!(
        sales = %dashboard.formatted_sales,
        orders = dashboard.order_count,
        low_stock = dashboard.inventory.iter().filter(|row| row.low_stock).count(),
        "admin dashboard"
    );

    store.sign_out()?;
    Ok(store.snapshot())
}
