//! # ShopApp Demo Entry Point
//!
//! Runs one scripted storefront session and prints the final state.
//!
//! ## Environment
//! - `RUST_LOG` - log filter (default `info,shop=debug`)
//! - `SHOP_*` - store configuration, see `StoreConfig::from_env`

use std::process::ExitCode;

fn main() -> ExitCode {
    // The setup lives in lib.rs so the session can be tested.
    match shop_demo::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "demo session failed");
            ExitCode::FAILURE
        }
    }
}
