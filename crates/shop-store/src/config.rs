//! # Store Configuration
//!
//! Settings read once when the store is built.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOP_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use serde::{Deserialize, Serialize};
use shop_core::{Money, DEFAULT_ADMIN_EMAIL, DEFAULT_LOW_STOCK_THRESHOLD};
use tracing::warn;

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Email the demo authenticator resolves to the admin role.
    pub admin_email: String,

    /// Currency symbol for formatted prices.
    pub currency_symbol: String,

    /// Admin inventory flags products with stock below this.
    pub low_stock_threshold: u32,

    /// Start the address book with the sample entry.
    pub seed_address: bool,
}

impl Default for StoreConfig {
    /// ## Default Values
    /// - Admin: `admin@test.com`
    /// - Currency: ₹
    /// - Low stock: below 10
    /// - Sample address: yes
    fn default() -> Self {
        StoreConfig {
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            currency_symbol: shop_core::money::DEFAULT_CURRENCY_SYMBOL.to_string(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            seed_address: true,
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHOP_ADMIN_EMAIL`: Override the admin email
    /// - `SHOP_CURRENCY_SYMBOL`: Override the currency symbol
    /// - `SHOP_LOW_STOCK_THRESHOLD`: Override the low-stock cutoff (e.g., "5")
    /// - `SHOP_SEED_ADDRESS`: `true`/`false`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unparsable values keep the
    /// default and log a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StoreConfig::default();

        if let Some(email) = lookup("SHOP_ADMIN_EMAIL") {
            config.admin_email = email.trim().to_string();
        }

        if let Some(symbol) = lookup("SHOP_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("SHOP_LOW_STOCK_THRESHOLD") {
            match raw.trim().parse::<u32>() {
                Ok(threshold) => config.low_stock_threshold = threshold,
                Err(err) => warn!(value = %raw, %err, "ignoring SHOP_LOW_STOCK_THRESHOLD"),
            }
        }

        if let Some(raw) = lookup("SHOP_SEED_ADDRESS") {
            match raw.trim().parse::<bool>() {
                Ok(seed) => config.seed_address = seed,
                Err(err) => warn!(value = %raw, %err, "ignoring SHOP_SEED_ADDRESS"),
            }
        }

        config
    }

    /// Formats an amount with the configured symbol.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::Money;
    /// use shop_store::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_price(Money::from_units(2999)), "₹2999");
    /// ```
    pub fn format_price(&self, amount: Money) -> String {
        amount.format_with(&self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StoreConfig::from_lookup(lookup(&[]));
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.admin_email, "admin@test.com");
        assert_eq!(config.low_stock_threshold, 10);
    }

    #[test]
    fn test_overrides() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("SHOP_ADMIN_EMAIL", " boss@shop.in "),
            ("SHOP_CURRENCY_SYMBOL", "Rs. "),
            ("SHOP_LOW_STOCK_THRESHOLD", "3"),
            ("SHOP_SEED_ADDRESS", "false"),
        ]));
        assert_eq!(config.admin_email, "boss@shop.in");
        assert_eq!(config.format_price(Money::from_units(1200)), "Rs. 1200");
        assert_eq!(config.low_stock_threshold, 3);
        assert!(!config.seed_address);
    }

    #[test]
    fn test_unparsable_values_keep_defaults() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("SHOP_LOW_STOCK_THRESHOLD", "lots"),
            ("SHOP_SEED_ADDRESS", "maybe"),
        ]));
        assert_eq!(config.low_stock_threshold, 10);
        assert!(config.seed_address);
    }
}
