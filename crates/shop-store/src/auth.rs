//! # Authentication
//!
//! Turns sign-in form input into a resolved [`User`]. The store itself never
//! decides roles; it accepts whatever identity an [`Authenticator`] returns.
//!
//! ```text
//! Credentials ──► Authenticator::authenticate ──► User { role, ... } ──► Store::sign_in
//! ```

use shop_core::validation::validate_credentials;
use shop_core::{Credentials, Role, User};
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::StoreResult;

/// Resolves credentials into an identity.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, credentials: &Credentials) -> StoreResult<User>;
}

/// Demo authenticator: any non-empty email/password pair signs in.
///
/// ## Rules
/// - Empty email or password is a validation error
/// - The configured admin email (exact match, as typed) gets `Role::Admin`
/// - Profile fields are filled with fixture values
#[derive(Debug, Clone)]
pub struct DemoAuthenticator {
    admin_email: String,
}

/// Profile fixtures for demo identities.
const ADMIN_NAME: &str = "Gitanjali";
const CUSTOMER_NAME: &str = "Rahul Sharma";
const DEMO_PHONE: &str = "9988776655";

impl DemoAuthenticator {
    pub fn new(admin_email: impl Into<String>) -> Self {
        DemoAuthenticator {
            admin_email: admin_email.into(),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.admin_email.clone())
    }

    fn role_for(&self, email: &str) -> Role {
        if email == self.admin_email {
            Role::Admin
        } else {
            Role::User
        }
    }
}

impl Default for DemoAuthenticator {
    fn default() -> Self {
        Self::from_config(&StoreConfig::default())
    }
}

impl Authenticator for DemoAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> StoreResult<User> {
        validate_credentials(credentials)?;

        let email = credentials.email.clone();
        let role = self.role_for(&email);
        debug!(email = %email, ?role, "credentials resolved");

        let name = match role {
            Role::Admin => ADMIN_NAME,
            Role::User => CUSTOMER_NAME,
        };

        Ok(User {
            email,
            role,
            name: name.to_string(),
            phone: DEMO_PHONE.to_string(),
        })
    }
}
