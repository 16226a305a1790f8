//! # Store Errors and Alerts
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in ShopApp                                │
//! │                                                                         │
//! │  Screen                      Store                                      │
//! │  ──────                      ─────                                      │
//! │                                                                         │
//! │  store.add_to_cart(p)                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Result<Notice, StoreError>                                      │  │
//! │  │         │                                                        │  │
//! │  │  Validation? ─── CoreError::Validation ───┐                      │  │
//! │  │  Out of stock? ─ CoreError::OutOfStock ───┼── StoreError ──►     │  │
//! │  │  Precondition? ─ StoreError::NotSignedIn ─┘                      │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Alert::from(&err) → { code: "OUT_OF_STOCK",                            │
//! │                        title: "Out of Stock",                           │
//! │                        message: "This item is currently unavailable." } │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error leaves the state untouched. There is no retry path: the
//! screen shows the alert and the user tries again.

use serde::Serialize;
use shop_core::{CoreError, ValidationError};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Store Error
// =============================================================================

/// Why a store operation was rejected.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Domain rule or input validation failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The operation needs a signed-in user.
    #[error("No user is signed in")]
    NotSignedIn,

    /// The signed-in user lacks the role for this view.
    #[error("{action} requires the admin role")]
    Forbidden { action: String },

    /// Cart position does not exist.
    #[error("Cart index {index} is out of range for {len} items")]
    CartIndexOutOfRange { index: usize, len: usize },

    /// Checkout was requested with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// No saved address has this id.
    #[error("Address not found: {0}")]
    AddressNotFound(String),
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

impl StoreError {
    /// Whether this is an input validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Core(CoreError::Validation(_)))
    }
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Alert
// =============================================================================

/// Machine-readable alert category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertCode {
    /// Operation succeeded; the alert is a confirmation.
    Confirmation,
    /// Input validation failed.
    ValidationError,
    /// Product has no stock.
    OutOfStock,
    /// Resource not found.
    NotFound,
    /// Caller broke an operation precondition.
    Precondition,
    /// Role does not allow the action.
    Forbidden,
}

/// The content of a blocking dialog.
///
/// ```json
/// { "code": "VALIDATION_ERROR", "title": "Error", "message": "Fill all fields" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub code: AlertCode,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(code: AlertCode, title: impl Into<String>, message: impl Into<String>) -> Self {
        Alert {
            code,
            title: title.into(),
            message: message.into(),
        }
    }

    /// A confirmation dialog for a successful operation.
    pub fn confirm(title: impl Into<String>, message: impl Into<String>) -> Self {
        Alert::new(AlertCode::Confirmation, title, message)
    }

    fn validation(message: impl Into<String>) -> Self {
        Alert::new(AlertCode::ValidationError, "Error", message)
    }
}

/// Maps a validation failure to the wording of the form it came from.
fn validation_message(err: &ValidationError) -> String {
    let ValidationError::Required { field } = err;
    match field.as_str() {
        "email" | "password" => "Please enter an email and password".to_string(),
        "street" | "city" => "Fill all fields".to_string(),
        _ => err.to_string(),
    }
}

impl From<&StoreError> for Alert {
    fn from(err: &StoreError) -> Self {
        match err {
            StoreError::Core(CoreError::Validation(e)) => Alert::validation(validation_message(e)),
            StoreError::Core(CoreError::OutOfStock { .. }) => Alert::new(
                AlertCode::OutOfStock,
                "Out of Stock",
                "This item is currently unavailable.",
            ),
            StoreError::Core(CoreError::ProductNotFound(id)) => Alert::new(
                AlertCode::NotFound,
                "Not Found",
                format!("Product not found: {}", id),
            ),
            StoreError::AddressNotFound(id) => Alert::new(
                AlertCode::NotFound,
                "Not Found",
                format!("Address not found: {}", id),
            ),
            StoreError::NotSignedIn => {
                Alert::new(AlertCode::Precondition, "Error", "Please sign in first")
            }
            StoreError::EmptyCart => {
                Alert::new(AlertCode::Precondition, "Error", "Your cart is empty")
            }
            StoreError::CartIndexOutOfRange { .. } => Alert::new(
                AlertCode::Precondition,
                "Error",
                "That item is no longer in your cart",
            ),
            StoreError::Forbidden { .. } => Alert::new(
                AlertCode::Forbidden,
                "Access Denied",
                "Admins only",
            ),
        }
    }
}

impl From<StoreError> for Alert {
    fn from(err: StoreError) -> Self {
        Alert::from(&err)
    }
}
