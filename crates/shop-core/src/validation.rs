//! # Validation Module
//!
//! Input validation for the storefront forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Screens (TypeScript)                                         │
//! │  └── Input masks, keyboard types                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store operation (Rust)                                       │
//! │  └── THIS MODULE: required fields                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Reducer                                                      │
//! │  └── Preconditions (signed in, index in range, id exists)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A validator never changes anything; callers run it before touching state.

use crate::error::ValidationError;
use crate::types::{AddressDraft, Credentials, UserUpdate};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Fails with `Required` when the value is empty.
///
/// Whitespace counts as a value: forms only reject fields left blank.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

/// Validates sign-in input.
///
/// ## Rules
/// - Email must not be empty
/// - Password must not be empty
///
/// No password strength or email format rules apply: the demo accepts any
/// non-empty pair.
///
/// ## Example
/// ```rust
/// use shop_core::validation::validate_credentials;
/// use shop_core::Credentials;
///
/// assert!(validate_credentials(&Credentials::new("a@b.c", "pw")).is_ok());
/// assert!(validate_credentials(&Credentials::new("", "pw")).is_err());
/// assert!(validate_credentials(&Credentials::new("a@b.c", "")).is_err());
/// ```
pub fn validate_credentials(credentials: &Credentials) -> ValidationResult<()> {
    validate_required("email", &credentials.email)?;
    validate_required("password", &credentials.password)?;
    Ok(())
}

/// Validates a new address: street and city are required, zip is optional.
pub fn validate_address(draft: &AddressDraft) -> ValidationResult<()> {
    validate_required("street", &draft.street)?;
    validate_required("city", &draft.city)?;
    Ok(())
}

/// Validates the fields present in a profile edit.
///
/// Absent fields are untouched and therefore always valid. A present name or
/// email must not be empty; phone may be cleared.
pub fn validate_user_update(update: &UserUpdate) -> ValidationResult<()> {
    if let Some(name) = &update.name {
        validate_required("name", name)?;
    }
    if let Some(email) = &update.email {
        validate_required("email", email)?;
    }
    Ok(())
}
