//! # Validation Module
//!
//! Field validation for catalog data supplied at map construction.
//!
//! The engine itself never constructs invalid products - the seed catalog
//! is code - but external map/catalog configuration goes through these
//! checks before the grid is built.

use thiserror::Error;

use crate::money::Money;

/// A catalog field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Prices cannot be negative.
    #[error("price must not be negative")]
    NegativePrice,
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Validators
// =============================================================================

/// Validates a product serial number.
///
/// ## Rules
/// - Not empty, at most 20 characters
/// - Starts with a 3-letter uppercase category prefix
/// - Alphanumeric throughout
///
/// ## Example
/// ```rust
/// use gridmart_core::validation::validate_serial;
///
/// assert!(validate_serial("BRD001").is_ok());
/// assert!(validate_serial("br").is_err());
/// assert!(validate_serial("").is_err());
/// ```
pub fn validate_serial(serial: &str) -> ValidationResult<()> {
    let serial = serial.trim();

    if serial.is_empty() {
        return Err(ValidationError::Required { field: "serial" });
    }
    if serial.len() > 20 {
        return Err(ValidationError::TooLong { field: "serial", max: 20 });
    }

    let prefix_ok = serial.len() >= 3
        && serial
            .chars()
            .take(3)
            .all(|c| c.is_ascii_uppercase());
    if !prefix_ok {
        return Err(ValidationError::InvalidFormat {
            field: "serial",
            reason: "must start with a 3-letter uppercase category prefix",
        });
    }

    if !serial.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "serial",
            reason: "must contain only letters and digits",
        });
    }

    Ok(())
}

/// Validates a product display name.
///
/// ## Rules
/// - Not empty
/// - At most 100 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }
    if name.len() > 100 {
        return Err(ValidationError::TooLong { field: "name", max: 100 });
    }

    Ok(())
}

/// Validates a unit price.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.cents() < 0 {
        return Err(ValidationError::NegativePrice);
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
