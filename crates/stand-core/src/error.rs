//! # Error Types
//!
//! Domain-specific error types for stand-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stand-core errors (this file)                                         │
//! │  ├── CoreError        - Menu lookups that failed                       │
//! │  └── ValidationError  - Generic input validation failures              │
//! │                                                                         │
//! │  stand-cli errors (app)                                                │
//! │  └── CliError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant carries the rejected input verbatim
//! 3. A failed call never leaves an entity half-updated
//!
//! Adding a flavor or topping that is already present is NOT an error.
//! See [`crate::AddOutcome`].

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Menu validation errors.
///
/// Raised synchronously by constructors and setters when an input is not on
/// the menu. None of these are retryable; the caller re-prompts or rejects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Drink base is not one of the six offered bases.
    #[error("Invalid base: {0}")]
    InvalidBase(String),

    /// Drink size is not small, medium, large or mega.
    #[error("Invalid size: {0}")]
    InvalidSize(String),

    /// Flavor shot is not on the menu.
    ///
    /// ## When This Occurs
    /// - `Drink::add_flavor("grape")`
    /// - `Drink::set_flavors(["lemon", "grape"])` (nothing is applied)
    #[error("Invalid flavor: {0}")]
    InvalidFlavor(String),

    /// Food type is not on the menu.
    #[error("Invalid food type: {0}")]
    InvalidFoodType(String),

    /// Topping is not on the menu.
    #[error("Invalid topping: {0}")]
    InvalidTopping(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors not tied to a menu table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::InvalidFlavor("grape".to_string()).to_string(),
            "Invalid flavor: grape"
        );
        assert_eq!(
            CoreError::InvalidFoodType("pizza".to_string()).to_string(),
            "Invalid food type: pizza"
        );
        assert_eq!(
            CoreError::InvalidSize("extra large".to_string()).to_string(),
            "Invalid size: extra large"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "tax_rate_bps".to_string(),
            min: 0,
            max: 10000,
        };
        assert_eq!(err.to_string(), "tax_rate_bps must be between 0 and 10000");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "drink".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
