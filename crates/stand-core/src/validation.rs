//! # Validation Module
//!
//! Input validation helpers shared by the entities and the CLI.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI (stand-cli)                                              │
//! │  ├── Argument shape (comma lists, required tokens)                     │
//! │  └── Config values (tax rate)  ──► validate_tax_rate_bps               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Entities (THIS CRATE)                                        │
//! │  ├── Menu lookups via FromStr  ──► CoreError::Invalid*                 │
//! │  └── Batch lookups             ──► parse_all (all-or-nothing)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stand_core::menu::Flavor;
//! use stand_core::validation::{parse_all, validate_tax_rate_bps};
//!
//! let flavors: Vec<Flavor> = parse_all(["lemon", "LIME"]).unwrap();
//! assert_eq!(flavors, vec![Flavor::Lemon, Flavor::Lime]);
//!
//! assert!(validate_tax_rate_bps(725).is_ok());
//! ```

use std::str::FromStr;

use crate::error::{CoreError, CoreResult, ValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Highest accepted tax rate (100%).
pub const MAX_TAX_RATE_BPS: u32 = 10_000;

// =============================================================================
// Menu Lookups
// =============================================================================

/// Parses every input or none of them.
///
/// Stops at the first entry that is not on the menu and returns its error.
/// Nothing is returned for the entries before it, so callers can validate a
/// whole batch before touching their own state.
pub fn parse_all<T, I, S>(inputs: I) -> CoreResult<Vec<T>>
where
    T: FromStr<Err = CoreError>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|input| input.as_ref().parse::<T>())
        .collect()
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_TAX_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate_bps".to_string(),
            min: 0,
            max: MAX_TAX_RATE_BPS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{Flavor, Topping};

    #[test]
    fn test_parse_all_accepts_valid_batch() {
        let toppings: Vec<Topping> = parse_all(vec!["Chili".to_string(), "ketchup".to_string()]).unwrap();
        assert_eq!(toppings, vec![Topping::Chili, Topping::Ketchup]);
    }

    #[test]
    fn test_parse_all_reports_first_invalid_entry() {
        let result: CoreResult<Vec<Flavor>> = parse_all(["lemon", "grape", "soap"]);
        assert_eq!(result, Err(CoreError::InvalidFlavor("grape".to_string())));
    }

    #[test]
    fn test_parse_all_empty_batch() {
        let flavors: Vec<Flavor> = parse_all(Vec::<&str>::new()).unwrap();
        assert!(flavors.is_empty());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(725).is_ok());
        assert!(validate_tax_rate_bps(10000).is_ok());
        assert!(validate_tax_rate_bps(10001).is_err());
    }
}
