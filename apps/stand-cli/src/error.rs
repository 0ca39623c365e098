//! # CLI Error Type
//!
//! Unified error type for the register's commands.
//!
//! ## Error Flow
//! ```text
//! args ──► parse_drink / parse_food ──► CoreError::Invalid* ──┐
//! stand.toml / STAND_* ──► ConfigError ───────────────────────┼──► CliError ──► stderr, exit 1
//! --json ──► serde_json::Error ───────────────────────────────┘
//! ```

use thiserror::Error;

use crate::config::ConfigError;
use stand_core::CoreError;

/// Error returned from any CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// An item was rejected by the menu.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Configuration could not be loaded or was invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON rendering failed.
    #[error("Could not render order as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// `stand order` was given no items.
    #[error("Nothing to order: pass at least one --drink or --food")]
    EmptyOrder,
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_pass_through_unchanged() {
        let err: CliError = CoreError::InvalidTopping("sprinkles".to_string()).into();
        assert_eq!(err.to_string(), "Invalid topping: sprinkles");
    }

    #[test]
    fn test_config_errors_are_prefixed() {
        let err: CliError = ConfigError::InvalidValue("STAND_TAX_RATE_BPS".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for STAND_TAX_RATE_BPS"
        );
    }
}
