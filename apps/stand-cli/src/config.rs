//! # Register Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --json                                                             │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     STAND_TAX_RATE_BPS=725                                             │
//! │     STAND_OUTPUT=json                                                  │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, or ./stand.toml if present                        │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     7.25% tax, text output                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # stand.toml
//! tax_rate_bps = 725
//! output = "text"   # text | json
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

use stand_core::validation::validate_tax_rate_bps;
use stand_core::{TaxRate, ValidationError, DEFAULT_TAX_RATE};

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "stand.toml";

// =============================================================================
// Output Format
// =============================================================================

/// How `stand order` prints its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The plain-text receipt.
    #[default]
    Text,
    /// Order summary and receipt as JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "receipt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("output".to_string())),
        }
    }
}

// =============================================================================
// Stand Configuration
// =============================================================================

/// Register configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandConfig {
    /// Sales tax in basis points (725 = 7.25%).
    #[serde(default = "default_tax_rate_bps")]
    pub tax_rate_bps: u32,

    /// Output format for `stand order`.
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_tax_rate_bps() -> u32 {
    DEFAULT_TAX_RATE.bps()
}

impl Default for StandConfig {
    fn default() -> Self {
        StandConfig {
            tax_rate_bps: default_tax_rate_bps(),
            output: OutputFormat::default(),
        }
    }
}

impl StandConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file: `path` if given (must exist), else `./stand.toml` if present
    /// 3. Environment variables
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(&fallback)?
                } else {
                    debug!("No stand.toml found, using defaults");
                    Self::default()
                }
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Reads a TOML config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading stand config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `STAND_*` overrides read through `var`.
    fn apply_overrides<F>(&mut self, var: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = var("STAND_TAX_RATE_BPS") {
            self.tax_rate_bps = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STAND_TAX_RATE_BPS".to_string()))?;
            debug!(tax_rate_bps = self.tax_rate_bps, "Overriding tax rate from environment");
        }

        if let Some(raw) = var("STAND_OUTPUT") {
            match raw.parse() {
                Ok(output) => self.output = output,
                Err(_) => warn!(output = %raw, "Unknown output format in environment"),
            }
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_tax_rate_bps(self.tax_rate_bps)?;
        Ok(())
    }

    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }
}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Could not read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = StandConfig::default();
        assert_eq!(config.tax_rate_bps, 725);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.tax_rate(), DEFAULT_TAX_RATE);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_from_file_fills_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "output = \"json\"").unwrap();

        let config = StandConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.tax_rate_bps, 725);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            StandConfig::load(Some(&missing)),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tax_rate_bps = \"lots\"").unwrap();
        assert!(matches!(
            StandConfig::from_file(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = StandConfig::default();
        config
            .apply_overrides(env(&[("STAND_TAX_RATE_BPS", "800"), ("STAND_OUTPUT", "json")]))
            .unwrap();
        assert_eq!(config.tax_rate_bps, 800);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_bad_env_tax_rate_is_rejected() {
        let mut config = StandConfig::default();
        let err = config
            .apply_overrides(env(&[("STAND_TAX_RATE_BPS", "seven")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_unknown_env_output_keeps_current() {
        let mut config = StandConfig::default();
        config.apply_overrides(env(&[("STAND_OUTPUT", "xml")])).unwrap();
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_validation() {
        let mut config = StandConfig::default();
        assert!(config.validate().is_ok());

        config.tax_rate_bps = 10_001;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }
}
