//! Calculator limits and their validation.

use crate::core::{DEFAULT_HISTORY_CAPACITY, DEFAULT_MAX_INPUT_LEN, DEFAULT_PRECISION, MAX_PRECISION};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_input_len must be at least 1")]
    ZeroInputLength,

    #[error("history_capacity must be at least 1")]
    ZeroHistoryCapacity,

    #[error("precision {found} exceeds the supported maximum of {max}")]
    PrecisionTooHigh { found: u32, max: u32 },

    #[error("Malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Tunable limits of a calculator session.
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```rust
/// use deskcalc::config::CalculatorConfig;
///
/// let config = CalculatorConfig::from_json(r#"{ "history_capacity": 25 }"#).unwrap();
/// assert_eq!(config.history_capacity, 25);
/// assert_eq!(config.max_input_len, 12);
/// assert_eq!(config.precision, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Longest operand that can be typed; extra digits are dropped
    pub max_input_len: usize,
    /// Decimal places results are rounded to
    pub precision: u32,
    /// Number of history records kept
    pub history_capacity: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            precision: DEFAULT_PRECISION,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_len == 0 {
            return Err(ConfigError::ZeroInputLength);
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroHistoryCapacity);
        }
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionTooHigh {
                found: self.precision,
                max: MAX_PRECISION,
            });
        }
        Ok(())
    }
}
