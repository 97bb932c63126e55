//! Display configuration for [`Timeish`](crate::types::Timeish) values.
//!
//! Loads the separator used between hours and minutes from TOML:
//!
//! ```
//! use timeish_core::config::TimeishConfig;
//!
//! let config = TimeishConfig::from_toml_str("separator = \"h\"").unwrap();
//! assert_eq!(config.separator, "h");
//!
//! // Missing keys fall back to defaults
//! let config = TimeishConfig::from_toml_str("").unwrap();
//! assert_eq!(config.separator, ":");
//! ```

use serde::Deserialize;
use tracing::debug;

use crate::types::error::ConfigError;
use crate::types::time::DEFAULT_SEPARATOR;

/// Time display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimeishConfig {
    /// Delimiter placed between the rendered hour and minute
    pub separator: String,
}

impl Default for TimeishConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl TimeishConfig {
    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(s).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        debug!(separator = %config.separator, "loaded time display configuration");
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        if self.separator.chars().any(|c| c.is_ascii_digit()) {
            return Err(ConfigError::DigitSeparator(self.separator.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TimeishConfig::default();
        assert_eq!(config.separator, ":");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_str() {
        let config = TimeishConfig::from_toml_str("separator = \".\"").unwrap();
        assert_eq!(config.separator, ".");
    }

    #[test]
    fn test_from_toml_str_empty_separator() {
        let result = TimeishConfig::from_toml_str("separator = \"\"");
        assert_eq!(result, Err(ConfigError::EmptySeparator));
    }

    #[test]
    fn test_from_toml_str_digit_separator() {
        let result = TimeishConfig::from_toml_str("separator = \"h0\"");
        assert_eq!(result, Err(ConfigError::DigitSeparator("h0".to_string())));
    }

    #[test]
    fn test_valid_config_always_constructs() {
        for separator in [":", ".", "-", "h", " : "] {
            let config = TimeishConfig {
                separator: separator.to_string(),
            };
            assert!(config.validate().is_ok());
            assert!(crate::types::Timeish::with_config(1, 2, &config).is_ok());
        }
    }

    #[test]
    fn test_from_toml_str_invalid() {
        let result = TimeishConfig::from_toml_str("separator = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));

        let result = TimeishConfig::from_toml_str("separator = 1");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
