//! Error types for structured error handling.
//!
//! This module provides:
//! - `TimeishError`: Errors from construction, arithmetic and parsing of times
//! - `ConfigError`: Errors from loading a display configuration

use thiserror::Error;

/// Categorised time errors.
///
/// # Variants
/// - `InvalidRange`: A component is outside its valid range, or an operation
///   would push the hour below zero
/// - `ParseError`: Text does not split into an hour and a minute
/// - `InvalidSeparator`: The separator is empty or contains a digit
/// - `Overflow`: The result does not fit the hour representation or the
///   calendar range
///
/// # Examples
/// ```
/// use timeish_core::types::TimeishError;
///
/// let err = TimeishError::InvalidRange("Hour cannot be less than 0.".to_string());
/// assert_eq!(format!("{}", err), "Invalid range: Hour cannot be less than 0.");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeishError {
    /// A component is out of range.
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Failed to split or parse a time string.
    #[error("Time parse error: {0}")]
    ParseError(String),

    /// The separator could not be split back out of a rendered time.
    #[error("Invalid separator: {0}")]
    InvalidSeparator(String),

    /// Result exceeds the representable range.
    #[error("Overflow: {0}")]
    Overflow(String),
}

/// Configuration errors.
///
/// # Examples
/// ```
/// use timeish_core::types::ConfigError;
///
/// let err = ConfigError::EmptySeparator;
/// assert_eq!(format!("{}", err), "Separator must not be empty");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration text is not valid TOML for this schema.
    #[error("Configuration parse error: {0}")]
    ParseError(String),

    /// The separator is empty, which would make split results ambiguous.
    #[error("Separator must not be empty")]
    EmptySeparator,

    /// The separator contains a digit, so rendered times would be ambiguous.
    #[error("Separator must not contain digits: {0}")]
    DigitSeparator(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeish_error_display() {
        let err = TimeishError::ParseError("no separator".to_string());
        assert_eq!(format!("{}", err), "Time parse error: no separator");

        let err = TimeishError::InvalidSeparator("'0'".to_string());
        assert_eq!(format!("{}", err), "Invalid separator: '0'");

        let err = TimeishError::Overflow("hour".to_string());
        assert_eq!(format!("{}", err), "Overflow: hour");
    }

    #[test]
    fn test_timeish_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&TimeishError::InvalidRange("x".to_string()));
        assert_error(&ConfigError::EmptySeparator);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::ParseError("expected `=`".to_string());
        assert_eq!(
            format!("{}", err),
            "Configuration parse error: expected `=`"
        );
    }

    #[test]
    fn test_error_clone_and_eq() {
        let err = TimeishError::InvalidRange("a".to_string());
        assert_eq!(err.clone(), err);
        assert_ne!(err, TimeishError::ParseError("a".to_string()));
    }
}
