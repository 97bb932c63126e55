//! Integration tests for module exports.
//!
//! Verify that all public modules and types are accessible via absolute
//! paths and work together from outside the crate.

use chrono::NaiveDate;

/// Test that the time module is accessible via absolute path.
#[test]
fn test_time_module_exports() {
    use timeish_core::types::time::HourMinute;
    use timeish_core::types::time::Timeish;
    use timeish_core::types::time::{DEFAULT_SEPARATOR, MAX_MINUTE, MIN_HOUR, MIN_MINUTE};

    assert_eq!(DEFAULT_SEPARATOR, ":");
    assert_eq!((MIN_HOUR, MIN_MINUTE, MAX_MINUTE), (0, 0, 59));

    let time = Timeish::new(25, 30).unwrap();
    assert_eq!(
        time.explode().unwrap(),
        HourMinute {
            hour: 25,
            minute: 30
        }
    );
}

/// Test that error types are accessible via absolute path.
#[test]
fn test_error_module_exports() {
    use timeish_core::types::error::ConfigError;
    use timeish_core::types::error::TimeishError;

    let err: Box<dyn std::error::Error> =
        Box::new(TimeishError::InvalidRange("test".to_string()));
    assert!(err.to_string().contains("test"));

    let err: Box<dyn std::error::Error> = Box::new(ConfigError::EmptySeparator);
    assert!(!err.to_string().is_empty());
}

/// Test that re-exports at the types level match the module paths.
#[test]
fn test_types_reexports() {
    use timeish_core::types::{ConfigError, HourMinute, Timeish, TimeishError};

    let _: fn(i64, i64) -> Result<Timeish, TimeishError> = Timeish::new;
    let _ = HourMinute { hour: 0, minute: 0 };
    let _ = ConfigError::EmptySeparator;
}

/// Test a configuration loaded from TOML drives rendering end to end.
#[test]
fn test_config_drives_rendering() {
    use timeish_core::config::TimeishConfig;
    use timeish_core::types::Timeish;

    let config = TimeishConfig::from_toml_str("separator = \".\"").unwrap();
    let mut time = Timeish::with_config(9, 55, &config).unwrap();
    time.add_minutes(10).unwrap();

    assert_eq!(time.to_string(), "10.05");
    assert_eq!(time.format(Some(":")), "10:05");

    let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    let pattern = time.calendar_pattern().to_string();
    assert_eq!(time.datetime_format_on(date, &pattern).unwrap(), "10.05");
}

/// Test errors propagate through `?` in caller code.
#[test]
fn test_error_propagation() {
    use timeish_core::types::{Timeish, TimeishError};

    fn total_after_break(start: &str, break_minutes: i64) -> Result<String, TimeishError> {
        let mut time: Timeish = start.parse()?;
        time.sub_minutes(break_minutes)?;
        Ok(time.to_string())
    }

    assert_eq!(total_after_break("01:15", 30).unwrap(), "00:45");
    assert!(matches!(
        total_after_break("00:15", 30),
        Err(TimeishError::InvalidRange(_))
    ));
    assert!(matches!(
        total_after_break("0015", 30),
        Err(TimeishError::ParseError(_))
    ));
}
