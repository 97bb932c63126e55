//! Core time types.
//!
//! This module provides:
//! - `time`: The `Timeish` hour-and-minute value type with carrying arithmetic
//! - `error`: Structured error types for time and configuration operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Timeish`], [`HourMinute`] from `time`
//! - [`TimeishError`], [`ConfigError`] from `error`

pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use error::{ConfigError, TimeishError};
pub use time::{HourMinute, Timeish};
