//! # timeish_core: Hour-and-Minute Time Values
//!
//! A small value type for `hour:minute` times whose hour is not limited to a
//! single day, so it can also hold aggregated or elapsed time such as
//! `"25:30"`.
//!
//! - Validating construction (`hour >= 0`, `0 <= minute <= 59`)
//! - Carrying and borrowing minute arithmetic (`types::time`)
//! - Formatting with a configurable separator and splitting back into parts
//! - Projection onto a chrono calendar date for interop
//! - Error types: `TimeishError`, `ConfigError` (`types::error`)
//! - TOML display configuration (`config`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use timeish_core::types::{Timeish, TimeishError};
//!
//! fn shift_end() -> Result<Timeish, TimeishError> {
//!     let mut time = Timeish::new(22, 30)?;
//!     time.add_hours(2)?.add_minutes(45)?;
//!     Ok(time)
//! }
//!
//! let end = shift_end().unwrap();
//! assert_eq!(end.to_string(), "25:15");
//! assert_eq!(Timeish::explode_any(":", "25:15").unwrap().hour, 25);
//!
//! // Borrowing fails rather than going below zero
//! let mut early = Timeish::new(0, 10).unwrap();
//! assert!(early.sub_minutes(11).is_err());
//! ```
//!
//! ## Logging
//!
//! Carry and borrow steps are emitted as `tracing` events at trace level.
//! The crate never installs a subscriber.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod types;
