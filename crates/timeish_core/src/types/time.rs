//! Hour-and-minute time values with carrying arithmetic.
//!
//! This module provides:
//! - `Timeish`: A time of `hour:minute` whose hour is not limited to a day
//! - `HourMinute`: The structured result of splitting a time string
//!
//! Minutes always stay in `[0, 59]`. Minute arithmetic that crosses an hour
//! boundary carries into (or borrows from) the hour, and the hour never goes
//! below zero.
//!
//! # Examples
//!
//! ```
//! use timeish_core::types::time::Timeish;
//!
//! let mut time = Timeish::new(23, 59).unwrap();
//! time.add_minutes(2).unwrap();
//! assert_eq!(time.to_string(), "24:01");
//!
//! // Hours are not wrapped at 24
//! time.add_hours(100).unwrap().sub_minutes(1).unwrap();
//! assert_eq!(time.to_string(), "124:00");
//! ```

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Write as _};
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::trace;

use super::error::TimeishError;
use crate::config::TimeishConfig;

/// Minimum hour.
pub const MIN_HOUR: i64 = 0;

/// Minimum minute.
pub const MIN_MINUTE: i64 = 0;

/// Maximum minute.
pub const MAX_MINUTE: i64 = 59;

/// Separator used when none is given.
pub const DEFAULT_SEPARATOR: &str = ":";

const MINUTES_PER_HOUR: i128 = 60;

/// Hour and minute parts of a split time string.
///
/// # Examples
///
/// ```
/// use timeish_core::types::time::{HourMinute, Timeish};
///
/// let parts = Timeish::explode_any(":", "25:30").unwrap();
/// assert_eq!(parts, HourMinute { hour: 25, minute: 30 });
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HourMinute {
    /// Hour component
    pub hour: i64,
    /// Minute component
    pub minute: i64,
}

/// A wall-clock style time of hours and minutes.
///
/// The hour is unbounded above, so a `Timeish` can hold aggregated or
/// elapsed time such as `"25:30"`. The separator only affects rendering:
/// two values with different separators but the same hour and minute are
/// equal.
///
/// Arithmetic mutates in place and hands back `&mut Self`, so calls chain
/// with `?`. Use [`Clone`] for an independent copy.
///
/// # Examples
///
/// ```
/// use timeish_core::types::time::Timeish;
///
/// let mut time = Timeish::new(9, 5).unwrap();
/// assert_eq!(time.to_string(), "09:05");
/// assert_eq!(time.format(Some("-")), "09-05");
///
/// let copy = time.clone();
/// time.add_hour().unwrap();
/// assert_eq!(copy.hour(), 9);
/// assert!(copy.is_less_than(&time));
///
/// // The hour never becomes negative
/// let mut midnight = Timeish::new(0, 0).unwrap();
/// assert!(midnight.sub_minute().is_err());
/// assert_eq!(midnight.to_string(), "00:00");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "TimeishParts", into = "TimeishParts")]
pub struct Timeish {
    hour: i64,
    minute: i64,
    separator: String,
    calendar_pattern: String,
}

impl Timeish {
    /// Creates a time with the default `:` separator.
    ///
    /// # Returns
    /// `Ok(Timeish)` if `hour >= 0` and `0 <= minute <= 59`,
    /// `Err(TimeishError::InvalidRange)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use timeish_core::types::time::Timeish;
    ///
    /// assert!(Timeish::new(10000, 0).is_ok());
    /// assert!(Timeish::new(-1, 0).is_err());
    /// assert!(Timeish::new(0, 60).is_err());
    /// ```
    pub fn new(hour: i64, minute: i64) -> Result<Self, TimeishError> {
        Self::with_separator(hour, minute, DEFAULT_SEPARATOR)
    }

    /// Creates a time rendered with the given separator.
    ///
    /// # Returns
    /// `Err(TimeishError::InvalidSeparator)` if the separator is empty or
    /// contains a digit, since the rendered time could not be split again.
    ///
    /// # Examples
    ///
    /// ```
    /// use timeish_core::types::time::Timeish;
    ///
    /// let time = Timeish::with_separator(7, 30, "h").unwrap();
    /// assert_eq!(time.to_string(), "07h30");
    ///
    /// assert!(Timeish::with_separator(7, 30, "0").is_err());
    /// ```
    pub fn with_separator(
        hour: i64,
        minute: i64,
        separator: impl Into<String>,
    ) -> Result<Self, TimeishError> {
        Self::validate(hour, minute)?;

        let separator = separator.into();
        if !Self::is_valid_separator(&separator) {
            return Err(TimeishError::InvalidSeparator(format!(
                "'{}' must be non-empty and contain no digits",
                separator
            )));
        }
        let calendar_pattern = calendar_pattern_for(&separator);
        Ok(Self {
            hour,
            minute,
            separator,
            calendar_pattern,
        })
    }

    /// Creates a time rendered with the separator from a configuration.
    pub fn with_config(
        hour: i64,
        minute: i64,
        config: &TimeishConfig,
    ) -> Result<Self, TimeishError> {
        Self::with_separator(hour, minute, config.separator.as_str())
    }

    fn validate(hour: i64, minute: i64) -> Result<(), TimeishError> {
        if Self::is_below_min_hour(hour) {
            return Err(TimeishError::InvalidRange(format!(
                "Hour must be at least {}.",
                MIN_HOUR
            )));
        }
        if Self::is_below_min_minute(minute) || Self::is_over_max_minute(minute) {
            return Err(TimeishError::InvalidRange(format!(
                "Minutes must be between {} and {}.",
                MIN_MINUTE, MAX_MINUTE
            )));
        }
        Ok(())
    }

    /// Returns the hour component.
    pub fn hour(&self) -> i64 {
        self.hour
    }

    /// Returns the minute component.
    pub fn minute(&self) -> i64 {
        self.minute
    }

    /// Returns the separator used for rendering.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Returns the chrono pattern (`%H<separator>%M`) matching this
    /// time's rendering.
    ///
    /// ```
    /// use timeish_core::types::time::Timeish;
    ///
    /// let time = Timeish::with_separator(1, 2, "%").unwrap();
    /// assert_eq!(time.calendar_pattern(), "%H%%%M");
    /// ```
    pub fn calendar_pattern(&self) -> &str {
        &self.calendar_pattern
    }

    /// Overwrites the hour without validation.
    ///
    /// This is an escape hatch: it can leave the value outside the range
    /// the constructor enforces. Use [`Timeish::try_set_hour`] to keep the
    /// invariants.
    pub fn set_hour(&mut self, hour: i64) {
        self.hour = hour;
    }

    /// Overwrites the minute without validation.
    ///
    /// See [`Timeish::set_hour`]; [`Timeish::try_set_minute`] is the
    /// validating form.
    pub fn set_minute(&mut self, minute: i64) {
        self.minute = minute;
    }

    /// Sets the hour, rejecting negative values.
    pub fn try_set_hour(&mut self, hour: i64) -> Result<&mut Self, TimeishError> {
        if Self::is_below_min_hour(hour) {
            return Err(TimeishError::InvalidRange(format!(
                "Hour must be at least {}.",
                MIN_HOUR
            )));
        }
        self.hour = hour;
        Ok(self)
    }

    /// Sets the minute, rejecting values outside `[0, 59]`.
    pub fn try_set_minute(&mut self, minute: i64) -> Result<&mut Self, TimeishError> {
        Self::validate(MIN_HOUR, minute)?;
        self.minute = minute;
        Ok(self)
    }

    /// Returns `MIN_HOUR` (always 0).
    pub fn min_hour(&self) -> i64 {
        MIN_HOUR
    }

    /// Returns `MIN_MINUTE` (always 0).
    pub fn min_minute(&self) -> i64 {
        MIN_MINUTE
    }

    /// Returns `MAX_MINUTE` (always 59).
    pub fn max_minute(&self) -> i64 {
        MAX_MINUTE
    }

    /// Renders the minimum time with this time's separator.
    ///
    /// ```
    /// use timeish_core::types::time::Timeish;
    ///
    /// let time = Timeish::with_separator(12, 0, ".").unwrap();
    /// assert_eq!(time.min_time(), "00.00");
    /// ```
    pub fn min_time(&self) -> String {
        render(MIN_HOUR, MIN_MINUTE, &self.separator)
    }

    /// Can `separator` be split back out of a rendered time?
    ///
    /// Rendered hours and minutes of a valid time are plain digits, so any
    /// non-empty separator without digits splits unambiguously.
    pub fn is_valid_separator(separator: &str) -> bool {
        !separator.is_empty() && !separator.chars().any(|c| c.is_ascii_digit())
    }

    /// Is the hour below the minimum hour?
    pub fn is_below_min_hour(hour: i64) -> bool {
        hour < MIN_HOUR
    }

    /// Is the minute below the minimum minute?
    pub fn is_below_min_minute(minute: i64) -> bool {
        minute < MIN_MINUTE
    }

    /// Is the minute over the maximum minute?
    pub fn is_over_max_minute(minute: i64) -> bool {
        minute > MAX_MINUTE
    }

    /// Renders the time, optionally with a different separator.
    ///
    /// Hours are zero-padded to at least two digits, minutes to exactly two.
    /// The stored separator is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use timeish_core::types::time::Timeish;
    ///
    /// let time = Timeish::new(100, 7).unwrap();
    /// assert_eq!(time.format(None), "100:07");
    /// assert_eq!(time.format(Some(".")), "100.07");
    /// ```
    pub fn format(&self, separator: Option<&str>) -> String {
        render(
            self.hour,
            self.minute,
            separator.unwrap_or(self.separator.as_str()),
        )
    }

    /// Splits a time string into hour and minute on `separator`.
    ///
    /// The text must contain the separator exactly once and both sides must
    /// be integers.
    ///
    /// # Returns
    /// `Ok(HourMinute)` on success, `Err(TimeishError::ParseError)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use timeish_core::types::time::Timeish;
    ///
    /// let parts = Timeish::explode_any(".", "09.05").unwrap();
    /// assert_eq!((parts.hour, parts.minute), (9, 5));
    ///
    /// assert!(Timeish::explode_any(":", "0905").is_err());
    /// assert!(Timeish::explode_any(":", "09:05:00").is_err());
    /// ```
    pub fn explode_any(separator: &str, time: &str) -> Result<HourMinute, TimeishError> {
        if separator.is_empty() {
            return Err(TimeishError::ParseError(
                "separator must not be empty".to_string(),
            ));
        }

        let (hour, minute) = time.split_once(separator).ok_or_else(|| {
            TimeishError::ParseError(format!(
                "'{}' does not contain separator '{}'",
                time, separator
            ))
        })?;
        if minute.contains(separator) {
            return Err(TimeishError::ParseError(format!(
                "'{}' contains separator '{}' more than once",
                time, separator
            )));
        }

        Ok(HourMinute {
            hour: parse_component(hour, "hour")?,
            minute: parse_component(minute, "minute")?,
        })
    }

    /// Splits this time into hour and minute by rendering and re-parsing it.
    pub fn explode(&self) -> Result<HourMinute, TimeishError> {
        Self::explode_any(&self.separator, &self.to_string())
    }

    /// Projects the time onto today's local date.
    ///
    /// Hours of 24 or more roll over into the following days. Seconds are
    /// zero.
    pub fn to_date_time(&self) -> Result<NaiveDateTime, TimeishError> {
        self.to_date_time_on(Local::now().date_naive())
    }

    /// Projects the time onto the given date.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, Timelike, Datelike};
    /// use timeish_core::types::time::Timeish;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    /// let dt = Timeish::new(25, 30).unwrap().to_date_time_on(date).unwrap();
    /// assert_eq!((dt.day(), dt.hour(), dt.minute()), (16, 1, 30));
    /// ```
    pub fn to_date_time_on(&self, date: NaiveDate) -> Result<NaiveDateTime, TimeishError> {
        let out_of_range = || {
            TimeishError::Overflow(format!(
                "{} on {} is outside the calendar range",
                self, date
            ))
        };

        let minutes = i64::try_from(self.total_minutes()).map_err(|_| out_of_range())?;
        let offset = TimeDelta::try_minutes(minutes).ok_or_else(out_of_range)?;
        date.and_time(NaiveTime::MIN)
            .checked_add_signed(offset)
            .ok_or_else(out_of_range)
    }

    /// Formats the time projected onto today's date with a chrono pattern.
    ///
    /// See [`Timeish::datetime_format_on`].
    pub fn datetime_format(&self, pattern: &str) -> Result<String, TimeishError> {
        self.datetime_format_on(Local::now().date_naive(), pattern)
    }

    /// Formats the time projected onto `date` with a chrono pattern.
    ///
    /// # Returns
    /// `Err(TimeishError::ParseError)` if the pattern is not a valid
    /// strftime pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use timeish_core::types::time::Timeish;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    /// let time = Timeish::new(26, 5).unwrap();
    /// assert_eq!(time.datetime_format_on(date, "%H:%M").unwrap(), "02:05");
    /// assert_eq!(time.datetime_format_on(date, "%Y-%m-%d").unwrap(), "2024-06-16");
    /// ```
    pub fn datetime_format_on(
        &self,
        date: NaiveDate,
        pattern: &str,
    ) -> Result<String, TimeishError> {
        let date_time = self.to_date_time_on(date)?;

        let mut out = String::new();
        write!(out, "{}", date_time.format(pattern)).map_err(|_| {
            TimeishError::ParseError(format!("invalid format pattern '{}'", pattern))
        })?;
        Ok(out)
    }

    /// Adds one hour.
    pub fn add_hour(&mut self) -> Result<&mut Self, TimeishError> {
        self.add_hours(1)
    }

    /// Adds hours. Negative values subtract.
    ///
    /// # Returns
    /// `Err(TimeishError::Overflow)` if the hour no longer fits an `i64`, or
    /// the error of [`Timeish::sub_hours`] for negative input.
    pub fn add_hours(&mut self, hours: i64) -> Result<&mut Self, TimeishError> {
        if hours < 0 {
            self.decrease_hours(hours.unsigned_abs())?;
        } else {
            self.increase_hours(hours.unsigned_abs())?;
        }
        Ok(self)
    }

    /// Subtracts one hour.
    pub fn sub_hour(&mut self) -> Result<&mut Self, TimeishError> {
        self.sub_hours(1)
    }

    /// Subtracts hours. Negative values add.
    ///
    /// # Returns
    /// `Err(TimeishError::InvalidRange)` if the hour would drop below 0; the
    /// time is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use timeish_core::types::time::Timeish;
    ///
    /// let mut time = Timeish::new(1, 30).unwrap();
    /// assert!(time.sub_hours(2).is_err());
    /// assert_eq!(time.to_string(), "01:30");
    /// ```
    pub fn sub_hours(&mut self, hours: i64) -> Result<&mut Self, TimeishError> {
        if hours < 0 {
            self.increase_hours(hours.unsigned_abs())?;
        } else {
            self.decrease_hours(hours.unsigned_abs())?;
        }
        Ok(self)
    }

    /// Adds one minute.
    pub fn add_minute(&mut self) -> Result<&mut Self, TimeishError> {
        self.add_minutes(1)
    }

    /// Adds minutes, carrying whole hours into the hour. Negative values
    /// subtract.
    ///
    /// # Examples
    ///
    /// ```
    /// use timeish_core::types::time::Timeish;
    ///
    /// let mut time = Timeish::new(0, 0).unwrap();
    /// time.add_minutes(125).unwrap();
    /// assert_eq!((time.hour(), time.minute()), (2, 5));
    /// ```
    pub fn add_minutes(&mut self, minutes: i64) -> Result<&mut Self, TimeishError> {
        if minutes < 0 {
            self.decrease_minutes(minutes.unsigned_abs())?;
        } else {
            self.increase_minutes(minutes.unsigned_abs())?;
        }
        Ok(self)
    }

    /// Subtracts one minute.
    pub fn sub_minute(&mut self) -> Result<&mut Self, TimeishError> {
        self.sub_minutes(1)
    }

    /// Subtracts minutes, borrowing whole hours when the minute would drop
    /// below 0. Negative values add.
    ///
    /// # Returns
    /// `Err(TimeishError::InvalidRange)` if there are not enough hours to
    /// borrow; the time is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use timeish_core::types::time::Timeish;
    ///
    /// let mut time = Timeish::new(2, 0).unwrap();
    /// time.sub_minutes(90).unwrap();
    /// assert_eq!((time.hour(), time.minute()), (0, 30));
    /// ```
    pub fn sub_minutes(&mut self, minutes: i64) -> Result<&mut Self, TimeishError> {
        if minutes < 0 {
            self.increase_minutes(minutes.unsigned_abs())?;
        } else {
            self.decrease_minutes(minutes.unsigned_abs())?;
        }
        Ok(self)
    }

    /// Earlier than the argument?
    pub fn is_less_than(&self, other: &Self) -> bool {
        self < other
    }

    /// Earlier than or equal to the argument?
    pub fn is_less_than_equal(&self, other: &Self) -> bool {
        self <= other
    }

    /// Later than the argument?
    pub fn is_greater_than(&self, other: &Self) -> bool {
        self > other
    }

    /// Later than or equal to the argument?
    pub fn is_greater_than_equal(&self, other: &Self) -> bool {
        self >= other
    }

    /// Returns `hour * 60 + minute`.
    pub fn total_minutes(&self) -> i128 {
        i128::from(self.hour) * MINUTES_PER_HOUR + i128::from(self.minute)
    }

    fn increase_hours(&mut self, hours: u64) -> Result<(), TimeishError> {
        self.hour = Self::raised_hour(i128::from(self.hour) + i128::from(hours))?;
        Ok(())
    }

    fn decrease_hours(&mut self, hours: u64) -> Result<(), TimeishError> {
        self.hour = Self::lowered_hour(i128::from(self.hour) - i128::from(hours))?;
        Ok(())
    }

    fn increase_minutes(&mut self, minutes: u64) -> Result<(), TimeishError> {
        let total = i128::from(self.minute) + i128::from(minutes);
        if total <= i128::from(MAX_MINUTE) {
            self.minute = total as i64;
            return Ok(());
        }

        let carry = total.div_euclid(MINUTES_PER_HOUR);
        trace!(minutes, carry = %carry, "carrying minutes into hours");
        let hour = Self::raised_hour(i128::from(self.hour) + carry)?;

        self.hour = hour;
        self.minute = total.rem_euclid(MINUTES_PER_HOUR) as i64;
        Ok(())
    }

    fn decrease_minutes(&mut self, minutes: u64) -> Result<(), TimeishError> {
        let total = i128::from(self.minute) - i128::from(minutes);
        if total >= i128::from(MIN_MINUTE) {
            self.minute = total as i64;
            return Ok(());
        }

        // div_euclid rounds towards negative infinity, so this is the number
        // of whole hours needed to bring the minute back to [0, 59].
        let borrow = -total.div_euclid(MINUTES_PER_HOUR);
        trace!(minutes, borrow = %borrow, "borrowing hours for minutes");
        let hour = Self::lowered_hour(i128::from(self.hour) - borrow)?;

        self.hour = hour;
        self.minute = total.rem_euclid(MINUTES_PER_HOUR) as i64;
        Ok(())
    }

    fn lowered_hour(hour: i128) -> Result<i64, TimeishError> {
        if hour < i128::from(MIN_HOUR) {
            return Err(TimeishError::InvalidRange(format!(
                "Hour cannot be less than {}.",
                MIN_HOUR
            )));
        }
        Self::raised_hour(hour)
    }

    fn raised_hour(hour: i128) -> Result<i64, TimeishError> {
        i64::try_from(hour).map_err(|_| {
            TimeishError::Overflow(format!("hour {} does not fit in an i64", hour))
        })
    }
}

fn render(hour: i64, minute: i64, separator: &str) -> String {
    format!("{:02}{}{:02}", hour, separator, minute)
}

fn calendar_pattern_for(separator: &str) -> String {
    format!("%H{}%M", separator.replace('%', "%%"))
}

fn parse_component(s: &str, name: &str) -> Result<i64, TimeishError> {
    s.parse::<i64>()
        .map_err(|e| TimeishError::ParseError(format!("invalid {} '{}': {}", name, s, e)))
}

impl fmt::Display for Timeish {
    /// Formats the time as `%02d<separator>%02d`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{}{:02}",
            self.hour, self.separator, self.minute
        )
    }
}

impl FromStr for Timeish {
    type Err = TimeishError;

    /// Parses `HH:MM` and validates the components.
    fn from_str(s: &str) -> Result<Self, TimeishError> {
        let parts = Timeish::explode_any(DEFAULT_SEPARATOR, s)?;
        Timeish::new(parts.hour, parts.minute)
    }
}

impl PartialEq for Timeish {
    fn eq(&self, other: &Self) -> bool {
        self.total_minutes() == other.total_minutes()
    }
}

impl Eq for Timeish {}

impl PartialOrd for Timeish {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timeish {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_minutes().cmp(&other.total_minutes())
    }
}

impl Hash for Timeish {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.total_minutes().hash(state);
    }
}

/// Serialised form of [`Timeish`]; deserialising goes through validation.
#[derive(Serialize, Deserialize)]
struct TimeishParts {
    hour: i64,
    minute: i64,
    #[serde(default = "default_separator")]
    separator: String,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl TryFrom<TimeishParts> for Timeish {
    type Error = TimeishError;

    fn try_from(parts: TimeishParts) -> Result<Self, TimeishError> {
        Timeish::with_separator(parts.hour, parts.minute, parts.separator)
    }
}

impl From<Timeish> for TimeishParts {
    fn from(time: Timeish) -> Self {
        TimeishParts {
            hour: time.hour,
            minute: time.minute,
            separator: time.separator,
        }
    }
}
