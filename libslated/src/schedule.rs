//! Schedule specification: a calendar date plus a time-of-day string
//!
//! The date and the "HH:MM" string are kept separate while the draft is
//! edited and combined into a single instant at submission time. The
//! combination resolves against the caller's local time zone and yields a
//! UTC instant; the raw time-of-day string is persisted alongside it.

use chrono::{DateTime, Local, LocalResult, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlatedError};

/// When a draft should be published: a date and a 24-hour "HH:MM" string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleSpec {
    pub date: NaiveDate,
    pub time: String,
}

impl ScheduleSpec {
    pub fn new(date: NaiveDate, time: impl Into<String>) -> Self {
        Self {
            date,
            time: time.into(),
        }
    }

    /// Combine date and time-of-day into a single UTC instant
    ///
    /// The wall-clock values are interpreted in the ambient local time
    /// zone. An ambiguous local time (clocks rolled back) resolves to the
    /// earlier instant; a nonexistent one (clocks rolled forward) is an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if the time-of-day string is malformed or the
    /// resulting wall-clock time does not exist locally.
    pub fn combine(&self) -> Result<DateTime<Utc>> {
        let (hour, minute) = parse_time_of_day(&self.time)?;

        let naive = self.date.and_hms_opt(hour, minute, 0).ok_or_else(|| {
            SlatedError::InvalidInput(format!("Invalid wall-clock time {}:{:02}", hour, minute))
        })?;

        match Local.from_local_datetime(&naive) {
            LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(earlier, _) => Ok(earlier.with_timezone(&Utc)),
            LocalResult::None => Err(SlatedError::InvalidInput(format!(
                "{} {} does not exist in the local time zone",
                self.date, self.time
            ))),
        }
    }
}

/// Parse a 24-hour "HH:MM" time-of-day string into (hour, minute)
///
/// # Errors
///
/// Returns an error if the input is not of the form HH:MM or the values
/// are out of range.
pub fn parse_time_of_day(input: &str) -> Result<(u32, u32)> {
    let invalid = || {
        SlatedError::InvalidInput(format!(
            "Invalid time of day '{}': expected HH:MM (24-hour)",
            input
        ))
    };

    let (hour_str, minute_str) = input.split_once(':').ok_or_else(invalid)?;

    let hour: u32 = hour_str.parse().map_err(|_| invalid())?;
    let minute: u32 = minute_str.parse().map_err(|_| invalid())?;

    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    Ok((hour, minute))
}
