//! Wall-clock time of day in `HH:MM` form.

use core::fmt;
use core::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Errors from parsing an `HH:MM` string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("time must be HH:MM, got {0:?}")]
pub struct TimeOfDayError(String);

/// A time of day with minute precision, written `HH:MM`.
///
/// Used for reservation times, slot boundaries and opening hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Build from hour and minute, returning `None` when out of range.
    #[must_use]
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parse an `HH:MM` string.
    ///
    /// # Errors
    ///
    /// Returns [`TimeOfDayError`] if the input is not a valid 24-hour time.
    pub fn parse(input: &str) -> Result<Self, TimeOfDayError> {
        NaiveTime::parse_from_str(input.trim(), "%H:%M")
            .map(Self)
            .map_err(|_| TimeOfDayError(input.to_string()))
    }

    /// Hour component (0-23).
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Minute component (0-59).
    #[must_use]
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// The underlying chrono time.
    #[must_use]
    pub const fn as_naive(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeOfDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeOfDayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let time = TimeOfDay::parse("19:30").unwrap();
        assert_eq!(time.hour(), 19);
        assert_eq!(time.minute(), 30);
        assert_eq!(time.to_string(), "19:30");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!(TimeOfDay::parse("25:00").is_err());
        assert!(TimeOfDay::parse("7pm").is_err());
        assert!(TimeOfDay::parse("").is_err());
    }

    #[test]
    fn test_ordering_follows_clock() {
        let lunch = TimeOfDay::parse("12:30").unwrap();
        let dinner = TimeOfDay::parse("20:00").unwrap();
        assert!(lunch < dinner);
    }

    #[test]
    fn test_serde_as_string() {
        let time = TimeOfDay::from_hm(9, 5).unwrap();
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"09:05\"");
        let back: TimeOfDay = serde_json::from_str("\"09:05\"").unwrap();
        assert_eq!(back, time);
    }
}
