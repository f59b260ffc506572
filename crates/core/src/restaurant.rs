//! Restaurant configuration: contact details, opening hours and capacity.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::theme::Theme;
use crate::types::TimeOfDay;
use crate::validation::ValidationError;

/// Days in the order the settings page lists them.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Lowercase English day name, used as a form field prefix.
#[must_use]
pub const fn weekday_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Display name of a day.
#[must_use]
pub const fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Segunda-feira",
        Weekday::Tue => "Terça-feira",
        Weekday::Wed => "Quarta-feira",
        Weekday::Thu => "Quinta-feira",
        Weekday::Fri => "Sexta-feira",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

/// Hours for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DayHours {
    Open { open: TimeOfDay, close: TimeOfDay },
    Closed,
}

impl DayHours {
    /// Convenience constructor from `HH:MM` pairs, `None` if either is invalid.
    #[must_use]
    pub fn open(open: &str, close: &str) -> Option<Self> {
        Some(Self::Open {
            open: TimeOfDay::parse(open).ok()?,
            close: TimeOfDay::parse(close).ok()?,
        })
    }

    /// Whether `time` falls in `[open, close)`.
    #[must_use]
    pub fn contains(&self, time: TimeOfDay) -> bool {
        match self {
            Self::Open { open, close } => *open <= time && time < *close,
            Self::Closed => false,
        }
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

/// Per-weekday opening hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub monday: DayHours,
    pub tuesday: DayHours,
    pub wednesday: DayHours,
    pub thursday: DayHours,
    pub friday: DayHours,
    pub saturday: DayHours,
    pub sunday: DayHours,
}

impl OpeningHours {
    /// Same hours every day.
    #[must_use]
    pub const fn uniform(hours: DayHours) -> Self {
        Self {
            monday: hours,
            tuesday: hours,
            wednesday: hours,
            thursday: hours,
            friday: hours,
            saturday: hours,
            sunday: hours,
        }
    }

    #[must_use]
    pub const fn for_weekday(&self, day: Weekday) -> &DayHours {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub const fn set(&mut self, day: Weekday, hours: DayHours) {
        match day {
            Weekday::Mon => self.monday = hours,
            Weekday::Tue => self.tuesday = hours,
            Weekday::Wed => self.wednesday = hours,
            Weekday::Thu => self.thursday = hours,
            Weekday::Fri => self.friday = hours,
            Weekday::Sat => self.saturday = hours,
            Weekday::Sun => self.sunday = hours,
        }
    }

    /// Every open day must close after it opens.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidHours`] naming the first bad day.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for day in WEEK {
            if let DayHours::Open { open, close } = self.for_weekday(day) {
                if close <= open {
                    return Err(ValidationError::InvalidHours(weekday_label(day)));
                }
            }
        }
        Ok(())
    }
}

/// Table capacity limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity {
    /// Physical tables in the dining room.
    pub tables: u32,
    /// Non-cancelled reservations accepted per time slot.
    pub max_reservations_per_slot: u32,
}

impl Capacity {
    #[must_use]
    pub const fn new(tables: u32, max_reservations_per_slot: u32) -> Self {
        Self {
            tables,
            max_reservations_per_slot,
        }
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCapacity`] if either limit is zero.
    pub fn validate(self) -> Result<Self, ValidationError> {
        if self.tables == 0 || self.max_reservations_per_slot == 0 {
            return Err(ValidationError::InvalidCapacity);
        }
        Ok(self)
    }
}

/// Everything the admin can change on the settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantConfig {
    pub name: String,
    pub logo_url: Option<String>,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub opening_hours: OpeningHours,
    pub capacity: Capacity,
    pub theme: Theme,
}

impl RestaurantConfig {
    /// Check the parts of the configuration the settings form can break.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRestaurantName);
        }
        self.capacity.validate()?;
        self.opening_hours.validate()?;
        self.theme.validate()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn time(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    #[test]
    fn test_day_hours_contains_is_half_open() {
        let hours = DayHours::open("11:30", "22:00").unwrap();
        assert!(hours.contains(time("11:30")));
        assert!(hours.contains(time("21:30")));
        assert!(!hours.contains(time("22:00")));
        assert!(!hours.contains(time("11:00")));
        assert!(!DayHours::Closed.contains(time("12:00")));
    }

    #[test]
    fn test_opening_hours_set_and_get() {
        let mut hours = OpeningHours::uniform(DayHours::Closed);
        let sunday = DayHours::open("12:00", "16:00").unwrap();
        hours.set(Weekday::Sun, sunday);
        assert_eq!(hours.for_weekday(Weekday::Sun), &sunday);
        assert!(hours.for_weekday(Weekday::Mon).is_closed());
    }

    #[test]
    fn test_opening_hours_reject_inverted_day() {
        let mut hours = OpeningHours::uniform(DayHours::open("11:30", "22:00").unwrap());
        hours.set(Weekday::Fri, DayHours::open("23:00", "11:00").unwrap());
        assert_eq!(
            hours.validate(),
            Err(ValidationError::InvalidHours("Sexta-feira"))
        );
    }

    #[test]
    fn test_capacity_requires_positive_limits() {
        assert!(Capacity::new(20, 4).validate().is_ok());
        assert_eq!(
            Capacity::new(0, 4).validate(),
            Err(ValidationError::InvalidCapacity)
        );
        assert_eq!(
            Capacity::new(20, 0).validate(),
            Err(ValidationError::InvalidCapacity)
        );
    }

    #[test]
    fn test_day_hours_serde_shape() {
        let json = serde_json::to_value(DayHours::Closed).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "closed" }));
        let open: DayHours =
            serde_json::from_value(serde_json::json!({ "status": "open", "open": "11:30", "close": "22:00" }))
                .unwrap();
        assert_eq!(open, DayHours::open("11:30", "22:00").unwrap());
    }
}
