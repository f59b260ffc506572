//! Reservations, party sizes and the public booking request.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::types::{Email, ReservationId, ReservationStatus, TimeOfDay};
use crate::validation::ValidationError;

/// Seats per table used to estimate how many tables a party needs.
pub const GUESTS_PER_TABLE: u32 = 4;

/// Bounds enforced on the public reservation form.
pub const MIN_ADULTS: u32 = 1;
pub const MAX_ADULTS: u32 = 20;
pub const MAX_CHILDREN: u32 = 10;

/// Number of guests in a party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartySize {
    pub adults: u32,
    pub children: u32,
}

impl PartySize {
    #[must_use]
    pub const fn new(adults: u32, children: u32) -> Self {
        Self { adults, children }
    }

    /// Adults plus children.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.adults + self.children
    }

    /// Tables needed: `ceil(total / 4)`.
    #[must_use]
    pub const fn table_count(&self) -> u32 {
        self.total().div_ceil(GUESTS_PER_TABLE)
    }

    /// Check the bounds of the public form.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PartySize`] when out of bounds.
    pub fn validate(self) -> Result<Self, ValidationError> {
        if self.adults < MIN_ADULTS || self.adults > MAX_ADULTS || self.children > MAX_CHILDREN {
            return Err(ValidationError::PartySize {
                min_adults: MIN_ADULTS,
                max_adults: MAX_ADULTS,
                max_children: MAX_CHILDREN,
            });
        }
        Ok(self)
    }
}

impl Default for PartySize {
    fn default() -> Self {
        Self::new(2, 0)
    }
}

/// A table booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub customer_name: String,
    pub customer_email: Email,
    pub customer_phone: String,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub party_size: PartySize,
    /// Always `party_size.table_count()`; kept on the record for display.
    pub table_count: u32,
    pub special_requests: Option<String>,
    pub status: ReservationStatus,
    pub created_at: NaiveDateTime,
}

impl Reservation {
    /// Materialize a validated booking. New reservations start as pending.
    #[must_use]
    pub fn from_new(id: ReservationId, new: NewReservation, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            table_count: new.party_size.table_count(),
            customer_name: new.customer_name,
            customer_email: new.customer_email,
            customer_phone: new.customer_phone,
            date: new.date,
            time: new.time,
            party_size: new.party_size,
            special_requests: new.special_requests,
            status: ReservationStatus::Pending,
            created_at,
        }
    }

    /// Whether this booking still holds tables and slot capacity.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Total guests.
    #[must_use]
    pub const fn guests(&self) -> u32 {
        self.party_size.total()
    }
}

/// A booking that passed field validation but has no ID yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReservation {
    pub customer_name: String,
    pub customer_email: Email,
    pub customer_phone: String,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub party_size: PartySize,
    pub special_requests: Option<String>,
}

/// Raw reservation form as submitted by a guest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationRequest {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_adults")]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub special_requests: String,
}

const fn default_adults() -> u32 {
    2
}

impl ReservationRequest {
    /// Check required fields and turn the form into a [`NewReservation`].
    ///
    /// Checks run in the order the guest sees them: date and time first,
    /// then contact details, then party size.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self, today: NaiveDate) -> Result<NewReservation, ValidationError> {
        let date_raw = self.date.trim();
        let time_raw = self.time.trim();
        if date_raw.is_empty() || time_raw.is_empty() {
            return Err(ValidationError::MissingDateOrTime);
        }

        let name = self.name.trim();
        let phone = self.phone.trim();
        if name.is_empty() || self.email.trim().is_empty() || phone.is_empty() {
            return Err(ValidationError::MissingContact);
        }

        let date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(date_raw.to_string()))?;
        if date < today {
            return Err(ValidationError::DateInPast);
        }
        let time = TimeOfDay::parse(time_raw)
            .map_err(|_| ValidationError::InvalidTime(time_raw.to_string()))?;
        let customer_email = Email::parse(&self.email)?;
        let party_size = PartySize::new(self.adults, self.children).validate()?;

        let special_requests = Some(self.special_requests.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(NewReservation {
            customer_name: name.to_string(),
            customer_email,
            customer_phone: phone.to_string(),
            date,
            time,
            party_size,
            special_requests,
        })
    }
}

/// Admin reservation filter.
#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    query: Option<String>,
    date: Option<NaiveDate>,
    status: Option<ReservationStatus>,
}

impl ReservationFilter {
    #[must_use]
    pub fn new(
        query: Option<&str>,
        date: Option<NaiveDate>,
        status: Option<ReservationStatus>,
    ) -> Self {
        let query = query.map(str::trim).filter(|q| !q.is_empty()).map(str::to_string);
        Self {
            query,
            date,
            status,
        }
    }

    /// Name and email match case-insensitively; phone matches as typed.
    #[must_use]
    pub fn matches(&self, reservation: &Reservation) -> bool {
        let text_ok = self.query.as_deref().is_none_or(|q| {
            let lower = q.to_lowercase();
            reservation.customer_name.to_lowercase().contains(&lower)
                || reservation.customer_email.contains_ignore_case(&lower)
                || reservation.customer_phone.contains(q)
        });
        let date_ok = self.date.is_none_or(|d| reservation.date == d);
        let status_ok = self.status.is_none_or(|s| reservation.status == s);
        text_ok && date_ok && status_ok
    }

    /// Matching reservations ordered by date, then time.
    #[must_use]
    pub fn apply(&self, reservations: Vec<Reservation>) -> Vec<Reservation> {
        let mut matching: Vec<_> = reservations
            .into_iter()
            .filter(|r| self.matches(r))
            .collect();
        matching.sort_by(|a, b| a.date.cmp(&b.date).then(a.time.cmp(&b.time)));
        matching
    }
}

/// The `limit` most recently created reservations, newest first.
#[must_use]
pub fn most_recent(mut reservations: Vec<Reservation>, limit: usize) -> Vec<Reservation> {
    reservations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    reservations.truncate(limit);
    reservations
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn request() -> ReservationRequest {
        ReservationRequest {
            date: "2026-10-20".to_string(),
            time: "19:30".to_string(),
            name: "João Silva".to_string(),
            email: "joao.silva@email.com".to_string(),
            phone: "(11) 99999-8888".to_string(),
            adults: 3,
            children: 2,
            special_requests: "  ".to_string(),
        }
    }

    fn reservation(id: i32, name: &str, date: NaiveDate, time: &str) -> Reservation {
        let mut req = request();
        req.name = name.to_string();
        req.time = time.to_string();
        req.date = date.format("%Y-%m-%d").to_string();
        let new = req.validate(date).unwrap();
        Reservation::from_new(
            ReservationId::new(id),
            new,
            date.and_hms_opt(10, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_table_count_rounds_up() {
        assert_eq!(PartySize::new(3, 2).table_count(), 2);
        assert_eq!(PartySize::new(4, 0).table_count(), 1);
        assert_eq!(PartySize::new(1, 0).table_count(), 1);
        assert_eq!(PartySize::new(8, 1).table_count(), 3);
    }

    #[test]
    fn test_validate_builds_new_reservation() {
        let new = request().validate(today()).unwrap();
        assert_eq!(new.party_size.total(), 5);
        assert_eq!(new.special_requests, None);
        assert_eq!(new.time.to_string(), "19:30");

        let reservation = Reservation::from_new(
            ReservationId::new(1),
            new,
            today().and_hms_opt(9, 0, 0).unwrap(),
        );
        assert_eq!(reservation.table_count, 2);
        assert_eq!(reservation.status, ReservationStatus::Pending);
    }

    #[test]
    fn test_validate_requires_date_and_time_first() {
        let mut req = request();
        req.time = String::new();
        req.name = String::new();
        assert_eq!(req.validate(today()), Err(ValidationError::MissingDateOrTime));
    }

    #[test]
    fn test_validate_requires_contact() {
        for field in ["name", "email", "phone"] {
            let mut req = request();
            match field {
                "name" => req.name = " ".to_string(),
                "email" => req.email = String::new(),
                _ => req.phone = String::new(),
            }
            assert_eq!(req.validate(today()), Err(ValidationError::MissingContact));
        }
    }

    #[test]
    fn test_validate_rejects_past_dates() {
        let mut req = request();
        req.date = "2026-10-18".to_string();
        assert_eq!(req.validate(today()), Err(ValidationError::DateInPast));
    }

    #[test]
    fn test_validate_rejects_party_bounds() {
        let mut req = request();
        req.adults = 0;
        assert!(matches!(
            req.validate(today()),
            Err(ValidationError::PartySize { .. })
        ));
        req.adults = 2;
        req.children = 11;
        assert!(matches!(
            req.validate(today()),
            Err(ValidationError::PartySize { .. })
        ));
    }

    #[test]
    fn test_filter_sorts_by_date_then_time() {
        let tomorrow = today().succ_opt().unwrap();
        let list = vec![
            reservation(1, "Carlos", tomorrow, "13:30"),
            reservation(2, "Maria", today(), "20:00"),
            reservation(3, "João", today(), "19:30"),
        ];
        let sorted = ReservationFilter::default().apply(list);
        let ids: Vec<_> = sorted.iter().map(|r| r.id.as_i32()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_filter_by_text_date_and_status() {
        let tomorrow = today().succ_opt().unwrap();
        let mut cancelled = reservation(2, "Maria Oliveira", today(), "20:00");
        cancelled.status = ReservationStatus::Cancelled;
        let list = vec![
            reservation(1, "Carlos Santos", tomorrow, "13:30"),
            cancelled,
        ];

        let by_name = ReservationFilter::new(Some("maria"), None, None);
        assert_eq!(by_name.apply(list.clone()).len(), 1);

        let by_phone = ReservationFilter::new(Some("99999"), None, None);
        assert_eq!(by_phone.apply(list.clone()).len(), 2);

        let by_date = ReservationFilter::new(None, Some(tomorrow), None);
        assert_eq!(by_date.apply(list.clone())[0].customer_name, "Carlos Santos");

        let by_status = ReservationFilter::new(None, None, Some(ReservationStatus::Cancelled));
        assert_eq!(by_status.apply(list)[0].id, ReservationId::new(2));
    }

    #[test]
    fn test_most_recent_orders_by_creation() {
        let mut older = reservation(1, "A", today(), "12:00");
        older.created_at = today().and_hms_opt(8, 0, 0).unwrap();
        let mut newer = reservation(2, "B", today(), "12:00");
        newer.created_at = today().and_hms_opt(11, 0, 0).unwrap();

        let recent = most_recent(vec![older, newer], 1);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, ReservationId::new(2));
    }
}
