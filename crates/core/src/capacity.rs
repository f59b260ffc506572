//! Capacity accounting: dashboard statistics and time-slot availability.
//!
//! Everything here is recomputed from the reservation list on every call, so
//! a status change (e.g. a cancellation) is reflected the next time a page
//! asks for numbers.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::reservation::{NewReservation, Reservation};
use crate::restaurant::{Capacity, OpeningHours, RestaurantConfig};
use crate::types::{ReservationStatus, TimeOfDay};
use crate::validation::ValidationError;

/// Half-hour reservation windows offered on the booking form.
const SLOT_TIMES: [(u32, u32); 16] = [
    (11, 30),
    (12, 0),
    (12, 30),
    (13, 0),
    (13, 30),
    (14, 0),
    (14, 30),
    (15, 0),
    (18, 30),
    (19, 0),
    (19, 30),
    (20, 0),
    (20, 30),
    (21, 0),
    (21, 30),
    (22, 0),
];

/// The fixed slot list. It does not follow the configured opening hours;
/// see [`mark_opening_hours`].
#[must_use]
pub fn time_slots() -> Vec<TimeOfDay> {
    SLOT_TIMES
        .iter()
        .filter_map(|&(h, m)| TimeOfDay::from_hm(h, m))
        .collect()
}

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    /// Non-cancelled reservations dated today.
    pub total_reservations_today: usize,
    /// `total_tables - total_tables_booked`; negative when overbooked.
    pub available_tables: i64,
    pub total_tables_booked: u32,
    /// Confirmed reservations dated today or later.
    pub upcoming_reservations: usize,
    pub total_tables: u32,
}

impl DashboardStats {
    /// Available tables floored at zero, for display.
    #[must_use]
    pub fn available_tables_clamped(&self) -> u32 {
        u32::try_from(self.available_tables.max(0)).unwrap_or(u32::MAX)
    }

    /// Booked share of the dining room, rounded to the nearest percent.
    #[must_use]
    pub fn occupancy_percent(&self) -> u32 {
        if self.total_tables == 0 {
            return 0;
        }
        let booked = u64::from(self.total_tables_booked) * 100;
        let total = u64::from(self.total_tables);
        u32::try_from((booked + total / 2) / total).unwrap_or(u32::MAX)
    }
}

/// Compute dashboard statistics for `today`.
#[must_use]
pub fn dashboard_stats(
    reservations: &[Reservation],
    capacity: &Capacity,
    today: NaiveDate,
) -> DashboardStats {
    let todays: Vec<&Reservation> = reservations
        .iter()
        .filter(|r| r.date == today && r.is_active())
        .collect();

    let total_tables_booked: u32 = todays.iter().map(|r| r.table_count).sum();
    let available_tables = i64::from(capacity.tables) - i64::from(total_tables_booked);

    let upcoming_reservations = reservations
        .iter()
        .filter(|r| r.date >= today && r.status == ReservationStatus::Confirmed)
        .count();

    DashboardStats {
        total_reservations_today: todays.len(),
        available_tables,
        total_tables_booked,
        upcoming_reservations,
        total_tables: capacity.tables,
    }
}

/// Availability of a single time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotAvailability {
    pub time: TimeOfDay,
    /// Non-cancelled reservations at this time.
    pub reservation_count: u32,
    /// `reservation_count < max_reservations_per_slot`.
    pub is_available: bool,
    /// `max(0, tables - reservation_count)`.
    pub remaining_tables: u32,
    /// Whether the restaurant is open at this time on the requested day.
    pub within_opening_hours: bool,
}

impl SlotAvailability {
    /// Bookable: has capacity and the restaurant is open.
    #[must_use]
    pub const fn is_bookable(&self) -> bool {
        self.is_available && self.within_opening_hours
    }
}

/// Availability for every slot in [`time_slots`].
///
/// With `date = None` reservations on any date count against a slot; with
/// `Some(date)` only that day's reservations do. Slots start out flagged as
/// within opening hours.
#[must_use]
pub fn slot_availability(
    reservations: &[Reservation],
    capacity: &Capacity,
    date: Option<NaiveDate>,
) -> Vec<SlotAvailability> {
    time_slots()
        .into_iter()
        .map(|time| {
            let count = reservations
                .iter()
                .filter(|r| r.time == time && r.is_active())
                .filter(|r| date.is_none_or(|d| r.date == d))
                .count();
            let reservation_count = u32::try_from(count).unwrap_or(u32::MAX);

            SlotAvailability {
                time,
                reservation_count,
                is_available: reservation_count < capacity.max_reservations_per_slot,
                remaining_tables: capacity.tables.saturating_sub(reservation_count),
                within_opening_hours: true,
            }
        })
        .collect()
}

/// Flag the slots that fall outside the opening hours of `date`'s weekday.
pub fn mark_opening_hours(slots: &mut [SlotAvailability], hours: &OpeningHours, date: NaiveDate) {
    let day = hours.for_weekday(date.weekday());
    for slot in slots {
        slot.within_opening_hours = day.contains(slot.time);
    }
}

/// Slot availability for a booking day, including the opening-hours flag.
#[must_use]
pub fn slots_for_day(
    reservations: &[Reservation],
    config: &RestaurantConfig,
    date: NaiveDate,
) -> Vec<SlotAvailability> {
    let mut slots = slot_availability(reservations, &config.capacity, Some(date));
    mark_opening_hours(&mut slots, &config.opening_hours, date);
    slots
}

/// Check that a validated booking fits: known slot, open that day, and
/// below the slot's reservation limit.
///
/// # Errors
///
/// Returns [`ValidationError::UnknownSlot`], [`ValidationError::ClosedOnDay`],
/// [`ValidationError::OutsideOpeningHours`] or [`ValidationError::SlotFull`].
pub fn check_bookable(
    booking: &NewReservation,
    reservations: &[Reservation],
    config: &RestaurantConfig,
) -> Result<(), ValidationError> {
    let slots = slots_for_day(reservations, config, booking.date);
    let Some(slot) = slots.iter().find(|s| s.time == booking.time) else {
        return Err(ValidationError::UnknownSlot(booking.time));
    };

    if config
        .opening_hours
        .for_weekday(booking.date.weekday())
        .is_closed()
    {
        return Err(ValidationError::ClosedOnDay);
    }
    if !slot.within_opening_hours {
        return Err(ValidationError::OutsideOpeningHours(booking.time));
    }
    if !slot.is_available {
        return Err(ValidationError::SlotFull(booking.time));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::reservation::PartySize;
    use crate::restaurant::DayHours;
    use crate::seed;
    use crate::types::{Email, ReservationId};

    fn today() -> NaiveDate {
        // A Monday.
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn booking(date: NaiveDate, time: &str, party: PartySize) -> NewReservation {
        NewReservation {
            customer_name: "Cliente".to_string(),
            customer_email: Email::parse("cliente@email.com").unwrap(),
            customer_phone: "(11) 90000-0000".to_string(),
            date,
            time: TimeOfDay::parse(time).unwrap(),
            party_size: party,
            special_requests: None,
        }
    }

    fn reservation(id: i32, date: NaiveDate, time: &str, party: PartySize) -> Reservation {
        let mut r = Reservation::from_new(
            ReservationId::new(id),
            booking(date, time, party),
            date.and_hms_opt(9, 0, 0).unwrap(),
        );
        r.status = ReservationStatus::Confirmed;
        r
    }

    #[test]
    fn test_fixed_slot_list() {
        let slots = time_slots();
        assert_eq!(slots.len(), 16);
        assert_eq!(slots[0].to_string(), "11:30");
        assert_eq!(slots[7].to_string(), "15:00");
        assert_eq!(slots[8].to_string(), "18:30");
        assert_eq!(slots[15].to_string(), "22:00");
    }

    #[test]
    fn test_dashboard_stats_example() {
        let list = vec![
            reservation(1, today(), "19:30", PartySize::new(2, 0)),
            reservation(2, today(), "20:00", PartySize::new(4, 2)),
        ];
        let stats = dashboard_stats(&list, &Capacity::new(20, 4), today());
        assert_eq!(stats.total_reservations_today, 2);
        assert_eq!(stats.total_tables_booked, 3);
        assert_eq!(stats.available_tables, 17);
        assert_eq!(stats.upcoming_reservations, 2);
        assert_eq!(stats.occupancy_percent(), 15);
    }

    #[test]
    fn test_dashboard_ignores_cancelled_and_other_days() {
        let tomorrow = today().succ_opt().unwrap();
        let yesterday = today().pred_opt().unwrap();
        let mut cancelled = reservation(1, today(), "19:30", PartySize::new(8, 0));
        cancelled.status = ReservationStatus::Cancelled;
        let mut pending = reservation(2, tomorrow, "13:30", PartySize::new(6, 0));
        pending.status = ReservationStatus::Pending;
        let list = vec![
            cancelled,
            pending,
            reservation(3, tomorrow, "20:00", PartySize::new(2, 0)),
            reservation(4, yesterday, "20:00", PartySize::new(2, 0)),
        ];

        let stats = dashboard_stats(&list, &Capacity::new(20, 4), today());
        assert_eq!(stats.total_reservations_today, 0);
        assert_eq!(stats.available_tables, 20);
        assert_eq!(stats.upcoming_reservations, 1);
    }

    #[test]
    fn test_available_tables_can_go_negative() {
        let list = vec![
            reservation(1, today(), "19:30", PartySize::new(20, 0)),
            reservation(2, today(), "20:00", PartySize::new(10, 0)),
        ];
        let stats = dashboard_stats(&list, &Capacity::new(5, 4), today());
        assert_eq!(stats.total_tables_booked, 8);
        assert_eq!(stats.available_tables, -3);
        assert_eq!(stats.available_tables_clamped(), 0);
    }

    #[test]
    fn test_full_slot_is_unavailable() {
        let list: Vec<_> = (1..=4)
            .map(|id| reservation(id, today(), "20:00", PartySize::new(2, 0)))
            .collect();
        let slots = slot_availability(&list, &Capacity::new(20, 4), None);
        let eight = slots.iter().find(|s| s.time.to_string() == "20:00").unwrap();
        assert_eq!(eight.reservation_count, 4);
        assert!(!eight.is_available);
        assert_eq!(eight.remaining_tables, 16);

        let other = slots.iter().find(|s| s.time.to_string() == "19:30").unwrap();
        assert!(other.is_available);
        assert_eq!(other.remaining_tables, 20);
    }

    #[test]
    fn test_remaining_tables_floor_at_zero() {
        let list: Vec<_> = (1..=3)
            .map(|id| reservation(id, today(), "12:00", PartySize::new(2, 0)))
            .collect();
        let slots = slot_availability(&list, &Capacity::new(2, 10), None);
        let noon = slots.iter().find(|s| s.time.to_string() == "12:00").unwrap();
        assert_eq!(noon.remaining_tables, 0);
        assert!(noon.is_available);
    }

    #[test]
    fn test_cancellation_frees_day_and_slot() {
        let mut list: Vec<_> = (1..=4)
            .map(|id| reservation(id, today(), "20:00", PartySize::new(2, 0)))
            .collect();
        let capacity = Capacity::new(20, 4);
        assert!(!slot_availability(&list, &capacity, Some(today()))[11].is_available);
        assert_eq!(dashboard_stats(&list, &capacity, today()).total_reservations_today, 4);

        list[0].status = ReservationStatus::Cancelled;

        let slots = slot_availability(&list, &capacity, Some(today()));
        assert_eq!(slots[11].reservation_count, 3);
        assert!(slots[11].is_available);
        let stats = dashboard_stats(&list, &capacity, today());
        assert_eq!(stats.total_reservations_today, 3);
        assert_eq!(stats.available_tables, 17);
    }

    #[test]
    fn test_date_scope_counts_only_that_day() {
        let tomorrow = today().succ_opt().unwrap();
        let list: Vec<_> = (1..=4)
            .map(|id| reservation(id, tomorrow, "20:00", PartySize::new(2, 0)))
            .collect();
        let capacity = Capacity::new(20, 4);
        assert!(!slot_availability(&list, &capacity, None)[11].is_available);
        assert!(slot_availability(&list, &capacity, Some(today()))[11].is_available);
        assert!(!slot_availability(&list, &capacity, Some(tomorrow))[11].is_available);
    }

    #[test]
    fn test_opening_hours_flag() {
        let config = seed::restaurant_config();
        // Sunday hours are 12:00-16:00.
        let sunday = NaiveDate::from_ymd_opt(2026, 10, 25).unwrap();
        let slots = slots_for_day(&[], &config, sunday);
        let flags: Vec<_> = slots
            .iter()
            .filter(|s| s.within_opening_hours)
            .map(|s| s.time.to_string())
            .collect();
        assert_eq!(
            flags,
            vec!["12:00", "12:30", "13:00", "13:30", "14:00", "14:30", "15:00"]
        );
    }

    #[test]
    fn test_check_bookable() {
        let mut config = seed::restaurant_config();
        let party = PartySize::new(2, 0);
        assert!(check_bookable(&booking(today(), "19:30", party), &[], &config).is_ok());

        assert_eq!(
            check_bookable(&booking(today(), "17:00", party), &[], &config),
            Err(ValidationError::UnknownSlot(TimeOfDay::parse("17:00").unwrap()))
        );
        // Monday closes at 22:00.
        assert_eq!(
            check_bookable(&booking(today(), "22:00", party), &[], &config),
            Err(ValidationError::OutsideOpeningHours(
                TimeOfDay::parse("22:00").unwrap()
            ))
        );

        let full: Vec<_> = (1..=4)
            .map(|id| reservation(id, today(), "19:30", party))
            .collect();
        assert_eq!(
            check_bookable(&booking(today(), "19:30", party), &full, &config),
            Err(ValidationError::SlotFull(TimeOfDay::parse("19:30").unwrap()))
        );

        config.opening_hours.monday = DayHours::Closed;
        assert_eq!(
            check_bookable(&booking(today(), "19:30", party), &[], &config),
            Err(ValidationError::ClosedOnDay)
        );
    }
}
