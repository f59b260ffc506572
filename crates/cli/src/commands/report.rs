//! Capacity reports over the demo data.
//!
//! The site keeps its stores in memory, so these commands compute over the
//! same seed the site starts with. Seed dates are relative to the current
//! time, which keeps the numbers comparable to a freshly started site.
//!
//! # Usage
//!
//! ```bash
//! bistro stats
//! bistro stats --date 2026-10-24 --json
//! bistro slots --date 2026-10-25
//! ```

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use serde::Serialize;

use bistro_core::{
    DashboardStats, Reservation, RestaurantConfig, SlotAvailability, dashboard_stats, seed,
    slots_for_day,
};

use super::CommandError;

#[derive(Debug, Serialize)]
struct StatsReport {
    date: NaiveDate,
    #[serde(flatten)]
    stats: DashboardStats,
    occupancy_percent: u32,
}

#[derive(Debug, Serialize)]
struct SlotsReport<'a> {
    date: NaiveDate,
    closed: bool,
    slots: &'a [SlotAvailability],
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Print dashboard statistics for `date` (default: today).
///
/// # Errors
///
/// Returns [`CommandError::Json`] if the JSON report cannot be serialized.
pub fn stats(date: Option<NaiveDate>, json: bool) -> Result<(), CommandError> {
    let now = now();
    let date = date.unwrap_or_else(|| now.date());
    tracing::debug!(%date, json, "Computing dashboard stats");
    let output = render_stats(&seed::reservations(now), date, json)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{output}");
    }
    Ok(())
}

/// Print slot availability for `date` (default: today).
///
/// # Errors
///
/// Returns [`CommandError::Json`] if the JSON report cannot be serialized.
pub fn slots(date: Option<NaiveDate>, json: bool) -> Result<(), CommandError> {
    let now = now();
    let date = date.unwrap_or_else(|| now.date());
    tracing::debug!(%date, json, "Computing slot availability");
    let output = render_slots(&seed::reservations(now), date, json)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{output}");
    }
    Ok(())
}

fn render_stats(
    reservations: &[Reservation],
    date: NaiveDate,
    json: bool,
) -> Result<String, CommandError> {
    let config = seed::restaurant_config();
    let stats = dashboard_stats(reservations, &config.capacity, date);

    if json {
        let report = StatsReport {
            date,
            stats,
            occupancy_percent: stats.occupancy_percent(),
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    Ok(stats_lines(&config, date, &stats).join("\n"))
}

fn render_slots(
    reservations: &[Reservation],
    date: NaiveDate,
    json: bool,
) -> Result<String, CommandError> {
    let config = seed::restaurant_config();
    let slots = slots_for_day(reservations, &config, date);
    let closed = is_closed(&config, date);

    if json {
        let report = SlotsReport {
            date,
            closed,
            slots: &slots,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut lines = vec![format!("{} - {date}", config.name)];
    if closed {
        lines.push("  Closed all day".to_string());
    }
    lines.extend(slot_lines(&config, &slots));
    Ok(lines.join("\n"))
}

fn is_closed(config: &RestaurantConfig, date: NaiveDate) -> bool {
    config.opening_hours.for_weekday(date.weekday()).is_closed()
}

fn stats_lines(config: &RestaurantConfig, date: NaiveDate, stats: &DashboardStats) -> Vec<String> {
    vec![
        format!("{} - {date}", config.name),
        format!("  Reservations today:   {}", stats.total_reservations_today),
        format!(
            "  Tables booked:        {} of {}",
            stats.total_tables_booked, stats.total_tables
        ),
        format!("  Tables available:     {}", stats.available_tables),
        format!("  Occupancy:            {}%", stats.occupancy_percent()),
        format!("  Upcoming confirmed:   {}", stats.upcoming_reservations),
    ]
}

fn slot_lines(config: &RestaurantConfig, slots: &[SlotAvailability]) -> Vec<String> {
    let limit = config.capacity.max_reservations_per_slot;
    slots
        .iter()
        .map(|slot| {
            let state = if !slot.within_opening_hours {
                "closed"
            } else if slot.is_available {
                "open"
            } else {
                "full"
            };
            format!(
                "  {}  {}/{limit} booked  {:>2} tables left  {state}",
                slot.time, slot.reservation_count, slot.remaining_tables
            )
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bistro_core::restaurant::DayHours;
    use bistro_core::time_slots;

    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_stats_lines() {
        let config = seed::restaurant_config();
        let stats = DashboardStats {
            total_reservations_today: 2,
            available_tables: 17,
            total_tables_booked: 3,
            upcoming_reservations: 2,
            total_tables: 20,
        };
        let lines = stats_lines(&config, date(), &stats);
        assert_eq!(lines[0], "Bistro Gourmet - 2026-10-19");
        assert!(lines[2].ends_with("3 of 20"));
        assert!(lines[4].ends_with("15%"));
    }

    #[test]
    fn test_slot_lines_mark_closed_slots() {
        let mut config = seed::restaurant_config();
        // 2026-10-19 is a Monday.
        config.opening_hours.monday = DayHours::Closed;
        let slots = slots_for_day(&[], &config, date());

        assert!(is_closed(&config, date()));
        let lines = slot_lines(&config, &slots);
        assert_eq!(lines.len(), time_slots().len());
        assert!(lines.iter().all(|l| l.ends_with("closed")));
    }

    #[test]
    fn test_slot_lines_open_day() {
        let config = seed::restaurant_config();
        let slots = slots_for_day(&[], &config, date());

        let lines = slot_lines(&config, &slots);
        assert!(lines[0].starts_with("  11:30  0/4 booked"));
        assert!(lines[0].ends_with("open"));
        // Closing time is exclusive.
        assert!(lines.last().unwrap().starts_with("  22:00"));
        assert!(lines.last().unwrap().ends_with("closed"));
    }

    #[test]
    fn test_stats_json_is_parseable() {
        let reservations = seed::reservations(date().and_hms_opt(15, 0, 0).unwrap());
        let output = render_stats(&reservations, date(), true).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["date"], "2026-10-19");
        assert_eq!(value["total_tables"], 20);
        assert!(value["occupancy_percent"].is_u64());
    }

    #[test]
    fn test_slots_json_is_parseable() {
        let output = render_slots(&[], date(), true).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["closed"], false);
        assert_eq!(value["slots"].as_array().unwrap().len(), time_slots().len());
        assert_eq!(value["slots"][0]["reservation_count"], 0);
    }

    #[test]
    fn test_slots_text_has_header() {
        let output = render_slots(&[], date(), false).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("Bistro Gourmet - 2026-10-19"));
        assert!(lines.next().unwrap().starts_with("  11:30"));
    }
}
