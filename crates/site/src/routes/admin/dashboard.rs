//! Admin dashboard.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use bistro_core::reservation::most_recent;
use bistro_core::{DashboardStats, SlotAvailability, dashboard_stats, slots_for_day};

use crate::error::Result;
use crate::filters;
use crate::state::AppState;
use crate::views::{AdminChrome, MenuItemView, ReservationView, format_long_date};

/// Reservations listed under "Reservas Recentes".
const RECENT_RESERVATIONS: usize = 5;

/// Specials previewed under "Menu do Dia".
const SPECIALS_PREVIEW: usize = 3;

/// Fill of one time slot today.
#[derive(Debug, Clone)]
pub struct SlotFill {
    pub time: String,
    pub count: u32,
    pub max: u32,
    pub percent: u32,
    pub is_full: bool,
    pub is_open: bool,
}

impl SlotFill {
    fn new(slot: &SlotAvailability, max: u32) -> Self {
        let percent = if max == 0 {
            100
        } else {
            (slot.reservation_count.min(max) * 100) / max
        };
        Self {
            time: slot.time.to_string(),
            count: slot.reservation_count,
            max,
            percent,
            is_full: !slot.is_available,
            is_open: slot.within_opening_hours,
        }
    }
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub chrome: AdminChrome,
    pub today_label: String,
    pub stats: DashboardStats,
    pub available_tables: u32,
    pub occupancy_percent: u32,
    pub specials_count: usize,
    pub specials: Vec<MenuItemView>,
    pub recent: Vec<ReservationView>,
    pub slots: Vec<SlotFill>,
}

/// Display the dashboard for today.
#[instrument(skip(state))]
pub async fn dashboard(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let today = state.now().date();
    let config = state.settings().load()?;
    let reservations = state.reservations().list()?;
    let stats = dashboard_stats(&reservations, &config.capacity, today);

    let max = config.capacity.max_reservations_per_slot;
    let slots = slots_for_day(&reservations, &config, today)
        .iter()
        .map(|slot| SlotFill::new(slot, max))
        .collect();

    let specials: Vec<MenuItemView> = state
        .menu()
        .list()?
        .iter()
        .filter(|item| item.is_daily_special)
        .map(MenuItemView::from)
        .collect();

    Ok(DashboardTemplate {
        chrome: AdminChrome::load(&state, "/admin")?,
        today_label: format_long_date(today),
        available_tables: stats.available_tables_clamped(),
        occupancy_percent: stats.occupancy_percent(),
        stats,
        specials_count: specials.len(),
        specials: specials.into_iter().take(SPECIALS_PREVIEW).collect(),
        recent: most_recent(reservations, RECENT_RESERVATIONS)
            .iter()
            .map(ReservationView::from)
            .collect(),
        slots,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bistro_core::TimeOfDay;

    use super::*;

    #[test]
    fn test_slot_fill_percent() {
        let slot = SlotAvailability {
            time: TimeOfDay::parse("20:00").unwrap(),
            reservation_count: 3,
            is_available: true,
            remaining_tables: 17,
            within_opening_hours: true,
        };
        let fill = SlotFill::new(&slot, 4);
        assert_eq!(fill.percent, 75);
        assert!(!fill.is_full);
        assert_eq!(SlotFill::new(&slot, 2).percent, 100);
    }
}
