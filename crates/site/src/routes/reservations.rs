//! Public reservation form.
//!
//! The form posts back to `/reservations`. A rejected request re-renders the
//! form with the guest's values and the error; an accepted one redirects to
//! `/reservations?confirmed={id}`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::instrument;

use bistro_core::reservation::{MAX_ADULTS, MAX_CHILDREN, MIN_ADULTS};
use bistro_core::{ReservationId, ReservationRequest, SlotAvailability};

use crate::error::{AppError, Result};
use crate::filters;
use crate::services::BookingError;
use crate::state::AppState;
use crate::views::{ReservationView, SiteChrome, format_long_date};

/// A time option in the slot picker.
#[derive(Debug, Clone)]
pub struct SlotOption {
    pub time: String,
    pub bookable: bool,
    pub selected: bool,
    pub note: &'static str,
}

impl SlotOption {
    fn new(slot: &SlotAvailability, selected: &str) -> Self {
        let time = slot.time.to_string();
        let note = if !slot.within_opening_hours {
            "fechado"
        } else if slot.is_available {
            ""
        } else {
            "lotado"
        };
        Self {
            selected: time == selected,
            bookable: slot.is_bookable(),
            note,
            time,
        }
    }
}

/// A party size option.
#[derive(Debug, Clone)]
pub struct CountOption {
    pub value: u32,
    pub selected: bool,
}

fn count_options(range: std::ops::RangeInclusive<u32>, selected: u32) -> Vec<CountOption> {
    range
        .map(|value| CountOption {
            value,
            selected: value == selected,
        })
        .collect()
}

/// Reservation page template.
#[derive(Template, WebTemplate)]
#[template(path = "reservations.html")]
pub struct ReservationsTemplate {
    pub site: SiteChrome,
    pub current_path: &'static str,
    pub form: ReservationRequest,
    pub min_date: String,
    pub date_label: Option<String>,
    pub slots: Vec<SlotOption>,
    pub closed_day: bool,
    pub adult_options: Vec<CountOption>,
    pub child_options: Vec<CountOption>,
    pub error: Option<String>,
    pub confirmation: Option<ReservationView>,
}

#[derive(Debug, Deserialize)]
pub struct ReservationsQuery {
    pub date: Option<String>,
    pub confirmed: Option<i32>,
}

/// Build the page for `form`, looking up slots for its date if it parses.
fn render_form(
    state: &AppState,
    form: ReservationRequest,
    error: Option<String>,
    confirmation: Option<ReservationView>,
) -> Result<ReservationsTemplate> {
    let today = state.now().date();
    let date = NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d")
        .ok()
        .filter(|d| *d >= today);

    let (slots, closed_day) = match date {
        Some(date) => {
            let slots = state.booking().availability(date)?;
            let closed_day = slots.iter().all(|s| !s.within_opening_hours);
            let options = slots
                .iter()
                .map(|s| SlotOption::new(s, form.time.trim()))
                .collect();
            (options, closed_day)
        }
        None => (Vec::new(), false),
    };

    Ok(ReservationsTemplate {
        site: SiteChrome::load(state)?,
        current_path: "/reservations",
        min_date: today.format("%Y-%m-%d").to_string(),
        date_label: date.map(format_long_date),
        slots,
        closed_day,
        adult_options: count_options(MIN_ADULTS..=MAX_ADULTS, form.adults),
        child_options: count_options(0..=MAX_CHILDREN, form.children),
        error,
        confirmation,
        form,
    })
}

/// Display the reservation form.
///
/// `?date=` preselects a day and shows its slots; `?confirmed=` shows the
/// confirmation for a just-created reservation.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Query(query): Query<ReservationsQuery>,
) -> Result<impl IntoResponse> {
    let confirmation = match query.confirmed {
        Some(id) => match state.reservations().get(ReservationId::new(id)) {
            Ok(reservation) => Some(ReservationView::from(&reservation)),
            Err(e) => {
                tracing::debug!(error = %e, "Confirmation for unknown reservation");
                None
            }
        },
        None => None,
    };

    let form = ReservationRequest {
        date: query.date.unwrap_or_default(),
        adults: 2,
        ..ReservationRequest::default()
    };

    render_form(&state, form, None, confirmation)
}

/// Submit a reservation.
#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<ReservationRequest>,
) -> Result<Response> {
    match state.booking().book(&form, state.now()) {
        Ok(reservation) => {
            Ok(Redirect::to(&format!("/reservations?confirmed={}", reservation.id)).into_response())
        }
        Err(BookingError::Validation(e)) => {
            tracing::info!(reason = %e, date = %form.date, time = %form.time, "Reservation rejected");
            let page = render_form(&state, form, Some(e.to_string()), None)?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(e) => Err(AppError::from(e)),
    }
}
