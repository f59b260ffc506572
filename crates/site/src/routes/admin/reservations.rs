//! Admin reservation list and status changes.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::instrument;

use bistro_core::{ReservationFilter, ReservationId, ReservationStatus};

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::state::AppState;
use crate::views::{AdminChrome, Flash, ReservationView};

use super::{back_or, with_error};

const LIST_PATH: &str = "/admin/reservations";

const MESSAGES: &[(&str, &str)] = &[
    ("confirmed", "Reserva confirmada."),
    ("completed", "Reserva marcada como concluída."),
    ("cancelled", "Reserva cancelada."),
    ("pending", "Reserva marcada como pendente."),
];

/// A status filter tab.
#[derive(Debug, Clone)]
pub struct StatusOption {
    pub key: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Reservation list template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/reservations.html")]
pub struct ReservationsTemplate {
    pub chrome: AdminChrome,
    pub flash: Flash,
    pub query: String,
    pub date: String,
    pub status: String,
    pub statuses: Vec<StatusOption>,
    pub reservations: Vec<ReservationView>,
    pub has_filters: bool,
    pub detail: Option<ReservationView>,
    /// Current list URL, so status changes return to the same view.
    pub back: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReservationsQuery {
    pub q: Option<String>,
    pub date: Option<String>,
    pub status: Option<String>,
    pub view: Option<i32>,
    pub success: Option<String>,
    pub error: Option<String>,
}

impl ReservationsQuery {
    fn date(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok())
    }

    fn status(&self) -> Option<ReservationStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }

    /// The list URL with the current filters and no banners.
    fn list_url(&self) -> String {
        let mut params = Vec::new();
        if let Some(q) = self.q.as_deref().filter(|q| !q.trim().is_empty()) {
            params.push(format!("q={}", urlencoding::encode(q)));
        }
        if let Some(date) = self.date() {
            params.push(format!("date={date}"));
        }
        if let Some(status) = self.status() {
            params.push(format!("status={}", status.as_str()));
        }
        if params.is_empty() {
            LIST_PATH.to_string()
        } else {
            format!("{LIST_PATH}?{}", params.join("&"))
        }
    }
}

/// List reservations with search, date and status filters.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ReservationsQuery>,
) -> Result<impl IntoResponse> {
    let date = query.date();
    let status = query.status();
    let reservations = ReservationFilter::new(query.q.as_deref(), date, status)
        .apply(state.reservations().list()?)
        .iter()
        .map(ReservationView::from)
        .collect();

    let detail = match query.view {
        Some(id) => Some(ReservationView::from(
            &state.reservations().get(ReservationId::new(id))?,
        )),
        None => None,
    };

    let mut statuses = vec![StatusOption {
        key: "",
        label: "Todos",
        selected: status.is_none(),
    }];
    statuses.extend(ReservationStatus::ALL.iter().map(|&s| StatusOption {
        key: s.as_str(),
        label: s.filter_label(),
        selected: status == Some(s),
    }));

    let query_text = query.q.clone().unwrap_or_default();
    Ok(ReservationsTemplate {
        chrome: AdminChrome::load(&state, LIST_PATH)?,
        back: query.list_url(),
        has_filters: !query_text.trim().is_empty() || date.is_some() || status.is_some(),
        flash: Flash::from_params(query.success, query.error, MESSAGES),
        query: query_text,
        date: date.map(|d| d.to_string()).unwrap_or_default(),
        status: status.map(|s| s.as_str().to_string()).unwrap_or_default(),
        statuses,
        reservations,
        detail,
    })
}

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
    #[serde(default)]
    pub back: String,
}

/// Where to send the browser after a status change.
fn back_target(back: &str) -> &str {
    back_or(back, LIST_PATH, LIST_PATH)
}

/// Confirm, complete or cancel a reservation.
#[instrument(skip(state))]
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<StatusForm>,
) -> Result<Redirect> {
    let back = back_target(&form.back);
    let Ok(status) = form.status.parse::<ReservationStatus>() else {
        let message = format!("Status inválido: {}", form.status);
        return Ok(Redirect::to(&with_error(back, &message)));
    };

    let reservation = state
        .reservations()
        .set_status(ReservationId::new(id), status)?;
    add_breadcrumb(
        "reservations",
        &format!("Reservation {} set to {}", reservation.id, status.as_str()),
    );
    tracing::info!(reservation_id = %reservation.id, status = status.as_str(), "Reservation status changed");

    let separator = if back.contains('?') { '&' } else { '?' };
    Ok(Redirect::to(&format!(
        "{back}{separator}success={}",
        status.as_str()
    )))
}
