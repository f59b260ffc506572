//! JSON API endpoints.
//!
//! Errors are returned as `{"error": "..."}` with the status code of the
//! underlying [`AppError`].

pub mod availability;
pub mod stats;
pub mod theme;

use axum::{
    Json, Router,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;

use bistro_core::{RepositoryError, ThemeStoreError, ValidationError};

use crate::error::AppError;
use crate::services::BookingError;
use crate::state::AppState;

/// Error body for API endpoints.
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// An [`AppError`] rendered as JSON.
#[derive(Debug)]
pub struct ApiError(pub AppError);

macro_rules! api_error_from {
    ($($source:ty),+ $(,)?) => {
        $(
            impl From<$source> for ApiError {
                fn from(err: $source) -> Self {
                    Self(AppError::from(err))
                }
            }
        )+
    };
}

api_error_from!(RepositoryError, ValidationError, ThemeStoreError, BookingError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let error = if self.0.is_server_error() {
            let event_id = sentry::capture_error(&self.0);
            tracing::error!(error = %self.0, sentry_event_id = %event_id, "API error");
            "Erro interno do servidor".to_string()
        } else {
            self.0.to_string()
        };
        (status, Json(ApiErrorBody { error })).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// Build the API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/availability", get(availability::availability))
        .route("/stats", get(stats::stats))
        .route("/theme", get(theme::show).put(theme::replace))
}
