//! Integration tests for Bistro.
//!
//! The router is driven in-process through `tower::ServiceExt::oneshot`, so
//! no server or network is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bistro-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `public_pages` - Home, menu, reservation form, 404 and static assets
//! - `booking_flow` - Reservations from the public form through the admin
//! - `admin_menu` - Menu management
//! - `admin_settings` - Restaurant settings and theme management
//! - `api` - JSON endpoints

#![allow(clippy::missing_panics_doc, clippy::expect_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use chrono::{NaiveDate, NaiveDateTime};
use tower::ServiceExt;

use bistro_core::{ThemeStore, seed};
use bistro_site::config::SiteConfig;
use bistro_site::db::{MemoryMenuStore, MemoryNotificationStore, MemoryReservationStore};
use bistro_site::state::AppState;

/// Monday 2026-10-19, 15:00.
#[must_use]
pub fn test_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .and_then(|d| d.and_hms_opt(15, 0, 0))
        .expect("valid test time")
}

/// Configuration with every variable at its default.
#[must_use]
pub fn test_config() -> SiteConfig {
    SiteConfig::from_lookup(|_| None).expect("default configuration")
}

/// A response with its body read into a string.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header of a redirect.
    #[must_use]
    pub fn location(&self) -> &str {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    /// The body parsed as JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("JSON body")
    }
}

/// The application router together with its state.
pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    /// Demo data loaded, clock pinned to [`test_now`].
    #[must_use]
    pub fn seeded() -> Self {
        let now = test_now();
        let state = AppState::builder(test_config())
            .menu(Arc::new(MemoryMenuStore::new(seed::menu_items(now))))
            .reservations(Arc::new(MemoryReservationStore::new(seed::reservations(now))))
            .notifications(Arc::new(MemoryNotificationStore::new(seed::notifications(now))))
            .fixed_time(now)
            .build();
        Self::new(state)
    }

    /// Empty stores, clock pinned to [`test_now`].
    #[must_use]
    pub fn empty() -> Self {
        Self::new(AppState::builder(test_config()).fixed_time(test_now()).build())
    }

    /// Empty stores with the given theme store.
    #[must_use]
    pub fn with_theme_store(theme: Arc<dyn ThemeStore>) -> Self {
        Self::new(
            AppState::builder(test_config())
                .theme(theme)
                .fixed_time(test_now())
                .build(),
        )
    }

    #[must_use]
    pub fn new(state: AppState) -> Self {
        let router = bistro_site::app(state.clone());
        Self { state, router }
    }

    /// Send a request through the router.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    /// POST an `application/x-www-form-urlencoded` body.
    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(encode_form(fields)))
            .expect("valid request");
        self.send(request).await
    }

    /// PUT a JSON body.
    pub async fn put_json(&self, uri: &str, body: &serde_json::Value) -> TestResponse {
        let request = Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("valid request");
        self.send(request).await
    }
}

/// Encode form fields the way a browser does.
#[must_use]
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// A valid booking request for `date` at `time`.
#[must_use]
pub fn booking_form<'a>(date: &'a str, time: &'a str, name: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("date", date),
        ("time", time),
        ("name", name),
        ("email", "cliente@email.com"),
        ("phone", "(11) 98888-7777"),
        ("adults", "2"),
        ("children", "0"),
        ("special_requests", ""),
    ]
}
