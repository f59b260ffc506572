//! Bistro Core - Domain library for the restaurant site.
//!
//! This crate provides the types and logic shared by the Bistro components:
//! - `site` - Public pages and the admin back-office
//! - `cli` - Command-line tools for inspecting capacity and theme state
//!
//! # Architecture
//!
//! The core crate contains only types, traits and pure functions - no I/O,
//! no HTTP, no file access. Storage is expressed as repository traits so the
//! in-memory stores used today can be swapped for a real backend without
//! touching presentation code.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails and statuses
//! - [`menu`] - Menu items, dietary info and catalog filters
//! - [`reservation`] - Reservations, party sizes and booking requests
//! - [`restaurant`] - Restaurant configuration, opening hours and capacity
//! - [`theme`] - Site theme, presets and the theme store contract
//! - [`capacity`] - Dashboard statistics and time-slot availability
//! - [`notification`] - Admin notification feed entries
//! - [`repository`] - Storage traits for every entity
//! - [`seed`] - Mock data used to populate the in-memory stores

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod capacity;
pub mod menu;
pub mod notification;
pub mod repository;
pub mod reservation;
pub mod restaurant;
pub mod seed;
pub mod theme;
pub mod types;
pub mod validation;

pub use capacity::{
    DashboardStats, SlotAvailability, check_bookable, dashboard_stats, slot_availability,
    slots_for_day, time_slots,
};
pub use menu::{DietaryInfo, MenuFilter, MenuItem, MenuItemDraft, MenuSelection};
pub use notification::{NewNotification, Notification, NotificationKind};
pub use repository::{
    MenuRepository, NotificationRepository, RepositoryError, ReservationRepository,
    SettingsRepository,
};
pub use reservation::{NewReservation, PartySize, Reservation, ReservationFilter, ReservationRequest};
pub use restaurant::{Capacity, DayHours, OpeningHours, RestaurantConfig};
pub use theme::{FontFamily, Theme, ThemePatch, ThemePreset, ThemeStore, ThemeStoreError};
pub use types::*;
pub use validation::ValidationError;
