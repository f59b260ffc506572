//! Business logic services for the site.
//!
//! # Services
//!
//! - `booking` - Public reservation flow (validate, check capacity, store, notify)
//! - `theme_store` - Theme persistence backends

pub mod booking;
pub mod theme_store;

pub use booking::{BookingError, BookingService};
pub use theme_store::{FileThemeStore, MemoryThemeStore};
