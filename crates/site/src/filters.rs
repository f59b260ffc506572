//! Custom Askama template filters.

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Local::now().year())
}

/// Formats a guest count.
///
/// Usage in templates: `{{ reservation.guests|guests }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn guests(count: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let count = count.to_string();
    if count == "1" {
        Ok("1 pessoa".to_string())
    } else {
        Ok(format!("{count} pessoas"))
    }
}
