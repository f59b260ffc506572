//! CLI command implementations.

pub mod report;
pub mod theme;

use thiserror::Error;

use bistro_core::ThemeStoreError;

/// Errors raised by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Theme store error: {0}")]
    ThemeStore(#[from] ThemeStoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
