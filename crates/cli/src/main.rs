//! Bistro CLI - capacity reports and theme management.
//!
//! # Usage
//!
//! ```bash
//! # Dashboard statistics for today, computed over the demo data
//! bistro stats
//!
//! # Slot availability for a given day
//! bistro slots --date 2026-10-24
//!
//! # Print or reset the stored theme
//! bistro theme show --path data/theme.json
//! bistro theme reset
//! ```
//!
//! # Commands
//!
//! - `stats` - Dashboard statistics
//! - `slots` - Time-slot availability
//! - `theme show|reset` - Inspect or restore the stored theme

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bistro")]
#[command(author, version, about = "Bistro CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show dashboard statistics for the demo data
    Stats {
        /// Day to report on (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Show time-slot availability for the demo data
    Slots {
        /// Day to report on (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Inspect or reset the stored theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the stored theme as JSON
    Show {
        /// Theme file (default: `BISTRO_THEME_PATH` or data/theme.json)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
    /// Restore the default theme
    Reset {
        /// Theme file (default: `BISTRO_THEME_PATH` or data/theme.json)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Stats { date, json } => commands::report::stats(date, json)?,
        Commands::Slots { date, json } => commands::report::slots(date, json)?,
        Commands::Theme { action } => match action {
            ThemeAction::Show { path } => commands::theme::show(path)?,
            ThemeAction::Reset { path } => commands::theme::reset(path)?,
        },
    }
    Ok(())
}
