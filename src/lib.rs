// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod forecast;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use crate::domain::{CleanSeries, DatedValues, Diagnostics, ForecastSeries, Frequency};
pub use crate::forecast::{ArimaModel, ForecastModel, ForecastOutput};
pub use ui::App;

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Historical price CSV (defaults to the configured source path)
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Persisted model file (defaults to the configured source path)
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Number of future periods to forecast
    #[arg(long, default_value_t = config::constants::FORECAST_STEPS)]
    pub steps: usize,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
