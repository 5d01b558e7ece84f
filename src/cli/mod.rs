//! Command line interface.

pub mod command;

use std::time::Duration;

use clap::{command, Parser, Subcommand};
use indicatif::ProgressBar;

use crate::reading::station::{DEFAULT_BUOY, DEFAULT_TIDE_STATION};

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the commands
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current sea conditions at a buoy
    Conditions {
        /// NDBC buoy station id
        #[arg(long, default_value = DEFAULT_BUOY)]
        station: String,
    },
    /// Show recent wave readings from the spectral feed
    Waves {
        /// NDBC buoy station id
        #[arg(long, default_value = DEFAULT_BUOY)]
        station: String,
        /// Number of readings to show (at most 5)
        #[arg(long, default_value_t = 5)]
        readings: usize,
    },
    /// Show today's high and low tide predictions
    Tides {
        /// Tide station id
        #[arg(long, default_value = DEFAULT_TIDE_STATION)]
        station: String,
    },
    /// Print the full wave and tide report
    Report {
        /// NDBC buoy station id
        #[arg(long, default_value = DEFAULT_BUOY)]
        station: String,
        /// Number of recent readings to include (at most 5)
        #[arg(long, default_value_t = 5)]
        readings: usize,
        /// Include tide predictions
        #[arg(long)]
        tides: bool,
        /// Tide station id (implies --tides)
        #[arg(long)]
        tide_station: Option<String>,
    },
    /// List the known buoy stations
    Stations {},
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}
