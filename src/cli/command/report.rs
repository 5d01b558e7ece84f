//! The full wave and tide report.

use anyhow::Result;
use futures::future;

use crate::cli::command::{conditions, tides, waves};
use crate::cli::create_spinner;
use crate::fetch;
use crate::reading::station::{buoy_name, DEFAULT_TIDE_STATION};

/// Settings for one report invocation.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub station_id: String,
    pub max_readings: usize,
    pub include_tides: bool,
    pub tide_station_id: Option<String>,
}

/// Builds the full report, one section per data source.
///
/// A failed or empty source degrades to a one-line message; the report
/// itself never fails.
pub async fn report(config: &ReportConfig) -> Result<String> {
    let mut sections = vec![heading(config)];

    let bar = create_spinner("Fetching buoy data...".to_string());
    let (observation, spectral) = future::join(
        fetch::fetch_observation_text(&config.station_id),
        fetch::fetch_spectral_text(&config.station_id),
    )
    .await;
    bar.finish_with_message("Buoy data fetched");

    match observation.and_then(|block| conditions::section(&config.station_id, &block)) {
        Ok(text) => sections.push(text),
        Err(e) => sections.push(format!("Error fetching current conditions: {}", e)),
    }

    match spectral.and_then(|block| waves::section(&block, config.max_readings)) {
        Ok(text) => sections.push(text),
        Err(e) => sections.push(format!("Error fetching recent wave data: {}", e)),
    }

    if config.include_tides {
        let tide_station = config
            .tide_station_id
            .as_deref()
            .unwrap_or(DEFAULT_TIDE_STATION);

        let bar = create_spinner("Fetching tide data...".to_string());
        let predictions = fetch::fetch_tide_predictions(tide_station).await;
        bar.finish_with_message("Tide data fetched");

        match predictions {
            Ok(predictions) => sections.push(tides::render(&predictions)),
            Err(e) => sections.push(format!("Error fetching tide data: {}", e)),
        }
    }

    sections.push(
        "Note: if data is showing as not available, it may be temporarily unavailable from NOAA."
            .to_string(),
    );

    Ok(sections.join("\n\n"))
}

fn heading(config: &ReportConfig) -> String {
    let title = if config.include_tides {
        "Wave and Tide Report"
    } else {
        "Wave Report"
    };

    let line = match buoy_name(&config.station_id) {
        Some(name) => format!("{} - Station {} ({})", title, config.station_id, name),
        None => format!("{} - Station {}", title, config.station_id),
    };
    let rule = "=".repeat(line.len());

    format!("{}\n{}", line, rule)
}

// -- Tests -------------------------------------------------------------------
