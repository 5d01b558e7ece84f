//! High and low tide predictions.

use anyhow::Result;

use crate::cli::create_spinner;
use crate::fetch;
use crate::tide::TidePrediction;

pub async fn tides(station_id: &str) -> Result<String> {
    let bar = create_spinner("Fetching tide data...".to_string());
    let predictions = fetch::fetch_tide_predictions(station_id).await?;
    bar.finish_with_message("Tide data fetched");

    Ok(render(&predictions))
}

/// Renders the tide section from a list of predictions.
pub(crate) fn render(predictions: &[TidePrediction]) -> String {
    if predictions.is_empty() {
        return "No tide data available.".to_string();
    }

    let mut lines = vec!["===== HIGH AND LOW TIDES TODAY =====".to_string()];
    for tide in predictions {
        lines.push(format!("{} Tide: {}, {} ft", tide.label(), tide.t, tide.v));
    }

    lines.join("\n")
}

// -- Tests -------------------------------------------------------------------
