//! Tide prediction payload from the NOAA Tides and Currents API.

use serde::Deserialize;

/// Top-level prediction payload.
///
/// An error response carries no `predictions` key, so it deserialises to an
/// empty list rather than failing.
#[derive(Debug, Deserialize)]
pub struct TideResponse {
    #[serde(default)]
    pub predictions: Vec<TidePrediction>,
}

/// One predicted high or low tide.
#[derive(Debug, Clone, Deserialize)]
pub struct TidePrediction {
    /// Prediction time, e.g. "2024-03-15 04:56".
    pub t: String,
    /// Water level in feet above MLLW.
    pub v: String,
    /// "H" for a high tide, "L" for a low tide.
    #[serde(rename = "type")]
    pub kind: String,
}

impl TidePrediction {
    pub fn label(&self) -> &'static str {
        if self.kind == "H" {
            "High"
        } else {
            "Low"
        }
    }
}

// -- Tests -------------------------------------------------------------------
