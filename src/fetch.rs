//! Fetches observation and tide data from the NOAA endpoints.

use crate::error::{NdbcError, Result};
use crate::tide::{TidePrediction, TideResponse};

const REALTIME_BASE_URL: &str = "https://www.ndbc.noaa.gov/data/realtime2";
const TIDES_URL: &str = "https://api.tidesandcurrents.noaa.gov/api/prod/datagetter";

/// Fetches the realtime observation block for a buoy station.
pub async fn fetch_observation_text(station_id: &str) -> Result<String> {
    fetch_text(&format!("{}/{}.txt", REALTIME_BASE_URL, station_id)).await
}

/// Fetches the spectral wave observation block for a buoy station.
pub async fn fetch_spectral_text(station_id: &str) -> Result<String> {
    fetch_text(&format!("{}/{}.spec", REALTIME_BASE_URL, station_id)).await
}

async fn fetch_text(url: &str) -> Result<String> {
    let response = reqwest::get(url).await?;

    if !response.status().is_success() {
        return Err(NdbcError::FetchFailed {
            url: url.to_string(),
            status: response.status(),
        });
    }

    Ok(response.text().await?)
}

/// Fetches today's high/low tide predictions for a tide station.
pub async fn fetch_tide_predictions(station_id: &str) -> Result<Vec<TidePrediction>> {
    let response = reqwest::Client::new()
        .get(TIDES_URL)
        .query(&[
            ("date", "today"),
            ("station", station_id),
            ("product", "predictions"),
            ("datum", "MLLW"),
            ("time_zone", "lst_ldt"),
            ("units", "english"),
            ("format", "json"),
            ("interval", "hilo"),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(NdbcError::FetchFailed {
            url: TIDES_URL.to_string(),
            status: response.status(),
        });
    }

    Ok(response.json::<TideResponse>().await?.predictions)
}
