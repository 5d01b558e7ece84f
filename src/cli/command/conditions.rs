//! Current sea conditions from the realtime observation feed.

use anyhow::Result;
use chrono::Local;

use crate::cli::create_spinner;
use crate::fetch;
use crate::reading::{format_field, parse_records, FieldSpec, Record, FIRST_DATA_LINE};

const CONDITIONS_FIELDS: [FieldSpec; 7] = [
    FieldSpec {
        name: "WVHT",
        label: "Wave Height",
        unit: "m",
        is_bearing: false,
    },
    FieldSpec {
        name: "DPD",
        label: "Dominant Wave Period",
        unit: "sec",
        is_bearing: false,
    },
    FieldSpec {
        name: "APD",
        label: "Average Wave Period",
        unit: "sec",
        is_bearing: false,
    },
    FieldSpec {
        name: "MWD",
        label: "Wave Direction",
        unit: "",
        is_bearing: true,
    },
    FieldSpec {
        name: "WSPD",
        label: "Wind Speed",
        unit: "m/s",
        is_bearing: false,
    },
    FieldSpec {
        name: "WDIR",
        label: "Wind Direction",
        unit: "",
        is_bearing: true,
    },
    FieldSpec {
        name: "WTMP",
        label: "Water Temperature",
        unit: "°C",
        is_bearing: false,
    },
];

pub async fn conditions(station_id: &str) -> Result<String> {
    let bar = create_spinner("Fetching current sea conditions...".to_string());
    let block = fetch::fetch_observation_text(station_id).await?;
    bar.finish_with_message("Current sea conditions fetched");

    Ok(section(station_id, &block)?)
}

/// Renders the current conditions section from a fetched observation block.
pub(crate) fn section(station_id: &str, block: &str) -> crate::error::Result<String> {
    let records = parse_records(block, &[FIRST_DATA_LINE])?;

    match records.first() {
        Some(record) => Ok(render(station_id, record)),
        None => Ok("No observation data available.".to_string()),
    }
}

fn render(station_id: &str, record: &Record) -> String {
    let mut lines = vec![
        format!("===== CURRENT SEA CONDITIONS AT STATION {} =====", station_id),
        format!("Date/Time: {}", Local::now().format("%Y-%m-%d %H:%M:%S")),
    ];

    for spec in &CONDITIONS_FIELDS {
        lines.push(format_field(record, spec));
    }

    lines.join("\n")
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    const BLOCK: &str = "\
#YY  MM DD hh mm WDIR WSPD GST  WVHT   DPD   APD MWD   PRES  ATMP  WTMP  DEWP  VIS PTDY  TIDE
#yr  mo dy hr mn degT m/s  m/s     m   sec   sec degT   hPa  degC  degC  degC  nmi  hPa    ft
2024 03 15 12 30 270  5.2  6.1   1.2  12.5   8.3 180  1015.2  13.1  12.8    MM   MM   MM    MM
";

    #[test]
    fn should_render_all_condition_fields() {
        let report = section("46237", BLOCK).unwrap();

        assert!(report.contains("CURRENT SEA CONDITIONS AT STATION 46237"));
        assert!(report.contains("Wave Height: 1.2 m"));
        assert!(report.contains("Dominant Wave Period: 12.5 sec"));
        assert!(report.contains("Average Wave Period: 8.3 sec"));
        assert!(report.contains("Wave Direction: 180° (S)"));
        assert!(report.contains("Wind Speed: 5.2 m/s"));
        assert!(report.contains("Wind Direction: 270° (W)"));
        assert!(report.contains("Water Temperature: 12.8 °C"));
    }

    #[test]
    fn should_report_no_data_when_the_latest_line_is_short() {
        let block = "#YY MM WVHT\n#yr mo m\n2024 03\n";
        let report = section("46237", block).unwrap();

        assert_eq!(report, "No observation data available.");
    }
}
