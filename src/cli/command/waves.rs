//! Recent wave readings from the spectral observation feed.

use anyhow::Result;

use crate::cli::create_spinner;
use crate::fetch;
use crate::reading::{format_field, parse_records, FieldSpec, Record, FIRST_DATA_LINE, MAX_READINGS};

const READING_FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        name: "WVHT",
        label: "Wave Height",
        unit: "m",
        is_bearing: false,
    },
    FieldSpec {
        name: "MWD",
        label: "Wave Direction",
        unit: "",
        is_bearing: true,
    },
    FieldSpec {
        name: "SwP",
        label: "Swell Period",
        unit: "sec",
        is_bearing: false,
    },
    FieldSpec {
        name: "APD",
        label: "Average Period",
        unit: "sec",
        is_bearing: false,
    },
];

pub async fn waves(station_id: &str, max_readings: usize) -> Result<String> {
    let bar = create_spinner("Fetching recent wave data...".to_string());
    let block = fetch::fetch_spectral_text(station_id).await?;
    bar.finish_with_message("Recent wave data fetched");

    Ok(section(&block, max_readings)?)
}

/// Renders the recent readings section from a fetched spectral block.
pub(crate) fn section(block: &str, max_readings: usize) -> crate::error::Result<String> {
    let rows: Vec<usize> = (0..max_readings.min(MAX_READINGS))
        .map(|offset| FIRST_DATA_LINE + offset)
        .collect();
    let records = parse_records(block, &rows)?;

    if records.is_empty() {
        return Ok("No recent wave data available.".to_string());
    }

    Ok(render(&records))
}

fn render(records: &[Record]) -> String {
    let mut lines = vec!["===== RECENT WAVE READINGS =====".to_string()];

    for (i, record) in records.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("Reading {}: {}", i + 1, record.timestamp()));
        for spec in &READING_FIELDS {
            lines.push(format_field(record, spec));
        }
    }

    lines.join("\n")
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    const BLOCK: &str = "\
#YY  MM DD hh mm WVHT SwH SwP WWH WWP SwD WWD STEEPNESS APD MWD
#yr  mo dy hr mn    m   m sec   m sec  -  degT    -     sec degT
2024 03 15 12 30  1.2 1.0 14.8 0.4 5.6 W  270   SWELL   8.3 180
2024 03 15 11 30   MM 1.1 15.4 0.3 5.2 W  265   SWELL   8.1  90
";

    #[test]
    fn should_render_one_entry_per_reading() {
        let report = section(BLOCK, 5).unwrap();

        assert!(report.contains("Reading 1: 2024-03-15 12:30"));
        assert!(report.contains("Reading 2: 2024-03-15 11:30"));
        assert!(report.contains("Wave Height: 1.2 m"));
        assert!(report.contains("Wave Direction: 180° (S)"));
        assert!(report.contains("Swell Period: 14.8 sec"));
    }

    #[test]
    fn should_render_missing_readings_as_not_available() {
        let report = section(BLOCK, 5).unwrap();

        assert!(report.contains("Wave Height: Data not available"));
        assert!(report.contains("Wave Direction: 90° (E)"));
    }

    #[test]
    fn should_bound_the_number_of_readings() {
        let report = section(BLOCK, 1).unwrap();

        assert!(report.contains("Reading 1"));
        assert!(!report.contains("Reading 2"));
    }

    #[test]
    fn should_report_no_data_when_all_lines_are_short() {
        let block = "#YY MM WVHT\n#yr mo m\n2024 03\n2024 02\n";
        let report = section(block, 5).unwrap();

        assert_eq!(report, "No recent wave data available.");
    }
}
