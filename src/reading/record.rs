//! Whitespace-delimited observation records.
//!
//! NDBC realtime feeds serve a header line of field names, a units line and
//! data lines ordered most-recent-first. Records are built by positional
//! alignment of a data line against the header line.

use std::collections::HashMap;

use crate::error::{NdbcError, Result};

/// Line index of the most recent data line, after the header and units lines.
pub const FIRST_DATA_LINE: usize = 2;

/// Maximum number of recent readings a report will request.
pub const MAX_READINGS: usize = 5;

/// One observation, mapping field names to their raw string values.
#[derive(Debug, Clone)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    fn from_tokens(headers: &[&str], values: &[&str]) -> Self {
        let mut fields = HashMap::new();
        for (header, value) in headers.iter().zip(values) {
            fields.insert(header.to_string(), value.to_string());
        }

        Record { fields }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Assembles the observation time from the raw timestamp fields.
    ///
    /// Values are taken verbatim, with no padding or century expansion, and
    /// missing fields render as empty segments.
    pub fn timestamp(&self) -> String {
        format!(
            "{}-{}-{} {}:{}",
            self.get("YY").unwrap_or(""),
            self.get("MM").unwrap_or(""),
            self.get("DD").unwrap_or(""),
            self.get("hh").unwrap_or(""),
            self.get("mm").unwrap_or(""),
        )
    }
}

/// Parses the requested data lines of a raw observation block.
///
/// `rows` are line indices into the block (line 0 is the header, line 1 the
/// units line). Rows that are absent or hold fewer tokens than the header are
/// skipped, so the output may be shorter than the request.
pub fn parse_records(block: &str, rows: &[usize]) -> Result<Vec<Record>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let lines: Vec<&str> = block.trim().split('\n').collect();
    if lines.len() < FIRST_DATA_LINE + 1 {
        return Err(NdbcError::MalformedInput { lines: lines.len() });
    }

    let header_line = lines[0].strip_prefix('#').unwrap_or(lines[0]);
    let headers: Vec<&str> = header_line.split_whitespace().collect();

    let mut records = Vec::new();
    for &row in rows {
        let line = match lines.get(row) {
            Some(line) => line,
            None => continue,
        };
        let values: Vec<&str> = line.split_whitespace().collect();
        if values.len() < headers.len() {
            continue;
        }
        records.push(Record::from_tokens(&headers, &values));
    }

    Ok(records)
}

// -- Tests -------------------------------------------------------------------
