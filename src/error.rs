//! Error types for fetching and parsing observation data.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NdbcError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("fetch failed for {url}: HTTP {status}")]
    FetchFailed { url: String, status: StatusCode },

    #[error("malformed observation block: expected a header, a units line and at least one data line, got {lines} line(s)")]
    MalformedInput { lines: usize },
}

pub type Result<T> = std::result::Result<T, NdbcError>;
