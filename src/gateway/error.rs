//! Error kinds surfaced by the fetch gateway

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when fetching JSON through the gateway
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request did not complete within the timeout and was aborted
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The server answered with a non-success status code
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// The response body was not valid JSON, or not the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Transport-level failure (DNS, connection refused, reset, ...)
    #[error("Network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Malformed(err.to_string())
    }
}

impl FetchError {
    /// The status code carried by an `HttpStatus` error
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
