//! Upstream endpoints and error definitions.

use reqwest::StatusCode;
use thiserror::Error;

/// Rocket catalogue endpoint, relative to the base URL.
pub const ROCKETS_ENDPOINT: &str = "v4/rockets";

/// Launch history endpoint, relative to the base URL.
pub const LAUNCHES_ENDPOINT: &str = "v4/launches";

/// Prefix of the text the legacy fetch path returns in place of data.
pub const LEGACY_ERROR_PREFIX: &str = "Error fetching data: ";

/// Errors that can occur while talking to the upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Base URL could not be used to build a request.
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(String),

    /// Connection, timeout or body read failure.
    #[error("request to upstream failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("upstream returned {status} for {url}")]
    Status { status: StatusCode, url: String },
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
