//! Mapping of query failures to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::query::QueryError;
use crate::upstream::UpstreamError;

/// JSON error body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors surfaced by API handlers.
///
/// Causes are logged server-side; clients only see a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Upstream unreachable, timed out or answered non-2xx. 502 Bad Gateway.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Upstream body was not the expected JSON. 500 Internal Server Error.
    #[error("malformed upstream data: {0}")]
    MalformedUpstream(serde_json::Error),
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Upstream(e) => Self::Upstream(e),
            QueryError::Parse(e) => Self::MalformedUpstream(e),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::MalformedUpstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            Self::Upstream(_) => "Upstream service unavailable",
            Self::MalformedUpstream(_) => "Upstream returned malformed data",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(status = %status, error = %self, "Request failed");

        (
            status,
            Json(ErrorBody {
                error: self.public_message().to_string(),
            }),
        )
            .into_response()
    }
}
