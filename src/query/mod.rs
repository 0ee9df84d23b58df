//! Query subsystem: parse, filter, sort and project upstream data.
//!
//! # Data Flow
//! ```text
//! raw body (upstream)
//!     → model.rs (lenient parse into RawRocket / RawLaunch)
//!     → rockets.rs / launches.rs (filter by active flag or rocket id)
//!     → sort.rs (optional client ordering)
//!     → RocketView / LaunchView (date.rs formats launch dates)
//! ```
//!
//! Everything here is request-scoped; services hold only the data source.

pub mod date;
pub mod launches;
pub mod model;
pub mod rockets;
pub mod sort;

use thiserror::Error;

use crate::upstream::UpstreamError;

pub use launches::LaunchService;
pub use model::{LaunchView, RawLaunch, RawRocket, RocketView};
pub use rockets::RocketService;
pub use sort::SortKey;

/// Errors a query can fail with.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Upstream could not be reached or refused the request.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Upstream answered with something that is not the expected JSON.
    #[error("malformed upstream data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;
