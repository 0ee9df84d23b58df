//! Upstream data source subsystem.
//!
//! # Data Flow
//! ```text
//! query service
//!     → SpaceDataSource::fetch("v4/rockets" | "v4/launches")
//!     → client.rs (reqwest GET {base}/{endpoint})
//!     → raw body text | UpstreamError
//! ```
//!
//! Two compatibility adapters sit on top of the trait: `fetch_or_message`
//! folds failures into the legacy error text, `fetch_typed` decodes JSON and
//! folds failures into `None`. New code should use `fetch` directly.

pub mod client;
pub mod types;

use futures_util::future::BoxFuture;
use serde::de::DeserializeOwned;

pub use client::SpaceXClient;
pub use types::{
    UpstreamError, UpstreamResult, LAUNCHES_ENDPOINT, LEGACY_ERROR_PREFIX, ROCKETS_ENDPOINT,
};

/// Source of raw upstream JSON.
pub trait SpaceDataSource: Send + Sync {
    /// Fetch the raw body of `endpoint`.
    fn fetch<'a>(&'a self, endpoint: &'a str) -> BoxFuture<'a, UpstreamResult<String>>;

    fn rockets_data(&self) -> BoxFuture<'_, UpstreamResult<String>> {
        self.fetch(ROCKETS_ENDPOINT)
    }

    fn launches_data(&self) -> BoxFuture<'_, UpstreamResult<String>> {
        self.fetch(LAUNCHES_ENDPOINT)
    }
}

/// Fetch `endpoint`, returning `"Error fetching data: <message>"` on failure.
///
/// Callers cannot tell this text apart from data without inspecting it; only
/// use it where the legacy response body must be reproduced.
pub async fn fetch_or_message(source: &dyn SpaceDataSource, endpoint: &str) -> String {
    match source.fetch(endpoint).await {
        Ok(body) => body,
        Err(e) => format!("{LEGACY_ERROR_PREFIX}{e}"),
    }
}

/// Fetch and decode `endpoint`, returning `None` on any failure.
pub async fn fetch_typed<T: DeserializeOwned>(
    source: &dyn SpaceDataSource,
    endpoint: &str,
) -> Option<T> {
    let body = match source.fetch(endpoint).await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(endpoint = %endpoint, error = %e, "Error fetching data");
            return None;
        }
    };

    match serde_json::from_str(&body) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!(endpoint = %endpoint, error = %e, "Error decoding upstream data");
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory data source for unit tests.

    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use futures_util::future::BoxFuture;
    use reqwest::StatusCode;

    use super::{SpaceDataSource, UpstreamError, UpstreamResult};

    /// Serves canned bodies per endpoint; unknown endpoints answer 503.
    #[derive(Default)]
    pub struct StubSource {
        bodies: HashMap<String, String>,
        calls: AtomicUsize,
    }

    impl StubSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, endpoint: &str, body: &str) -> Self {
            self.bodies.insert(endpoint.to_string(), body.to_string());
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl SpaceDataSource for StubSource {
        fn fetch<'a>(&'a self, endpoint: &'a str) -> BoxFuture<'a, UpstreamResult<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let result = self.bodies.get(endpoint).cloned().ok_or_else(|| {
                UpstreamError::Status {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    url: format!("stub://{endpoint}"),
                }
            });
            Box::pin(async move { result })
        }
    }
}
