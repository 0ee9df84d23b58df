//! Upstream HTTP client.
//!
//! # Responsibilities
//! - Build endpoint URLs from the configured base URL
//! - Issue a single GET per fetch and return the body as text
//! - Turn transport failures and non-2xx statuses into `UpstreamError`
//!
//! No retries or backoff: a failed fetch fails the request that caused it.

use std::time::{Duration, Instant};

use futures_util::future::BoxFuture;
use url::Url;

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::upstream::types::{UpstreamError, UpstreamResult};
use crate::upstream::SpaceDataSource;

/// reqwest-backed client for the spaceflight data API.
#[derive(Clone)]
pub struct SpaceXClient {
    http: reqwest::Client,
    base_url: String,
}

impl SpaceXClient {
    /// Create a client for the configured base URL.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        Url::parse(&config.base_url).map_err(|e| {
            UpstreamError::InvalidUrl(format!("'{}': {}", config.base_url, e))
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("spacex-facade/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL for an endpoint such as `v4/rockets`.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    async fn get_text(&self, url: &str) -> UpstreamResult<String> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status,
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}

impl SpaceDataSource for SpaceXClient {
    fn fetch<'a>(&'a self, endpoint: &'a str) -> BoxFuture<'a, UpstreamResult<String>> {
        Box::pin(async move {
            let url = self.url_for(endpoint);
            let start = Instant::now();
            let result = self.get_text(&url).await;

            match &result {
                Ok(body) => tracing::debug!(
                    endpoint = %endpoint,
                    bytes = body.len(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Upstream fetch succeeded"
                ),
                Err(e) => tracing::warn!(
                    endpoint = %endpoint,
                    url = %url,
                    error = %e,
                    "Upstream fetch failed"
                ),
            }
            metrics::record_upstream_fetch(endpoint, result.is_ok(), start);

            result
        })
    }
}
