//! Metrics collection and exposition.
//!
//! # Metrics
//! - `http_requests_total` (counter): requests by route, status
//! - `http_request_duration_seconds` (histogram): handler latency by route
//! - `upstream_fetch_total` (counter): upstream fetches by endpoint, outcome
//! - `upstream_fetch_duration_seconds` (histogram): upstream latency by endpoint

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a handled request.
pub fn record_request(route: &str, status: u16, start: Instant) {
    metrics::counter!(
        "http_requests_total",
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("http_request_duration_seconds", "route" => route.to_string())
        .record(start.elapsed().as_secs_f64());
}

/// Record a single upstream fetch.
pub fn record_upstream_fetch(endpoint: &str, success: bool, start: Instant) {
    let outcome = if success { "ok" } else { "error" };
    metrics::counter!(
        "upstream_fetch_total",
        "endpoint" => endpoint.to_string(),
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!("upstream_fetch_duration_seconds", "endpoint" => endpoint.to_string())
        .record(start.elapsed().as_secs_f64());
}
