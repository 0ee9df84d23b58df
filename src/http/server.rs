//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, metrics)
//! - Bind server to listener
//! - Stop on the shutdown broadcast

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{MatchedPath, Request},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::http::{health, launches, request, rockets};
use crate::observability::metrics;
use crate::query::{LaunchService, RocketService};
use crate::upstream::{SpaceDataSource, SpaceXClient, UpstreamResult};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub rockets: RocketService,
    pub launches: LaunchService,
    pub source: Arc<dyn SpaceDataSource>,
    pub legacy_error_text: bool,
}

impl AppState {
    pub fn new(config: &AppConfig, source: Arc<dyn SpaceDataSource>) -> Self {
        Self {
            rockets: RocketService::new(source.clone()),
            launches: LaunchService::new(source.clone(), config.compat.no_launches_placeholder),
            source,
            legacy_error_text: config.upstream.legacy_error_text,
        }
    }
}

/// HTTP server for the facade.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a server backed by the configured upstream API.
    pub fn new(config: AppConfig) -> UpstreamResult<Self> {
        let client = SpaceXClient::new(&config.upstream)?;
        Ok(Self::with_source(config, Arc::new(client)))
    }

    /// Create a server backed by an arbitrary data source.
    pub fn with_source(config: AppConfig, source: Arc<dyn SpaceDataSource>) -> Self {
        let state = AppState::new(&config, source);
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/rockets/all", get(rockets::all))
            .route("/api/rockets/active", get(rockets::active))
            .route("/api/launches/all", get(launches::all))
            .route("/api/launches/id/{rocket_id}", get(launches::by_rocket_id))
            .route("/health", get(health::live))
            .route("/health/ready", get(health::ready))
            .layer(middleware::from_fn(track_metrics))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(request::set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(request::make_span))
                    .layer(request::propagate_request_id_layer())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// The fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until a shutdown signal arrives on `shutdown`.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Metrics label for a request: its route template, or `unmatched` for 404s.
fn route_label(request: &Request) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string())
}

async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let route = route_label(&request);

    let response = next.run(request).await;
    metrics::record_request(&route, response.status().as_u16(), start);
    response
}
