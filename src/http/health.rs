//! Liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::http::server::AppState;
use crate::upstream::{fetch_typed, ROCKETS_ENDPOINT};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Readiness {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rockets: Option<usize>,
}

/// GET /health
pub async fn live() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /health/ready
///
/// Ready when the upstream rocket catalogue can be fetched and decoded.
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let rockets: Option<Vec<serde_json::Value>> =
        fetch_typed(state.source.as_ref(), ROCKETS_ENDPOINT).await;

    match rockets {
        Some(rockets) => (
            StatusCode::OK,
            Json(Readiness {
                status: "ready".to_string(),
                rockets: Some(rockets.len()),
            }),
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(Readiness {
                status: "unavailable".to_string(),
                rockets: None,
            }),
        ),
    }
}
