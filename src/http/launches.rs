//! `/api/launches/*` handlers.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::query::LaunchView;

/// GET /api/launches/id/{rocket_id}
pub async fn by_rocket_id(
    State(state): State<AppState>,
    Path(rocket_id): Path<String>,
) -> Result<Json<Vec<LaunchView>>, ApiError> {
    Ok(Json(state.launches.list_by_rocket_id(&rocket_id).await?))
}

/// GET /api/launches/all
///
/// Passes the upstream body through untouched.
pub async fn all(State(state): State<AppState>) -> Result<Response, ApiError> {
    let body = if state.legacy_error_text {
        state.launches.raw_launches_or_message().await
    } else {
        state.launches.raw_launches().await?
    };

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
