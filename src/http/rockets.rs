//! `/api/rockets/*` handlers.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::query::{RocketView, SortKey};

/// First `sort` value of a query string. Taking raw pairs means repeated or
/// unexpected parameters can never reject the request.
pub fn sort_param(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == "sort")
        .map(|(_, value)| value.as_str())
}

/// GET /api/rockets/all
///
/// `sort` is one of `id`, `name`, `active`, `success_rate_pct`; anything else is ignored.
pub async fn all(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<RocketView>>, ApiError> {
    let sort = SortKey::from_query(sort_param(&pairs));
    Ok(Json(state.rockets.list_all(sort).await?))
}

/// GET /api/rockets/active
pub async fn active(State(state): State<AppState>) -> Result<Json<Vec<RocketView>>, ApiError> {
    Ok(Json(state.rockets.list_active().await?))
}
