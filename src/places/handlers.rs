use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{error, instrument};

use crate::{auth::services::AuthUser, error::ApiError, places::client::Place, state::AppState};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

pub fn places_routes() -> Router<AppState> {
    Router::new()
        .route("/places/search", get(search_places))
        .route("/places/details/:place_id", get(place_details))
}

#[instrument(skip(state))]
pub async fn search_places(
    State(state): State<AppState>,
    AuthUser(_identity): AuthUser,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Place>>, ApiError> {
    let query = params.query.trim();
    if query.is_empty() {
        return Err(ApiError::BadRequest("query is required".into()));
    }

    let places = state.places.search(query).await.map_err(|e| {
        error!(error = %e, "places search failed");
        ApiError::BadGateway("Places search failed".into())
    })?;
    Ok(Json(places))
}

#[instrument(skip(state))]
pub async fn place_details(
    State(state): State<AppState>,
    AuthUser(_identity): AuthUser,
    Path(place_id): Path<String>,
) -> Result<Json<Place>, ApiError> {
    let place = state.places.details(&place_id).await.map_err(|e| {
        error!(error = %e, %place_id, "places details failed");
        ApiError::BadGateway("Places lookup failed".into())
    })?;
    Ok(Json(place))
}
