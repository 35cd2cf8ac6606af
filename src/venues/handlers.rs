use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::services::AuthUser,
    error::ApiError,
    state::AppState,
    venues::{
        dto::VenuePayload,
        repo_types::{Venue, VenueListItem},
    },
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/:id", get(get_restaurant))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/restaurants", post(create_restaurant))
        .route(
            "/restaurants/:id",
            put(update_restaurant).delete(delete_restaurant),
        )
}

#[instrument(skip(state))]
pub async fn list_restaurants(
    State(state): State<AppState>,
    AuthUser(_identity): AuthUser,
) -> Result<Json<Vec<VenueListItem>>, ApiError> {
    let venues = Venue::list(&state.db).await?;
    Ok(Json(venues))
}

#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    AuthUser(_identity): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Venue>, ApiError> {
    let venue = Venue::get(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Restaurant not found".into()))?;
    Ok(Json(venue))
}

#[instrument(skip(state, payload))]
pub async fn create_restaurant(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(payload): Json<VenuePayload>,
) -> Result<(StatusCode, Json<Venue>), ApiError> {
    let new = payload.validate()?;
    let venue = Venue::insert(&state.db, &new, identity.id).await?;
    info!(venue_id = %venue.id, user_id = %identity.id, "venue created");
    Ok((StatusCode::CREATED, Json(venue)))
}

#[instrument(skip(state, payload))]
pub async fn update_restaurant(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<VenuePayload>,
) -> Result<Json<Venue>, ApiError> {
    let new = payload.validate()?;
    let venue = Venue::update(&state.db, id, &new, identity.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Restaurant not found".into()))?;
    info!(venue_id = %venue.id, user_id = %identity.id, "venue updated");
    Ok(Json(venue))
}

#[instrument(skip(state))]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !Venue::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Restaurant not found".into()));
    }
    info!(venue_id = %id, user_id = %identity.id, "venue deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::venues::repo_types::{Category, Seating};
    use time::OffsetDateTime;

    #[test]
    fn venue_serialization_includes_all_fields() {
        let venue = Venue {
            id: Uuid::new_v4(),
            name: "Shisha Garden".into(),
            category: Category::Restaurant,
            price_range: Some("£££".into()),
            vibe: vec!["outdoor".into(), "late-night".into()],
            latitude: 51.51,
            longitude: -0.13,
            address: "14 Edgware Rd".into(),
            seating: Seating::AlFresco,
            is_licensed: false,
            has_shisha: true,
            google_place_id: Some("ChIJxyz".into()),
            rating: Some(4.2),
            added_by: Some(Uuid::new_v4()),
            last_modified_by: None,
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_value(&venue).unwrap();
        assert_eq!(json["seating"], "Al Fresco");
        assert_eq!(json["category"], "Restaurant");
        assert_eq!(json["has_shisha"], true);
        assert_eq!(json["vibe"][1], "late-night");
        assert!(json["created_at"].as_str().unwrap().contains('T'));
    }
}
