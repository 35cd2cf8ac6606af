use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "venue_category", rename_all = "PascalCase")]
pub enum Category {
    Bar,
    Restaurant,
    Cafe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "venue_seating", rename_all = "PascalCase")]
pub enum Seating {
    Indoor,
    #[sqlx(rename = "Al Fresco")]
    #[serde(rename = "Al Fresco")]
    AlFresco,
    Both,
}

/// Venue record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Venue {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    pub price_range: Option<String>,
    pub vibe: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub seating: Seating,
    pub is_licensed: bool,
    pub has_shisha: bool,
    pub google_place_id: Option<String>,
    pub rating: Option<f64>,
    pub added_by: Option<Uuid>,
    pub last_modified_by: Option<Uuid>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Listing row: a venue joined with the names of the users who added and
/// last modified it, for display.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VenueListItem {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    pub price_range: Option<String>,
    pub vibe: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub seating: Seating,
    pub is_licensed: bool,
    pub has_shisha: bool,
    pub google_place_id: Option<String>,
    pub rating: Option<f64>,
    pub added_by: Option<Uuid>,
    pub last_modified_by: Option<Uuid>,
    pub added_by_user: Option<String>,
    pub modified_by_user: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}
