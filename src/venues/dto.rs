use serde::Deserialize;

use crate::error::ApiError;
use crate::venues::repo_types::{Category, Seating};

/// Incoming body for venue create and update (full replace). Required fields
/// are Options so a missing one becomes a 400 listing its name instead of a
/// body-deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct VenuePayload {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub price_range: Option<String>,
    #[serde(default)]
    pub vibe: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub seating: Option<Seating>,
    #[serde(default)]
    pub is_licensed: bool,
    #[serde(default)]
    pub has_shisha: bool,
    pub google_place_id: Option<String>,
    pub rating: Option<f64>,
}

/// A validated venue payload, every required field present.
#[derive(Debug)]
pub struct NewVenue {
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
}

impl VenuePayload {
    pub fn validate(self) -> Result<NewVenue, ApiError> {
        let mut missing = Vec::new();
        if self.name.as_deref().map_or(true, |s| s.trim().is_empty()) {
            missing.push("name");
        }
        if self.category.is_none() {
            missing.push("category");
        }
        if self.latitude.is_none() {
            missing.push("latitude");
        }
        if self.longitude.is_none() {
            missing.push("longitude");
        }
        if self.address.as_deref().map_or(true, |s| s.trim().is_empty()) {
            missing.push("address");
        }
        if self.seating.is_none() {
            missing.push("seating");
        }
        if !missing.is_empty() {
            return Err(ApiError::MissingFields(missing));
        }

        Ok(NewVenue {
            name: self.name.unwrap().trim().to_string(),
            category: self.category.unwrap(),
            price_range: self.price_range,
            vibe: self.vibe,
            latitude: self.latitude.unwrap(),
            longitude: self.longitude.unwrap(),
            address: self.address.unwrap().trim().to_string(),
            seating: self.seating.unwrap(),
            is_licensed: self.is_licensed,
            has_shisha: self.has_shisha,
            google_place_id: self.google_place_id,
            rating: self.rating,
        })
    }
}
