use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A geocoded place record returned by the search provider.
#[derive(Debug, Clone, Serialize)]
pub struct Place {
    pub place_id: Option<String>,
    pub name: String,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub rating: Option<f64>,
    pub price_level: Option<i32>,
    pub types: Vec<String>,
}

#[async_trait]
pub trait PlacesClient: Send + Sync {
    async fn search(&self, query: &str) -> anyhow::Result<Vec<Place>>;
    async fn details(&self, place_id: &str) -> anyhow::Result<Place>;
}

/// Google Places text search / details over HTTP.
#[derive(Clone)]
pub struct GooglePlaces {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GooglePlaces {
    pub fn new(api_key: &str, base_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("build places http client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl PlacesClient for GooglePlaces {
    async fn search(&self, query: &str) -> anyhow::Result<Vec<Place>> {
        let url = format!("{}/textsearch/json", self.base_url);
        let body: SearchResponse = self
            .http
            .get(&url)
            .query(&[("query", query), ("key", self.api_key.as_str())])
            .send()
            .await
            .context("places search request")?
            .error_for_status()
            .context("places search status")?
            .json()
            .await
            .context("places search body")?;

        match body.status.as_str() {
            "OK" | "ZERO_RESULTS" => Ok(body.results.into_iter().map(Place::from).collect()),
            status => anyhow::bail!(
                "places search returned {}: {}",
                status,
                body.error_message.unwrap_or_default()
            ),
        }
    }

    async fn details(&self, place_id: &str) -> anyhow::Result<Place> {
        let url = format!("{}/details/json", self.base_url);
        let body: DetailsResponse = self
            .http
            .get(&url)
            .query(&[("place_id", place_id), ("key", self.api_key.as_str())])
            .send()
            .await
            .context("places details request")?
            .error_for_status()
            .context("places details status")?
            .json()
            .await
            .context("places details body")?;

        match (body.status.as_str(), body.result) {
            ("OK", Some(result)) => Ok(Place::from(result)),
            (status, _) => anyhow::bail!(
                "places details returned {}: {}",
                status,
                body.error_message.unwrap_or_default()
            ),
        }
    }
}

// Wire format of the provider responses.

#[derive(Debug, Deserialize)]
struct SearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<PlaceResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,
    result: Option<PlaceResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    place_id: Option<String>,
    name: Option<String>,
    formatted_address: Option<String>,
    geometry: Option<Geometry>,
    rating: Option<f64>,
    price_level: Option<i32>,
    #[serde(default)]
    types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Option<LatLng>,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl From<PlaceResult> for Place {
    fn from(r: PlaceResult) -> Self {
        let location = r.geometry.and_then(|g| g.location);
        Self {
            place_id: r.place_id,
            name: r.name.unwrap_or_default(),
            address: r.formatted_address,
            latitude: location.as_ref().map(|l| l.lat),
            longitude: location.as_ref().map(|l| l.lng),
            rating: r.rating,
            price_level: r.price_level,
            types: r.types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_maps_to_places() {
        let body: SearchResponse = serde_json::from_value(serde_json::json!({
            "status": "OK",
            "results": [{
                "place_id": "ChIJabc",
                "name": "The Ivy",
                "formatted_address": "1-5 West St, London",
                "geometry": { "location": { "lat": 51.5129, "lng": -0.1278 } },
                "rating": 4.3,
                "price_level": 3,
                "types": ["restaurant", "food"]
            }]
        }))
        .unwrap();

        let places: Vec<Place> = body.results.into_iter().map(Place::from).collect();
        assert_eq!(places.len(), 1);
        let place = &places[0];
        assert_eq!(place.place_id.as_deref(), Some("ChIJabc"));
        assert_eq!(place.name, "The Ivy");
        assert_eq!(place.latitude, Some(51.5129));
        assert_eq!(place.longitude, Some(-0.1278));
        assert_eq!(place.types, vec!["restaurant", "food"]);
    }

    #[test]
    fn sparse_result_still_parses() {
        let body: SearchResponse = serde_json::from_value(serde_json::json!({
            "status": "ZERO_RESULTS"
        }))
        .unwrap();
        assert_eq!(body.status, "ZERO_RESULTS");
        assert!(body.results.is_empty());

        let result: PlaceResult =
            serde_json::from_value(serde_json::json!({ "name": "Bare" })).unwrap();
        let place = Place::from(result);
        assert_eq!(place.name, "Bare");
        assert!(place.latitude.is_none());
        assert!(place.types.is_empty());
    }

    #[tokio::test]
    async fn fake_client_search_and_details() {
        let state = crate::state::AppState::fake();
        let places = state.places.search("shisha bar").await.unwrap();
        assert_eq!(places.len(), 1);
        assert!(places[0].name.contains("shisha bar"));

        let place = state.places.details("some-id").await.unwrap();
        assert_eq!(place.place_id.as_deref(), Some("some-id"));
    }
}
