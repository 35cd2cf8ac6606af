use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_hours: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlacesConfig {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub database_url: String,
    pub jwt: JwtConfig,
    pub places: PlacesConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let environment = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            ttl_hours: std::env::var("JWT_TTL_HOURS")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(24),
        };
        let places = PlacesConfig {
            api_key: std::env::var("PLACES_API_KEY")?,
            base_url: std::env::var("PLACES_BASE_URL")
                .unwrap_or_else(|_| "https://maps.googleapis.com/maps/api/place".into()),
        };
        Ok(Self {
            environment,
            database_url,
            jwt,
            places,
        })
    }
}
