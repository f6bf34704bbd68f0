//! Reverse geocoding: coordinates to formatted addresses.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use super::error::GeocodeError;

/// Shown when a lookup yields no candidates.
pub const NO_ADDRESS: &str = "No Address";

/// Turns a `"<lat>, <lon>"` query into candidate addresses, best first.
#[async_trait]
pub trait AddressResolver: Send + Sync {
    fn name(&self) -> &'static str;

    async fn resolve(&self, query: &str) -> Result<Vec<String>, GeocodeError>;
}

/// First candidate, or [`NO_ADDRESS`].
pub fn first_address(candidates: &[String]) -> String {
    candidates
        .first()
        .cloned()
        .unwrap_or_else(|| NO_ADDRESS.to_string())
}

/// Google Maps Geocoding API client.
pub struct GoogleGeocoder {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
    status: String,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
}

impl GoogleGeocoder {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self, query: &str) -> Result<Url, GeocodeError> {
        let base = format!(
            "{}/maps/api/geocode/json",
            self.base_url.trim_end_matches('/')
        );
        Url::parse_with_params(&base, &[("latlng", query), ("key", self.api_key.as_str())])
            .map_err(|e| GeocodeError::InvalidUrl(e.to_string()))
    }
}

#[async_trait]
impl AddressResolver for GoogleGeocoder {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn resolve(&self, query: &str) -> Result<Vec<String>, GeocodeError> {
        let url = self.endpoint(query)?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: GeocodeResponse = serde_json::from_str(&body)?;
        match parsed.status.as_str() {
            "OK" => Ok(parsed
                .results
                .into_iter()
                .map(|result| result.formatted_address)
                .collect()),
            "ZERO_RESULTS" => Ok(Vec::new()),
            _ => Err(GeocodeError::Api {
                message: parsed.error_message.unwrap_or_default(),
                status: parsed.status,
            }),
        }
    }
}

/// Resolver used when no API key is configured. Never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullResolver;

#[async_trait]
impl AddressResolver for NullResolver {
    fn name(&self) -> &'static str {
        "none"
    }

    async fn resolve(&self, _query: &str) -> Result<Vec<String>, GeocodeError> {
        Ok(Vec::new())
    }
}
