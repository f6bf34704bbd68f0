//! Sources of the "current" location.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::data::LocationData;
use super::error::LocationError;

/// Provides a single location fix on request.
#[async_trait]
pub trait LocationSource: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    async fn current_location(&self) -> Result<LocationData, LocationError>;
}

/// Always reports the configured coordinates.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation {
    location: LocationData,
}

impl FixedLocation {
    pub fn new(location: LocationData) -> Self {
        Self { location }
    }
}

#[async_trait]
impl LocationSource for FixedLocation {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn current_location(&self) -> Result<LocationData, LocationError> {
        Ok(self.location)
    }
}

/// Approximate fix from an IP geolocation endpoint.
///
/// Accepts both `{"lat": .., "lon": ..}` and
/// `{"latitude": .., "longitude": ..}` response shapes.
pub struct IpLocation {
    client: Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct IpLocationResponse {
    #[serde(alias = "latitude")]
    lat: f64,
    #[serde(alias = "longitude")]
    lon: f64,
}

impl IpLocation {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl LocationSource for IpLocation {
    fn name(&self) -> &'static str {
        "ip"
    }

    async fn current_location(&self) -> Result<LocationData, LocationError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LocationError::Status {
                status: status.as_u16(),
            });
        }

        let body: IpLocationResponse = response.json().await?;
        let location = LocationData::new(body.lat, body.lon);
        if !location.is_valid() {
            return Err(LocationError::InvalidCoordinates {
                latitude: body.lat,
                longitude: body.lon,
            });
        }
        tracing::debug!(latitude = body.lat, longitude = body.lon, "ip location fix");
        Ok(location)
    }
}
