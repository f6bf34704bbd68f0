use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::location::{LocationData, PermissionStatus};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Reverse geocoding service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL of the Google-compatible geocoding API.
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,
    /// API key. Without one, address lookups always yield "No Address".
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
}

/// Where location fixes come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSourceKind {
    /// Use the configured latitude/longitude.
    #[default]
    Fixed,
    /// Ask an IP geolocation endpoint.
    Ip,
}

/// Initial permission state for the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionSetting {
    /// Prompt on first use.
    #[default]
    Ask,
    Granted,
    Denied,
}

impl PermissionSetting {
    pub fn initial_status(self) -> PermissionStatus {
        match self {
            PermissionSetting::Ask => PermissionStatus::NotDetermined,
            PermissionSetting::Granted => PermissionStatus::Granted,
            PermissionSetting::Denied => PermissionStatus::DeniedPermanently,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default)]
    pub source: LocationSourceKind,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    /// Endpoint for `source = "ip"`.
    #[serde(default = "default_ip_lookup_url")]
    pub ip_lookup_url: String,
    #[serde(default)]
    pub permission: PermissionSetting,
}

impl LocationConfig {
    pub fn fixed_location(&self) -> LocationData {
        LocationData::new(self.latitude, self.longitude)
    }
}

/// Map picker behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Marker movement per arrow key press, in degrees (default: 0.5).
    #[serde(default = "default_step_degrees")]
    pub step_degrees: f64,
    /// Initial visible longitude span, in degrees (default: 40).
    #[serde(default = "default_zoom_span_degrees")]
    pub zoom_span_degrees: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to the platform data directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_geocoding_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

fn default_timeout_seconds() -> u32 {
    10
}

fn default_ip_lookup_url() -> String {
    "http://ip-api.com/json".to_string()
}

fn default_step_degrees() -> f64 {
    0.5
}

fn default_zoom_span_degrees() -> f64 {
    40.0
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            api_key: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            source: LocationSourceKind::default(),
            latitude: 0.0,
            longitude: 0.0,
            ip_lookup_url: default_ip_lookup_url(),
            permission: PermissionSetting::default(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            step_degrees: default_step_degrees(),
            zoom_span_degrees: default_zoom_span_degrees(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
