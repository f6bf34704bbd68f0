use thiserror::Error;

/// Errors from a [`super::LocationSource`].
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Location service returned HTTP {status}")]
    Status { status: u16 },

    #[error("Location service returned invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
}

/// Errors from an [`super::AddressResolver`].
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Invalid geocoding URL: {0}")]
    InvalidUrl(String),

    #[error("Geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Geocoding service returned HTTP {status}")]
    Status { status: u16 },

    #[error("Failed to parse geocoding response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Geocoding API error {status}: {message}")]
    Api { status: String, message: String },
}
