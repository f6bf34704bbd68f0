/// A coordinate pair from the location source or the map picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationData {
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationData {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Reverse-geocoding query string: `"<lat>, <lon>"`.
    pub fn query(&self) -> String {
        format!("{}, {}", self.latitude, self.longitude)
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Move by the given deltas. Latitude is clamped at the poles, longitude
    /// wraps around the antimeridian.
    pub fn offset(&self, d_lat: f64, d_lon: f64) -> Self {
        let latitude = (self.latitude + d_lat).clamp(-90.0, 90.0);
        let mut longitude = self.longitude + d_lon;
        if longitude > 180.0 {
            longitude -= 360.0;
        } else if longitude < -180.0 {
            longitude += 360.0;
        }
        Self {
            latitude,
            longitude,
        }
    }
}
