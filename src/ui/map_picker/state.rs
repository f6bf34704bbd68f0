use crate::location::LocationData;
use crate::ui::mvi::UiState;

pub const MIN_SPAN: f64 = 0.5;
pub const MAX_SPAN: f64 = 360.0;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum MapPickerState {
    #[default]
    Hidden,
    Visible {
        /// Fix the picker was opened with.
        origin: LocationData,
        /// Currently chosen point.
        marker: LocationData,
        /// Width of the visible window in degrees of longitude.
        span: f64,
        /// Marker movement per key press, in degrees.
        step: f64,
    },
}

impl UiState for MapPickerState {}

impl MapPickerState {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible { .. })
    }

    pub fn marker(&self) -> Option<LocationData> {
        match self {
            Self::Visible { marker, .. } => Some(*marker),
            Self::Hidden => None,
        }
    }

    /// Longitude and latitude bounds of the visible window, centered on the
    /// marker. Latitude gets half the longitude span to keep cells roughly
    /// square in a terminal.
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let Self::Visible { marker, span, .. } = self else {
            return None;
        };
        let half_x = span / 2.0;
        let half_y = span / 4.0;
        let x = [marker.longitude - half_x, marker.longitude + half_x];
        let y = [
            (marker.latitude - half_y).max(-90.0),
            (marker.latitude + half_y).min(90.0),
        ];
        Some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_has_no_bounds() {
        assert!(MapPickerState::Hidden.bounds().is_none());
        assert!(MapPickerState::Hidden.marker().is_none());
    }

    #[test]
    fn bounds_center_on_marker() {
        let at = LocationData::new(10.0, 20.0);
        let state = MapPickerState::Visible {
            origin: at,
            marker: at,
            span: 40.0,
            step: 0.5,
        };
        let (x, y) = state.bounds().unwrap();
        assert_eq!(x, [0.0, 40.0]);
        assert_eq!(y, [0.0, 20.0]);
    }

    #[test]
    fn latitude_bounds_are_clamped() {
        let at = LocationData::new(85.0, 0.0);
        let state = MapPickerState::Visible {
            origin: at,
            marker: at,
            span: 40.0,
            step: 0.5,
        };
        let (_, y) = state.bounds().unwrap();
        assert_eq!(y[1], 90.0);
    }
}
