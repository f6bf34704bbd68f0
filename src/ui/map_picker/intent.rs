use crate::location::LocationData;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum MapPickerIntent {
    /// Show the map centered on a fix.
    Open {
        at: LocationData,
        span: f64,
        step: f64,
    },
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ZoomIn,
    ZoomOut,
    /// Put the marker back on the original fix.
    Reset,
    Close,
}

impl Intent for MapPickerIntent {}
