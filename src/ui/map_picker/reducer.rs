use crate::ui::mvi::Reducer;

use super::intent::MapPickerIntent;
use super::state::{MapPickerState, MAX_SPAN, MIN_SPAN};

pub struct MapPickerReducer;

impl Reducer for MapPickerReducer {
    type State = MapPickerState;
    type Intent = MapPickerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MapPickerIntent::Open { at, span, step } => MapPickerState::Visible {
                origin: at,
                marker: at,
                span: span.clamp(MIN_SPAN, MAX_SPAN),
                step,
            },
            MapPickerIntent::Close => MapPickerState::Hidden,
            other => {
                let MapPickerState::Visible {
                    origin,
                    marker,
                    span,
                    step,
                } = state
                else {
                    return state;
                };
                let (marker, span) = match other {
                    MapPickerIntent::MoveUp => (marker.offset(step, 0.0), span),
                    MapPickerIntent::MoveDown => (marker.offset(-step, 0.0), span),
                    MapPickerIntent::MoveLeft => (marker.offset(0.0, -step), span),
                    MapPickerIntent::MoveRight => (marker.offset(0.0, step), span),
                    MapPickerIntent::ZoomIn => (marker, (span / 2.0).max(MIN_SPAN)),
                    MapPickerIntent::ZoomOut => (marker, (span * 2.0).min(MAX_SPAN)),
                    MapPickerIntent::Reset => (origin, span),
                    MapPickerIntent::Open { .. } | MapPickerIntent::Close => (marker, span),
                };
                MapPickerState::Visible {
                    origin,
                    marker,
                    span,
                    step,
                }
            }
        }
    }
}
