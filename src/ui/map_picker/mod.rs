//! Map-based location picker shown after a location fix.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_map_picker;
pub use intent::MapPickerIntent;
pub use reducer::MapPickerReducer;
pub use state::MapPickerState;
