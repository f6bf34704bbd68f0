mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_add_dialog;
pub use intent::AddDialogIntent;
pub use reducer::AddDialogReducer;
pub use state::{AddDialogState, AddField, LookupStatus};
