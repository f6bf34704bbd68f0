//! Location permission prompt.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_permission_prompt;
pub use intent::PermissionIntent;
pub use reducer::PermissionReducer;
pub use state::PermissionPromptState;
