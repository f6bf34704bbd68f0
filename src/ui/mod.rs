//! Terminal UI: list view, dialogs and the event loop.

pub mod add_dialog;
pub mod app;
pub mod editor;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod list_view;
pub mod map_picker;
pub mod mvi;
pub mod permission;
pub mod popup;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use app::App;
pub use events::{AppEvent, EventHandler};
pub use runtime::run;
