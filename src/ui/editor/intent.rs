//! Intents for the in-row item editor.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Start editing with the item's current values.
    Open {
        id: u32,
        name: String,
        quantity: String,
    },
    Input(char),
    Backspace,
    ToggleField,
    /// Edit saved or item gone.
    Close,
}

impl Intent for EditorIntent {}
