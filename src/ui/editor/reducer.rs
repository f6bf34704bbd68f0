//! Reducer for the in-row item editor.

use crate::ui::mvi::Reducer;

use super::intent::EditorIntent;
use super::state::{EditField, EditorState};

pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorState;
    type Intent = EditorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::Open { id, name, quantity } => EditorState::Editing {
                id,
                name,
                quantity,
                focused: EditField::Name,
            },

            EditorIntent::Input(ch) => match state {
                EditorState::Editing {
                    id,
                    mut name,
                    mut quantity,
                    focused,
                } => {
                    match focused {
                        EditField::Name => name.push(ch),
                        EditField::Quantity => quantity.push(ch),
                    }
                    EditorState::Editing {
                        id,
                        name,
                        quantity,
                        focused,
                    }
                }
                other => other,
            },

            EditorIntent::Backspace => match state {
                EditorState::Editing {
                    id,
                    mut name,
                    mut quantity,
                    focused,
                } => {
                    match focused {
                        EditField::Name => {
                            name.pop();
                        }
                        EditField::Quantity => {
                            quantity.pop();
                        }
                    }
                    EditorState::Editing {
                        id,
                        name,
                        quantity,
                        focused,
                    }
                }
                other => other,
            },

            EditorIntent::ToggleField => match state {
                EditorState::Editing {
                    id,
                    name,
                    quantity,
                    focused,
                } => EditorState::Editing {
                    id,
                    name,
                    quantity,
                    focused: match focused {
                        EditField::Name => EditField::Quantity,
                        EditField::Quantity => EditField::Name,
                    },
                },
                other => other,
            },

            EditorIntent::Close => EditorState::Inactive,
        }
    }
}
