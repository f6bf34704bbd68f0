//! Edit buffer for the item in edit mode.
//!
//! The store only learns the new values on save; until then they live here.

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    Name,
    Quantity,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorState {
    #[default]
    Inactive,
    Editing {
        id: u32,
        name: String,
        quantity: String,
        focused: EditField,
    },
}

impl UiState for EditorState {}

impl EditorState {
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Inactive)
    }

    /// Id of the item being edited.
    pub fn target(&self) -> Option<u32> {
        match self {
            Self::Editing { id, .. } => Some(*id),
            Self::Inactive => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_by_default() {
        assert!(!EditorState::default().is_active());
        assert_eq!(EditorState::default().target(), None);
    }

    #[test]
    fn target_of_editing() {
        let state = EditorState::Editing {
            id: 3,
            name: "Milk".into(),
            quantity: "1.0".into(),
            focused: EditField::Name,
        };
        assert!(state.is_active());
        assert_eq!(state.target(), Some(3));
    }
}
