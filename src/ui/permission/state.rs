use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PermissionPromptState {
    #[default]
    Hidden,
    Visible {
        rationale: bool,
        allow_selected: bool,
    },
}

impl UiState for PermissionPromptState {}

impl PermissionPromptState {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible { .. })
    }

    /// Choice under the cursor, if the prompt is open.
    pub fn allow_selected(&self) -> Option<bool> {
        match self {
            Self::Visible { allow_selected, .. } => Some(*allow_selected),
            Self::Hidden => None,
        }
    }
}
