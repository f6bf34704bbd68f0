use crate::ui::mvi::Reducer;

use super::intent::PermissionIntent;
use super::state::PermissionPromptState;

pub struct PermissionReducer;

impl Reducer for PermissionReducer {
    type State = PermissionPromptState;
    type Intent = PermissionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PermissionIntent::Show { rationale } => PermissionPromptState::Visible {
                rationale,
                allow_selected: true,
            },
            PermissionIntent::ToggleChoice => match state {
                PermissionPromptState::Visible {
                    rationale,
                    allow_selected,
                } => PermissionPromptState::Visible {
                    rationale,
                    allow_selected: !allow_selected,
                },
                PermissionPromptState::Hidden => PermissionPromptState::Hidden,
            },
            PermissionIntent::Hide => PermissionPromptState::Hidden,
        }
    }
}
