//! Reducer for the "Add Shopping Item" dialog.

use crate::ui::mvi::Reducer;

use super::intent::AddDialogIntent;
use super::state::{AddDialogState, AddField, LookupStatus};

pub struct AddDialogReducer;

impl Reducer for AddDialogReducer {
    type State = AddDialogState;
    type Intent = AddDialogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AddDialogIntent::Open => AddDialogState {
                visible: true,
                focused: AddField::Name,
                ..state
            },

            AddDialogIntent::Dismiss => {
                let lookup = if state.lookup.is_pending() {
                    LookupStatus::Idle
                } else {
                    state.lookup
                };
                AddDialogState {
                    visible: false,
                    lookup,
                    ..state
                }
            }

            AddDialogIntent::Input(ch) => {
                let mut state = state;
                match state.focused {
                    AddField::Name => state.name.push(ch),
                    AddField::Quantity => state.quantity.push(ch),
                    AddField::Address => {}
                }
                state
            }

            AddDialogIntent::Backspace => {
                let mut state = state;
                match state.focused {
                    AddField::Name => {
                        state.name.pop();
                    }
                    AddField::Quantity => {
                        state.quantity.pop();
                    }
                    AddField::Address => {}
                }
                state
            }

            AddDialogIntent::NextField => AddDialogState {
                focused: state.focused.next(),
                ..state
            },

            AddDialogIntent::PrevField => AddDialogState {
                focused: state.focused.prev(),
                ..state
            },

            AddDialogIntent::Rejected {
                invalid_name,
                invalid_quantity,
            } => AddDialogState {
                invalid_name,
                invalid_quantity,
                ..state
            },

            AddDialogIntent::Submitted => AddDialogState::default(),

            AddDialogIntent::LookupProgress(lookup) => AddDialogState { lookup, ..state },

            AddDialogIntent::AddressResolved(address) => AddDialogState {
                address: Some(address),
                lookup: LookupStatus::Resolved,
                ..state
            },

            AddDialogIntent::LookupFailed(message) => AddDialogState {
                lookup: LookupStatus::Failed(message),
                ..state
            },
        }
    }
}
