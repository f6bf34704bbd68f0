//! State for the "Add Shopping Item" dialog.

use crate::ui::mvi::UiState;

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddField {
    #[default]
    Name,
    Quantity,
    /// The "Address" button that starts the location flow.
    Address,
}

impl AddField {
    pub fn next(self) -> Self {
        match self {
            AddField::Name => AddField::Quantity,
            AddField::Quantity => AddField::Address,
            AddField::Address => AddField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            AddField::Name => AddField::Address,
            AddField::Quantity => AddField::Name,
            AddField::Address => AddField::Quantity,
        }
    }
}

/// Progress of the optional location flow for the draft.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LookupStatus {
    #[default]
    Idle,
    /// Waiting for a location fix.
    Locating,
    /// Map picker is open.
    Picking,
    /// Waiting for the address resolver.
    Resolving,
    Resolved,
    Failed(String),
}

impl LookupStatus {
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            LookupStatus::Locating | LookupStatus::Picking | LookupStatus::Resolving
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddDialogState {
    pub visible: bool,
    pub name: String,
    pub quantity: String,
    pub focused: AddField,
    pub invalid_name: bool,
    pub invalid_quantity: bool,
    /// Address attached by the location flow.
    pub address: Option<String>,
    pub lookup: LookupStatus,
}

impl UiState for AddDialogState {}

impl AddDialogState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
