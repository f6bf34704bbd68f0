//! Intents for the "Add Shopping Item" dialog.

use super::state::LookupStatus;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AddDialogIntent {
    /// Show the dialog. A draft left by a previous dismissal is kept.
    Open,
    /// Hide the dialog, keeping the draft. Any location flow is abandoned.
    Dismiss,
    Input(char),
    Backspace,
    NextField,
    PrevField,
    /// The store rejected the draft.
    Rejected {
        invalid_name: bool,
        invalid_quantity: bool,
    },
    /// The store accepted the draft. Clears everything.
    Submitted,
    /// Location flow progressed (locating, picking, resolving).
    LookupProgress(LookupStatus),
    AddressResolved(String),
    LookupFailed(String),
}

impl Intent for AddDialogIntent {}
