use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PermissionIntent {
    /// Ask for location access. `rationale` is set after a previous denial.
    Show { rationale: bool },
    ToggleChoice,
    Hide,
}

impl Intent for PermissionIntent {}
