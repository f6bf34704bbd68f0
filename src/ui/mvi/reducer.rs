//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place where dialog state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Pure function: `(State, Intent) -> State`. Side effects (starting
    /// lookups, mutating the list) are done by the caller around dispatch.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
