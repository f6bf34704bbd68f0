//! Base trait for dialog state.

/// Marker trait for UI state: cloneable, comparable, with a neutral
/// `Default` that `dispatch` can swap in while the reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
