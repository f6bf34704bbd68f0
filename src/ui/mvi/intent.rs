//! Base trait for intents.

/// Marker trait for intent objects: user input (typing, confirming,
/// dismissing) or results arriving from the location collaborators.
pub trait Intent: Send + 'static {}
