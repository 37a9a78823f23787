//! Base trait for intents.

/// Marker trait for intent values.
///
/// An intent is a fact, not a command: a key the user pressed, a fetch that
/// resolved, a timer that fired. The reducer decides what the fact means for
/// the state.
pub trait Intent: Send + 'static {}
