//! Base trait for feature state.

/// Marker trait for state values.
///
/// A state value is a complete description of what the view should render:
/// immutable (a reducer builds a new value rather than mutating), comparable
/// so redraws can be skipped, and `Default` so `std::mem::take` works in the
/// dispatch path.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
