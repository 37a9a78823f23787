//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Folds one intent into the current state.
///
/// Reducers are the only place state transitions happen, and they must stay
/// pure: no channels, no clocks, no I/O. Side effects belong to the caller.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
