//! Unidirectional data flow primitives (MVI).
//!
//! Every screen feature is three pieces: an immutable state value, a set of
//! intents describing what happened, and a pure reducer that folds intents
//! into the next state. The view only ever reads the state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
