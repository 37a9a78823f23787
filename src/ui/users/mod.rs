//! The user list feature (MVI pattern).

mod intent;
mod reducer;
mod state;

pub use intent::UserListIntent;
pub use reducer::UserListReducer;
pub use state::UserListState;
