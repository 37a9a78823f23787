use crate::data::User;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum UserListIntent {
    /// A fetch began. Load, refresh and retry all emit this.
    FetchStarted,
    /// The fetch resolved with a list (possibly empty).
    FetchSucceeded { users: Vec<User> },
    /// The fetch resolved with a failure. An empty message is replaced with
    /// a default before it reaches the reducer.
    FetchFailed { message: String },
    MoveUp,
    MoveDown,
}

impl Intent for UserListIntent {}
