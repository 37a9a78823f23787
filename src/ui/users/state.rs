use crate::data::User;
use crate::ui::mvi::UiState;

/// Everything the user list screen can show. Exactly one variant is current
/// at any time; every fetch attempt resolves to exactly one of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UserListState {
    /// A fetch is in flight and no authoritative result has arrived.
    #[default]
    Loading,
    /// The fetch succeeded but the directory has no entries.
    Empty,
    /// The fetch succeeded with at least one entry.
    Loaded { users: Vec<User>, selected: usize },
    /// The fetch failed; `message` is never empty.
    Failed { message: String },
}

impl UiState for UserListState {}

impl UserListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn users(&self) -> &[User] {
        match self {
            Self::Loaded { users, .. } => users,
            _ => &[],
        }
    }

    pub fn selected(&self) -> Option<usize> {
        match self {
            Self::Loaded { selected, .. } => Some(*selected),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Short label for the header badge.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Empty => "empty",
            Self::Loaded { .. } => "ready",
            Self::Failed { .. } => "error",
        }
    }
}
