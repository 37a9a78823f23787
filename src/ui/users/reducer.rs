use crate::data::DEFAULT_FETCH_ERROR;
use crate::ui::mvi::Reducer;
use crate::ui::users::intent::UserListIntent;
use crate::ui::users::state::UserListState;

pub struct UserListReducer;

impl Reducer for UserListReducer {
    type State = UserListState;
    type Intent = UserListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UserListIntent::FetchStarted => UserListState::Loading,
            UserListIntent::FetchSucceeded { users } => {
                if users.is_empty() {
                    return UserListState::Empty;
                }
                UserListState::Loaded { users, selected: 0 }
            }
            UserListIntent::FetchFailed { message } => {
                let message = if message.is_empty() {
                    DEFAULT_FETCH_ERROR.to_string()
                } else {
                    message
                };
                UserListState::Failed { message }
            }
            UserListIntent::MoveUp => match state {
                UserListState::Loaded { users, selected } => {
                    let selected = if selected == 0 {
                        users.len().saturating_sub(1)
                    } else {
                        selected - 1
                    };
                    UserListState::Loaded { users, selected }
                }
                other => other,
            },
            UserListIntent::MoveDown => match state {
                UserListState::Loaded { users, selected } => {
                    let selected = if selected + 1 >= users.len() {
                        0
                    } else {
                        selected + 1
                    };
                    UserListState::Loaded { users, selected }
                }
                other => other,
            },
        }
    }
}
