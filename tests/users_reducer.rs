use userdeck::data::{User, DEFAULT_FETCH_ERROR};
use userdeck::ui::mvi::Reducer;
use userdeck::ui::users::{UserListIntent, UserListReducer, UserListState};

fn two_users() -> Vec<User> {
    vec![
        User::new(1, "A", "a@x.com"),
        User::new(2, "B", "b@x.com"),
    ]
}

fn loaded(users: Vec<User>, selected: usize) -> UserListState {
    UserListState::Loaded { users, selected }
}

// -- fetch outcome mapping ------------------------------------------------

#[test]
fn fetch_started_enters_loading_from_any_state() {
    for start in [
        UserListState::Empty,
        loaded(two_users(), 1),
        UserListState::Failed {
            message: "boom".to_string(),
        },
    ] {
        let state = UserListReducer::reduce(start, UserListIntent::FetchStarted);
        assert!(state.is_loading());
    }
}

#[test]
fn non_empty_success_is_loaded_with_list_unchanged() {
    let state = UserListReducer::reduce(
        UserListState::Loading,
        UserListIntent::FetchSucceeded { users: two_users() },
    );
    assert_eq!(state.users(), &two_users()[..]);
    assert_eq!(state.selected(), Some(0));
}

#[test]
fn success_preserves_order() {
    let state = UserListReducer::reduce(
        UserListState::Loading,
        UserListIntent::FetchSucceeded { users: two_users() },
    );
    let ids: Vec<u64> = state.users().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn empty_success_is_exactly_empty() {
    let state = UserListReducer::reduce(
        UserListState::Loading,
        UserListIntent::FetchSucceeded { users: Vec::new() },
    );
    assert_eq!(state, UserListState::Empty);
}

#[test]
fn failure_carries_the_message() {
    let state = UserListReducer::reduce(
        UserListState::Loading,
        UserListIntent::FetchFailed {
            message: "network down".to_string(),
        },
    );
    assert_eq!(state.error_message(), Some("network down"));
}

#[test]
fn failure_message_is_never_empty() {
    let state = UserListReducer::reduce(
        UserListState::Loading,
        UserListIntent::FetchFailed {
            message: String::new(),
        },
    );
    assert_eq!(state.error_message(), Some(DEFAULT_FETCH_ERROR));
}

#[test]
fn failure_overrides_a_previously_loaded_list() {
    let state = UserListReducer::reduce(
        loaded(two_users(), 1),
        UserListIntent::FetchFailed {
            message: "network down".to_string(),
        },
    );
    assert_eq!(state.error_message(), Some("network down"));
    assert!(state.users().is_empty());
}

// -- retry ----------------------------------------------------------------

#[test]
fn retry_can_settle_in_any_variant() {
    let failed = UserListState::Failed {
        message: "boom".to_string(),
    };

    let retried = UserListReducer::reduce(failed, UserListIntent::FetchStarted);
    assert!(retried.is_loading());

    let success = UserListReducer::reduce(
        retried.clone(),
        UserListIntent::FetchSucceeded { users: two_users() },
    );
    assert_eq!(success.users().len(), 2);

    let empty =
        UserListReducer::reduce(retried.clone(), UserListIntent::FetchSucceeded { users: vec![] });
    assert_eq!(empty, UserListState::Empty);

    let failed_again = UserListReducer::reduce(
        retried,
        UserListIntent::FetchFailed {
            message: "still down".to_string(),
        },
    );
    assert_eq!(failed_again.error_message(), Some("still down"));
}

// -- selection --------------------------------------------------------------

#[test]
fn selection_wraps_both_ways() {
    let state = UserListReducer::reduce(loaded(two_users(), 0), UserListIntent::MoveUp);
    assert_eq!(state.selected(), Some(1));
    let state = UserListReducer::reduce(state, UserListIntent::MoveDown);
    assert_eq!(state.selected(), Some(0));
}

#[test]
fn selection_is_a_noop_outside_loaded() {
    for start in [
        UserListState::Loading,
        UserListState::Empty,
        UserListState::Failed {
            message: "boom".to_string(),
        },
    ] {
        let state = UserListReducer::reduce(start.clone(), UserListIntent::MoveUp);
        assert_eq!(state, start);
        let state = UserListReducer::reduce(start.clone(), UserListIntent::MoveDown);
        assert_eq!(state, start);
    }
}
