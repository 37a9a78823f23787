use crate::data::{FetchError, User};
use crate::ui::mvi::Reducer;
use crate::ui::users::{UserListIntent, UserListReducer, UserListState};
use crate::ui::worker::{FetchCommand, FetchCommandSender};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The application shell: owns the screen state, routes intents through the
/// reducer, and hands fetch requests to the worker.
///
/// Fetches are identified by a generation counter. `load`, `refresh` and
/// `retry` all bump it, so only the most recently requested fetch may change
/// the state; an answer from an earlier generation is logged and dropped.
pub struct App {
    should_quit: bool,
    tick: u64,
    user_list: UserListState,
    fetch_generation: u64,
    fetch_tx: Option<FetchCommandSender>,
    last_dispatch_error: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            tick: 0,
            user_list: UserListState::default(),
            fetch_generation: 0,
            fetch_tx: None,
            last_dispatch_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Monotonic tick counter, used to animate the loading indicator.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Ratatui re-measures on every draw; the event only needs to trigger
    /// the next frame.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        tracing::trace!(cols, rows, "terminal resized");
    }

    pub fn set_fetch_sender(&mut self, sender: FetchCommandSender) {
        self.fetch_tx = Some(sender);
    }

    pub fn user_list(&self) -> &UserListState {
        &self.user_list
    }

    pub fn last_dispatch_error(&self) -> Option<&str> {
        self.last_dispatch_error.as_deref()
    }

    /// Initial fetch, kicked off once at startup.
    pub fn load(&mut self) {
        self.start_fetch();
    }

    /// User-requested reload of the directory.
    pub fn refresh(&mut self) {
        self.start_fetch();
    }

    /// Re-run the fetch after a failure. Identical to a fresh load: no
    /// backoff, no attempt limit.
    pub fn retry(&mut self) {
        self.start_fetch();
    }

    /// A fetch resolved. Stale generations cause no state transition.
    pub fn on_fetch_result(&mut self, generation: u64, result: Result<Vec<User>, FetchError>) {
        if generation != self.fetch_generation {
            tracing::debug!(
                generation,
                current = self.fetch_generation,
                "dropping stale fetch result"
            );
            return;
        }
        let intent = match result {
            Ok(users) => UserListIntent::FetchSucceeded { users },
            Err(err) => UserListIntent::FetchFailed {
                message: err.message().to_string(),
            },
        };
        self.dispatch_user_list(intent);
    }

    pub fn move_selection_up(&mut self) {
        self.dispatch_user_list(UserListIntent::MoveUp);
    }

    pub fn move_selection_down(&mut self) {
        self.dispatch_user_list(UserListIntent::MoveDown);
    }

    /// Dispatch an intent to the user list reducer.
    fn dispatch_user_list(&mut self, intent: UserListIntent) {
        dispatch_mvi!(self, user_list, UserListReducer, intent);
    }

    fn start_fetch(&mut self) {
        self.fetch_generation += 1;
        self.dispatch_user_list(UserListIntent::FetchStarted);

        let Some(sender) = &self.fetch_tx else {
            self.last_dispatch_error = Some("fetch worker not attached".to_string());
            return;
        };
        let command = FetchCommand {
            generation: self.fetch_generation,
        };
        match sender.try_send(command) {
            Ok(()) => {
                self.last_dispatch_error = None;
            }
            Err(err) => {
                // The state stays Loading; the error line in the footer
                // tells the user the request never left.
                self.last_dispatch_error = Some(format!("fetch dispatch failed: {}", err));
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
