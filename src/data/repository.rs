use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use thiserror::Error;

use crate::data::user::User;

/// Shown when a failure carries no description of its own.
pub const DEFAULT_FETCH_ERROR: &str = "Something went wrong";

/// The single error kind the data layer produces: the fetch failed, with a
/// human-readable message for the error panel.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            return Self {
                message: DEFAULT_FETCH_ERROR.to_string(),
            };
        }
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The one outbound operation the UI needs: all users or a failure.
/// The fetch is atomic — there is no partial-result model.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<User>, FetchError>;
}

/// Deterministic failure injection for demonstrating the error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    #[default]
    Never,
    Always,
    /// Every n-th fetch fails (1-based: `EveryNth(3)` fails calls 3, 6, ...).
    EveryNth(u64),
}

/// In-memory repository backed by a fixed seed list.
///
/// Each call sleeps for the configured latency before answering, so the UI's
/// loading state is actually visible. On success the most recent list is kept
/// in a cache owned by this object; the cache is replaced atomically and is
/// never consulted to answer `fetch_all`, so a failure is always surfaced.
pub struct FixtureRepository {
    seed: Vec<User>,
    latency: Duration,
    failure_mode: FailureMode,
    calls: AtomicU64,
    cache: RwLock<Option<Arc<Vec<User>>>>,
}

impl FixtureRepository {
    pub fn new(seed: Vec<User>, latency: Duration, failure_mode: FailureMode) -> Self {
        Self {
            seed,
            latency,
            failure_mode,
            calls: AtomicU64::new(0),
            cache: RwLock::new(None),
        }
    }

    /// The built-in sample directory.
    pub fn with_sample_data(latency: Duration) -> Self {
        Self::new(sample_users(), latency, FailureMode::Never)
    }

    /// Most recently fetched list, if any fetch has succeeded yet.
    pub fn cached(&self) -> Option<Arc<Vec<User>>> {
        self.cache.read().clone()
    }

    fn should_fail(&self, call: u64) -> bool {
        match self.failure_mode {
            FailureMode::Never => false,
            FailureMode::Always => true,
            FailureMode::EveryNth(n) => n > 0 && call % n == 0,
        }
    }
}

#[async_trait]
impl UserRepository for FixtureRepository {
    async fn fetch_all(&self) -> Result<Vec<User>, FetchError> {
        let call = self.calls.fetch_add(1, Ordering::Relaxed) + 1;
        tokio::time::sleep(self.latency).await;

        if self.should_fail(call) {
            tracing::debug!(call, "fixture repository injecting failure");
            return Err(FetchError::new("The user directory is unavailable"));
        }

        let users = self.seed.clone();
        *self.cache.write() = Some(Arc::new(users.clone()));
        tracing::debug!(call, count = users.len(), "fixture repository answered");
        Ok(users)
    }
}

pub fn sample_users() -> Vec<User> {
    vec![
        User::new(1, "Ada Lovelace", "ada@example.com"),
        User::new(2, "Grace Hopper", "grace@example.com"),
        User::new(3, "Alan Turing", "alan@example.com"),
        User::new(4, "Barbara Liskov", "barbara@example.com"),
        User::new(5, "Edsger Dijkstra", "edsger@example.com"),
        User::new(6, "Margaret Hamilton", "margaret@example.com"),
    ]
}
