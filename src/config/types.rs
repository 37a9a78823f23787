use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::data::{FailureMode, User};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub source: SourceConfig,
    /// Log file path; when absent the platform data dir is used.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Optional fixture override for the built-in sample directory.
    /// An explicitly empty list is honored (it demonstrates the empty state).
    #[serde(default)]
    pub users: Option<Vec<User>>,
}

/// Screen settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick interval in milliseconds; drives the loading animation.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Settings for the simulated data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Artificial latency per fetch in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Fail every fetch. Takes precedence over `fail_every`.
    #[serde(default)]
    pub always_fail: bool,
    /// Fail every n-th fetch; 0 disables failure injection.
    #[serde(default)]
    pub fail_every: u64,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_latency_ms() -> u64 {
    1000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            always_fail: false,
            fail_every: 0,
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl SourceConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn failure_mode(&self) -> FailureMode {
        if self.always_fail {
            return FailureMode::Always;
        }
        if self.fail_every > 0 {
            return FailureMode::EveryNth(self.fail_every);
        }
        FailureMode::Never
    }
}
