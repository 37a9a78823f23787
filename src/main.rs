use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use userdeck::config::{Config, ConfigStore};
use userdeck::data::{sample_users, FixtureRepository};
use userdeck::logging;
use userdeck::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "userdeck", version, about = "Terminal user directory sample")]
struct Cli {
    /// Config file path (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated fetch latency in milliseconds.
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Make every fetch fail (demonstrates the error state).
    #[arg(long)]
    always_fail: bool,

    /// Fail every n-th fetch.
    #[arg(long)]
    fail_every: Option<u64>,

    /// Use an empty directory (demonstrates the empty state).
    #[arg(long)]
    empty: bool,

    /// Log file path; overrides the config value. The screen owns stdout,
    /// so logs go to a file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config is loaded before tracing so the log path can come from it;
    // load failures go to stderr through anyhow.
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    apply_overrides(&mut config, &cli);
    config.validate().context("config rejected")?;

    let log_path = config
        .log_file
        .clone()
        .unwrap_or_else(logging::default_log_path);
    logging::init_tracing(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let store = ConfigStore::new(config, config_path);
    let config = store.get();

    let seed = config.users.clone().unwrap_or_else(sample_users);
    tracing::info!(
        users = seed.len(),
        latency_ms = config.source.latency_ms,
        failure_mode = ?config.source.failure_mode(),
        "starting userdeck"
    );

    let repository = Arc::new(FixtureRepository::new(
        seed,
        config.source.latency(),
        config.source.failure_mode(),
    ));

    runtime::run(store, repository).context("ui loop failed")?;
    Ok(())
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ms) = cli.latency_ms {
        config.source.latency_ms = ms;
    }
    if cli.always_fail {
        config.source.always_fail = true;
    }
    if let Some(n) = cli.fail_every {
        config.source.fail_every = n;
    }
    if cli.empty {
        config.users = Some(Vec::new());
    }
    if let Some(path) = &cli.log_file {
        config.log_file = Some(path.clone());
    }
}
