use std::fs;
use std::time::Duration;

use tempfile::TempDir;
use userdeck::config::{Config, ConfigError, ConfigStore};
use userdeck::data::FailureMode;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let config = Config::load_from(&dir.path().join("nope.toml")).expect("load");
    assert_eq!(config.source.latency_ms, 1000);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(config.users.is_none());
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
            [source]
            latency_ms = 50
        "#,
    );
    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.source.latency(), Duration::from_millis(50));
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn failure_knobs_map_to_modes() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
            [source]
            fail_every = 3
        "#,
    );
    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.source.failure_mode(), FailureMode::EveryNth(3));

    let path = write_config(
        &dir,
        r#"
            [source]
            always_fail = true
            fail_every = 3
        "#,
    );
    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.source.failure_mode(), FailureMode::Always);
}

#[test]
fn log_file_is_parsed_and_defaults_to_none() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, r#"log_file = "/var/tmp/userdeck.log""#);
    let config = Config::load_from(&path).expect("load");
    assert_eq!(
        config.log_file.as_deref(),
        Some(std::path::Path::new("/var/tmp/userdeck.log"))
    );

    let path = write_config(&dir, "");
    let config = Config::load_from(&path).expect("load");
    assert!(config.log_file.is_none());
}

#[test]
fn fixture_users_are_parsed() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
            [[users]]
            id = 1
            name = "A"
            email = "a@x.com"

            [[users]]
            id = 2
            name = "B"
            email = "b@x.com"
        "#,
    );
    let config = Config::load_from(&path).expect("load");
    let users = config.users.expect("users");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "A");
}

#[test]
fn duplicate_user_ids_are_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
            [[users]]
            id = 1
            name = "A"
            email = "a@x.com"

            [[users]]
            id = 1
            name = "B"
            email = "b@x.com"
        "#,
    );
    let err = Config::load_from(&path).expect_err("should fail validation");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn zero_tick_rate_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
            [ui]
            tick_rate_ms = 0
        "#,
    );
    let err = Config::load_from(&path).expect_err("should fail validation");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "latency_ms = ");
    let err = Config::load_from(&path).expect_err("should fail to parse");
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn store_reload_keeps_old_config_on_failure() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
            [source]
            latency_ms = 50
        "#,
    );
    let store = ConfigStore::new(Config::load_from(&path).expect("load"), path.clone());

    fs::write(&path, "latency_ms = ").expect("overwrite");
    store.reload().expect_err("reload should fail");
    assert_eq!(store.get().source.latency_ms, 50);

    fs::write(&path, "[source]\nlatency_ms = 75\n").expect("overwrite");
    store.reload().expect("reload should succeed");
    assert_eq!(store.get().source.latency_ms, 75);
}

#[test]
fn store_clones_share_the_same_config() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[source]\nlatency_ms = 50\n");
    let store = ConfigStore::new(Config::load_from(&path).expect("load"), path.clone());

    // The UI layer holds a clone; a reload through either handle is visible
    // to both.
    let ui_handle = store.clone();
    fs::write(&path, "[source]\nlatency_ms = 75\n").expect("overwrite");
    store.reload().expect("reload should succeed");
    assert_eq!(ui_handle.get().source.latency_ms, 75);
}
