//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

/// Removes the variable on creation and again on drop.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

// ===== File loading =====

#[test]
fn default_config_path_ends_with_app_dir() {
    if let Some(path) = default_config_path() {
        assert!(
            path.ends_with("kanban-dnd/config.toml"),
            "unexpected default path: {}",
            path.display()
        );
    }
}

#[test]
fn default_log_path_ends_with_log_file() {
    assert!(default_log_path().ends_with("kanban-dnd.log"));
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    assert_eq!(
        load_config_file("/nonexistent/path/to/kanban-dnd.toml"),
        Ok(None)
    );
}

#[test]
fn load_config_file_parses_every_key() {
    let path = write_temp(
        "kanban_dnd_test_full.toml",
        r#"
board_file = "/boards/team.json"
items_per_column = 4
log_file_path = "/tmp/board.log"
"#,
    );

    let result = load_config_file(&path);
    fs::remove_file(&path).ok();

    assert_eq!(
        result,
        Ok(Some(ConfigFile {
            board_file: Some(PathBuf::from("/boards/team.json")),
            items_per_column: Some(4),
            log_file_path: Some(PathBuf::from("/tmp/board.log")),
        }))
    );
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let path = write_temp("kanban_dnd_test_invalid.toml", "this is not valid TOML ][}{");

    let result = load_config_file(&path);
    fs::remove_file(&path).ok();

    match result {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"dark\"");
    assert!(result.is_err(), "unknown keys must be rejected");
}

// ===== Merging =====

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_keeps_defaults_for_unset_keys() {
    let resolved = merge_config(Some(ConfigFile {
        items_per_column: Some(3),
        ..ConfigFile::default()
    }));

    assert_eq!(resolved.items_per_column, 3);
    assert_eq!(resolved.board_file, None);
    assert_eq!(resolved.log_file_path, default_log_path());
}

#[test]
fn resolved_config_default_uses_sample_board() {
    let config = ResolvedConfig::default();
    assert_eq!(config.board_file, None);
    assert_eq!(config.items_per_column, DEFAULT_ITEMS_PER_COLUMN);
}

// ===== Environment =====

#[test]
#[serial(kanban_dnd_board)]
fn apply_env_overrides_sets_board_file() {
    let _guard = EnvGuard::new(BOARD_ENV_VAR);
    env::set_var(BOARD_ENV_VAR, "/boards/env.json");

    let config = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(config.board_file, Some(PathBuf::from("/boards/env.json")));
}

#[test]
#[serial(kanban_dnd_board)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(BOARD_ENV_VAR);

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(kanban_dnd_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let explicit = write_temp("kanban_dnd_test_explicit.toml", "items_per_column = 1");
    let from_env = write_temp("kanban_dnd_test_env_loser.toml", "items_per_column = 2");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let result = load_config_with_precedence(Some(explicit.clone()));
    fs::remove_file(&explicit).ok();
    fs::remove_file(&from_env).ok();

    let config = result.expect("valid").expect("file exists");
    assert_eq!(config.items_per_column, Some(1));
}

#[test]
#[serial(kanban_dnd_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let from_env = write_temp("kanban_dnd_test_env.toml", "items_per_column = 2");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let result = load_config_with_precedence(None);
    fs::remove_file(&from_env).ok();

    let config = result.expect("valid").expect("file exists");
    assert_eq!(config.items_per_column, Some(2));
}

// ===== CLI =====

#[test]
fn apply_cli_overrides_wins_over_file_and_env() {
    let from_file = merge_config(Some(ConfigFile {
        board_file: Some(PathBuf::from("/boards/file.json")),
        items_per_column: Some(7),
        log_file_path: None,
    }));

    let config = apply_cli_overrides(from_file, Some(PathBuf::from("/boards/cli.json")), Some(2));

    assert_eq!(config.board_file, Some(PathBuf::from("/boards/cli.json")));
    assert_eq!(config.items_per_column, 2);
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None, None), base);
}
