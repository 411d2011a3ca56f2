//! Configuration file loading with precedence handling.

use crate::source::DEFAULT_ITEMS_PER_COLUMN;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "KANBAN_DND_CONFIG";

/// Environment variable naming a board file to load.
pub const BOARD_ENV_VAR: &str = "KANBAN_DND_BOARD";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// Every key is optional. Lives at `~/.config/kanban-dnd/config.toml` by
/// default:
///
/// ```toml
/// board_file = "/home/me/boards/team.json"
/// items_per_column = 6
/// log_file_path = "/tmp/kanban-dnd.log"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Board JSON to load instead of the sample board.
    #[serde(default)]
    pub board_file: Option<PathBuf>,

    /// Items per column of the sample board.
    #[serde(default)]
    pub items_per_column: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Board JSON to load; `None` means the sample board.
    pub board_file: Option<PathBuf>,
    /// Items per column of the sample board.
    pub items_per_column: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            board_file: None,
            items_per_column: DEFAULT_ITEMS_PER_COLUMN,
            log_file_path: default_log_path(),
        }
    }
}

/// `~/.local/state/kanban-dnd/kanban-dnd.log` or the platform equivalent,
/// falling back to the current directory.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("kanban-dnd").join("kanban-dnd.log"),
        None => PathBuf::from("kanban-dnd.log"),
    }
}

/// `~/.config/kanban-dnd/config.toml` or the platform equivalent.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kanban-dnd").join("config.toml"))
}

/// Load a config file.
///
/// A missing file is not an error and yields `Ok(None)`.
///
/// # Errors
///
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    let config = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    Ok(Some(config))
}

/// Locate and load the config file.
///
/// The first of these wins: `config_path` (the `--config` flag), the
/// `KANBAN_DND_CONFIG` environment variable, [`default_config_path`].
///
/// # Errors
///
/// Returns error only if the chosen file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }
    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }
    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Fill unset keys from the defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();
    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        board_file: config.board_file.or(defaults.board_file),
        items_per_column: config.items_per_column.unwrap_or(defaults.items_per_column),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply `KANBAN_DND_BOARD`.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(board) = std::env::var(BOARD_ENV_VAR) {
        config.board_file = Some(PathBuf::from(board));
    }
    config
}

/// Apply flags the user set explicitly. Highest precedence.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    board_override: Option<PathBuf>,
    items_per_column_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(board) = board_override {
        config.board_file = Some(board);
    }
    if let Some(items) = items_per_column_override {
        config.items_per_column = items;
    }
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
