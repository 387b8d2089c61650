//! User directory helpers.
//!
//! The configuration root doubles as the profile root: one subdirectory per
//! known workspace, plus the optional `config.yaml` and the autosave file.

use crate::error::{Result, WsError};
use std::path::{Path, PathBuf};

/// Environment variable overriding the configuration root.
pub const CONFIG_HOME_ENV: &str = "WSMGR_CONFIG_HOME";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "wsmgr-for-i3";

/// Get the configuration root.
///
/// Returns `$WSMGR_CONFIG_HOME` when set, otherwise
/// `~/.config/wsmgr-for-i3` (or `$XDG_CONFIG_HOME/wsmgr-for-i3`).
#[must_use = "configuration directory path should be used"]
pub fn config_root() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or_else(|| WsError::Config("Could not determine user config directory".into()))
}

/// Path of the optional YAML settings file inside `root`.
pub fn config_file_path(root: &Path) -> PathBuf {
    root.join("config.yaml")
}

/// Get the state directory used for log files.
///
/// Returns:
/// - Linux: `~/.local/state/wsmgr` or `$XDG_STATE_HOME/wsmgr`
/// - elsewhere: the platform data directory joined with `wsmgr`
#[must_use = "state directory path should be used"]
pub fn state_dir() -> Result<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join("wsmgr"))
        .ok_or_else(|| WsError::Config("Could not determine user state directory".into()))
}

/// Default log file location, `<state dir>/wsmgr.log`.
pub fn default_log_file() -> Result<PathBuf> {
    Ok(state_dir()?.join("wsmgr.log"))
}

/// Resolve `path` against `root` unless it is already absolute.
pub fn resolve_in(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
