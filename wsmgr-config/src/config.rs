use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use wsmgr_core::error::{Result, WsError};
use wsmgr_core::user_paths;

/// Root structure of `config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WsmgrConfig {
    /// How to reach the window manager
    #[serde(default, skip_serializing_if = "IpcSettings::is_default")]
    pub ipc: IpcSettings,

    /// Workspace list behaviour
    #[serde(default, skip_serializing_if = "WorkspaceSettings::is_default")]
    pub workspaces: WorkspaceSettings,

    /// Profile directory conventions
    #[serde(default, skip_serializing_if = "ProfileSettings::is_default")]
    pub profiles: ProfileSettings,

    /// Autosave target
    #[serde(default, skip_serializing_if = "AutosaveSettings::is_default")]
    pub autosave: AutosaveSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct IpcSettings {
    /// Message tool speaking the i3 IPC protocol (`i3-msg` or `swaymsg`)
    #[serde(default = "default_ipc_binary")]
    pub binary: String,
}

impl Default for IpcSettings {
    fn default() -> Self {
        Self {
            binary: default_ipc_binary(),
        }
    }
}

impl IpcSettings {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceSettings {
    /// Label given to a workspace added without one
    #[serde(default = "default_label")]
    pub default_label: String,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            default_label: default_label(),
        }
    }
}

impl WorkspaceSettings {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProfileSettings {
    /// Entry whose contents name a bookmark folder
    #[serde(default = "default_bookmark_entry")]
    pub bookmark_entry: String,

    /// Program spawned as `<launcher> -name=<folder>` for that entry
    #[serde(default = "default_bookmark_launcher")]
    pub bookmark_launcher: String,

    /// Symlink naming the working directory for spawned entries
    #[serde(default = "default_cwd_entry")]
    pub cwd_entry: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            bookmark_entry: default_bookmark_entry(),
            bookmark_launcher: default_bookmark_launcher(),
            cwd_entry: default_cwd_entry(),
        }
    }
}

impl ProfileSettings {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AutosaveSettings {
    /// Relative to the config root unless absolute
    #[serde(default = "default_autosave_file")]
    pub file: PathBuf,
}

impl Default for AutosaveSettings {
    fn default() -> Self {
        Self {
            file: default_autosave_file(),
        }
    }
}

impl AutosaveSettings {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

fn default_ipc_binary() -> String {
    "i3-msg".to_string()
}

fn default_label() -> String {
    "unnamed".to_string()
}

fn default_bookmark_entry() -> String {
    "chrome-rewindow".to_string()
}

fn default_bookmark_launcher() -> String {
    "wsmgr-chrome-rewindow".to_string()
}

fn default_cwd_entry() -> String {
    "cwd".to_string()
}

fn default_autosave_file() -> PathBuf {
    PathBuf::from("autosave.json")
}

impl WsmgrConfig {
    /// Load configuration from `config.yaml` under `root`.
    ///
    /// A missing file yields defaults.
    pub fn load_from_root(root: &Path) -> Result<Self> {
        let path = user_paths::config_file_path(root);
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    /// Load configuration from a specific file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(&contents)
            .map_err(|e| WsError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Absolute autosave path for this configuration.
    pub fn autosave_path(&self, root: &Path) -> PathBuf {
        user_paths::resolve_in(root, &self.autosave.file)
    }
}
