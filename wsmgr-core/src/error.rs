use std::path::PathBuf;
use thiserror::Error;

/// Errors shared by every wsmgr crate.
///
/// `ExternalUnavailable` and `Inconsistent` are fatal: the workspace list has
/// no meaning once the window manager is gone or out of step with us.
/// Everything else is contained to the operation that raised it.
#[derive(Error, Debug)]
pub enum WsError {
    #[error("Window manager unavailable: {0}")]
    ExternalUnavailable(String),

    #[error("Window manager rejected `{command}`: {reason}")]
    RenameRejected { command: String, reason: String },

    #[error(
        "Renumbering aborted after {applied} rename(s), the window manager and the \
         local list may now disagree: {source}"
    )]
    Inconsistent {
        applied: usize,
        source: Box<WsError>,
    },

    #[error("Failed to start {}: {reason}", path.display())]
    ProfileEntrySpawnFailed { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl WsError {
    pub fn rejected(command: impl Into<String>, reason: impl Into<String>) -> Self {
        WsError::RenameRejected {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Whether the process should stop instead of carrying on.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            WsError::ExternalUnavailable(_) | WsError::Inconsistent { .. }
        )
    }
}

impl From<serde_yaml_ng::Error> for WsError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        WsError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for WsError {
    fn from(err: serde_json::Error) -> Self {
        WsError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WsError>;
