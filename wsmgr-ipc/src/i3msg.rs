//! `i3-msg` / `swaymsg` transport.

use serde::Deserialize;
use tracing::{debug, trace};
use wsmgr_core::command_stream::{capture_command, CapturedOutput};
use wsmgr_core::error::{Result, WsError};

use crate::{WindowManager, WmCommand, Workspace};

/// Talks to the window manager by running its message tool.
#[derive(Debug, Clone)]
pub struct I3Msg {
    binary: String,
}

/// One element of the reply array to a `RUN_COMMAND` message.
#[derive(Debug, Deserialize)]
struct CommandReply {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

impl I3Msg {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn invoke(&self, args: &[&str]) -> Result<CapturedOutput> {
        capture_command(&self.binary, args).map_err(|e| {
            WsError::ExternalUnavailable(format!("could not run `{}`: {}", self.binary, e))
        })
    }
}

impl Default for I3Msg {
    fn default() -> Self {
        Self::new("i3-msg")
    }
}

/// Decode the reply to `get_workspaces`.
pub(crate) fn parse_workspaces(binary: &str, output: &CapturedOutput) -> Result<Vec<Workspace>> {
    if !output.success() {
        return Err(WsError::ExternalUnavailable(format!(
            "`{} -t get_workspaces` exited with status {:?}: {}",
            binary,
            output.status,
            output.stderr.trim()
        )));
    }
    serde_json::from_str(output.stdout.trim()).map_err(|e| {
        WsError::ExternalUnavailable(format!("unexpected get_workspaces reply from `{binary}`: {e}"))
    })
}

/// Decode the reply to a command.
///
/// The message tools exit non-zero when a command fails but still print the
/// reply array, so the array decides; no parseable reply means the window
/// manager did not answer at all.
pub(crate) fn interpret_reply(binary: &str, command: &str, output: &CapturedOutput) -> Result<()> {
    let replies: Vec<CommandReply> = serde_json::from_str(output.stdout.trim()).map_err(|_| {
        WsError::ExternalUnavailable(format!(
            "`{}` gave no command reply (status {:?}): {}",
            binary,
            output.status,
            output.stderr.trim()
        ))
    })?;

    match replies.into_iter().find(|reply| !reply.success) {
        Some(failed) => Err(WsError::rejected(
            command,
            failed
                .error
                .unwrap_or_else(|| "command failed without an error message".to_string()),
        )),
        None => Ok(()),
    }
}

impl WindowManager for I3Msg {
    fn get_workspaces(&self) -> Result<Vec<Workspace>> {
        let output = self.invoke(&["-t", "get_workspaces"])?;
        let workspaces = parse_workspaces(&self.binary, &output)?;
        trace!(count = workspaces.len(), "workspaces fetched");
        Ok(workspaces)
    }

    fn run_command(&self, command: &WmCommand) -> Result<()> {
        let text = command.to_string();
        debug!(command = %text, "running window manager command");
        let output = self.invoke(&[text.as_str()])?;
        interpret_reply(&self.binary, &text, &output)
    }
}
