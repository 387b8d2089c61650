//! Window manager interface.
//!
//! wsmgr talks to i3 (or sway) through two operations only: query the
//! ordered workspace list, and send a textual command. [`WindowManager`] is
//! that contract; [`I3Msg`] implements it by running `i3-msg`/`swaymsg`.

// Standard library
use std::fmt;

// External crates
use serde::{Deserialize, Serialize};
use wsmgr_core::error::Result;

pub mod i3msg;

// When the `test-helpers` feature is enabled, include the mock window manager.
#[cfg(any(test, feature = "test-helpers"))]
pub mod mock;

pub use i3msg::I3Msg;

/// One workspace as reported by `get_workspaces`.
///
/// Fields i3 reports beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: i64,
    pub num: i64,
    pub name: String,
    #[serde(default)]
    pub focused: bool,
    #[serde(default)]
    pub visible: bool,
    #[serde(default)]
    pub urgent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl Workspace {
    /// A workspace whose `num` is derived from `name` the way i3 does it.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            num: workspace_number(&name),
            name,
            focused: false,
            visible: false,
            urgent: false,
            output: None,
        }
    }
}

/// The number i3 assigns to a workspace name: its leading decimal digits,
/// or -1 when the name does not start with one.
pub fn workspace_number(name: &str) -> i64 {
    let digits: &str = {
        let end = name
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(name.len());
        &name[..end]
    };
    digits.parse::<i64>().unwrap_or(-1)
}

/// Commands wsmgr sends. `Display` renders the exact wire text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WmCommand {
    /// `rename workspace "<from>" to "<to>"`
    RenameWorkspace { from: String, to: String },
    /// `move container to workspace "<name>"; workspace "<name>"`
    MoveContainerAndFocus { workspace: String },
}

impl WmCommand {
    pub fn rename(from: impl Into<String>, to: impl Into<String>) -> Self {
        WmCommand::RenameWorkspace {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn move_and_focus(workspace: impl Into<String>) -> Self {
        WmCommand::MoveContainerAndFocus {
            workspace: workspace.into(),
        }
    }
}

/// i3 string quoting: backslash and double quote are escaped.
fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

impl fmt::Display for WmCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WmCommand::RenameWorkspace { from, to } => {
                write!(f, "rename workspace {} to {}", quoted(from), quoted(to))
            }
            WmCommand::MoveContainerAndFocus { workspace } => {
                let name = quoted(workspace);
                write!(f, "move container to workspace {name}; workspace {name}")
            }
        }
    }
}

/// The command/query contract of the external window manager.
///
/// Every call is a blocking round trip.
pub trait WindowManager {
    /// Get the authoritative workspace list, in the window manager's order.
    fn get_workspaces(&self) -> Result<Vec<Workspace>>;

    /// Run one command. A rejection is `WsError::RenameRejected`; an
    /// unreachable window manager is `WsError::ExternalUnavailable`.
    fn run_command(&self, command: &WmCommand) -> Result<()>;
}

impl<T: WindowManager + ?Sized> WindowManager for &T {
    fn get_workspaces(&self) -> Result<Vec<Workspace>> {
        (**self).get_workspaces()
    }

    fn run_command(&self, command: &WmCommand) -> Result<()> {
        (**self).run_command(command)
    }
}

impl<T: WindowManager + ?Sized> WindowManager for Box<T> {
    fn get_workspaces(&self) -> Result<Vec<Workspace>> {
        (**self).get_workspaces()
    }

    fn run_command(&self, command: &WmCommand) -> Result<()> {
        (**self).run_command(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_wire_text() {
        let cmd = WmCommand::rename("3: work", "1: work");
        assert_eq!(cmd.to_string(), r#"rename workspace "3: work" to "1: work""#);
    }

    #[test]
    fn test_move_and_focus_wire_text() {
        let cmd = WmCommand::move_and_focus("5: unnamed");
        assert_eq!(
            cmd.to_string(),
            r#"move container to workspace "5: unnamed"; workspace "5: unnamed""#
        );
    }

    #[test]
    fn test_quotes_are_escaped() {
        let cmd = WmCommand::rename(r#"2: say "hi""#, r#"1: a\b"#);
        assert_eq!(
            cmd.to_string(),
            r#"rename workspace "2: say \"hi\"" to "1: a\\b""#
        );
    }

    #[test]
    fn test_workspace_number() {
        assert_eq!(workspace_number("3"), 3);
        assert_eq!(workspace_number("12: mail"), 12);
        assert_eq!(workspace_number("7web"), 7);
        assert_eq!(workspace_number("mail"), -1);
        assert_eq!(workspace_number(""), -1);
    }

    #[test]
    fn test_workspace_deserialize_ignores_extra_fields() {
        let json = r#"[{"id":94251,"num":2,"name":"2: mail","visible":true,"focused":false,
            "urgent":false,"rect":{"x":0,"y":0,"width":1920,"height":1080},"output":"DP-1"}]"#;
        let parsed: Vec<Workspace> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].id, 94251);
        assert_eq!(parsed[0].num, 2);
        assert_eq!(parsed[0].name, "2: mail");
        assert!(parsed[0].visible);
        assert_eq!(parsed[0].output.as_deref(), Some("DP-1"));
    }
}
