//! Central registry for all user-facing message templates.
//!
//! ```rust
//! use wsmgr_messages::{msg, MESSAGES};
//!
//! let text = msg!(MESSAGES.workspace_added, name = "3: mail");
//! assert_eq!(text, "Added workspace \"3: mail\"");
//! ```

pub struct Messages {
    // Workspace list
    pub list_empty: &'static str,
    pub list_header: &'static str,
    pub workspace_added: &'static str,
    pub workspace_activated: &'static str,
    pub workspace_renamed: &'static str,
    pub renumber_done: &'static str,
    pub renumber_nothing: &'static str,

    // Profiles
    pub profiles_empty: &'static str,
    pub profile_loaded: &'static str,
    pub profile_entry_failed: &'static str,
    pub autosave_written: &'static str,

    // Errors
    pub error_generic: &'static str,
    pub error_inconsistent_hint: &'static str,
    pub error_unavailable_hint: &'static str,
    pub error_index_out_of_range: &'static str,
}

pub const MESSAGES: Messages = Messages {
    list_empty: "No workspaces reported by the window manager",
    list_header: "  NUM  NAME",
    workspace_added: "Added workspace \"{name}\"",
    workspace_activated: "Switched to workspace \"{name}\"",
    workspace_renamed: "Renamed \"{from}\" → \"{to}\"",
    renumber_done: "Renumbered {count} workspace(s)",
    renumber_nothing: "Workspace numbers already match their order",

    profiles_empty: "No workspace profiles configured in {root}",
    profile_loaded: "Loaded profile \"{name}\": {started} started, {failed} failed",
    profile_entry_failed: "  {path}: {error}",
    autosave_written: "Saved {count} workspace(s) to {path}",

    error_generic: "Error: {error}",
    error_inconsistent_hint: "Run `wsmgr list` to see what the window manager now reports, then `wsmgr renumber`",
    error_unavailable_hint: "Is i3 (or sway with --ipc-binary swaymsg) running in this session?",
    error_index_out_of_range: "Row {index} does not exist, the list has {len} row(s)",
};
