// CLI argument parsing and definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "wsmgr")]
#[command(about = "Keep i3 workspace numbers in step with their order")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration root (default: $WSMGR_CONFIG_HOME or ~/.config/wsmgr-for-i3)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Message tool to reach the window manager (i3-msg, swaymsg)
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub ipc_binary: Option<String>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List workspaces in order, marking the focused one
    List,
    /// Open a new workspace after the last numbered one and switch to it
    Add {
        /// Label for the new workspace (default from config, "unnamed")
        label: Option<String>,
    },
    /// Switch to a workspace, taking the focused window along
    Activate {
        /// Row as shown by `list`, starting at 0
        index: usize,
    },
    /// Change a workspace's label; the number prefix is added if missing
    Rename {
        /// Row as shown by `list`, starting at 0
        index: usize,
        /// New label, or the full "<num>: <label>" name
        text: String,
    },
    /// Move a workspace to another row and renumber
    Move {
        /// Row to move
        from: usize,
        /// Row it should end up at
        to: usize,
    },
    /// Rename workspaces so numbers run 1..N in list order
    Renumber,
    /// List configured workspace profiles
    Profiles,
    /// Open the workspace for a profile and start its programs
    Load {
        /// Profile (directory) name
        name: String,
    },
    /// Save the workspace list to the autosave file
    Autosave,
    /// Run a command in the focused workspace's profile directory
    Cwd {
        /// Command and arguments
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}
