// Command handlers

use std::path::PathBuf;

use anyhow::{bail, Result};
use tracing::debug;
use wsmgr_config::WsmgrConfig;
use wsmgr_core::user_paths;
use wsmgr_engine::WorkspaceManager;
use wsmgr_ipc::I3Msg;
use wsmgr_messages::{msg, MESSAGES};
use wsmgr_profile::ProfileStore;

use crate::cli::{Args, Command};

pub mod cwd;
pub mod profiles;
pub mod workspaces;

/// Settings shared by every command, resolved once from flags and config.
pub struct Context {
    pub root: PathBuf,
    pub config: WsmgrConfig,
    pub ipc_binary: String,
}

impl Context {
    pub fn from_args(args: &Args) -> Result<Self> {
        let root = match &args.config_dir {
            Some(dir) => dir.clone(),
            None => user_paths::config_root()?,
        };
        let config = WsmgrConfig::load_from_root(&root)?;
        let ipc_binary = args
            .ipc_binary
            .clone()
            .unwrap_or_else(|| config.ipc.binary.clone());
        debug!(root = %root.display(), ipc = %ipc_binary, "context resolved");
        Ok(Self {
            root,
            config,
            ipc_binary,
        })
    }

    pub fn window_manager(&self) -> I3Msg {
        I3Msg::new(&self.ipc_binary)
    }

    pub fn manager(&self) -> Result<WorkspaceManager<I3Msg>> {
        let manager = WorkspaceManager::new(self.window_manager())?
            .with_default_label(&self.config.workspaces.default_label);
        Ok(manager)
    }

    pub fn profile_store(&self) -> ProfileStore {
        ProfileStore::new(&self.root, self.config.profiles.clone())
    }
}

/// Rows come from user input; reject ones the list does not have.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        bail!(msg!(
            MESSAGES.error_index_out_of_range,
            index = index.to_string(),
            len = len.to_string()
        ));
    }
    Ok(())
}

/// Main command dispatcher
pub fn execute_command(args: Args) -> Result<()> {
    let ctx = Context::from_args(&args)?;

    match args.command {
        Command::List => workspaces::handle_list(&ctx),
        Command::Add { label } => workspaces::handle_add(&ctx, label.as_deref()),
        Command::Activate { index } => workspaces::handle_activate(&ctx, index),
        Command::Rename { index, text } => workspaces::handle_rename(&ctx, index, &text),
        Command::Move { from, to } => workspaces::handle_move(&ctx, from, to),
        Command::Renumber => workspaces::handle_renumber(&ctx),
        Command::Profiles => profiles::handle_profiles(&ctx),
        Command::Load { name } => profiles::handle_load(&ctx, &name),
        Command::Autosave => profiles::handle_autosave(&ctx),
        Command::Cwd { command } => cwd::handle_cwd(&ctx, &command),
    }
}
