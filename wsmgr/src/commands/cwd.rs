// Run a command from the focused workspace's profile directory

use std::os::unix::process::CommandExt;
use std::process::Command;

use anyhow::{bail, Context as _, Result};
use tracing::{debug, warn};
use wsmgr_core::command_stream::resolve_tool;
use wsmgr_profile::focused_cwd;

use super::Context;

/// Change into the profile's `cwd` when there is one, then replace this
/// process with `command`. Failing to find or enter the directory is only a
/// warning; the command still runs from where we are.
pub fn handle_cwd(ctx: &Context, command: &[String]) -> Result<()> {
    let Some((program, args)) = command.split_first() else {
        bail!("no command to execute");
    };

    match focused_cwd(&ctx.window_manager(), &ctx.profile_store()) {
        Ok(Some(dir)) => {
            debug!(dir = %dir.display(), "changing directory");
            if let Err(e) = std::env::set_current_dir(&dir) {
                warn!(dir = %dir.display(), error = %e, "cannot enter profile directory");
            }
        }
        Ok(None) => debug!("focused workspace has no profile directory"),
        Err(e) => warn!(error = %e, "cannot determine profile directory"),
    }

    let full = resolve_tool(program).with_context(|| format!("cannot find `{program}`"))?;
    let err = Command::new(&full).arg0(program).args(args).exec();
    Err(err).with_context(|| format!("cannot execute `{}`", full.display()))
}
