// Profile commands

use anyhow::Result;
use wsmgr_core::{ws_info, ws_println, ws_success, ws_warning};
use wsmgr_messages::{msg, MESSAGES};
use wsmgr_profile::{autosave, load_profile, ProcessLauncher};

use super::Context;

pub fn handle_profiles(ctx: &Context) -> Result<()> {
    let names = ctx.profile_store().configured_profiles()?;
    if names.is_empty() {
        ws_info!(
            "{}",
            msg!(MESSAGES.profiles_empty, root = ctx.root.display().to_string())
        );
        return Ok(());
    }
    for name in names {
        ws_println!("{}", name);
    }
    Ok(())
}

pub fn handle_load(ctx: &Context, name: &str) -> Result<()> {
    let store = ctx.profile_store();
    let mut manager = ctx.manager()?;
    let report = load_profile(&mut manager, &store, &ProcessLauncher, name)?;

    for (path, error) in &report.failed {
        ws_warning!(
            "{}",
            msg!(
                MESSAGES.profile_entry_failed,
                path = path.display().to_string(),
                error = error.to_string()
            )
        );
    }
    ws_success!(
        "{}",
        msg!(
            MESSAGES.profile_loaded,
            name = report.workspace.as_str(),
            started = report.started.len().to_string(),
            failed = report.failed.len().to_string()
        )
    );
    Ok(())
}

pub fn handle_autosave(ctx: &Context) -> Result<()> {
    let path = ctx.config.autosave_path(&ctx.root);
    let count = autosave(&ctx.window_manager(), &path)?;
    ws_success!(
        "{}",
        msg!(
            MESSAGES.autosave_written,
            count = count.to_string(),
            path = path.display().to_string()
        )
    );
    Ok(())
}
