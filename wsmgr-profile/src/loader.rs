use std::path::{Path, PathBuf};

use tracing::{info, info_span, warn};
use wsmgr_core::error::{Result, WsError};
use wsmgr_engine::WorkspaceManager;
use wsmgr_ipc::WindowManager;

use crate::launcher::Launcher;
use crate::store::{ProfileEntry, ProfileStore};

/// Outcome of [`load_profile`].
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Name of the workspace the profile was loaded onto.
    pub workspace: String,
    pub started: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, WsError)>,
}

/// Switch to the workspace labelled `name`, creating it when absent, and
/// start the entries of profile `name`.
///
/// An entry that fails to start is logged and recorded; the remaining entries
/// still run. Only window-manager and profile-read errors are returned.
pub fn load_profile<W: WindowManager>(
    manager: &mut WorkspaceManager<W>,
    store: &ProfileStore,
    launcher: &dyn Launcher,
    name: &str,
) -> Result<LoadReport> {
    let span = info_span!("load_profile", name);
    let _enter = span.enter();

    let profile = store.profile(name)?;

    let workspace = match manager.find_by_label(name) {
        Some(index) => {
            manager.activate(index)?;
            manager.rows()[index].name.clone()
        }
        None => manager.add_workspace(Some(name))?,
    };
    info!(%workspace, entries = profile.entries.len(), "loading profile");

    let mut report = LoadReport {
        workspace,
        ..LoadReport::default()
    };
    let bookmark_launcher = PathBuf::from(&store.settings().bookmark_launcher);

    for entry in &profile.entries {
        let (program, args, cwd): (&Path, Vec<String>, Option<&Path>) = match entry {
            ProfileEntry::Executable(path) => (path.as_path(), Vec::new(), profile.cwd.as_deref()),
            ProfileEntry::BookmarkFolder(folder) => {
                (bookmark_launcher.as_path(), vec![format!("-name={folder}")], None)
            }
        };
        match launcher.spawn(program, &args, cwd) {
            Ok(()) => {
                info!(program = %program.display(), "started");
                report.started.push(program.to_path_buf());
            }
            Err(e) => {
                warn!(program = %program.display(), error = %e, "failed to start");
                report.failed.push((program.to_path_buf(), e));
            }
        }
    }

    Ok(report)
}
