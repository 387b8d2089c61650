//! Snapshot of the workspace list written to disk.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::info;
use wsmgr_core::error::{Result, WsError};
use wsmgr_ipc::WindowManager;

/// Write the window manager's workspace list to `path` as JSON.
///
/// The file is written next to its destination and renamed into place, so
/// readers see either the old contents or the new ones. Returns the number
/// of workspaces saved.
pub fn autosave<W: WindowManager + ?Sized>(wm: &W, path: &Path) -> Result<usize> {
    let workspaces = wm.get_workspaces()?;
    let json = serde_json::to_vec_pretty(&workspaces)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut temp = tempfile::Builder::new()
        .prefix(".autosave")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    temp.write_all(&json)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| WsError::Io(e.error))?;

    info!(path = %path.display(), count = workspaces.len(), "autosave written");
    Ok(workspaces.len())
}
