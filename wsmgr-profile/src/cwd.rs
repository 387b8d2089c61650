use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::debug;
use wsmgr_core::error::{Result, WsError};
use wsmgr_engine::label::decode;
use wsmgr_ipc::WindowManager;

use crate::store::ProfileStore;

/// Target of the `cwd` link in the profile of the focused workspace.
///
/// The profile is the workspace name with any `"<num>: "` prefix removed. The
/// link target is returned as written, not resolved. No link means `None`.
pub fn focused_cwd<W: WindowManager + ?Sized>(
    wm: &W,
    store: &ProfileStore,
) -> Result<Option<PathBuf>> {
    let focused = wm
        .get_workspaces()?
        .into_iter()
        .find(|w| w.focused)
        .ok_or_else(|| WsError::Internal("no focused workspace".into()))?;

    let profile = decode(&focused.name).label.unwrap_or(focused.name);
    debug!(%profile, "looking up working directory");

    match fs::read_link(store.cwd_link(&profile)?) {
        Ok(target) => Ok(Some(target)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
