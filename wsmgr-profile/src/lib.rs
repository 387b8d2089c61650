//! Per-workspace profiles and the small helpers around them.
//!
//! A profile is a directory under the config root named after a workspace
//! label. Loading one makes sure the workspace exists and starts whatever the
//! directory lists.

pub mod autosave;
pub mod cwd;
pub mod launcher;
pub mod loader;
pub mod store;

pub use autosave::autosave;
pub use cwd::focused_cwd;
pub use launcher::{Launcher, ProcessLauncher};
pub use loader::{load_profile, LoadReport};
pub use store::{Profile, ProfileEntry, ProfileStore};
