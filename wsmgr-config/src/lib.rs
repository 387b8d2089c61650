//! Configuration for wsmgr.
//!
//! Settings live in `<config root>/config.yaml`. The file is optional and
//! never created implicitly; every field has a default.

pub mod config;

pub use config::{AutosaveSettings, IpcSettings, ProfileSettings, WorkspaceSettings, WsmgrConfig};
