//! Workspace list reconciliation for i3.
//!
//! [`WorkspaceManager`] mirrors the window manager's workspace list, turns
//! local reorders, deletions and edits into rename commands, and keeps its
//! own reloads from setting off another round of renames.

pub mod gate;
pub mod label;
pub mod manager;
pub mod model;
mod renumber;

pub use gate::{GateGuard, UpdateGate};
pub use manager::{WorkspaceManager, DEFAULT_LABEL};
pub use model::{ChangeKind, Origin, RowEvent, WorkspaceList, WorkspaceRow};
pub use renumber::RenumberReport;
