//! Renumbering pass: rename workspaces until their numbers run 1..N in list
//! order.

use tracing::{debug, info, info_span, warn};
use wsmgr_core::error::{Result, WsError};
use wsmgr_ipc::{WindowManager, WmCommand};

use crate::label::renumbered_name;
use crate::manager::WorkspaceManager;
use crate::model::WorkspaceRow;

/// Renames issued by one pass, in the order they were sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenumberReport {
    pub renames: Vec<(String, String)>,
}

impl RenumberReport {
    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.renames.len()
    }

    pub(crate) fn extend(&mut self, other: RenumberReport) {
        self.renames.extend(other.renames);
    }
}

impl<W: WindowManager> WorkspaceManager<W> {
    /// Renumber every row by position, then reload from the window manager.
    ///
    /// Rows already carrying the right number are skipped. Each rename
    /// addresses the row by its current name and is applied to the local
    /// row before the next one is built. If the window manager rejects a
    /// rename the pass stops there, nothing is rolled back or reloaded, and
    /// the result is [`WsError::Inconsistent`].
    pub fn renumber(&mut self) -> Result<RenumberReport> {
        let span = info_span!("renumber", rows = self.model.len());
        let _enter = span.enter();
        let _hold = self.gate.hold();

        let mut report = RenumberReport::default();
        for index in 0..self.model.len() {
            let expected = index as i64 + 1;
            let current = self.model.row_at(index).clone();
            if current.num == expected {
                continue;
            }

            let new_name = renumbered_name(&current.name, expected);
            let command = WmCommand::rename(&current.name, &new_name);
            match self.wm.run_command(&command) {
                Ok(()) => {}
                Err(source @ WsError::RenameRejected { .. }) => {
                    warn!(
                        applied = report.len(),
                        %command,
                        "rename rejected, stopping renumbering"
                    );
                    return Err(WsError::Inconsistent {
                        applied: report.len(),
                        source: Box::new(source),
                    });
                }
                Err(err) => return Err(err),
            }
            debug!(from = %current.name, to = %new_name, "renumbered");

            let row = WorkspaceRow {
                num: expected,
                name: new_name.clone(),
                id: current.id,
            };
            let event = self.model.set_row(index, row, self.gate.origin());
            self.dispatch(event)?;
            report.renames.push((current.name, new_name));
        }

        self.refresh()?;
        if !report.is_empty() {
            info!(renames = report.len(), "renumbering complete");
        }
        Ok(report)
    }
}
