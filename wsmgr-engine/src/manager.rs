//! The workspace list kept in step with the window manager.

use tracing::{debug, info};
use wsmgr_core::error::Result;
use wsmgr_ipc::{workspace_number, WindowManager, WmCommand};

use crate::gate::UpdateGate;
use crate::label::{decode, edited_name, encode};
use crate::model::{ChangeKind, Origin, RowEvent, WorkspaceList, WorkspaceRow};
use crate::renumber::RenumberReport;

pub const DEFAULT_LABEL: &str = "unnamed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reaction {
    None,
    Renumber,
}

/// What a change notification asks for.
///
/// Self-caused events are counted and dropped. A row the user deleted (which
/// includes the second half of a drag) breaks contiguity and needs a pass.
fn react(event: RowEvent, suppressed: &mut usize) -> Reaction {
    if event.origin == Origin::Programmatic {
        *suppressed += 1;
        return Reaction::None;
    }
    match event.kind {
        ChangeKind::Deleted => Reaction::Renumber,
        ChangeKind::Inserted | ChangeKind::Changed => {
            debug!(kind = ?event.kind, index = event.index, "row event needs no renumbering");
            Reaction::None
        }
    }
}

pub struct WorkspaceManager<W: WindowManager> {
    pub(crate) wm: W,
    pub(crate) model: WorkspaceList,
    pub(crate) gate: UpdateGate,
    focused: Option<i64>,
    suppressed: usize,
    default_label: String,
}

impl<W: WindowManager> WorkspaceManager<W> {
    /// Connect to `wm` and load its workspaces.
    pub fn new(wm: W) -> Result<Self> {
        let mut manager = Self {
            wm,
            model: WorkspaceList::new(),
            gate: UpdateGate::new(),
            focused: None,
            suppressed: 0,
            default_label: DEFAULT_LABEL.to_string(),
        };
        manager.refresh()?;
        Ok(manager)
    }

    /// Label used by [`add_workspace`](Self::add_workspace) when none is given.
    pub fn with_default_label(mut self, label: impl Into<String>) -> Self {
        self.default_label = label.into();
        self
    }

    /// Replace the list with the window manager's current state.
    pub fn refresh(&mut self) -> Result<()> {
        let _hold = self.gate.hold();
        let snapshot = self.wm.get_workspaces()?;
        self.focused = snapshot.iter().find(|w| w.focused).map(|w| w.id);

        let origin = self.gate.origin();
        let suppressed = &mut self.suppressed;
        self.model.load(
            snapshot.iter().map(WorkspaceRow::from).collect(),
            origin,
            &mut |event| {
                react(event, suppressed);
            },
        );
        debug!(rows = self.model.len(), "workspace list refreshed");
        Ok(())
    }

    pub fn rows(&self) -> &[WorkspaceRow] {
        self.model.rows()
    }

    pub fn len(&self) -> usize {
        self.model.len()
    }

    pub fn is_empty(&self) -> bool {
        self.model.is_empty()
    }

    /// Row of the focused workspace, as of the last refresh or activation.
    pub fn focused_index(&self) -> Option<usize> {
        let focused = self.focused?;
        self.model.iter().position(|row| row.id == focused)
    }

    /// Drag the row at `from` to `to`, then bring numbering back in line.
    ///
    /// # Panics
    /// If either index is out of range.
    pub fn move_row(&mut self, from: usize, to: usize) -> Result<RenumberReport> {
        if from == to {
            return Ok(RenumberReport::default());
        }
        let events = self.model.move_row(from, to, self.gate.origin());
        let mut report = RenumberReport::default();
        for event in events {
            report.extend(self.dispatch(event)?);
        }
        Ok(report)
    }

    /// Delete the row at `index` locally, then renumber what remains.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn remove_row(&mut self, index: usize) -> Result<RenumberReport> {
        let event = self.model.remove(index, self.gate.origin());
        self.dispatch(event)
    }

    /// Rename one row from user-typed text. Returns the name sent.
    ///
    /// Exactly one rename is issued. The row is updated in place only once
    /// the window manager accepts it.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn edit_label(&mut self, index: usize, text: &str) -> Result<String> {
        let current = self.model.row_at(index).clone();
        let new_name = edited_name(current.num, text);
        self.wm
            .run_command(&WmCommand::rename(&current.name, &new_name))?;
        info!(from = %current.name, to = %new_name, "workspace renamed");

        let _hold = self.gate.hold();
        let row = WorkspaceRow {
            num: workspace_number(&new_name),
            name: new_name.clone(),
            id: current.id,
        };
        let event = self.model.set_row(index, row, self.gate.origin());
        self.dispatch(event)?;
        Ok(new_name)
    }

    /// Open a new workspace after the highest-numbered one and switch to it.
    /// Returns its name.
    pub fn add_workspace(&mut self, label: Option<&str>) -> Result<String> {
        let num = self.model.max_num().max(0) + 1;
        let label = label
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(self.default_label.as_str());
        let name = encode(num, Some(label));
        self.wm.run_command(&WmCommand::move_and_focus(&name))?;
        info!(workspace = %name, "workspace added");
        self.refresh()?;
        Ok(name)
    }

    /// Switch to the workspace at `index`, taking the focused container along.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn activate(&mut self, index: usize) -> Result<()> {
        let row = self.model.row_at(index).clone();
        self.wm.run_command(&WmCommand::move_and_focus(&row.name))?;
        self.focused = Some(row.id);
        info!(workspace = %row.name, "workspace activated");
        Ok(())
    }

    /// First row whose decoded label equals `label`.
    pub fn find_by_label(&self, label: &str) -> Option<usize> {
        self.model
            .iter()
            .position(|row| decode(&row.name).label.as_deref() == Some(label))
    }

    /// Self-caused row events ignored so far.
    pub fn suppressed_events(&self) -> usize {
        self.suppressed
    }

    pub(crate) fn dispatch(&mut self, event: RowEvent) -> Result<RenumberReport> {
        match react(event, &mut self.suppressed) {
            Reaction::Renumber => self.renumber(),
            Reaction::None => Ok(RenumberReport::default()),
        }
    }
}
