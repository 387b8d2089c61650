//! Local mirror of the window manager's workspace list.
//!
//! Every structural mutation reports exactly one [`RowEvent`] to its caller
//! the moment it happens. Indices are trusted: they only ever come from this
//! list, so an out-of-range index is a bug and panics.

use wsmgr_ipc::Workspace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRow {
    pub num: i64,
    pub name: String,
    pub id: i64,
}

impl From<&Workspace> for WorkspaceRow {
    fn from(ws: &Workspace) -> Self {
        Self {
            num: ws.num,
            name: ws.name.clone(),
            id: ws.id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Inserted,
    Changed,
    Deleted,
}

/// Who caused a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// A direct user action (drag, delete, edit).
    User,
    /// Our own replay of window-manager state.
    Programmatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowEvent {
    pub kind: ChangeKind,
    pub index: usize,
    pub origin: Origin,
}

impl RowEvent {
    fn new(kind: ChangeKind, index: usize, origin: Origin) -> Self {
        Self {
            kind,
            index,
            origin,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WorkspaceList {
    rows: Vec<WorkspaceRow>,
}

impl WorkspaceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[WorkspaceRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WorkspaceRow> {
        self.rows.iter()
    }

    /// # Panics
    /// If `index` is out of range.
    pub fn row_at(&self, index: usize) -> &WorkspaceRow {
        self.check(index);
        &self.rows[index]
    }

    /// Highest `num` in the list, 0 when empty.
    pub fn max_num(&self) -> i64 {
        self.rows.iter().map(|r| r.num).max().unwrap_or(0)
    }

    /// Clear, then append `snapshot` in order.
    ///
    /// `notify` sees one `Deleted` per old row and one `Inserted` per new
    /// row, each right after the mutation it describes.
    pub fn load(
        &mut self,
        snapshot: Vec<WorkspaceRow>,
        origin: Origin,
        notify: &mut dyn FnMut(RowEvent),
    ) {
        while !self.rows.is_empty() {
            self.rows.remove(0);
            notify(RowEvent::new(ChangeKind::Deleted, 0, origin));
        }
        for row in snapshot {
            self.rows.push(row);
            notify(RowEvent::new(
                ChangeKind::Inserted,
                self.rows.len() - 1,
                origin,
            ));
        }
    }

    /// # Panics
    /// If `index > len`.
    pub fn insert_at(&mut self, index: usize, row: WorkspaceRow, origin: Origin) -> RowEvent {
        assert!(
            index <= self.rows.len(),
            "BUG: insert at row {} of a {}-row list",
            index,
            self.rows.len()
        );
        self.rows.insert(index, row);
        RowEvent::new(ChangeKind::Inserted, index, origin)
    }

    /// # Panics
    /// If `index` is out of range.
    pub fn remove(&mut self, index: usize, origin: Origin) -> RowEvent {
        self.check(index);
        self.rows.remove(index);
        RowEvent::new(ChangeKind::Deleted, index, origin)
    }

    /// Replace the contents of one row in place.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn set_row(&mut self, index: usize, row: WorkspaceRow, origin: Origin) -> RowEvent {
        self.check(index);
        self.rows[index] = row;
        RowEvent::new(ChangeKind::Changed, index, origin)
    }

    /// Move the row at `from` so that it ends up at `to`.
    ///
    /// Done the way a drag-and-drop list does it: a copy is inserted at the
    /// destination first, then the original is deleted. The returned events
    /// are in that order and carry the indices valid at each step.
    ///
    /// # Panics
    /// If either index is out of range.
    pub fn move_row(&mut self, from: usize, to: usize, origin: Origin) -> [RowEvent; 2] {
        self.check(from);
        self.check(to);
        let row = self.rows[from].clone();
        let (insert_at, delete_at) = if to <= from {
            (to, from + 1)
        } else {
            (to + 1, from)
        };
        let inserted = self.insert_at(insert_at, row, origin);
        let deleted = self.remove(delete_at, origin);
        [inserted, deleted]
    }

    fn check(&self, index: usize) {
        assert!(
            index < self.rows.len(),
            "BUG: row {} out of range, list has {} rows",
            index,
            self.rows.len()
        );
    }
}
