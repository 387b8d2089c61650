//! In-memory window manager for tests.
//!
//! Keeps workspaces ordered the way i3 lists them (numbered ones ascending,
//! then named-only ones), applies renames and move-and-switch commands, and
//! records every command it receives.

use std::cell::RefCell;

use wsmgr_core::error::{Result, WsError};

use crate::{workspace_number, WindowManager, WmCommand, Workspace};

#[derive(Debug, Default)]
struct MockState {
    workspaces: Vec<Workspace>,
    next_id: i64,
    attempted: Vec<WmCommand>,
    applied: Vec<WmCommand>,
    queries: usize,
    reject_nth: Option<usize>,
    reject_duplicates: bool,
    unavailable: bool,
}

#[derive(Debug, Default)]
pub struct MockWindowManager {
    state: RefCell<MockState>,
}

impl MockWindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Workspaces with the given names, ids 1.., the first one focused.
    pub fn with_names(names: &[&str]) -> Self {
        let mock = Self::new();
        {
            let mut state = mock.state.borrow_mut();
            for name in names {
                state.next_id += 1;
                let id = state.next_id;
                state.workspaces.push(Workspace::new(id, *name));
            }
            if let Some(first) = state.workspaces.first_mut() {
                first.focused = true;
            }
        }
        mock
    }

    /// Replace the workspace table verbatim (ids, nums and focus as given).
    pub fn with_workspaces(workspaces: Vec<Workspace>) -> Self {
        let mock = Self::new();
        {
            let mut state = mock.state.borrow_mut();
            state.next_id = workspaces.iter().map(|w| w.id).max().unwrap_or(0);
            state.workspaces = workspaces;
        }
        mock
    }

    /// Reject the `nth` command received (1-based, counting every command).
    pub fn reject_command(self, nth: usize) -> Self {
        self.state.borrow_mut().reject_nth = Some(nth);
        self
    }

    /// Reject renames onto a name another workspace already has, like i3.
    pub fn reject_duplicate_names(self) -> Self {
        self.state.borrow_mut().reject_duplicates = true;
        self
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.borrow_mut().unavailable = unavailable;
    }

    /// Names in listing order.
    pub fn names(&self) -> Vec<String> {
        self.sorted().into_iter().map(|w| w.name).collect()
    }

    pub fn focused_name(&self) -> Option<String> {
        self.sorted().into_iter().find(|w| w.focused).map(|w| w.name)
    }

    /// Every command received, including rejected ones.
    pub fn attempted(&self) -> Vec<WmCommand> {
        self.state.borrow().attempted.clone()
    }

    /// Commands that were accepted and applied.
    pub fn applied(&self) -> Vec<WmCommand> {
        self.state.borrow().applied.clone()
    }

    /// Applied commands rendered as wire text.
    pub fn applied_text(&self) -> Vec<String> {
        self.applied().iter().map(ToString::to_string).collect()
    }

    pub fn queries(&self) -> usize {
        self.state.borrow().queries
    }

    fn sorted(&self) -> Vec<Workspace> {
        let mut list = self.state.borrow().workspaces.clone();
        list.sort_by_key(|w| (w.num < 0, w.num));
        list
    }

    fn apply(state: &mut MockState, command: &WmCommand) -> std::result::Result<(), String> {
        match command {
            WmCommand::RenameWorkspace { from, to } => {
                let index = state
                    .workspaces
                    .iter()
                    .position(|w| &w.name == from)
                    .ok_or_else(|| format!("No workspace with name \"{from}\" found"))?;
                if state.reject_duplicates
                    && state
                        .workspaces
                        .iter()
                        .enumerate()
                        .any(|(i, w)| i != index && &w.name == to)
                {
                    return Err(format!("New workspace \"{to}\" already exists"));
                }
                // i3 re-inserts a renamed workspace after others with the same number.
                let mut renamed = state.workspaces.remove(index);
                renamed.name = to.clone();
                renamed.num = workspace_number(to);
                state.workspaces.push(renamed);
            }
            WmCommand::MoveContainerAndFocus { workspace } => {
                if !state.workspaces.iter().any(|w| &w.name == workspace) {
                    state.next_id += 1;
                    let id = state.next_id;
                    state.workspaces.push(Workspace::new(id, workspace.clone()));
                }
                for w in state.workspaces.iter_mut() {
                    w.focused = &w.name == workspace;
                }
            }
        }
        Ok(())
    }
}

impl WindowManager for MockWindowManager {
    fn get_workspaces(&self) -> Result<Vec<Workspace>> {
        if self.state.borrow().unavailable {
            return Err(WsError::ExternalUnavailable("mock window manager is down".into()));
        }
        self.state.borrow_mut().queries += 1;
        Ok(self.sorted())
    }

    fn run_command(&self, command: &WmCommand) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.unavailable {
            return Err(WsError::ExternalUnavailable("mock window manager is down".into()));
        }
        state.attempted.push(command.clone());
        if state.reject_nth == Some(state.attempted.len()) {
            return Err(WsError::rejected(command.to_string(), "rejected by mock"));
        }
        Self::apply(&mut state, command)
            .map_err(|reason| WsError::rejected(command.to_string(), reason))?;
        state.applied.push(command.clone());
        Ok(())
    }
}
