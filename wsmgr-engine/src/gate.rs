//! Marks list mutations that replay our own window-manager commands.
//!
//! While a [`GateGuard`] is alive, [`UpdateGate::origin`] reports
//! [`Origin::Programmatic`], so every mutation made under it is tagged as
//! self-caused and the event handler leaves it alone. Holds nest: the gate
//! opens again only when the outermost guard drops.
//!
//! The gate is `!Send` on purpose; it belongs to the single control thread.

use std::cell::Cell;
use std::rc::Rc;

use crate::model::Origin;

#[derive(Debug, Clone, Default)]
pub struct UpdateGate {
    depth: Rc<Cell<usize>>,
}

impl UpdateGate {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "the gate is released as soon as the guard is dropped"]
    pub fn hold(&self) -> GateGuard {
        self.depth.set(self.depth.get() + 1);
        GateGuard {
            depth: Rc::clone(&self.depth),
        }
    }

    pub fn is_held(&self) -> bool {
        self.depth.get() > 0
    }

    pub fn origin(&self) -> Origin {
        if self.is_held() {
            Origin::Programmatic
        } else {
            Origin::User
        }
    }
}

#[derive(Debug)]
pub struct GateGuard {
    depth: Rc<Cell<usize>>,
}

impl Drop for GateGuard {
    fn drop(&mut self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}
