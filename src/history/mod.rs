//! Linear undo/redo history of raster snapshots.
//!
//! The undo stack's top is always the state currently on screen, and its
//! bottom is the blank canvas the session started with. Restoring a snapshot
//! goes through [`RestoreSlot`] so that only the newest request is applied.

mod restore;

pub use restore::{RestoreSlot, RestoreTicket};

use crate::draw::Snapshot;
use std::rc::Rc;

/// Undo and redo stacks of committed canvas states.
#[derive(Debug)]
pub struct History {
    undo: Vec<Rc<Snapshot>>,
    redo: Vec<Rc<Snapshot>>,
}

impl History {
    /// Creates a history whose only entry is `initial`.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            undo: vec![Rc::new(initial)],
            redo: Vec::new(),
        }
    }

    /// Records a committed state. Any redoable states are discarded.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.undo.push(Rc::new(snapshot));
        if !self.redo.is_empty() {
            log::debug!("Discarding {} redo entries after commit", self.redo.len());
            self.redo.clear();
        }
    }

    /// Steps back one state and returns the snapshot to show.
    ///
    /// Returns `None` when only the initial state remains.
    pub fn undo(&mut self) -> Option<Rc<Snapshot>> {
        if self.undo.len() <= 1 {
            return None;
        }
        let top = self.undo.pop()?;
        self.redo.push(top);
        self.undo.last().cloned()
    }

    /// Steps forward one state and returns the snapshot to show.
    pub fn redo(&mut self) -> Option<Rc<Snapshot>> {
        let next = self.redo.pop()?;
        self.undo.push(Rc::clone(&next));
        Some(next)
    }

    /// The snapshot of the state currently on screen.
    pub fn current(&self) -> Option<&Rc<Snapshot>> {
        self.undo.last()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn can_undo(&self) -> bool {
        self.undo.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}
