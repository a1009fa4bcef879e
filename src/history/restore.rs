//! Single-slot ordering for asynchronous snapshot restores.

use crate::draw::Snapshot;
use std::rc::Rc;

/// A requested restore, handed to whoever decodes the snapshot.
///
/// The ticket is only honoured if no newer restore was requested and no
/// commit happened before it completes.
#[derive(Debug, Clone)]
pub struct RestoreTicket {
    generation: u64,
    snapshot: Rc<Snapshot>,
}

impl RestoreTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

/// Tracks which restore, if any, is allowed to land.
#[derive(Debug, Default)]
pub struct RestoreSlot {
    issued: u64,
    in_flight: Option<u64>,
}

impl RestoreSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket that supersedes every earlier one.
    pub fn request(&mut self, snapshot: Rc<Snapshot>) -> RestoreTicket {
        self.issued += 1;
        if let Some(stale) = self.in_flight.replace(self.issued) {
            log::debug!("Restore #{} superseded by #{}", stale, self.issued);
        }
        RestoreTicket {
            generation: self.issued,
            snapshot,
        }
    }

    /// Whether `ticket` is still the one that may be applied.
    pub fn is_current(&self, ticket: &RestoreTicket) -> bool {
        self.in_flight == Some(ticket.generation)
    }

    /// Closes the slot for `ticket`. Returns `false` for stale tickets.
    pub fn finish(&mut self, ticket: &RestoreTicket) -> bool {
        if self.is_current(ticket) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// Drops the in-flight restore so its completion is ignored.
    pub fn cancel(&mut self) {
        if let Some(generation) = self.in_flight.take() {
            log::debug!("Restore #{} cancelled", generation);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }
}
