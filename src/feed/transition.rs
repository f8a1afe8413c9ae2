//! Deferred Cursor Transitions
//!
//! A cursor move is not applied immediately: it is recorded as a pending
//! target and applied when the timer carrying its ticket fires. A newer
//! schedule or a cancel invalidates older tickets.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Slide offset applied to every card while moving this way
    pub fn slide(self) -> i64 {
        match self {
            Direction::Forward => -1,
            Direction::Backward => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransition {
    pub ticket: u64,
    pub target: usize,
    pub direction: Direction,
}

#[derive(Debug, Clone, Default)]
pub struct DeferredTransition {
    last_ticket: u64,
    pending: Option<PendingTransition>,
}

impl DeferredTransition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<&PendingTransition> {
        self.pending.as_ref()
    }

    /// Record a new target, superseding any pending one. Returns its ticket.
    pub fn schedule(&mut self, target: usize, direction: Direction) -> u64 {
        self.last_ticket += 1;
        self.pending = Some(PendingTransition {
            ticket: self.last_ticket,
            target,
            direction,
        });
        self.last_ticket
    }

    /// Take the pending transition if `ticket` is still the live one
    pub fn fire(&mut self, ticket: u64) -> Option<PendingTransition> {
        match self.pending {
            Some(p) if p.ticket == ticket => self.pending.take(),
            _ => None,
        }
    }

    pub fn cancel(&mut self) -> Option<PendingTransition> {
        self.pending.take()
    }
}
