//=========================================================================
// Transition Completion
//=========================================================================
//
// One-shot signal a screen fires when its push or pop work is done.
//
// Flow:
//   Navigator ──on_push(data, Completion)──> Screen
//   Screen    ──Completion::finish()───────> inbox (crossbeam channel)
//   Navigator ──drain inbox──> completes transition, starts next item
//
// `finish` consumes the handle, so a completion can fire at most once.
// The ticket lets the navigator discard signals that do not belong to
// the transition in flight.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use crossbeam_channel::Sender;
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::navigation::Inbox;

//=== Transition Kind =====================================================

/// Which half of the lifecycle a [`Completion`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    Push,
    Pop,
}

//=== Ticket ==============================================================

/// Sequence number of a single transition.
///
/// Tickets increase monotonically per navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub(crate) u64);

impl Ticket {
    /// Returns the raw sequence number.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

//=== Completion ==========================================================

/// Handle a screen uses to report that a push or pop has finished.
///
/// Call [`Completion::finish`] immediately when no animation is needed,
/// or keep the handle and call it later (from any thread). The
/// navigator does not start the next queued operation until it does.
///
/// Dropping the handle without finishing leaves the navigator waiting
/// forever; a warning is logged when that happens.
#[must_use = "the navigator waits until `finish` is called"]
pub struct Completion {
    ticket: Ticket,
    kind: TransitionKind,
    sender: Option<Sender<Inbox>>,
}

impl Completion {
    pub(crate) fn new(ticket: Ticket, kind: TransitionKind, sender: Sender<Inbox>) -> Self {
        Self {
            ticket,
            kind,
            sender: Some(sender),
        }
    }

    /// Returns the transition this handle completes.
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Returns the ticket of the transition this handle completes.
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Signals that the transition has finished.
    pub fn finish(mut self) {
        if let Some(sender) = self.sender.take() {
            let signal = Inbox::Finished {
                ticket: self.ticket,
                kind: self.kind,
            };
            if sender.send(signal).is_err() {
                debug!(
                    target: "navigator::stack",
                    "{:?} {} finished after its navigator was dropped",
                    self.kind, self.ticket
                );
            }
        }
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        if self.sender.is_some() {
            warn!(
                target: "navigator::stack",
                "{:?} completion {} dropped without finish(); the navigation queue is stalled",
                self.kind, self.ticket
            );
        }
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("ticket", &self.ticket)
            .field("kind", &self.kind)
            .field("pending", &self.sender.is_some())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
