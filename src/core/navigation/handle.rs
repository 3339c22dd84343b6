//=========================================================================
// Navigator Handle
//=========================================================================
//
// Cloneable, thread-safe sender for navigation requests.
//
// Screens receive one in `on_setup`; callbacks can capture one to chain
// navigation. Requests are processed the next time the navigator drains
// its inbox (any navigator call, or `update()`).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use crossbeam_channel::Sender;
use log::warn;

//=== Internal Dependencies ===============================================

use super::request::{Inbox, PoppedCallback, PushRequest, Request};
use crate::core::screen::ScreenId;

//=== NavigatorHandle =====================================================

/// Sends push/pop requests to a [`Navigator`](super::Navigator).
///
/// Every method returns `false` if the navigator no longer exists.
#[derive(Clone)]
pub struct NavigatorHandle {
    sender: Sender<Inbox>,
}

impl NavigatorHandle {
    pub(crate) fn new(sender: Sender<Inbox>) -> Self {
        Self { sender }
    }

    /// Requests a push. Same semantics as `Navigator::push`.
    pub fn push(&self, request: impl Into<PushRequest>) -> bool {
        self.send(Request::Push(request.into()))
    }

    /// Requests a pop of the top screen.
    pub fn pop(&self, on_popped: Option<PoppedCallback>) -> bool {
        self.send(Request::Pop { on_popped })
    }

    /// Requests popping down to `id`.
    pub fn pop_to(&self, id: ScreenId, include: bool, on_reached: Option<PoppedCallback>) -> bool {
        self.send(Request::PopTo {
            id,
            include,
            on_reached,
        })
    }

    fn send(&self, request: Request) -> bool {
        if self.sender.send(Inbox::Request(request)).is_err() {
            warn!(target: "navigator::queue", "Navigation request sent to a dropped navigator");
            return false;
        }
        true
    }
}

impl fmt::Debug for NavigatorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigatorHandle")
            .field("pending", &self.sender.len())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn requests_arrive_in_send_order() {
        let (tx, rx) = unbounded();
        let handle = NavigatorHandle::new(tx);

        assert!(handle.push(ScreenId::with_template("A", "ATemplate")));
        assert!(handle.pop(None));
        assert!(handle.pop_to(ScreenId::new("Root"), true, None));

        assert!(matches!(rx.try_recv(), Ok(Inbox::Request(Request::Push(ref r))) if r.id().name() == "A"));
        assert!(matches!(rx.try_recv(), Ok(Inbox::Request(Request::Pop { .. }))));
        assert!(matches!(
            rx.try_recv(),
            Ok(Inbox::Request(Request::PopTo { include: true, .. }))
        ));
    }

    #[test]
    fn send_reports_dropped_navigator() {
        let (tx, rx) = unbounded();
        let handle = NavigatorHandle::new(tx);
        drop(rx);
        assert!(!handle.pop(None));
    }
}
