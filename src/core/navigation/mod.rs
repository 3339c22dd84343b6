//=========================================================================
// Navigation
//=========================================================================
//
// Screen stack navigation: the navigator, its builder and handle, and
// the request types callers use to drive it.
//
// Architecture:
// ```text
//   Navigator
//     ├─► OperationQueue   (pending push/pop, FIFO)
//     ├─► ScreenCache      (hidden instances per template)
//     └─► inbox            (Completion signals + NavigatorHandle requests)
// ```
//
//=========================================================================

//=== Module Declarations =================================================

mod builder;
mod handle;
mod navigator;
mod operation_queue;
mod request;
mod screen_cache;

//=== Public Exports ======================================================

pub use builder::NavigatorBuilder;
pub use handle::NavigatorHandle;
pub use navigator::Navigator;
pub use request::{PoppedCallback, PushRequest, PushedCallback};

pub(crate) use request::Inbox;

//=== NavState ============================================================

/// What the navigator is doing right now.
///
/// Exactly one transition runs at a time; queued operations wait for
/// `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavState {
    /// No transition in flight.
    #[default]
    Ready,

    /// Waiting for a pushed screen to finish its push.
    Pushing,

    /// Waiting for a popped screen to finish its pop.
    Popping,
}
