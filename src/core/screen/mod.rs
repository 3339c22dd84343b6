//=========================================================================
// Screen System
//=========================================================================
//
// Lifecycle contract between the navigator and the screens it drives.
//
// Lifecycle:
//   constructed → on_setup (once) → on_push → [on_focus ⇄ on_focus_lost]
//               → on_pop → cached (hidden) | destroyed
//
// on_push and on_pop hand the screen a `Completion`. The navigator keeps
// its queue blocked until that completion fires.
//
//=========================================================================

//=== Module Declarations =================================================

mod completion;
mod screen_data;
mod screen_id;

//=== Public API ==========================================================

pub use completion::{Completion, Ticket, TransitionKind};
pub use screen_data::ScreenData;
pub use screen_id::ScreenId;

//=== Internal Dependencies ===============================================

use crate::core::host::NodeId;
use crate::core::navigation::NavigatorHandle;

//=== Screen Trait ========================================================

/// A navigable unit of UI driven by the [`Navigator`](crate::core::navigation::Navigator).
///
/// Only `on_push` and `on_pop` are required; both must eventually call
/// [`Completion::finish`] exactly once.
///
/// ```rust
/// use aetheric_ui::prelude::*;
///
/// struct Popup {
///     message: String,
/// }
///
/// impl Screen for Popup {
///     fn on_push(&mut self, data: ScreenData, done: Completion) {
///         self.message = data.get("message", String::from("Default"));
///         done.finish();
///     }
///
///     fn on_pop(&mut self, done: Completion) {
///         done.finish();
///     }
/// }
/// ```
pub trait Screen {
    /// Called once, right after the screen is instantiated.
    ///
    /// The context carries a [`NavigatorHandle`] the screen may keep to
    /// request navigation later (e.g. closing itself from a button).
    fn on_setup(&mut self, _context: &ScreenContext) {}

    /// Called when the screen is pushed onto the stack.
    fn on_push(&mut self, data: ScreenData, completion: Completion);

    /// Called when the screen is popped from the stack.
    fn on_pop(&mut self, completion: Completion);

    /// Called when the screen becomes the settled top of the stack.
    fn on_focus(&mut self) {}

    /// Called when the screen stops being the top of the stack.
    ///
    /// Calls may repeat without an `on_focus` in between: a screen
    /// exposed by a pop and covered again by a queued push is notified
    /// twice, since focus is held back while the queue is busy.
    fn on_focus_lost(&mut self) {}

    /// Caching and draw-order preferences.
    ///
    /// Queried whenever the navigator needs them, so a screen may change
    /// its answer over its lifetime.
    fn options(&self) -> ScreenOptions {
        ScreenOptions::default()
    }
}

//=== Screen Options ======================================================

/// Draw-order policy for a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ordered by the navigator, ascending in container order.
    #[default]
    Managed,

    /// Pinned to a fixed sort value.
    Fixed(i32),
}

/// Per-screen preferences reported through [`Screen::options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenOptions {
    /// Hide and retain the instance on pop instead of destroying it.
    pub keep_cached: bool,

    /// Draw-order policy.
    pub sort_order: SortOrder,
}

impl ScreenOptions {
    /// Options for a screen that is retained in the cache after pop.
    pub fn cached() -> Self {
        Self {
            keep_cached: true,
            ..Self::default()
        }
    }

    /// Returns a copy with a fixed sort value.
    pub fn with_sort_order(mut self, value: i32) -> Self {
        self.sort_order = SortOrder::Fixed(value);
        self
    }
}

//=== Screen Context ======================================================

/// Information handed to a screen during [`Screen::on_setup`].
#[derive(Debug, Clone)]
pub struct ScreenContext {
    id: ScreenId,
    template: String,
    navigator: NavigatorHandle,
}

impl ScreenContext {
    pub(crate) fn new(id: ScreenId, template: String, navigator: NavigatorHandle) -> Self {
        Self {
            id,
            template,
            navigator,
        }
    }

    /// Identity the screen was first pushed under.
    pub fn id(&self) -> &ScreenId {
        &self.id
    }

    /// Template the screen was instantiated from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Handle for requesting navigation from inside the screen.
    pub fn navigator(&self) -> &NavigatorHandle {
        &self.navigator
    }
}

//=== Screen Info =========================================================

/// Description of a screen that finished pushing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenInfo {
    /// Identity the screen was pushed under.
    pub id: ScreenId,

    /// Container node holding the instance. Stable across cache reuse.
    pub node: NodeId,

    /// Template the instance came from.
    pub template: String,
}

//=========================================================================
// Unit Tests
//=========================================================================
