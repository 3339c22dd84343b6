//=========================================================================
// Navigation Requests
//=========================================================================
//
// Caller-facing request types and the inbox message format.
//
// Both the navigator's own methods and `NavigatorHandle` speak in these
// types; handle requests travel through the inbox channel together with
// completion signals, so everything reaches the navigator in one FIFO.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use crate::core::screen::{Screen, ScreenData, ScreenId, ScreenInfo, Ticket, TransitionKind};

//=== Callbacks ===========================================================

/// Invoked once when a pushed screen reports that its push finished.
pub type PushedCallback = Box<dyn FnOnce(&mut dyn Screen, &ScreenInfo) + Send>;

/// Invoked once with the identity of a popped (or reached) screen.
pub type PoppedCallback = Box<dyn FnOnce(&ScreenId) + Send>;

//=== PushRequest =========================================================

/// A request to push a screen.
///
/// ```rust
/// use aetheric_ui::prelude::*;
///
/// let mut data = ScreenData::new();
/// data.insert("message", String::from("Hello")).unwrap();
///
/// let request = PushRequest::new(ScreenId::new("Popup"))
///     .with_template("PopupScreen")
///     .with_data(data)
///     .on_pushed(|_screen, info| println!("{} is up", info.id));
/// assert_eq!(request.template(), Some("PopupScreen"));
/// ```
pub struct PushRequest {
    pub(crate) id: ScreenId,
    pub(crate) data: ScreenData,
    pub(crate) template: Option<String>,
    pub(crate) on_pushed: Option<PushedCallback>,
}

impl PushRequest {
    /// Push `id` with empty data and its default template.
    pub fn new(id: ScreenId) -> Self {
        Self {
            id,
            data: ScreenData::new(),
            template: None,
            on_pushed: None,
        }
    }

    /// Payload handed to the screen's `on_push`.
    pub fn with_data(mut self, data: ScreenData) -> Self {
        self.data = data;
        self
    }

    /// Template overriding the identity's default.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Callback fired once the push finishes.
    pub fn on_pushed<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(&mut dyn Screen, &ScreenInfo) + Send + 'static,
    {
        self.on_pushed = Some(Box::new(callback));
        self
    }

    pub fn id(&self) -> &ScreenId {
        &self.id
    }

    /// Explicit template, if one was set.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// Template that will be used: the explicit one, else the identity's default.
    pub(crate) fn resolved_template(&self) -> Option<String> {
        self.template
            .clone()
            .or_else(|| self.id.default_template().map(str::to_owned))
    }
}

impl From<ScreenId> for PushRequest {
    fn from(id: ScreenId) -> Self {
        Self::new(id)
    }
}

impl fmt::Debug for PushRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushRequest")
            .field("id", &self.id)
            .field("template", &self.template)
            .field("data", &self.data)
            .field("on_pushed", &self.on_pushed.is_some())
            .finish()
    }
}

//=== Inbox ===============================================================

/// Requests a handle can make.
pub(crate) enum Request {
    Push(PushRequest),
    Pop {
        on_popped: Option<PoppedCallback>,
    },
    PopTo {
        id: ScreenId,
        include: bool,
        on_reached: Option<PoppedCallback>,
    },
}

/// Messages delivered to the navigator's inbox.
pub(crate) enum Inbox {
    /// A screen finished a push or pop.
    Finished { ticket: Ticket, kind: TransitionKind },

    /// A navigation request sent through a handle.
    Request(Request),
}

//=========================================================================
// Unit Tests
//=========================================================================
