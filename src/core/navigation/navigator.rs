//=========================================================================
// Navigator
//=========================================================================
//
// Queued, asynchronous screen stack.
//
// Screens live in a HashMap keyed by container node and are referenced
// from the stack (top = index 0) and the cache. A three-state machine
// lets exactly one push or pop run at a time; everything else waits in
// the FIFO operation queue.
//
// Flow:
//   push()/pop()/pop_to() ─> OperationQueue ─(Ready)─> execute_next()
//        ↑                                                 │
//   inbox: handle requests,                     Screen::on_push/on_pop
//          completion signals  <────── Completion::finish() ┘
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, error, log_enabled, trace, warn, Level};

//=== Internal Dependencies ===============================================

use super::operation_queue::{OperationQueue, QueuedOperation, QueuedPop, QueuedPush};
use super::request::{Inbox, PoppedCallback, PushRequest, PushedCallback, Request};
use super::screen_cache::ScreenCache;
use super::{NavState, NavigatorBuilder, NavigatorHandle};
use crate::core::error::{NavigationError, Result};
use crate::core::host::{AssetLoader, GroupState, NodeId, VisualContainer};
use crate::core::screen::{
    Completion, Screen, ScreenContext, ScreenId, ScreenInfo, SortOrder, Ticket, TransitionKind,
};

//=== Internal Types ======================================================

/// A live screen instance owned by the navigator.
struct ScreenSlot {
    id: ScreenId,
    template: String,
    screen: Box<dyn Screen>,
}

/// The transition currently in flight.
enum ActiveTransition {
    Push {
        ticket: Ticket,
        node: NodeId,
        on_pushed: Option<PushedCallback>,
    },
    Pop {
        ticket: Ticket,
        node: NodeId,
        id: ScreenId,
        on_popped: Option<PoppedCallback>,
    },
}

impl ActiveTransition {
    fn matches(&self, ticket: Ticket, kind: TransitionKind) -> bool {
        match self {
            Self::Push { ticket: t, .. } => *t == ticket && kind == TransitionKind::Push,
            Self::Pop { ticket: t, .. } => *t == ticket && kind == TransitionKind::Pop,
        }
    }
}

//=== Navigator ===========================================================

/// Manages a stack of screens with serialized, asynchronous transitions.
///
/// Build one with [`NavigatorBuilder`] (or [`Navigator::new`] for the
/// defaults) and call [`Navigator::update`] once per host frame.
///
/// ```rust
/// use aetheric_ui::prelude::*;
///
/// struct Popup;
/// impl Screen for Popup {
///     fn on_push(&mut self, _data: ScreenData, done: Completion) { done.finish(); }
///     fn on_pop(&mut self, done: Completion) { done.finish(); }
/// }
///
/// let mut templates = TemplateRegistry::new();
/// templates.register("PopupScreen", || Popup);
///
/// let mut navigator = Navigator::new(HeadlessContainer::new(), templates);
/// let popup = ScreenId::with_template("Popup", "PopupScreen");
///
/// navigator.push(popup.clone()).unwrap();
/// assert_eq!(navigator.top(), Some(&popup));
///
/// navigator.pop(None).unwrap();
/// assert!(navigator.stack().is_empty());
/// ```
pub struct Navigator<C: VisualContainer, L: AssetLoader> {
    container: C,
    loader: L,
    slots: HashMap<NodeId, ScreenSlot>,
    stack: Vec<NodeId>,
    queue: OperationQueue,
    cache: ScreenCache,
    state: NavState,
    active: Option<ActiveTransition>,
    focused: Option<NodeId>,
    next_ticket: u64,
    inbox: Receiver<Inbox>,
    outbox: Sender<Inbox>,
    drain_interval: u32,
    frame: u64,
}

impl<C: VisualContainer, L: AssetLoader> Navigator<C, L> {
    //--- Construction -----------------------------------------------------

    /// Creates a navigator with default settings.
    pub fn new(container: C, loader: L) -> Self {
        NavigatorBuilder::new().build(container, loader)
    }

    pub(super) fn from_parts(
        mut container: C,
        loader: L,
        drain_interval: u32,
        reset_container: bool,
    ) -> Self {
        if reset_container {
            let lingering = container.children().len();
            if lingering > 0 {
                debug!(target: "navigator::stack", "Destroying {} lingering container children", lingering);
            }
            container.destroy_all();
        }

        let (outbox, inbox) = unbounded();

        Self {
            container,
            loader,
            slots: HashMap::new(),
            stack: Vec::new(),
            queue: OperationQueue::new(),
            cache: ScreenCache::new(),
            state: NavState::Ready,
            active: None,
            focused: None,
            next_ticket: 0,
            inbox,
            outbox,
            drain_interval,
            frame: 0,
        }
    }

    //--- Requests ---------------------------------------------------------

    /// Queues a screen to be pushed onto the stack.
    ///
    /// A push for an identity already on the stack is ignored with a
    /// warning. If the navigator is Ready the push starts immediately.
    ///
    /// # Errors
    ///
    /// [`NavigationError::MissingTemplate`] if neither the request nor the
    /// identity names a template. Errors from operations executed during
    /// this call (e.g. [`NavigationError::Asset`]) are returned as well.
    pub fn push(&mut self, request: impl Into<PushRequest>) -> Result<()> {
        self.enqueue_push(request.into())?;
        self.drive()
    }

    /// Queues the top screen to be popped. No-op on an empty stack.
    pub fn pop(&mut self, on_popped: Option<PoppedCallback>) -> Result<()> {
        if !self.enqueue_pop(on_popped) {
            return Ok(());
        }
        self.drive()
    }

    /// Queues every screen above `id` to be popped.
    ///
    /// With `include` the target itself is popped too, and `on_reached`
    /// fires after that pop finishes. Without it, `on_reached` fires
    /// right away once the target is found. A missing target is logged;
    /// in that case the whole stack has been queued for pop.
    pub fn pop_to(
        &mut self,
        id: ScreenId,
        include: bool,
        on_reached: Option<PoppedCallback>,
    ) -> Result<()> {
        self.enqueue_pop_to(id, include, on_reached);
        self.drive()
    }

    /// Returns a handle for sending requests from screens or callbacks.
    pub fn handle(&self) -> NavigatorHandle {
        NavigatorHandle::new(self.outbox.clone())
    }

    //--- Update Loop ------------------------------------------------------

    /// Advances one host frame.
    ///
    /// Inbox messages are processed every frame; the queue is re-checked
    /// every `drain_interval` frames.
    pub fn update(&mut self) -> Result<()> {
        self.frame += 1;

        if self.frame % u64::from(self.drain_interval) == 0 {
            self.drive()
        } else {
            self.process_signals()
        }
    }

    /// Processes completion signals and handle requests received so far.
    pub fn process_signals(&mut self) -> Result<()> {
        if self.drain_inbox()? {
            self.drive()
        } else {
            Ok(())
        }
    }

    //--- Visibility -------------------------------------------------------

    /// Shows or hides the whole container.
    pub fn set_visibility(&mut self, visible: bool) {
        let state = if visible {
            GroupState::VISIBLE
        } else {
            GroupState::HIDDEN
        };
        debug!(target: "navigator::stack", "Container visibility set to {}", visible);
        self.container.set_group_state(state);
    }

    /// Returns true unless the container has been hidden.
    pub fn is_visible(&self) -> bool {
        self.container
            .group_state()
            .map_or(true, |state| state.is_visible())
    }

    //--- Query API --------------------------------------------------------

    pub fn state(&self) -> NavState {
        self.state
    }

    /// Identities on the stack, top first.
    pub fn stack(&self) -> Vec<ScreenId> {
        self.stack
            .iter()
            .filter_map(|node| self.slots.get(node))
            .map(|slot| slot.id.clone())
            .collect()
    }

    /// Identity of the top screen.
    pub fn top(&self) -> Option<&ScreenId> {
        self.stack
            .first()
            .and_then(|node| self.slots.get(node))
            .map(|slot| &slot.id)
    }

    /// Returns true if a screen with `id` is on the stack.
    pub fn contains(&self, id: &ScreenId) -> bool {
        self.stack_node(id).is_some()
    }

    /// Number of operations waiting in the queue.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Ready with nothing queued.
    pub fn is_idle(&self) -> bool {
        self.state == NavState::Ready && self.queue.is_empty()
    }

    /// Templates that currently have a cached instance, sorted.
    pub fn cached_templates(&self) -> Vec<&str> {
        self.cache.templates()
    }

    /// Borrows the screen on the stack with `id`.
    pub fn screen(&self, id: &ScreenId) -> Option<&dyn Screen> {
        let node = self.stack_node(id)?;
        self.slots.get(&node).map(|slot| slot.screen.as_ref())
    }

    /// Mutably borrows the screen on the stack with `id`.
    pub fn screen_mut(&mut self, id: &ScreenId) -> Option<&mut dyn Screen> {
        let node = self.stack_node(id)?;
        match self.slots.get_mut(&node) {
            Some(slot) => Some(slot.screen.as_mut()),
            None => None,
        }
    }

    /// Container node of the screen on the stack with `id`.
    pub fn node_of(&self, id: &ScreenId) -> Option<NodeId> {
        self.stack_node(id)
    }

    /// Frames counted by [`Navigator::update`].
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn drain_interval(&self) -> u32 {
        self.drain_interval
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Mutable access to the loader, e.g. to register more templates.
    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }

    //--- Enqueueing -------------------------------------------------------

    fn enqueue_push(&mut self, request: PushRequest) -> Result<()> {
        if self.contains(&request.id) {
            warn!(
                target: "navigator::queue",
                "Screen {} already exists in the stack, ignoring push request",
                request.id
            );
            return Ok(());
        }

        let Some(template) = request.resolved_template() else {
            return Err(NavigationError::MissingTemplate(request.id));
        };

        let PushRequest {
            id,
            data,
            on_pushed,
            ..
        } = request;

        self.queue.push(QueuedOperation::Push(QueuedPush {
            id,
            data,
            template,
            on_pushed,
        }));
        self.log_queue("Enqueued push");
        Ok(())
    }

    /// Returns false when there is nothing to pop.
    fn enqueue_pop(&mut self, on_popped: Option<PoppedCallback>) -> bool {
        let Some(top) = self.top().cloned() else {
            return false;
        };

        self.queue.push(QueuedOperation::pop(top, on_popped));
        self.log_queue("Enqueued pop");
        true
    }

    fn enqueue_pop_to(&mut self, id: ScreenId, include: bool, on_reached: Option<PoppedCallback>) {
        let mut on_reached = on_reached;
        let mut found = false;

        for screen_id in self.stack() {
            if screen_id != id {
                self.queue.push(QueuedOperation::pop(screen_id, None));
                continue;
            }

            found = true;
            if include {
                self.queue.push(QueuedOperation::pop(screen_id, on_reached.take()));
            } else if let Some(callback) = on_reached.take() {
                callback(&screen_id);
            }
            break;
        }

        if !found {
            warn!(
                target: "navigator::queue",
                "{} was not in the stack; every screen has been queued for pop",
                id
            );
        }
        self.log_queue("Enqueued pop_to");
    }

    //--- Queue Processing -------------------------------------------------

    /// Runs queued operations until one is left in flight or the queue is
    /// empty, then settles focus. A failed item still settles.
    fn drive(&mut self) -> Result<()> {
        let result = self.run_queue();
        self.settle_focus();
        result
    }

    fn run_queue(&mut self) -> Result<()> {
        loop {
            self.drain_inbox()?;

            if !self.can_execute_next() {
                return Ok(());
            }
            self.execute_next()?;
        }
    }

    /// Focuses the top screen once idle, unless it already holds focus.
    ///
    /// Covers every path that empties the queue without a transition
    /// finishing: dropped duplicate pushes, stale pops, failed loads.
    fn settle_focus(&mut self) {
        if !self.is_idle() {
            return;
        }

        let top = self.stack.first().copied();
        if top.is_some() && self.focused != top {
            self.focus_top();
        }
    }

    /// Handles every inbox message. Returns true if any arrived.
    fn drain_inbox(&mut self) -> Result<bool> {
        let mut received = false;

        while let Ok(message) = self.inbox.try_recv() {
            received = true;
            match message {
                Inbox::Finished { ticket, kind } => self.finish_transition(ticket, kind),
                Inbox::Request(request) => self.accept(request)?,
            }
        }

        Ok(received)
    }

    fn accept(&mut self, request: Request) -> Result<()> {
        match request {
            Request::Push(push) => self.enqueue_push(push),
            Request::Pop { on_popped } => {
                self.enqueue_pop(on_popped);
                Ok(())
            }
            Request::PopTo {
                id,
                include,
                on_reached,
            } => {
                self.enqueue_pop_to(id, include, on_reached);
                Ok(())
            }
        }
    }

    fn can_execute_next(&self) -> bool {
        self.state == NavState::Ready && !self.queue.is_empty()
    }

    fn execute_next(&mut self) -> Result<()> {
        let Some(operation) = self.queue.dequeue() else {
            return Ok(());
        };
        trace!(target: "navigator::queue", "Dequeued {} (frame {})", operation, self.frame);

        match operation {
            QueuedOperation::Push(push) => self.execute_push(push),
            QueuedOperation::Pop(pop) => self.execute_pop(pop),
        }
    }

    //--- Push -------------------------------------------------------------

    fn execute_push(&mut self, push: QueuedPush) -> Result<()> {
        let QueuedPush {
            id,
            data,
            template,
            on_pushed,
        } = push;

        // Two queued pushes of one identity: only the first may land.
        if self.contains(&id) {
            warn!(
                target: "navigator::queue",
                "Screen {} reached the stack while its push was queued, dropping duplicate",
                id
            );
            return Ok(());
        }

        let node = match self.cache.take(&template) {
            Some(node) => self.revive_cached(node, &id, &template),
            None => self.instantiate(&id, &template)?,
        };

        self.refresh_sort_orders();
        self.blur_top();

        self.stack.insert(0, node);
        self.state = NavState::Pushing;

        let ticket = self.issue_ticket();
        self.active = Some(ActiveTransition::Push {
            ticket,
            node,
            on_pushed,
        });
        self.log_stack(&format!("Pushing screen {} (frame {})", id, self.frame));

        let completion = Completion::new(ticket, TransitionKind::Push, self.outbox.clone());
        if let Some(slot) = self.slots.get_mut(&node) {
            slot.screen.on_push(data, completion);
        }
        Ok(())
    }

    fn revive_cached(&mut self, node: NodeId, id: &ScreenId, template: &str) -> NodeId {
        debug!(target: "navigator::cache", "Screen retrieved from cache: {}", template);

        self.container.bring_to_front(node);
        self.container.set_active(node, true);
        if let Some(slot) = self.slots.get_mut(&node) {
            slot.id = id.clone();
        }
        node
    }

    fn instantiate(&mut self, id: &ScreenId, template: &str) -> Result<NodeId> {
        let mut screen = self.loader.resolve(template)?.instantiate();
        let node = self.container.attach(template);

        let context = ScreenContext::new(id.clone(), template.to_string(), self.handle());
        screen.on_setup(&context);

        debug!(target: "navigator::stack", "Instantiated {} from template {} as {}", id, template, node);
        self.slots.insert(
            node,
            ScreenSlot {
                id: id.clone(),
                template: template.to_string(),
                screen,
            },
        );
        Ok(node)
    }

    fn complete_push(&mut self, node: NodeId, on_pushed: Option<PushedCallback>) {
        self.state = NavState::Ready;

        if let Some(slot) = self.slots.get_mut(&node) {
            debug!(target: "navigator::stack", "Push finished: {} (frame {})", slot.id, self.frame);
            if let Some(callback) = on_pushed {
                let info = ScreenInfo {
                    id: slot.id.clone(),
                    node,
                    template: slot.template.clone(),
                };
                callback(slot.screen.as_mut(), &info);
            }
        }

        // Focus waits until the stack settles.
        if self.queue.is_empty() {
            self.focus_top();
        }
    }

    //--- Pop --------------------------------------------------------------

    fn execute_pop(&mut self, pop: QueuedPop) -> Result<()> {
        let QueuedPop { id, on_popped } = pop;

        let top_id = self.top().cloned();
        if top_id.as_ref() != Some(&id) {
            error!(
                target: "navigator::stack",
                "The top screen does not match the queued pop. Top: {:?}, queued: {}",
                top_id, id
            );
            return Err(NavigationError::StackMismatch {
                expected: id,
                found: top_id,
            });
        }

        self.blur_top();
        let node = self.stack.remove(0);
        self.state = NavState::Popping;

        if self.queue.is_empty() {
            self.focus_top();
        }

        let ticket = self.issue_ticket();
        self.active = Some(ActiveTransition::Pop {
            ticket,
            node,
            id: id.clone(),
            on_popped,
        });
        self.log_stack(&format!("Popping screen {} (frame {})", id, self.frame));

        let completion = Completion::new(ticket, TransitionKind::Pop, self.outbox.clone());
        if let Some(slot) = self.slots.get_mut(&node) {
            slot.screen.on_pop(completion);
        }
        Ok(())
    }

    fn complete_pop(&mut self, node: NodeId, id: ScreenId, on_popped: Option<PoppedCallback>) {
        if let Some(slot) = self.slots.remove(&node) {
            if slot.screen.options().keep_cached {
                self.container.set_active(node, false);
                if let Some(evicted) = self.cache.store(slot.template.clone(), node) {
                    debug!(target: "navigator::cache", "Evicting cached instance {} of {}", evicted, slot.template);
                    self.destroy_node(evicted);
                }
                debug!(
                    target: "navigator::cache",
                    "Screen added to cache: {} ({} cached)",
                    slot.template,
                    self.cache.len()
                );
                self.slots.insert(node, slot);
            } else {
                self.container.destroy(node);
            }
        }

        self.state = NavState::Ready;
        debug!(target: "navigator::stack", "Pop finished: {} (frame {})", id, self.frame);

        if let Some(callback) = on_popped {
            callback(&id);
        }
    }

    //--- Completion -------------------------------------------------------

    fn finish_transition(&mut self, ticket: Ticket, kind: TransitionKind) {
        let in_flight = self
            .active
            .as_ref()
            .is_some_and(|active| active.matches(ticket, kind));

        if !in_flight {
            warn!(
                target: "navigator::stack",
                "Ignoring {:?} signal for ticket {}, it is not the transition in flight",
                kind, ticket
            );
            return;
        }

        match self.active.take() {
            Some(ActiveTransition::Push {
                node, on_pushed, ..
            }) => self.complete_push(node, on_pushed),
            Some(ActiveTransition::Pop {
                node,
                id,
                on_popped,
                ..
            }) => self.complete_pop(node, id, on_popped),
            None => {}
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }

    fn stack_node(&self, id: &ScreenId) -> Option<NodeId> {
        self.stack
            .iter()
            .copied()
            .find(|node| self.slots.get(node).is_some_and(|slot| &slot.id == id))
    }

    fn focus_top(&mut self) {
        let Some(node) = self.stack.first().copied() else {
            return;
        };
        if let Some(slot) = self.slots.get_mut(&node) {
            debug!(target: "navigator::focus", "Gained focus: {}", slot.id);
            slot.screen.on_focus();
            self.focused = Some(node);
        }
    }

    /// `focused` is only ever the top, so blurring the top clears it.
    fn blur_top(&mut self) {
        let Some(node) = self.stack.first().copied() else {
            return;
        };
        if let Some(slot) = self.slots.get_mut(&node) {
            debug!(target: "navigator::focus", "Lost focus: {}", slot.id);
            slot.screen.on_focus_lost();
        }
        self.focused = None;
    }

    fn destroy_node(&mut self, node: NodeId) {
        self.slots.remove(&node);
        self.container.destroy(node);
    }

    /// Assigns draw order: managed screens ascend in container order,
    /// fixed screens keep their value. Non-screen children are skipped.
    fn refresh_sort_orders(&mut self) {
        let mut managed = 0;

        for node in self.container.children() {
            let Some(slot) = self.slots.get(&node) else {
                continue;
            };

            let order = match slot.screen.options().sort_order {
                SortOrder::Fixed(value) => value,
                SortOrder::Managed => {
                    let order = managed;
                    managed += 1;
                    order
                }
            };
            self.container.set_sort_order(node, order);
        }
    }

    //--- Diagnostics ------------------------------------------------------

    fn log_stack(&self, event: &str) {
        debug!(target: "navigator::stack", "{}", event);
        if log_enabled!(target: "navigator::stack", Level::Trace) {
            let ids: Vec<String> = self.stack().iter().map(ToString::to_string).collect();
            trace!(target: "navigator::stack", "[Screen Stack] {}", ids.join(", "));
        }
    }

    fn log_queue(&self, event: &str) {
        if log_enabled!(target: "navigator::queue", Level::Trace) {
            let pending: Vec<String> = self.queue.iter().map(ToString::to_string).collect();
            trace!(
                target: "navigator::queue",
                "{} (frame {}) [Screen Queue] {}",
                event,
                self.frame,
                pending.join(", ")
            );
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
