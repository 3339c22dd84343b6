//=========================================================================
// Host Collaborators
//=========================================================================
//
// Seams between the navigator and the host rendering surface.
//
// Architecture:
//   AssetLoader      template name ─resolve()─> ScreenTemplate
//   ScreenTemplate   instantiate() ──────────> Box<dyn Screen>
//   VisualContainer  child nodes, draw order, group visibility
//
// The navigator never renders anything itself. It only tells the
// container which nodes exist, which are active and how they sort.
//
//=========================================================================

//=== Module Declarations =================================================

mod headless;
mod template_registry;

//=== Public API ==========================================================

pub use headless::{HeadlessContainer, HeadlessNode};
pub use template_registry::TemplateRegistry;

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use crate::core::error::AssetError;
use crate::core::screen::Screen;

//=== NodeId ==============================================================

/// Handle of a child node inside a [`VisualContainer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Wraps a container-specific raw id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node:{}", self.0)
    }
}

//=== GroupState ==========================================================

/// Whole-container presentation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupState {
    /// Opacity in `0.0..=1.0`.
    pub alpha: f32,

    /// Whether child widgets accept interaction.
    pub interactable: bool,

    /// Whether the container intercepts pointer input.
    pub blocks_input: bool,
}

impl GroupState {
    /// Fully shown and interactive.
    pub const VISIBLE: Self = Self {
        alpha: 1.0,
        interactable: true,
        blocks_input: true,
    };

    /// Transparent and input-transparent.
    pub const HIDDEN: Self = Self {
        alpha: 0.0,
        interactable: false,
        blocks_input: false,
    };

    /// Returns true only when the group is shown and interactive.
    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0 && self.interactable && self.blocks_input
    }
}

//=== ScreenTemplate ======================================================

/// Something that can construct fresh screen instances.
///
/// Closures returning a boxed screen implement this trait.
pub trait ScreenTemplate {
    fn instantiate(&self) -> Box<dyn Screen>;
}

impl<F> ScreenTemplate for F
where
    F: Fn() -> Box<dyn Screen>,
{
    fn instantiate(&self) -> Box<dyn Screen> {
        self()
    }
}

//=== AssetLoader =========================================================

/// Resolves template names to constructible templates.
pub trait AssetLoader {
    fn resolve(&self, template: &str) -> Result<&dyn ScreenTemplate, AssetError>;
}

//=== VisualContainer =====================================================

/// Parent node that holds screen visuals.
///
/// Child order returned by [`VisualContainer::children`] is draw order,
/// first to last. Newly attached nodes go last.
pub trait VisualContainer {
    /// Creates a child node for an instance of `template`.
    fn attach(&mut self, template: &str) -> NodeId;

    /// Moves `node` to the end of the draw order.
    fn bring_to_front(&mut self, node: NodeId);

    /// Shows or hides a single node.
    fn set_active(&mut self, node: NodeId, active: bool);

    /// Removes and destroys a node.
    fn destroy(&mut self, node: NodeId);

    /// Removes and destroys every child node.
    fn destroy_all(&mut self);

    /// All child nodes in draw order, active or not.
    fn children(&self) -> Vec<NodeId>;

    /// Applies a sort override to a node.
    fn set_sort_order(&mut self, node: NodeId, order: i32);

    /// Current group state, `None` if it was never set.
    fn group_state(&self) -> Option<GroupState>;

    fn set_group_state(&mut self, state: GroupState);
}

//=========================================================================
// Unit Tests
//=========================================================================
