//=========================================================================
// Headless Container
//=========================================================================
//
// In-memory VisualContainer for hosts without a rendering surface
// (servers, tools, tests). Tracks exactly what a real container would
// be told: node order, activity, sort overrides and group state.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::{GroupState, NodeId, VisualContainer};

//=== HeadlessNode ========================================================

/// A child node of a [`HeadlessContainer`].
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessNode {
    id: NodeId,
    template: String,
    active: bool,
    sort_order: Option<i32>,
}

impl HeadlessNode {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Last sort override applied, if any.
    pub fn sort_order(&self) -> Option<i32> {
        self.sort_order
    }
}

//=== HeadlessContainer ===================================================

/// Container that records node state without drawing anything.
#[derive(Debug, Default)]
pub struct HeadlessContainer {
    nodes: Vec<HeadlessNode>,
    next_id: u64,
    group: Option<GroupState>,
    destroyed: Vec<NodeId>,
}

impl HeadlessContainer {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Query API --------------------------------------------------------

    /// Looks up a live node.
    pub fn node(&self, id: NodeId) -> Option<&HeadlessNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Live nodes in draw order.
    pub fn nodes(&self) -> &[HeadlessNode] {
        &self.nodes
    }

    /// Nodes destroyed so far, in destruction order.
    pub fn destroyed(&self) -> &[NodeId] {
        &self.destroyed
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn position(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|node| node.id == id)
    }
}

impl VisualContainer for HeadlessContainer {
    fn attach(&mut self, template: &str) -> NodeId {
        self.next_id += 1;
        let id = NodeId::new(self.next_id);
        self.nodes.push(HeadlessNode {
            id,
            template: template.to_string(),
            active: true,
            sort_order: None,
        });
        trace!(target: "navigator::container", "Attached {} ({})", id, template);
        id
    }

    fn bring_to_front(&mut self, node: NodeId) {
        if let Some(pos) = self.position(node) {
            let moved = self.nodes.remove(pos);
            self.nodes.push(moved);
        }
    }

    fn set_active(&mut self, node: NodeId, active: bool) {
        if let Some(pos) = self.position(node) {
            self.nodes[pos].active = active;
        }
    }

    fn destroy(&mut self, node: NodeId) {
        if let Some(pos) = self.position(node) {
            self.nodes.remove(pos);
            self.destroyed.push(node);
            trace!(target: "navigator::container", "Destroyed {}", node);
        }
    }

    fn destroy_all(&mut self) {
        for node in self.nodes.drain(..) {
            self.destroyed.push(node.id);
        }
    }

    fn children(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|node| node.id).collect()
    }

    fn set_sort_order(&mut self, node: NodeId, order: i32) {
        if let Some(pos) = self.position(node) {
            self.nodes[pos].sort_order = Some(order);
        }
    }

    fn group_state(&self) -> Option<GroupState> {
        self.group
    }

    fn set_group_state(&mut self, state: GroupState) {
        self.group = Some(state);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
