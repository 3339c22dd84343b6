//=========================================================================
// Screen Cache
//=========================================================================
//
// Hidden, reusable screen instances keyed by template name.
// One slot per template; storing into an occupied slot evicts the old
// instance, which the caller is expected to destroy.
//
//=========================================================================

use std::collections::HashMap;

use crate::core::host::NodeId;

#[derive(Default)]
pub(crate) struct ScreenCache {
    slots: HashMap<String, NodeId>,
}

impl ScreenCache {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Stores `node` for `template`, returning the evicted node if the
    /// slot was occupied.
    pub fn store(&mut self, template: String, node: NodeId) -> Option<NodeId> {
        self.slots.insert(template, node).filter(|evicted| *evicted != node)
    }

    /// Removes and returns the cached node for `template`.
    pub fn take(&mut self, template: &str) -> Option<NodeId> {
        self.slots.remove(template)
    }

    /// Cached template names, sorted.
    pub fn templates(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.slots.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_empties_the_slot() {
        let mut cache = ScreenCache::new();
        assert_eq!(cache.store("Popup".into(), NodeId::new(1)), None);
        assert_eq!(cache.take("Popup"), Some(NodeId::new(1)));
        assert_eq!(cache.take("Popup"), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn second_store_evicts_previous_instance() {
        let mut cache = ScreenCache::new();
        cache.store("Popup".into(), NodeId::new(1));
        assert_eq!(cache.store("Popup".into(), NodeId::new(2)), Some(NodeId::new(1)));
        assert_eq!(cache.take("Popup"), Some(NodeId::new(2)));
    }

    #[test]
    fn templates_are_sorted() {
        let mut cache = ScreenCache::new();
        cache.store("Shop".into(), NodeId::new(1));
        cache.store("Inventory".into(), NodeId::new(2));
        assert_eq!(cache.templates(), vec!["Inventory", "Shop"]);
    }
}
