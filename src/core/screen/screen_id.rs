//=========================================================================
// Screen Identity
//=========================================================================
//
// Logical key of a screen on the navigation stack.
//
// Identities are compared and hashed *by name only*. The optional
// default template travels with the identity so callers can push a
// screen without naming its template every time.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

//=== ScreenId ============================================================

/// Immutable identity of a logical screen.
///
/// At most one screen with a given identity may be on the navigation
/// stack at any time. Cloning is cheap (shared string storage).
///
/// ```rust
/// use aetheric_ui::prelude::*;
///
/// let popup = ScreenId::with_template("Popup", "PopupScreen");
/// assert_eq!(popup, ScreenId::new("Popup"));
/// assert_eq!(popup.default_template(), Some("PopupScreen"));
/// ```
#[derive(Clone)]
pub struct ScreenId {
    name: Arc<str>,
    default_template: Option<Arc<str>>,
}

impl ScreenId {
    /// Creates an identity without a default template.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
            default_template: None,
        }
    }

    /// Creates an identity that resolves to `template` when pushed
    /// without an explicit template name.
    pub fn with_template(name: impl AsRef<str>, template: impl AsRef<str>) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
            default_template: Some(Arc::from(template.as_ref())),
        }
    }

    /// Returns the screen name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the default template name, if one was supplied.
    pub fn default_template(&self) -> Option<&str> {
        self.default_template.as_deref()
    }
}

//=========================================================================
// Equality and Hashing
//
// The default template is metadata; two identities with the same name
// are the same screen regardless of their templates.
//=========================================================================

impl PartialEq for ScreenId {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ScreenId {}

impl Hash for ScreenId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.default_template {
            Some(template) => write!(f, "ScreenId({} -> {})", self.name, template),
            None => write!(f, "ScreenId({})", self.name),
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for ScreenId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_ignores_default_template() {
        let a = ScreenId::with_template("Menu", "MenuA");
        let b = ScreenId::with_template("Menu", "MenuB");
        let c = ScreenId::new("Menu");
        assert_eq!(a, b, "Identities with the same name must be equal");
        assert_eq!(a, c, "Template metadata must not affect equality");
    }

    #[test]
    fn different_names_are_distinct() {
        assert_ne!(ScreenId::new("Menu"), ScreenId::new("Popup"));
    }

    #[test]
    fn hash_follows_name_only() {
        let a = ScreenId::with_template("Menu", "MenuA");
        let b = ScreenId::new("Menu");
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn hashset_keeps_one_entry_per_name() {
        let mut set = HashSet::new();
        set.insert(ScreenId::new("Menu"));
        set.insert(ScreenId::with_template("Menu", "Other"));
        set.insert(ScreenId::new("Popup"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display_prints_name() {
        let id = ScreenId::with_template("Inventory", "InventoryScreen");
        assert_eq!(id.to_string(), "Inventory");
        assert_eq!(format!("{:?}", id), "ScreenId(Inventory -> InventoryScreen)");
    }

    #[test]
    fn default_template_is_optional() {
        assert_eq!(ScreenId::new("Empty").default_template(), None);
        assert_eq!(ScreenId::from("Empty").name(), "Empty");
    }
}
