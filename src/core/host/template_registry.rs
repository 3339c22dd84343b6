//=========================================================================
// Template Registry
//=========================================================================
//
// In-memory asset loader: template names mapped to screen factories.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{AssetLoader, ScreenTemplate};
use crate::core::error::AssetError;
use crate::core::screen::Screen;

//=== TemplateRegistry ====================================================

/// Asset loader backed by registered factories.
///
/// ```rust
/// use aetheric_ui::prelude::*;
///
/// struct Empty;
/// impl Screen for Empty {
///     fn on_push(&mut self, _data: ScreenData, done: Completion) { done.finish(); }
///     fn on_pop(&mut self, done: Completion) { done.finish(); }
/// }
///
/// let mut registry = TemplateRegistry::new();
/// registry.register("EmptyScreen", || Empty);
/// assert!(registry.resolve("EmptyScreen").is_ok());
/// assert!(registry.resolve("Missing").is_err());
/// ```
#[derive(Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Box<dyn ScreenTemplate>>,
}

impl TemplateRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Registration -----------------------------------------------------

    /// Registers a factory producing screens of type `S`.
    ///
    /// Registering a name twice replaces the earlier factory.
    pub fn register<S, F>(&mut self, name: impl Into<String>, factory: F)
    where
        S: Screen + 'static,
        F: Fn() -> S + 'static,
    {
        let boxed = move || -> Box<dyn Screen> { Box::new(factory()) };
        self.register_template(name, boxed);
    }

    /// Registers an arbitrary [`ScreenTemplate`].
    pub fn register_template<T>(&mut self, name: impl Into<String>, template: T)
    where
        T: ScreenTemplate + 'static,
    {
        let name = name.into();
        debug!(target: "navigator::assets", "Registered template {}", name);
        if self.templates.insert(name.clone(), Box::new(template)).is_some() {
            warn!(target: "navigator::assets", "Template {} was already registered and has been replaced", name);
        }
    }

    //--- Query API --------------------------------------------------------

    /// Returns true if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Returns the number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl AssetLoader for TemplateRegistry {
    fn resolve(&self, template: &str) -> Result<&dyn ScreenTemplate, AssetError> {
        self.templates
            .get(template)
            .map(|boxed| boxed.as_ref())
            .ok_or_else(|| AssetError::NotFound(template.to_string()))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::screen::{Completion, ScreenData, ScreenOptions};

    struct Tagged(i32);

    impl Screen for Tagged {
        fn on_push(&mut self, _data: ScreenData, completion: Completion) {
            completion.finish();
        }

        fn on_pop(&mut self, completion: Completion) {
            completion.finish();
        }

        fn options(&self) -> ScreenOptions {
            ScreenOptions::default().with_sort_order(self.0)
        }
    }

    #[test]
    fn resolve_unknown_template_fails() {
        let registry = TemplateRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(
            registry.resolve("Nope").err(),
            Some(AssetError::NotFound("Nope".into()))
        );
    }

    #[test]
    fn resolved_template_builds_fresh_instances() {
        let mut registry = TemplateRegistry::new();
        registry.register("Tagged", || Tagged(7));

        let template = registry.resolve("Tagged").unwrap();
        let first = template.instantiate();
        let second = template.instantiate();
        assert_eq!(first.options(), second.options());
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("Tagged"));
    }

    #[test]
    fn re_registering_replaces_factory() {
        let mut registry = TemplateRegistry::new();
        registry.register("Tagged", || Tagged(1));
        registry.register("Tagged", || Tagged(2));

        let screen = registry.resolve("Tagged").unwrap().instantiate();
        assert_eq!(screen.options(), ScreenOptions::default().with_sort_order(2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn closures_are_templates() {
        let mut registry = TemplateRegistry::new();
        registry.register_template("Raw", || -> Box<dyn Screen> { Box::new(Tagged(3)) });
        assert!(registry.resolve("Raw").is_ok());
    }
}
