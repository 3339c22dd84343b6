//=========================================================================
// Navigator Builder
//
// Configuration entry point for the navigator.
//
// ```text
//     NavigatorBuilder  ──build(container, loader)──>  Navigator
//         │
//         ├─ with_drain_interval()
//         └─ with_container_reset()
// ```
//
//=========================================================================

use log::info;

use super::Navigator;
use crate::core::host::{AssetLoader, VisualContainer};

/// Builder for configuring and constructing a [`Navigator`].
///
/// # Default Values
///
/// - **Drain interval**: 3 frames between queue re-checks in `update()`
/// - **Container reset**: on (children left in the container are destroyed)
///
/// # Examples
///
/// ```rust
/// use aetheric_ui::prelude::*;
///
/// let navigator = NavigatorBuilder::new()
///     .with_drain_interval(1)
///     .with_container_reset(false)
///     .build(HeadlessContainer::new(), TemplateRegistry::new());
///
/// assert_eq!(navigator.drain_interval(), 1);
/// assert!(navigator.is_idle());
/// ```
#[derive(Debug, Clone)]
pub struct NavigatorBuilder {
    drain_interval: u32,
    reset_container: bool,
}

impl NavigatorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            drain_interval: 3,
            reset_container: true,
        }
    }

    /// Sets how many `update()` calls pass between queue re-checks.
    ///
    /// Completion signals and handle requests are handled on every
    /// frame regardless.
    ///
    /// Default: 3
    ///
    /// # Panics
    ///
    /// Panics if `frames == 0`.
    pub fn with_drain_interval(mut self, frames: u32) -> Self {
        assert!(frames > 0, "Drain interval must be positive, got {}", frames);
        self.drain_interval = frames;
        self
    }

    /// Whether `build` destroys children already present in the container.
    ///
    /// Default: true
    pub fn with_container_reset(mut self, reset: bool) -> Self {
        self.reset_container = reset;
        self
    }

    /// Builds the navigator around `container` and `loader`.
    pub fn build<C: VisualContainer, L: AssetLoader>(self, container: C, loader: L) -> Navigator<C, L> {
        info!(
            target: "navigator::stack",
            "Building navigator (drain interval: {}, reset container: {})",
            self.drain_interval, self.reset_container
        );

        Navigator::from_parts(container, loader, self.drain_interval, self.reset_container)
    }
}

impl Default for NavigatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
