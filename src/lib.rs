//=========================================================================
// Aetheric UI - Library Root
//
// Stack-based screen navigation for UI layers.
//
// Responsibilities:
// - Expose the navigator (`Navigator`, `NavigatorBuilder`)
// - Define the screen contract (`Screen`, `Completion`, `ScreenData`)
// - Define the host seams (`VisualContainer`, `AssetLoader`) together
//   with in-memory implementations for headless use and tests
//
// Typical usage:
// ```no_run
// use aetheric_ui::prelude::*;
//
// let mut navigator = Navigator::new(HeadlessContainer::new(), TemplateRegistry::new());
// loop {
//     navigator.update().ok();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds every subsystem. Most applications only need the prelude.
//
pub mod core;
pub mod prelude;

//--- Public Exports ------------------------------------------------------

pub use core::error::{NavigationError, Result};
pub use core::navigation::{Navigator, NavigatorBuilder};
