//=========================================================================
// Core
//
// Screen navigation building blocks.
//
// Responsibilities:
// - `screen`: what a screen is (identity, payload, lifecycle hooks)
// - `host`: the seams to the presentation layer (container, templates)
// - `navigation`: the navigator that owns the stack and its queue
// - `error`: error types shared by all of the above
//
//=========================================================================

pub mod error;
pub mod host;
pub mod navigation;
pub mod screen;
