//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_ui::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Navigator
pub use crate::core::navigation::{
    NavState, Navigator, NavigatorBuilder, NavigatorHandle, PoppedCallback, PushRequest,
    PushedCallback,
};

// Screens
pub use crate::core::screen::{
    Completion, Screen, ScreenContext, ScreenData, ScreenId, ScreenInfo, ScreenOptions, SortOrder,
    Ticket, TransitionKind,
};

// Host seams
pub use crate::core::host::{
    AssetLoader, GroupState, HeadlessContainer, HeadlessNode, NodeId, ScreenTemplate,
    TemplateRegistry, VisualContainer,
};

// Errors
pub use crate::core::error::{AssetError, DataError, NavigationError};
