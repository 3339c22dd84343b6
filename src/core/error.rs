//=========================================================================
// Navigation Errors
//=========================================================================
//
// Error taxonomy for the navigation core.
//
// Non-fatal conditions (duplicate push, pop_to target missing) are not
// errors; they are logged and dropped. Only conditions that leave a
// request unserviceable surface here.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::screen::ScreenId;

//=== Result Alias ========================================================

/// Result type for fallible navigator operations.
pub type Result<T> = std::result::Result<T, NavigationError>;

//=== NavigationError =====================================================

/// Errors raised while queueing or executing navigation operations.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// The push named no template and the identity carries no default.
    #[error("screen `{0}` has no template name and no default template")]
    MissingTemplate(ScreenId),

    /// The asset loader could not resolve the requested template.
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// A dequeued pop does not match the screen on top of the stack.
    ///
    /// Queue and stack state have diverged. The offending pop is
    /// discarded.
    #[error("top screen {found:?} does not match queued pop `{expected}`")]
    StackMismatch {
        expected: ScreenId,
        found: Option<ScreenId>,
    },
}

//=== AssetError ==========================================================

/// Errors raised by an [`AssetLoader`](crate::core::host::AssetLoader).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("template `{0}` not found")]
    NotFound(String),
}

//=== DataError ===========================================================

/// Errors raised by [`ScreenData`](crate::core::screen::ScreenData).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("key `{0}` is already present")]
    DuplicateKey(String),

    #[error("no value stored for key `{0}`")]
    MissingKey(String),

    #[error("value for key `{key}` is not a `{expected}`")]
    TypeMismatch { key: String, expected: &'static str },
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_error_converts_into_navigation_error() {
        let err: NavigationError = AssetError::NotFound("Popup".into()).into();
        assert!(matches!(err, NavigationError::Asset(AssetError::NotFound(ref name)) if name == "Popup"));
        assert_eq!(err.to_string(), "template `Popup` not found");
    }

    #[test]
    fn stack_mismatch_names_both_screens() {
        let err = NavigationError::StackMismatch {
            expected: ScreenId::new("A"),
            found: Some(ScreenId::new("B")),
        };
        let message = err.to_string();
        assert!(message.contains("`A`"), "message was: {}", message);
        assert!(message.contains("ScreenId(B)"), "message was: {}", message);
    }

    #[test]
    fn data_error_messages() {
        let err = DataError::TypeMismatch {
            key: "count".into(),
            expected: "u32",
        };
        assert_eq!(err.to_string(), "value for key `count` is not a `u32`");
    }
}
