//=========================================================================
// Screen Data
//=========================================================================
//
// Heterogeneous, write-once payload handed to a screen when it is pushed.
//
// Values are stored type-erased (`Box<dyn Any + Send>`) and recovered
// through typed accessors. Lenient accessors fall back to a caller
// default; in development builds the miss is reported so integration
// bugs show up early.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;

#[cfg(not(feature = "strict-data"))]
use log::error;

//=== Internal Dependencies ===============================================

use crate::core::error::DataError;

//=== ScreenData ==========================================================

/// Key/value payload passed from the caller to the screen being pushed.
///
/// ```rust
/// use aetheric_ui::prelude::*;
///
/// let mut data = ScreenData::new();
/// data.insert("message", String::from("Saved!")).unwrap();
///
/// let text: String = data.get("message", String::from("Default"));
/// assert_eq!(text, "Saved!");
/// assert!(data.insert("message", String::from("again")).is_err());
/// ```
#[derive(Default)]
pub struct ScreenData {
    values: HashMap<String, Box<dyn Any + Send>>,
}

impl ScreenData {
    //--- Construction -----------------------------------------------------

    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty payload with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: HashMap::with_capacity(capacity),
        }
    }

    //--- Writing ----------------------------------------------------------

    /// Stores `value` under `key`.
    ///
    /// Keys are write-once: inserting an existing key fails with
    /// [`DataError::DuplicateKey`] and leaves the stored value untouched.
    pub fn insert<T>(&mut self, key: impl Into<String>, value: T) -> Result<(), DataError>
    where
        T: Any + Send,
    {
        let key = key.into();
        if self.values.contains_key(&key) {
            return Err(DataError::DuplicateKey(key));
        }
        self.values.insert(key, Box::new(value));
        Ok(())
    }

    //--- Reading ----------------------------------------------------------

    /// Returns a clone of the value under `key`, or `default` when the key
    /// is absent or holds a different type.
    ///
    /// Misses are logged in debug builds and panic with the `strict-data`
    /// feature.
    pub fn get<T>(&self, key: &str, default: T) -> T
    where
        T: Any + Clone,
    {
        match self.try_get::<T>(key) {
            Ok(value) => value.clone(),
            Err(err) => {
                report_miss(err);
                default
            }
        }
    }

    /// Returns `(true, value)` when `key` holds a `T`, otherwise
    /// `(false, default)`.
    ///
    /// An absent key is an expected outcome here and is not reported; a
    /// type mismatch is reported like [`ScreenData::get`].
    pub fn try_get_or<T>(&self, key: &str, default: T) -> (bool, T)
    where
        T: Any + Clone,
    {
        match self.try_get::<T>(key) {
            Ok(value) => (true, value.clone()),
            Err(DataError::MissingKey(_)) => (false, default),
            Err(err) => {
                report_miss(err);
                (false, default)
            }
        }
    }

    /// Borrows the value under `key` as a `T`.
    pub fn try_get<T: Any>(&self, key: &str) -> Result<&T, DataError> {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| DataError::MissingKey(key.to_string()))?;

        value
            .downcast_ref::<T>()
            .ok_or_else(|| DataError::TypeMismatch {
                key: key.to_string(),
                expected: type_name::<T>(),
            })
    }

    //--- Query API --------------------------------------------------------

    /// Returns true if a value is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns an iterator over the stored keys (arbitrary order).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for ScreenData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("ScreenData").field("keys", &keys).finish()
    }
}

//--- Miss Reporting ------------------------------------------------------

#[cfg(feature = "strict-data")]
fn report_miss(err: DataError) {
    panic!("[ScreenData] {}", err);
}

#[cfg(not(feature = "strict-data"))]
fn report_miss(err: DataError) {
    if cfg!(debug_assertions) {
        error!(target: "navigator::data", "[ScreenData] {}", err);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScreenData {
        let mut data = ScreenData::with_capacity(2);
        data.insert("message", String::from("hello")).unwrap();
        data.insert("count", 3u32).unwrap();
        data
    }

    #[test]
    fn insert_is_write_once() {
        let mut data = sample();
        let err = data.insert("count", 9u32).unwrap_err();
        assert_eq!(err, DataError::DuplicateKey("count".into()));
        assert_eq!(data.get("count", 0u32), 3, "Original value must survive");
    }

    #[test]
    fn get_returns_stored_value() {
        let data = sample();
        assert_eq!(data.get("message", String::new()), "hello");
        assert_eq!(data.get("count", 0u32), 3);
    }

    #[test]
    #[cfg(not(feature = "strict-data"))]
    fn get_falls_back_on_missing_key() {
        let data = sample();
        assert_eq!(data.get("absent", 7i64), 7);
    }

    #[test]
    #[cfg(not(feature = "strict-data"))]
    fn get_falls_back_on_type_mismatch() {
        let data = sample();
        assert_eq!(data.get("count", 5u64), 5, "u32 stored, u64 requested");
    }

    #[test]
    #[cfg(feature = "strict-data")]
    #[should_panic(expected = "[ScreenData]")]
    fn strict_get_panics_on_type_mismatch() {
        sample().get("count", 5u64);
    }

    #[test]
    fn try_get_reports_precise_errors() {
        let data = sample();
        assert_eq!(data.try_get::<u32>("count"), Ok(&3));
        assert_eq!(
            data.try_get::<u32>("missing"),
            Err(DataError::MissingKey("missing".into()))
        );
        assert!(matches!(
            data.try_get::<bool>("count"),
            Err(DataError::TypeMismatch { ref key, .. }) if key == "count"
        ));
    }

    #[test]
    fn try_get_or_flags_presence() {
        let data = sample();
        assert_eq!(data.try_get_or("count", 0u32), (true, 3));
        assert_eq!(data.try_get_or("missing", 1u32), (false, 1));
    }

    #[test]
    fn query_helpers() {
        let data = sample();
        assert_eq!(data.len(), 2);
        assert!(!data.is_empty());
        assert!(data.contains_key("message"));
        assert!(ScreenData::new().is_empty());
        assert_eq!(format!("{:?}", data), r#"ScreenData { keys: ["count", "message"] }"#);
    }
}
