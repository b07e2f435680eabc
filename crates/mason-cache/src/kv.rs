//! Key-value store wrapper with automatic serialization.

use crate::{CacheError, Store};
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe cache over a string [`Store`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
pub struct Cache<S> {
    store: S,
}

impl<S: Store> Cache<S> {
    /// Wrap a store.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cache = Cache::new(LocalStore::open()?);
    /// ```
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist, and an error if the stored
    /// text is not valid JSON for `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Swatch {
        code: String,
        finish: String,
    }

    #[test]
    fn test_set_then_get() {
        let cache = Cache::new(MemoryStore::new());
        let swatch = Swatch {
            code: "RAL-9010".into(),
            finish: "matte".into(),
        };

        cache.set("swatch", &swatch).unwrap();
        assert_eq!(cache.get::<Swatch>("swatch").unwrap(), Some(swatch));
        assert_eq!(
            cache.store().get("swatch").unwrap().as_deref(),
            Some(r#"{"code":"RAL-9010","finish":"matte"}"#)
        );
    }

    #[test]
    fn test_missing_key() {
        let cache = Cache::new(MemoryStore::new());
        assert_eq!(cache.get::<Swatch>("swatch").unwrap(), None);
    }

    #[test]
    fn test_corrupt_value_is_an_error() {
        let cache = Cache::new(MemoryStore::with_entries([("swatch", "{not json")]));
        let err = cache.get::<Swatch>("swatch").unwrap_err();
        assert!(matches!(err, CacheError::SerializeError(_)));
    }

    #[test]
    fn test_delete() {
        let cache = Cache::new(MemoryStore::with_entries([("swatch", "{}")]));
        cache.delete("swatch").unwrap();
        assert_eq!(cache.store().get("swatch").unwrap(), None);
    }
}
