//! Typed cache with automatic JSON serialization.

use serde::{de::DeserializeOwned, Serialize};

use crate::{CacheError, Storage};

/// Type-safe cache over any [`Storage`] backend.
///
/// Provides JSON serialization for any type that implements `Serialize`
/// and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache<S> {
    store: S,
}

impl<S: Storage> Cache<S> {
    /// Wrap a storage backend.
    ///
    /// # Example
    ///
    /// ```
    /// use masala_cache::{Cache, MemoryStorage};
    ///
    /// let cache = Cache::new(MemoryStorage::new());
    /// cache.set("greeting", &"namaste").unwrap();
    /// let value: Option<String> = cache.get("greeting").unwrap();
    /// assert_eq!(value.as_deref(), Some("namaste"));
    /// ```
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist and an error if the stored
    /// bytes are not valid JSON for `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.read(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.write(key, &bytes)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.store.read(key)?.is_some())
    }

    /// Borrow the underlying backend.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Dish {
        name: String,
        quantity: u32,
    }

    #[test]
    fn test_set_then_get() {
        let cache = Cache::new(MemoryStorage::new());
        let dish = Dish {
            name: "Dal Makhani".to_string(),
            quantity: 2,
        };
        cache.set("dish", &dish).unwrap();

        let loaded: Option<Dish> = cache.get("dish").unwrap();
        assert_eq!(loaded, Some(dish));
        assert!(cache.exists("dish").unwrap());
    }

    #[test]
    fn test_get_missing() {
        let cache = Cache::new(MemoryStorage::new());
        let loaded: Option<Dish> = cache.get("dish").unwrap();
        assert!(loaded.is_none());
        assert!(!cache.exists("dish").unwrap());
    }

    #[test]
    fn test_get_malformed_is_error() {
        let store = MemoryStorage::new();
        store.write("dish", b"not json").unwrap();
        let cache = Cache::new(store);

        let result: Result<Option<Dish>, _> = cache.get("dish");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
    }

    #[test]
    fn test_delete() {
        let cache = Cache::new(MemoryStorage::new());
        cache.set("dish", &1).unwrap();
        cache.delete("dish").unwrap();
        assert!(!cache.exists("dish").unwrap());
    }
}
