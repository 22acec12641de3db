//! Browser `localStorage` backend.

use crate::{CacheError, Storage};

/// Storage backed by the page's `window.localStorage`.
///
/// Values survive reloads and are shared by every tab of the origin, but a
/// write in one tab is only seen by another tab when it reads again.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Open the current window's `localStorage`.
    pub fn open() -> Result<Self, CacheError> {
        let window =
            web_sys::window().ok_or_else(|| CacheError::OpenError("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| CacheError::OpenError(format!("{:?}", e)))?
            .ok_or_else(|| CacheError::OpenError("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl std::fmt::Debug for LocalStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalStorage").finish_non_exhaustive()
    }
}

impl Storage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        self.storage
            .get_item(key)
            .map(|value| value.map(String::into_bytes))
            .map_err(|e| CacheError::StoreError(format!("{:?}", e)))
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), CacheError> {
        let text =
            std::str::from_utf8(bytes).map_err(|_| CacheError::NotUtf8(key.to_string()))?;
        self.storage
            .set_item(key, text)
            .map_err(|e| CacheError::StoreError(format!("{:?}", e)))
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.storage
            .remove_item(key)
            .map_err(|e| CacheError::StoreError(format!("{:?}", e)))
    }
}
