//! Key-value persistence for the Mystique Masala ordering core.
//!
//! A [`Storage`] backend stores raw bytes under string keys; [`Cache`] adds
//! JSON serialization on top of any backend.
//!
//! Backends:
//! - [`MemoryStorage`] - in-process map, used by tests and previews
//! - [`FileStorage`] - one file per key, used by the command line tool
//! - `LocalStorage` - the browser's `window.localStorage` (feature `hydrate`)
//!
//! # Example
//!
//! ```
//! use masala_cache::{Cache, MemoryStorage};
//!
//! let cache = Cache::new(MemoryStorage::new());
//! cache.set("cart", &vec!["Paneer Tikka"]).unwrap();
//! let cart: Option<Vec<String>> = cache.get("cart").unwrap();
//! assert_eq!(cart.unwrap().len(), 1);
//! ```

mod error;
mod kv;
mod storage;

#[cfg(feature = "hydrate")]
mod browser;

pub use error::CacheError;
pub use kv::Cache;
pub use storage::{FileStorage, MemoryStorage, Storage};

#[cfg(feature = "hydrate")]
pub use browser::LocalStorage;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStorage, MemoryStorage, Storage};
}
