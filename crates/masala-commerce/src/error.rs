//! Commerce error types.

use masala_cache::CacheError;
use thiserror::Error;

/// Errors that can occur in cart, menu and checkout operations.
///
/// Absence is not an error: removing or updating an item that is not in
/// the cart is a no-op, and unreadable persisted state loads as an empty
/// cart.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Quantity below one on add.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, u32),

    /// Price text could not be parsed.
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Your cart is empty")]
    EmptyCart,

    /// Persisted cart could not be decoded.
    #[error("Corrupt cart snapshot: {0}")]
    CorruptSnapshot(String),

    /// Persisted cart was written by a newer format.
    #[error("Unsupported cart snapshot version {0}")]
    UnsupportedSnapshotVersion(u64),

    /// Persistence failed.
    #[error("Storage error: {0}")]
    Storage(#[from] CacheError),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::CorruptSnapshot(e.to_string())
    }
}
