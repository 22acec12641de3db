//! Ordering logic for the Mystique Masala website.
//!
//! - **Cart**: line items unique by name, a store that writes every change
//!   through to key-value storage, and change notifications for the view
//! - **Menu**: dishes, categories and the category filter
//! - **Notifications**: short-lived banners
//! - **Checkout**: the entry point that validates a cart before ordering
//!
//! # Example
//!
//! ```
//! use masala_cache::MemoryStorage;
//! use masala_commerce::prelude::*;
//!
//! let mut store = CartStore::load_default(MemoryStorage::new());
//! store.add(LineItem::from_display_price("Lassi", "₹80", Currency::INR, 1))?;
//! store.set_quantity("Lassi", -1)?;
//! assert!(store.is_empty());
//! assert_eq!(store.total().display(), "₹0.00");
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod money;

pub mod cart;
pub mod checkout;
pub mod menu;
pub mod notify;

pub use error::CommerceError;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{
        Cart, CartEvent, CartObserver, CartStore, LineItem, DEFAULT_CART_KEY,
        MAX_QUANTITY_PER_ITEM,
    };

    // Menu
    pub use crate::menu::{CategoryTabs, Menu, MenuCategory, MenuFilter, MenuItem};

    // Notifications and checkout
    pub use crate::checkout::{begin_checkout, CheckoutSummary};
    pub use crate::notify::{Notification, NotificationKind, Notifications};
}
