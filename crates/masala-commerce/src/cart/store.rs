//! The cart store: the authoritative cart kept in sync with storage.

use chrono::Utc;
use masala_cache::{Cache, Storage};
use serde_json::Value;

use crate::cart::{snapshot, Cart, CartEvent, CartObserver, CartSnapshot, LineItem};
use crate::error::CommerceError;
use crate::money::{Currency, Money};

/// Storage key the cart is kept under.
pub const DEFAULT_CART_KEY: &str = "cart";

/// Owns the in-memory cart and writes it through to storage on every change.
///
/// A mutation is applied to a copy of the cart, the copy is persisted, and
/// only then does it replace the in-memory cart. If the write fails the
/// error is returned and neither side has changed.
///
/// ```
/// use masala_cache::MemoryStorage;
/// use masala_commerce::cart::{CartStore, LineItem};
/// use masala_commerce::money::{Currency, Money};
///
/// let mut store = CartStore::load_default(MemoryStorage::new());
/// store.add(LineItem::new("Paneer Tikka", Money::from_major(250, Currency::INR), 1))?;
/// store.add(LineItem::new("Paneer Tikka", Money::from_major(250, Currency::INR), 2))?;
/// assert_eq!(store.item_count(), 3);
/// assert_eq!(store.total().display_amount(), "750.00");
/// # Ok::<(), masala_commerce::CommerceError>(())
/// ```
pub struct CartStore<S> {
    cache: Cache<S>,
    key: String,
    cart: Cart,
    observers: Vec<Box<dyn CartObserver>>,
}

impl<S: Storage> CartStore<S> {
    /// Load the cart stored under `key`.
    ///
    /// Never fails: missing, unreadable or malformed state loads as an empty
    /// cart in `currency`.
    pub fn load(storage: S, key: impl Into<String>, currency: Currency) -> Self {
        let cache = Cache::new(storage);
        let key = key.into();
        let cart = read_cart(&cache, &key, currency);
        Self {
            cache,
            key,
            cart,
            observers: Vec::new(),
        }
    }

    /// Load the INR cart stored under [`DEFAULT_CART_KEY`].
    pub fn load_default(storage: S) -> Self {
        Self::load(storage, DEFAULT_CART_KEY, Currency::default())
    }

    /// Re-read storage, picking up writes made by other instances.
    ///
    /// Observers are not notified; nothing was mutated through this store.
    pub fn reload(&mut self) {
        self.cart = read_cart(&self.cache, &self.key, self.cart.currency);
    }

    /// Register an observer for every successful mutation.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Add an item, or increase the quantity of an item with the same name.
    pub fn add(&mut self, item: LineItem) -> Result<(), CommerceError> {
        let mut next = self.cart.clone();
        let event = next.add(item)?;
        self.commit(next, event)
    }

    /// Remove an item. Returns `false` when no item had that name.
    pub fn remove(&mut self, name: &str) -> Result<bool, CommerceError> {
        let mut next = self.cart.clone();
        match next.remove(name) {
            Some(item) => {
                self.commit(next, CartEvent::Removed { name: item.name })?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Set an item's quantity; zero or less removes it.
    ///
    /// Returns `false` when no item had that name.
    pub fn set_quantity(&mut self, name: &str, quantity: i64) -> Result<bool, CommerceError> {
        let mut next = self.cart.clone();
        match next.set_quantity(name, quantity)? {
            Some(event) => {
                self.commit(next, event)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Add one unit of an item already in the cart.
    pub fn increment(&mut self, name: &str) -> Result<bool, CommerceError> {
        match self.cart.get(name) {
            Some(item) => self.set_quantity(name, i64::from(item.quantity) + 1),
            None => Ok(false),
        }
    }

    /// Take one unit away, removing the item at zero.
    pub fn decrement(&mut self, name: &str) -> Result<bool, CommerceError> {
        match self.cart.get(name) {
            Some(item) => self.set_quantity(name, i64::from(item.quantity) - 1),
            None => Ok(false),
        }
    }

    /// Remove everything.
    pub fn clear(&mut self) -> Result<(), CommerceError> {
        self.commit(Cart::new(self.cart.currency), CartEvent::Cleared)
    }

    /// Sum of price × quantity.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Sum of quantities, for the cart badge.
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Line items in display order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    pub fn get(&self, name: &str) -> Option<&LineItem> {
        self.cart.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying storage backend.
    pub fn storage(&self) -> &S {
        self.cache.store()
    }

    fn commit(&mut self, next: Cart, event: CartEvent) -> Result<(), CommerceError> {
        let snapshot = CartSnapshot::capture(&next, Utc::now());
        self.cache.set(&self.key, &snapshot)?;
        self.cart = next;

        tracing::debug!(
            key = %self.key,
            ?event,
            items = self.cart.unique_item_count(),
            count = self.cart.item_count(),
            "cart persisted"
        );

        for observer in &mut self.observers {
            observer.cart_changed(&event, &self.cart);
        }
        Ok(())
    }
}

impl<S> std::fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("key", &self.key)
            .field("cart", &self.cart)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

fn read_cart<S: Storage>(cache: &Cache<S>, key: &str, currency: Currency) -> Cart {
    let value = match cache.get::<Value>(key) {
        Ok(Some(value)) => value,
        Ok(None) => {
            tracing::debug!(key, "no stored cart, starting empty");
            return Cart::new(currency);
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "stored cart unreadable, starting empty");
            return Cart::new(currency);
        }
    };

    match snapshot::decode(value, currency) {
        Ok(cart) => {
            tracing::debug!(key, items = cart.unique_item_count(), "loaded cart");
            cart
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "stored cart corrupt, starting empty");
            Cart::new(currency)
        }
    }
}
