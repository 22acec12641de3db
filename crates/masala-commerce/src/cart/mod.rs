//! Shopping cart module.
//!
//! Contains the cart model, the persisting store, the snapshot format and
//! the observer seam used by the display layer.

mod cart;
mod observer;
pub mod snapshot;
mod store;

pub(crate) use cart::non_blank;
pub use cart::{Cart, LineItem, MAX_QUANTITY_PER_ITEM};
pub use observer::{CartEvent, CartObserver, EventLog};
pub use snapshot::{CartSnapshot, StoredItem, SNAPSHOT_VERSION};
pub use store::{CartStore, DEFAULT_CART_KEY};
