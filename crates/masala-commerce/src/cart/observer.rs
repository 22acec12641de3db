//! Change notifications for the display layer.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::cart::Cart;

/// What a successful cart mutation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CartEvent {
    /// `added` units of `name` were added; `quantity` is the new total.
    Added {
        name: String,
        added: u32,
        quantity: u32,
    },
    /// `name` left the cart.
    Removed { name: String },
    /// `name` now has `quantity` units.
    QuantityChanged { name: String, quantity: u32 },
    /// Every item was removed.
    Cleared,
}

impl CartEvent {
    /// Name of the affected item, if the event concerns one.
    pub fn name(&self) -> Option<&str> {
        match self {
            CartEvent::Added { name, .. }
            | CartEvent::Removed { name }
            | CartEvent::QuantityChanged { name, .. } => Some(name),
            CartEvent::Cleared => None,
        }
    }
}

/// Receives every successful mutation, after it has been persisted.
pub trait CartObserver {
    fn cart_changed(&mut self, event: &CartEvent, cart: &Cart);
}

/// Lets a caller keep a handle to an observer it hands to the store.
impl<T: CartObserver> CartObserver for Rc<RefCell<T>> {
    fn cart_changed(&mut self, event: &CartEvent, cart: &Cart) {
        self.borrow_mut().cart_changed(event, cart)
    }
}

/// Records every event it sees.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<CartEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[CartEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<CartEvent> {
        std::mem::take(&mut self.events)
    }
}

impl CartObserver for EventLog {
    fn cart_changed(&mut self, event: &CartEvent, _cart: &Cart) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_name() {
        let event = CartEvent::Removed {
            name: "Lassi".to_string(),
        };
        assert_eq!(event.name(), Some("Lassi"));
        assert_eq!(CartEvent::Cleared.name(), None);
    }

    #[test]
    fn test_event_serialization() {
        let event = CartEvent::QuantityChanged {
            name: "Naan".to_string(),
            quantity: 2,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"event":"quantity_changed","name":"Naan","quantity":2}"#);
    }

    #[test]
    fn test_shared_observer() {
        struct Counter(usize);
        impl CartObserver for Counter {
            fn cart_changed(&mut self, _event: &CartEvent, _cart: &Cart) {
                self.0 += 1;
            }
        }

        let shared = Rc::new(RefCell::new(Counter(0)));
        let mut handle = Rc::clone(&shared);
        handle.cart_changed(&CartEvent::Cleared, &Cart::default());
        assert_eq!(shared.borrow().0, 1);
    }
}
