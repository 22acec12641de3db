//! A cart observer that keeps rendered markup current.

use masala_commerce::cart::{Cart, CartEvent, CartObserver};
use serde::Serialize;

use crate::sections::{render_cart_badge, render_cart_sidebar};

/// Latest cart badge and sidebar markup.
///
/// Subscribe it to a store (wrapped in `Rc<RefCell<_>>` so the page keeps a
/// handle) and every successful mutation re-renders both fragments.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CartView {
    badge: String,
    sidebar: String,
    renders: u64,
}

impl CartView {
    /// View rendered from `cart` as it is now.
    pub fn new(cart: &Cart) -> Self {
        let mut view = Self::default();
        view.render(cart);
        view
    }

    pub fn badge(&self) -> &str {
        &self.badge
    }

    pub fn sidebar(&self) -> &str {
        &self.sidebar
    }

    /// Number of times the fragments have been rendered.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    fn render(&mut self, cart: &Cart) {
        self.badge = render_cart_badge(cart);
        self.sidebar = render_cart_sidebar(cart);
        self.renders += 1;
    }
}

impl CartObserver for CartView {
    fn cart_changed(&mut self, event: &CartEvent, cart: &Cart) {
        tracing::trace!(?event, "re-rendering cart view");
        self.render(cart);
    }
}
