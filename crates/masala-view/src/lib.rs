//! HTML fragments for the Mystique Masala ordering pages.
//!
//! Renderers are plain functions from commerce state to markup. All text
//! taken from the cart or menu is escaped. [`CartView`] subscribes to a
//! cart store and keeps the badge and sidebar current.

pub mod sections;
mod view;

pub use sections::*;
pub use view::CartView;

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
