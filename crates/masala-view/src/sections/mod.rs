//! Section renderers for the ordering pages.

mod cart;
mod menu;
mod notification;

pub use cart::*;
pub use menu::*;
pub use notification::*;
