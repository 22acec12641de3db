//! The house menu shipped with the binary.

use anyhow::{Context, Result};
use masala_commerce::menu::Menu;

const HOUSE_MENU: &str = include_str!("../data/menu.toml");

/// Parse the embedded house menu.
pub fn house_menu() -> Result<Menu> {
    parse_menu(HOUSE_MENU).context("Failed to parse the built-in menu")
}

/// Parse a menu written in TOML.
pub fn parse_menu(source: &str) -> Result<Menu> {
    let menu: Menu = toml::from_str(source)?;
    tracing::debug!(
        categories = menu.categories.len(),
        items = menu.items.len(),
        "menu loaded"
    );
    Ok(menu)
}
