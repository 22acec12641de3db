//! Menu item types.

use crate::cart::{non_blank, LineItem};
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};

/// A dish or drink on the menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Dish name; becomes the cart line item name.
    pub name: String,
    /// Price, written as display text in menu files (e.g. "₹250").
    #[serde(with = "money::as_display")]
    pub price: Money,
    /// Category slug (e.g. "starters").
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: Money, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
            image: None,
            description: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The line item an "add to cart" click produces.
    pub fn to_line_item(&self, quantity: u32) -> LineItem {
        LineItem {
            name: self.name.clone(),
            price: self.price,
            image: non_blank(self.image.clone()),
            quantity,
        }
    }
}

/// A menu category tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuCategory {
    /// Identifier used in filters and `data-category` attributes.
    pub slug: String,
    /// Tab label.
    pub label: String,
}

impl MenuCategory {
    pub fn new(slug: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_to_line_item() {
        let item = MenuItem::new("Gulab Jamun", Money::from_major(90, Currency::INR), "desserts")
            .with_image("images/gulab-jamun.jpg");
        let line = item.to_line_item(1);

        assert_eq!(line.name, "Gulab Jamun");
        assert_eq!(line.price, item.price);
        assert_eq!(line.image.as_deref(), Some("images/gulab-jamun.jpg"));
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_deserialize_display_price() {
        let item: MenuItem = serde_json::from_str(
            r#"{"name":"Masala Chai","price":"₹40","category":"beverages"}"#,
        )
        .unwrap();
        assert_eq!(item.price, Money::from_major(40, Currency::INR));
        assert!(item.image.is_none());
    }
}
