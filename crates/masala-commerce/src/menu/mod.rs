//! Restaurant menu: items, categories and the category filter.

mod filter;
mod item;

pub use filter::{CategoryTabs, MenuFilter};
pub use item::{MenuCategory, MenuItem};

use serde::{Deserialize, Serialize};

/// An ordered menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Menu {
    #[serde(default)]
    pub categories: Vec<MenuCategory>,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(categories: Vec<MenuCategory>, items: Vec<MenuItem>) -> Self {
        Self { categories, items }
    }

    /// Items visible under `filter`, in menu order.
    pub fn filter<'a>(&'a self, filter: &'a MenuFilter) -> impl Iterator<Item = &'a MenuItem> + 'a {
        self.items.iter().filter(move |item| filter.matches(item))
    }

    /// Find an item by exact name.
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Tabs for every category, led by an "all" tab.
    pub fn tabs(&self) -> CategoryTabs {
        CategoryTabs::new(
            std::iter::once("all".to_string())
                .chain(self.categories.iter().map(|c| c.slug.clone())),
        )
    }

    /// Label for a category slug, falling back to the slug itself.
    pub fn label<'a>(&'a self, slug: &'a str) -> &'a str {
        self.categories
            .iter()
            .find(|c| c.slug == slug)
            .map_or(slug, |c| c.label.as_str())
    }
}
