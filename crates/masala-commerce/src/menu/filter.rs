//! Menu filters and category tabs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::menu::MenuItem;

/// Which menu items are visible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MenuFilter {
    /// Every item.
    #[default]
    All,
    /// Items whose category slug matches.
    Category(String),
}

impl MenuFilter {
    /// Parse a `data-filter` value. Empty or `"all"` shows everything; `"all"`
    /// is matched ignoring ASCII case, so `"All"` from hand-written markup
    /// still selects every item. Category slugs are compared exactly.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            MenuFilter::All
        } else {
            MenuFilter::Category(value.to_string())
        }
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            MenuFilter::All => true,
            MenuFilter::Category(slug) => item.category == *slug,
        }
    }

    /// The slug this filter selects, `"all"` for [`MenuFilter::All`].
    pub fn slug(&self) -> &str {
        match self {
            MenuFilter::All => "all",
            MenuFilter::Category(slug) => slug,
        }
    }
}

impl fmt::Display for MenuFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Tab strip where exactly one tab is active.
///
/// The first tab starts active. Selecting a slug that is not a tab leaves
/// the current selection alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTabs {
    slugs: Vec<String>,
    active: usize,
}

impl CategoryTabs {
    pub fn new<I, T>(slugs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            slugs: slugs.into_iter().map(Into::into).collect(),
            active: 0,
        }
    }

    /// Make `slug` the active tab. Returns `false` if there is no such tab.
    pub fn select(&mut self, slug: &str) -> bool {
        match self.slugs.iter().position(|s| s == slug) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    /// Slug of the active tab, `None` when there are no tabs.
    pub fn active(&self) -> Option<&str> {
        self.slugs.get(self.active).map(String::as_str)
    }

    pub fn is_active(&self, slug: &str) -> bool {
        self.active() == Some(slug)
    }

    pub fn slugs(&self) -> &[String] {
        &self.slugs
    }

    /// Filter for the active tab.
    pub fn filter(&self) -> MenuFilter {
        self.active().map(MenuFilter::parse).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn dish(category: &str) -> MenuItem {
        MenuItem::new("Dish", Money::from_major(100, Currency::INR), category)
    }

    #[test]
    fn test_parse() {
        assert_eq!(MenuFilter::parse("all"), MenuFilter::All);
        assert_eq!(MenuFilter::parse(" ALL "), MenuFilter::All);
        assert_eq!(MenuFilter::parse("All"), MenuFilter::All);
        assert_eq!(MenuFilter::parse(""), MenuFilter::All);
        assert_eq!(
            MenuFilter::parse("starters"),
            MenuFilter::Category("starters".to_string())
        );
    }

    #[test]
    fn test_matches() {
        let starter = dish("starters");
        assert!(MenuFilter::All.matches(&starter));
        assert!(MenuFilter::parse("starters").matches(&starter));
        assert!(!MenuFilter::parse("mains").matches(&starter));
        assert!(!MenuFilter::parse("Starters").matches(&starter));
    }

    #[test]
    fn test_tabs_first_active_by_default() {
        let tabs = CategoryTabs::new(["all", "starters", "mains"]);
        assert_eq!(tabs.active(), Some("all"));
        assert_eq!(tabs.filter(), MenuFilter::All);
    }

    #[test]
    fn test_tabs_select() {
        let mut tabs = CategoryTabs::new(["hot-beverages", "cold-beverages"]);
        assert!(tabs.select("cold-beverages"));
        assert!(tabs.is_active("cold-beverages"));
        assert!(!tabs.is_active("hot-beverages"));

        assert!(!tabs.select("desserts"));
        assert_eq!(tabs.active(), Some("cold-beverages"));
        assert_eq!(tabs.filter().slug(), "cold-beverages");
    }

    #[test]
    fn test_empty_tabs() {
        let tabs = CategoryTabs::new(Vec::<String>::new());
        assert_eq!(tabs.active(), None);
        assert_eq!(tabs.filter(), MenuFilter::All);
    }
}
