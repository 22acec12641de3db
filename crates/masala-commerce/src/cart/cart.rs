//! Cart and line item types.

use crate::cart::CartEvent;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 99;

/// An ordered cart of line items, unique by name.
///
/// Insertion order is display order.
/// Not deserializable: stored carts come back through
/// [`Cart::from_entries`], which restores the invariants.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Cart {
    /// Cart currency; totals are computed in it.
    pub currency: Currency,
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            items: Vec::new(),
        }
    }

    /// Build a cart from untrusted entries, restoring the cart invariants.
    ///
    /// Entries with a non-positive quantity are dropped, repeated names are
    /// merged into the first occurrence (which keeps its price and image),
    /// quantities are capped at [`MAX_QUANTITY_PER_ITEM`] and blank image
    /// URIs are treated as absent.
    pub fn from_entries(
        currency: Currency,
        entries: impl IntoIterator<Item = (String, Money, Option<String>, i64)>,
    ) -> Self {
        let mut cart = Self::new(currency);
        for (name, price, image, quantity) in entries {
            if quantity <= 0 {
                tracing::warn!(%name, quantity, "dropping cart entry with non-positive quantity");
                continue;
            }
            let quantity = clamp_quantity(quantity);
            match cart.items.iter_mut().find(|i| i.name == name) {
                Some(existing) => {
                    tracing::warn!(%name, "merging duplicate cart entry");
                    existing.quantity = existing
                        .quantity
                        .saturating_add(quantity)
                        .min(MAX_QUANTITY_PER_ITEM);
                }
                None => cart.items.push(LineItem {
                    name,
                    price,
                    image: non_blank(image),
                    quantity,
                }),
            }
        }
        cart
    }

    /// Add an item.
    ///
    /// An item whose name is already in the cart has its quantity increased;
    /// the existing price and image are kept. Otherwise the item is appended.
    pub fn add(&mut self, item: LineItem) -> Result<CartEvent, CommerceError> {
        if item.quantity == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.name == item.name) {
            let new_quantity = existing.quantity.saturating_add(item.quantity);
            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    i64::from(new_quantity),
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            existing.quantity = new_quantity;
            return Ok(CartEvent::Added {
                name: item.name,
                added: item.quantity,
                quantity: new_quantity,
            });
        }

        if item.quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                i64::from(item.quantity),
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let event = CartEvent::Added {
            name: item.name.clone(),
            added: item.quantity,
            quantity: item.quantity,
        };
        self.items.push(item);
        Ok(event)
    }

    /// Remove an item by name. Returns the removed item, if any.
    pub fn remove(&mut self, name: &str) -> Option<LineItem> {
        let index = self.items.iter().position(|i| i.name == name)?;
        Some(self.items.remove(index))
    }

    /// Set an item's quantity.
    ///
    /// A quantity of zero or less removes the item. Unknown names are a
    /// no-op and yield `Ok(None)`.
    pub fn set_quantity(
        &mut self,
        name: &str,
        quantity: i64,
    ) -> Result<Option<CartEvent>, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove(name).map(|item| CartEvent::Removed { name: item.name }));
        }

        if quantity > i64::from(MAX_QUANTITY_PER_ITEM) {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        match self.items.iter_mut().find(|i| i.name == name) {
            Some(item) => {
                item.quantity = clamp_quantity(quantity);
                Ok(Some(CartEvent::QuantityChanged {
                    name: item.name.clone(),
                    quantity: item.quantity,
                }))
            }
            None => Ok(None),
        }
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Line items in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get an item by name.
    pub fn get(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |sum, i| sum.saturating_add(i.quantity))
    }

    /// Get number of distinct items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of price × quantity over all items.
    ///
    /// An item whose line total cannot be added (foreign currency or
    /// overflow) contributes zero instead of failing the whole total.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(self.currency), |acc, item| {
                match item.line_total().and_then(|line| acc.try_add(&line)) {
                    Some(sum) => sum,
                    None => {
                        tracing::warn!(
                            name = %item.name,
                            price = %item.price,
                            "line total skipped"
                        );
                        acc
                    }
                }
            })
    }
}

/// One orderable product and its requested quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product name; the identity of the item within a cart.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Product image URI, display only.
    pub image: Option<String>,
    /// Quantity, at least 1 while in a cart.
    pub quantity: u32,
}

impl LineItem {
    /// Create a new line item.
    pub fn new(name: impl Into<String>, price: Money, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            image: None,
            quantity,
        }
    }

    /// Create a line item from a display price such as `"₹250"`.
    ///
    /// A price that does not parse becomes zero in `currency`, so the item
    /// can still be ordered and contributes nothing to the total.
    pub fn from_display_price(
        name: impl Into<String>,
        price: &str,
        currency: Currency,
        quantity: u32,
    ) -> Self {
        let name = name.into();
        let price = Money::parse(price, currency).unwrap_or_else(|e| {
            tracing::warn!(%name, error = %e, "unparsable price, counting as zero");
            Money::zero(currency)
        });
        Self::new(name, price, quantity)
    }

    /// Set the image URI. A blank URI leaves the item without an image.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = non_blank(Some(image.into()));
        self
    }

    /// Price × quantity, or None on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.price.try_multiply(i64::from(self.quantity))
    }
}

/// `None` for a missing or whitespace-only image URI.
pub(crate) fn non_blank(image: Option<String>) -> Option<String> {
    image.filter(|uri| !uri.trim().is_empty())
}

fn clamp_quantity(quantity: i64) -> u32 {
    u32::try_from(quantity)
        .unwrap_or(MAX_QUANTITY_PER_ITEM)
        .min(MAX_QUANTITY_PER_ITEM)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rupees(amount: i64) -> Money {
        Money::from_major(amount, Currency::INR)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::INR);
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::default();
        let event = cart.add(LineItem::new("Samosa", rupees(60), 2)).unwrap();

        assert_eq!(
            event,
            CartEvent::Added {
                name: "Samosa".to_string(),
                added: 2,
                quantity: 2
            }
        );
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_add_same_item_increases_quantity_and_keeps_metadata() {
        let mut cart = Cart::default();
        cart.add(LineItem::new("Paneer Tikka", rupees(250), 1).with_image("tikka.jpg"))
            .unwrap();
        cart.add(LineItem::new("Paneer Tikka", rupees(999), 2)).unwrap();

        assert_eq!(cart.unique_item_count(), 1);
        let item = cart.get("Paneer Tikka").unwrap();
        assert_eq!(item.quantity, 3);
        assert_eq!(item.price, rupees(250));
        assert_eq!(item.image.as_deref(), Some("tikka.jpg"));
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut cart = Cart::default();
        for name in ["Lassi", "Naan", "Biryani"] {
            cart.add(LineItem::new(name, rupees(10), 1)).unwrap();
        }
        cart.add(LineItem::new("Lassi", rupees(10), 1)).unwrap();

        let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Lassi", "Naan", "Biryani"]);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut cart = Cart::default();
        let result = cart.add(LineItem::new("Lassi", rupees(80), 0));
        assert!(matches!(result, Err(CommerceError::InvalidQuantity(0))));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_limit() {
        let mut cart = Cart::default();
        let result = cart.add(LineItem::new("Naan", rupees(40), MAX_QUANTITY_PER_ITEM + 1));
        assert!(result.is_err());

        cart.add(LineItem::new("Naan", rupees(40), MAX_QUANTITY_PER_ITEM))
            .unwrap();
        let result = cart.add(LineItem::new("Naan", rupees(40), 1));
        assert!(matches!(result, Err(CommerceError::QuantityExceedsLimit(_, _))));
        assert_eq!(cart.item_count(), MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::default();
        cart.add(LineItem::new("Naan", rupees(40), 1)).unwrap();

        let event = cart.set_quantity("Naan", 5).unwrap();
        assert_eq!(
            event,
            Some(CartEvent::QuantityChanged {
                name: "Naan".to_string(),
                quantity: 5
            })
        );
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_set_quantity_non_positive_removes() {
        let mut cart = Cart::default();
        cart.add(LineItem::new("Naan", rupees(40), 3)).unwrap();

        let event = cart.set_quantity("Naan", -1).unwrap();
        assert_eq!(
            event,
            Some(CartEvent::Removed {
                name: "Naan".to_string()
            })
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_is_noop() {
        let mut cart = Cart::default();
        assert_eq!(cart.set_quantity("Ghost", 4).unwrap(), None);
        assert_eq!(cart.set_quantity("Ghost", 0).unwrap(), None);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::default();
        cart.add(LineItem::new("Naan", rupees(40), 1)).unwrap();

        assert!(cart.remove("Naan").is_some());
        assert!(cart.remove("Naan").is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total() {
        let mut cart = Cart::default();
        cart.add(LineItem::new("Butter Chicken", rupees(320), 2)).unwrap();
        cart.add(LineItem::new("Garlic Naan", Money::new(4550, Currency::INR), 1))
            .unwrap();

        assert_eq!(cart.total().amount_minor, 2 * 32_000 + 4550);
        assert_eq!(cart.total().display_amount(), "685.50");
    }

    #[test]
    fn test_total_skips_foreign_currency() {
        let mut cart = Cart::default();
        cart.add(LineItem::new("Chai", rupees(30), 1)).unwrap();
        cart.add(LineItem::new("Import", Money::from_major(5, Currency::USD), 1))
            .unwrap();

        assert_eq!(cart.total(), rupees(30));
    }

    #[test]
    fn test_unparsable_price_counts_as_zero() {
        let mut cart = Cart::default();
        cart.add(LineItem::from_display_price("Mystery", "market price", Currency::INR, 2))
            .unwrap();
        cart.add(LineItem::from_display_price("Lassi", "\u{20b9}80", Currency::INR, 1))
            .unwrap();

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), rupees(80));
    }

    #[test]
    fn test_from_entries_restores_invariants() {
        let cart = Cart::from_entries(
            Currency::INR,
            vec![
                ("Lassi".to_string(), rupees(80), None, 1),
                ("Ghost".to_string(), rupees(10), None, 0),
                ("Lassi".to_string(), rupees(99), Some("x.jpg".to_string()), 2),
                ("Naan".to_string(), rupees(40), None, 1_000),
            ],
        );

        assert_eq!(cart.unique_item_count(), 2);
        let lassi = cart.get("Lassi").unwrap();
        assert_eq!(lassi.quantity, 3);
        assert_eq!(lassi.price, rupees(80));
        assert!(lassi.image.is_none());
        assert_eq!(cart.get("Naan").unwrap().quantity, MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_blank_image_is_absent() {
        assert_eq!(LineItem::new("Chai", rupees(30), 1).with_image("").image, None);
        assert_eq!(LineItem::new("Chai", rupees(30), 1).with_image("  ").image, None);

        let cart = Cart::from_entries(
            Currency::INR,
            vec![
                ("Chai".to_string(), rupees(30), Some(String::new()), 1),
                ("Samosa".to_string(), rupees(60), Some("samosa.jpg".to_string()), 1),
            ],
        );
        assert_eq!(cart.get("Chai").unwrap().image, None);
        assert_eq!(cart.get("Samosa").unwrap().image.as_deref(), Some("samosa.jpg"));
    }
}
