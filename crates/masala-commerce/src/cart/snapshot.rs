//! Persisted cart format.
//!
//! Version 1 is a tagged object:
//!
//! ```json
//! {"version":1,"saved_at":"2026-10-16T12:00:00Z","currency":"INR",
//!  "items":[{"name":"Lassi","price":{"amount_minor":8000,"currency":"INR"},"image":null,"quantity":1}]}
//! ```
//!
//! Carts written before versioning existed are a bare array of
//! `{name, price: "₹80", image, quantity}` and are migrated on read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::money::{Currency, Money};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u64 = 1;

/// Serialized form of a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSnapshot {
    pub version: u64,
    pub saved_at: DateTime<Utc>,
    pub currency: Currency,
    pub items: Vec<StoredItem>,
}

/// One persisted line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredItem {
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub image: Option<String>,
    pub quantity: i64,
}

/// Unversioned line item; price is display text or a bare number.
#[derive(Debug, Deserialize)]
struct LegacyItem {
    name: String,
    #[serde(default)]
    price: Value,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    quantity: i64,
}

impl CartSnapshot {
    /// Capture `cart` at `saved_at`.
    pub fn capture(cart: &Cart, saved_at: DateTime<Utc>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at,
            currency: cart.currency,
            items: cart
                .items()
                .iter()
                .map(|item| StoredItem {
                    name: item.name.clone(),
                    price: item.price,
                    image: item.image.clone(),
                    quantity: i64::from(item.quantity),
                })
                .collect(),
        }
    }

    /// Rebuild the cart, restoring invariants on the way in.
    pub fn into_cart(self) -> Cart {
        Cart::from_entries(
            self.currency,
            self.items
                .into_iter()
                .map(|i| (i.name, i.price, i.image, i.quantity)),
        )
    }
}

/// Decode any known snapshot layout into a cart.
///
/// `currency` is used for legacy carts, which do not record one.
pub fn decode(value: Value, currency: Currency) -> Result<Cart, CommerceError> {
    match value {
        Value::Array(entries) => Ok(migrate_legacy(entries, currency)),
        Value::Object(ref map) => {
            let version = map
                .get("version")
                .and_then(Value::as_u64)
                .ok_or_else(|| CommerceError::CorruptSnapshot("missing version".to_string()))?;
            if version != SNAPSHOT_VERSION {
                return Err(CommerceError::UnsupportedSnapshotVersion(version));
            }
            let snapshot: CartSnapshot = serde_json::from_value(value)?;
            Ok(snapshot.into_cart())
        }
        other => Err(CommerceError::CorruptSnapshot(format!(
            "expected an array or object, found {}",
            json_kind(&other)
        ))),
    }
}

fn migrate_legacy(entries: Vec<Value>, currency: Currency) -> Cart {
    let items = entries.into_iter().filter_map(|entry| {
        match serde_json::from_value::<LegacyItem>(entry) {
            Ok(item) => {
                let price = legacy_price(&item.name, &item.price, currency);
                Some((item.name, price, item.image, item.quantity))
            }
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable legacy cart entry");
                None
            }
        }
    });
    let cart = Cart::from_entries(currency, items);
    tracing::debug!(items = cart.unique_item_count(), "migrated legacy cart");
    cart
}

fn legacy_price(name: &str, price: &Value, currency: Currency) -> Money {
    let parsed = match price {
        Value::String(text) => Money::parse(text, currency).ok(),
        Value::Number(n) => Money::parse(&n.to_string(), currency).ok(),
        _ => None,
    };
    parsed.unwrap_or_else(|| {
        tracing::warn!(name, price = %price, "unparsable legacy price, counting as zero");
        Money::zero(currency)
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{LineItem, MAX_QUANTITY_PER_ITEM};
    use serde_json::json;

    fn rupees(amount: i64) -> Money {
        Money::from_major(amount, Currency::INR)
    }

    #[test]
    fn test_capture_then_decode() {
        let mut cart = Cart::default();
        cart.add(LineItem::new("Paneer Tikka", rupees(250), 3).with_image("tikka.jpg"))
            .unwrap();
        cart.add(LineItem::new("Lassi", rupees(80), 1)).unwrap();

        let snapshot = CartSnapshot::capture(&cart, Utc::now());
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(decode(value, Currency::INR).unwrap(), cart);
    }

    #[test]
    fn test_decode_legacy_array() {
        let value = json!([
            {"name": "Paneer Tikka", "price": "\u{20b9}250", "image": "tikka.jpg", "quantity": 2},
            {"name": "Lassi", "price": 80, "quantity": 1},
            {"name": "Mystery", "price": "ask", "quantity": 1},
        ]);

        let cart = decode(value, Currency::INR).unwrap();
        let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Paneer Tikka", "Lassi", "Mystery"]);
        assert_eq!(cart.get("Lassi").unwrap().price, rupees(80));
        assert!(cart.get("Mystery").unwrap().price.is_zero());
        assert_eq!(cart.total(), rupees(580));
    }

    #[test]
    fn test_decode_legacy_skips_bad_entries() {
        let value = json!([
            {"name": "Naan", "price": "\u{20b9}40", "quantity": 2},
            "not an item",
            {"price": "\u{20b9}10", "quantity": 1},
            {"name": "Zero", "price": "\u{20b9}10", "quantity": 0},
        ]);

        let cart = decode(value, Currency::INR).unwrap();
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_decode_versioned_restores_invariants() {
        let price = json!({"amount_minor": 4000, "currency": "INR"});
        let value = json!({
            "version": 1,
            "saved_at": "2026-10-16T12:00:00Z",
            "currency": "INR",
            "items": [
                {"name": "Naan", "price": price, "image": "", "quantity": 2},
                {"name": "Naan", "price": price, "image": "naan.jpg", "quantity": 3},
                {"name": "Lassi", "price": price, "quantity": 0},
                {"name": "Chai", "price": price, "quantity": 500},
            ],
        });

        let cart = decode(value, Currency::INR).unwrap();
        assert_eq!(cart.unique_item_count(), 2);
        let naan = cart.get("Naan").unwrap();
        assert_eq!(naan.quantity, 5);
        assert_eq!(naan.image, None);
        assert!(cart.get("Lassi").is_none());
        assert_eq!(cart.get("Chai").unwrap().quantity, MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_decode_rejects_scalars() {
        for value in [json!(null), json!(42), json!("cart"), json!(true)] {
            assert!(matches!(
                decode(value, Currency::INR),
                Err(CommerceError::CorruptSnapshot(_))
            ));
        }
    }

    #[test]
    fn test_decode_rejects_unknown_version() {
        let value = json!({"version": 7, "items": []});
        assert!(matches!(
            decode(value, Currency::INR),
            Err(CommerceError::UnsupportedSnapshotVersion(7))
        ));
    }

    #[test]
    fn test_decode_rejects_object_without_version() {
        let value = json!({"items": []});
        assert!(matches!(
            decode(value, Currency::INR),
            Err(CommerceError::CorruptSnapshot(_))
        ));
    }
}
