//! Money type for representing prices.
//!
//! Amounts are held as integers in the currency's minor unit (paise for
//! INR), so totals are exact and only formatted at render time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    const ALL: [Currency; 4] = [Currency::INR, Currency::USD, Currency::EUR, Currency::GBP];

    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }

    /// Detect a leading symbol or code, returning the currency and the rest.
    fn strip_prefix(text: &str) -> Option<(Self, &str)> {
        Self::ALL.iter().find_map(|c| {
            text.strip_prefix(c.symbol())
                .or_else(|| text.strip_prefix(c.code()))
                .map(|rest| (*c, rest))
        })
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (e.g., paise).
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from whole major units.
    ///
    /// ```
    /// use masala_commerce::money::{Currency, Money};
    /// assert_eq!(Money::from_major(250, Currency::INR).amount_minor, 25_000);
    /// ```
    pub fn from_major(amount: i64, currency: Currency) -> Self {
        Self::new(amount.saturating_mul(currency.minor_per_major()), currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Parse a display price such as `"₹250"` or `"1,299.50"` in `currency`.
    ///
    /// The currency symbol (or code), thousands separators and surrounding
    /// whitespace are stripped; the remainder must be a base-10 decimal.
    /// Extra fractional digits are rounded half away from zero.
    pub fn parse(text: &str, currency: Currency) -> Result<Self, CommerceError> {
        let trimmed = text.trim();
        let body = trimmed
            .strip_prefix(currency.symbol())
            .or_else(|| trimmed.strip_prefix(currency.code()))
            .unwrap_or(trimmed);
        parse_minor_units(body, currency.decimal_places())
            .map(|amount| Self::new(amount, currency))
            .ok_or_else(|| CommerceError::InvalidPrice(text.to_string()))
    }

    /// Format as a display string (e.g., "₹49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let per_major = self.currency.minor_per_major().unsigned_abs();
        let places = self.currency.decimal_places() as usize;
        let abs = self.amount_minor.unsigned_abs();
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        format!(
            "{}{}.{:0places$}",
            sign,
            abs / per_major,
            abs % per_major,
            places = places
        )
    }

    /// Try to add another Money value, returning None on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_add(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_minor
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum Money values, returning None on currency mismatch or overflow.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl FromStr for Money {
    type Err = CommerceError;

    /// Parse a display price, detecting the currency from its symbol or
    /// code and defaulting to INR.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match Currency::strip_prefix(trimmed) {
            Some((currency, _)) => Money::parse(trimmed, currency),
            None => Money::parse(trimmed, Currency::default()),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Parse `[-]digits[.digits]` into minor units, ignoring `,`, `_` and spaces.
fn parse_minor_units(text: &str, places: u32) -> Option<i64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, ',' | '_') && !c.is_whitespace())
        .collect();
    let (negative, body) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.chars().chain(frac_part.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let major: i64 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().ok()?
    };

    let places = places as usize;
    let mut frac_digits = frac_part.bytes().map(|b| i64::from(b - b'0'));
    let mut minor: i64 = 0;
    for _ in 0..places {
        minor = minor * 10 + frac_digits.next().unwrap_or(0);
    }
    if frac_digits.next().is_some_and(|d| d >= 5) {
        minor += 1;
    }

    let amount = major
        .checked_mul(10_i64.pow(places as u32))?
        .checked_add(minor)?;
    Some(if negative { -amount } else { amount })
}

/// Serialize Money as its display string (`"₹250.00"`).
///
/// Used where prices are hand-written, such as menu files.
pub mod as_display {
    use super::Money;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&money.display())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
