//! Checkout entry point.
//!
//! Orders are not submitted anywhere; this only checks that there is
//! something to check out and summarizes it.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::money::Money;

/// What the customer is about to check out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSummary {
    /// Distinct items.
    pub lines: usize,
    /// Sum of quantities.
    pub item_count: u32,
    pub total: Money,
}

/// Start checkout for `cart`.
pub fn begin_checkout(cart: &Cart) -> Result<CheckoutSummary, CommerceError> {
    if cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }

    let summary = CheckoutSummary {
        lines: cart.unique_item_count(),
        item_count: cart.item_count(),
        total: cart.total(),
    };
    tracing::info!(
        lines = summary.lines,
        items = summary.item_count,
        total = %summary.total,
        "checkout started"
    );
    Ok(summary)
}
