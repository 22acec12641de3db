//! Cart sidebar and badge renderers.

use masala_commerce::cart::{Cart, LineItem};
use masala_commerce::money::Money;

use crate::html_escape;

/// Image shown for line items without one.
pub const PLACEHOLDER_IMAGE: &str = "../images/placeholder.jpg";

/// Render the cart sidebar: one row per line item plus the total.
pub fn render_cart_sidebar(cart: &Cart) -> String {
    let rows = if cart.is_empty() {
        r#"<p class="cart-empty">Your cart is empty</p>"#.to_string()
    } else {
        cart.items()
            .iter()
            .map(render_cart_row)
            .collect::<Vec<_>>()
            .join("\n")
    };

    let total = if cart.is_empty() {
        Money::zero(cart.currency)
    } else {
        cart.total()
    };

    format!(
        r#"<aside class="cart-sidebar" data-section="cart">
    <div id="cart-items" class="cart-items">
        {rows}
    </div>
    <div class="cart-footer">
        <span class="cart-total-label">Total:</span>
        <span id="cart-total" class="cart-total">{total}</span>
        <button class="checkout-btn">Proceed to Checkout</button>
    </div>
</aside>"#,
        rows = rows,
        total = html_escape(&total.display())
    )
}

fn render_cart_row(item: &LineItem) -> String {
    let name = html_escape(&item.name);
    let image = item
        .image
        .as_deref()
        .filter(|uri| !uri.trim().is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE);
    let image = html_escape(image);

    format!(
        r#"<div class="cart-item">
            <div class="cart-item-image">
                <img src="{image}" alt="{name}">
            </div>
            <div class="cart-item-details">
                <div class="cart-item-name">{name}</div>
                <div class="cart-item-price">{price}</div>
                <div class="cart-item-quantity">
                    <button class="quantity-btn minus" data-name="{name}">-</button>
                    <span>{quantity}</span>
                    <button class="quantity-btn plus" data-name="{name}">+</button>
                </div>
            </div>
        </div>"#,
        image = image,
        name = name,
        price = html_escape(&item.price.display()),
        quantity = item.quantity
    )
}

/// Render the header cart badge showing the number of units in the cart.
pub fn render_cart_badge(cart: &Cart) -> String {
    let count = cart.item_count();
    let modifier = if count == 0 { " cart-count--empty" } else { "" };
    format!(
        r#"<span id="cart-count" class="cart-count{}">{}</span>"#,
        modifier, count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use masala_commerce::money::Currency;

    fn rupees(amount: i64) -> Money {
        Money::from_major(amount, Currency::INR)
    }

    #[test]
    fn test_empty_sidebar() {
        let html = render_cart_sidebar(&Cart::default());
        assert!(html.contains("Your cart is empty"));
        assert!(html.contains("\u{20b9}0.00"));
        assert!(!html.contains("cart-item-name"));
    }

    #[test]
    fn test_sidebar_rows() {
        let mut cart = Cart::default();
        cart.add(LineItem::new("Paneer Tikka", rupees(250), 3).with_image("../images/tikka.jpg"))
            .unwrap();
        cart.add(LineItem::new("Lassi", rupees(80), 1)).unwrap();

        let html = render_cart_sidebar(&cart);
        assert!(html.contains(r#"<img src="../images/tikka.jpg" alt="Paneer Tikka">"#));
        assert!(html.contains(&format!(r#"<img src="{}" alt="Lassi">"#, PLACEHOLDER_IMAGE)));
        assert!(html.contains(r#"<button class="quantity-btn minus" data-name="Lassi">-</button>"#));
        assert!(html.contains(r#"<button class="quantity-btn plus" data-name="Paneer Tikka">+</button>"#));
        assert!(html.contains("<span>3</span>"));
        assert!(html.contains("\u{20b9}830.00"));
    }

    #[test]
    fn test_blank_image_uses_placeholder() {
        let mut item = LineItem::new("Chai", rupees(30), 2);
        item.image = Some(" ".to_string());
        let mut cart = Cart::default();
        cart.add(item).unwrap();

        let html = render_cart_sidebar(&cart);
        assert!(html.contains(&format!(r#"<img src="{}" alt="Chai">"#, PLACEHOLDER_IMAGE)));
        assert!(!html.contains(r#"src=" ""#));
    }

    #[test]
    fn test_names_are_escaped() {
        let mut cart = Cart::default();
        cart.add(LineItem::new(r#"Chef's "Special" <b>"#, rupees(500), 1))
            .unwrap();

        let html = render_cart_sidebar(&cart);
        assert!(html.contains("Chef's &quot;Special&quot; &lt;b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_badge() {
        let mut cart = Cart::default();
        assert_eq!(
            render_cart_badge(&cart),
            r#"<span id="cart-count" class="cart-count cart-count--empty">0</span>"#
        );

        cart.add(LineItem::new("Naan", rupees(40), 4)).unwrap();
        assert_eq!(
            render_cart_badge(&cart),
            r#"<span id="cart-count" class="cart-count">4</span>"#
        );
    }
}
