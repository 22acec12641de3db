//! Notification banner renderer.

use masala_commerce::notify::Notification;

use crate::html_escape;

/// Render one banner. The kind doubles as the CSS modifier class.
pub fn render_notification(notification: &Notification) -> String {
    format!(
        r#"<div class="notification {kind}" role="status" data-expires="{expires}">{message}</div>"#,
        kind = notification.kind.as_str(),
        expires = notification.expires_at.timestamp_millis(),
        message = html_escape(&notification.message)
    )
}

/// Render every banner still showing, oldest first.
pub fn render_notifications(notifications: &[Notification]) -> String {
    notifications
        .iter()
        .map(render_notification)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use masala_commerce::notify::Notifications;

    #[test]
    fn test_render_banner() {
        let now = DateTime::from_timestamp(1_760_000_000, 0).unwrap();
        let mut queue = Notifications::default();
        queue.added_to_cart("Rogan <Josh>", now);
        queue.cart_empty(now);

        let html = render_notifications(queue.active(now));
        assert!(html.contains(
            r#"<div class="notification success" role="status" data-expires="1760000003000">Rogan &lt;Josh&gt; added to cart!</div>"#
        ));
        assert!(html.contains(r#"class="notification error""#));
        assert_eq!(html.lines().count(), 2);
    }
}
