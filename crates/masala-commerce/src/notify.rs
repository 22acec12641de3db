//! Transient notification banners.
//!
//! A banner appears, stays for a fixed duration and then disappears. It
//! never blocks other interaction; the queue only answers "what is showing
//! now".

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// How long a banner stays up unless configured otherwise.
pub const DEFAULT_DURATION_SECS: i64 = 3;

/// Banner style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    /// CSS class used by the banner markup.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }
}

/// One banner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Notification {
    /// A banner shown at `shown_at`. An expiry past the end of the calendar
    /// saturates at the latest representable instant.
    pub fn new(
        message: impl Into<String>,
        kind: NotificationKind,
        shown_at: DateTime<Utc>,
        duration: Duration,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at,
            expires_at: shown_at
                .checked_add_signed(duration)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Banners currently on screen, oldest first.
#[derive(Debug, Clone)]
pub struct Notifications {
    queue: Vec<Notification>,
    duration: Duration,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_DURATION_SECS))
    }
}

impl Notifications {
    /// Queue whose banners last `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            queue: Vec::new(),
            duration,
        }
    }

    /// Show a banner starting at `now`.
    pub fn push(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: DateTime<Utc>,
    ) -> &Notification {
        let notification = Notification::new(message, kind, now, self.duration);
        tracing::debug!(kind = kind.as_str(), message = %notification.message, "notification");
        self.queue.push(notification);
        &self.queue[self.queue.len() - 1]
    }

    /// "`name` added to cart!"
    pub fn added_to_cart(&mut self, name: &str, now: DateTime<Utc>) -> &Notification {
        self.push(format!("{} added to cart!", name), NotificationKind::Success, now)
    }

    /// Checkout was attempted with nothing in the cart.
    pub fn cart_empty(&mut self, now: DateTime<Utc>) -> &Notification {
        self.push("Your cart is empty!", NotificationKind::Error, now)
    }

    pub fn proceeding_to_checkout(&mut self, now: DateTime<Utc>) -> &Notification {
        self.push("Proceeding to checkout...", NotificationKind::Info, now)
    }

    /// Drop expired banners and return the ones still showing.
    pub fn active(&mut self, now: DateTime<Utc>) -> &[Notification] {
        self.queue.retain(|n| !n.is_expired(now));
        &self.queue
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}
