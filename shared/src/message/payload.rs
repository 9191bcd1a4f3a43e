use serde::{Deserialize, Serialize};
use std::fmt;

// ==================== Notification Kind ====================

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ItemAdded,
    ItemRemoved,
    GuestAdded,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemAdded => write!(f, "item_added"),
            Self::ItemRemoved => write!(f, "item_removed"),
            Self::GuestAdded => write!(f, "guest_added"),
        }
    }
}

// ==================== Payloads ====================

/// Fire-and-forget notification for the presentation layer (toast)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    /// Short headline, e.g. "Added to cart"
    pub title: String,
    /// Human-readable message
    pub description: String,
    /// How long the presentation layer should show it
    pub duration_ms: u64,
    /// Creation time (UTC millis)
    pub created_at: i64,
}

impl Notification {
    pub fn item_added(item_name: &str, guest_name: &str, duration_ms: u64) -> Self {
        Self::toast(
            NotificationKind::ItemAdded,
            "Added to cart",
            format!("{} has been added to {}'s order", item_name, guest_name),
            duration_ms,
        )
    }

    pub fn item_removed(duration_ms: u64) -> Self {
        Self::toast(
            NotificationKind::ItemRemoved,
            "Removed from cart",
            "Item has been removed from the order".to_string(),
            duration_ms,
        )
    }

    pub fn guest_added(guest_name: &str, duration_ms: u64) -> Self {
        Self::toast(
            NotificationKind::GuestAdded,
            "Guest added",
            format!("{} has been added to the booking", guest_name),
            duration_ms,
        )
    }

    fn toast(
        kind: NotificationKind,
        title: &str,
        description: String,
        duration_ms: u64,
    ) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description,
            duration_ms,
            created_at: crate::util::now_millis(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}
