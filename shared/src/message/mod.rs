//! Message types
//!
//! Notifications emitted by the desk after each mutation, consumed by the
//! presentation layer as toasts.

pub mod payload;
pub use payload::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_added_message() {
        let n = Notification::item_added("Chicken Parmigiana", "Guest 1", 2000);
        assert_eq!(n.kind, NotificationKind::ItemAdded);
        assert_eq!(n.title, "Added to cart");
        assert_eq!(
            n.description,
            "Chicken Parmigiana has been added to Guest 1's order"
        );
        assert_eq!(n.duration_ms, 2000);
        assert!(n.created_at > 0);
    }

    #[test]
    fn test_guest_added_display() {
        let n = Notification::guest_added("Maria", 1500);
        assert_eq!(
            n.to_string(),
            "Guest added: Maria has been added to the booking"
        );
    }

    #[test]
    fn test_notification_serde() {
        let n = Notification::item_removed(2000);
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["kind"], "item_removed");
        assert_eq!(json["title"], "Removed from cart");
        let back: Notification = serde_json::from_value(json).unwrap();
        assert_eq!(back, n);
    }
}
