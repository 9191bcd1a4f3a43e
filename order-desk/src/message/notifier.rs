use shared::message::Notification;
use tokio::sync::broadcast;

/// Broadcast channel capacity for notifications
pub const NOTIFICATION_CHANNEL_CAPACITY: usize = 256;

/// Publishes notifications to every current subscriber
///
/// Cloning shares the same channel.
#[derive(Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notification>,
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("tx", &"<broadcast::Sender>")
            .field("receivers", &self.tx.receiver_count())
            .finish()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(NOTIFICATION_CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Subscribe to notifications published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    /// Publish a notification; never fails
    pub fn publish(&self, notification: Notification) {
        tracing::info!(kind = %notification.kind, "{}", notification);
        if self.tx.send(notification).is_err() {
            tracing::trace!("Notification dropped: no active receivers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_without_subscribers_is_silent() {
        let notifier = Notifier::new();
        notifier.publish(Notification::item_removed(2000));
    }

    #[test]
    fn test_subscribers_receive_in_order() {
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();
        notifier.publish(Notification::guest_added("Alice", 2000));
        notifier.publish(Notification::item_removed(2000));

        let first = rx.try_recv().unwrap();
        assert_eq!(first.description, "Alice has been added to the booking");
        let second = rx.try_recv().unwrap();
        assert_eq!(second.title, "Removed from cart");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_clones_share_channel() {
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();
        notifier.clone().publish(Notification::item_removed(1500));
        assert_eq!(rx.try_recv().unwrap().duration_ms, 1500);
    }
}
