//! Toast notifications
//!
//! Fire-and-forget: a notification nobody listens to is dropped.

mod notifier;

pub use notifier::{NOTIFICATION_CHANNEL_CAPACITY, Notifier};
