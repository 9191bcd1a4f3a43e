//! Shared types for the ordering desk
//!
//! Catalog models, order types, notifications, error types and
//! id utilities used across crates.

pub mod error;
pub mod message;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, ErrorCode};
pub use message::{Notification, NotificationKind};
