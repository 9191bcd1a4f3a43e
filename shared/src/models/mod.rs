//! Data models for the ordering desk
//!
//! Catalog and booking entities shared by every consumer.

pub mod guest;
pub mod menu;

pub use guest::Guest;
pub use menu::{MenuItem, Modifier, ModifierKind, ModifierOption};
