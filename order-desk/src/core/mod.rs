//! Core module: configuration and desk state
//!
//! - [`Config`] - desk configuration
//! - [`OrderDesk`] - application state, dispatches user intents
//! - [`DeskView`] - serializable snapshot for the presentation layer

pub mod config;
pub mod state;

pub use config::Config;
pub use state::{DeskView, LineView, OrderDesk};
