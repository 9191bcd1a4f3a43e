//! Ordering engine
//!
//! - [`ModifierSelection`]: pending customization of one menu item
//! - [`CartLedger`]: one guest's line items
//! - [`GuestRegistry`]: guests of a booking and the active guest
//! - [`DeskIntent`]: user intents dispatched by the presentation layer

mod error;
pub mod intent;
pub mod ledger;
pub mod registry;
pub mod selection;

pub use error::{OrderError, OrderResult};
pub use intent::DeskIntent;
pub use ledger::{CartLedger, QuantityChange};
pub use registry::GuestRegistry;
pub use selection::{ItemSelections, LineDraft, ModifierSelection, OptionChoice};
