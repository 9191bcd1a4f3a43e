//! Order Desk - restaurant ordering engine
//!
//! # Overview
//!
//! Staff browse a categorized menu, customize dishes with modifiers, and
//! place them into per-guest carts within one booking. Totals are derived
//! live with two taxes and a flat service fee.
//!
//! # Module layout
//!
//! ```text
//! order-desk/src/
//! ├── core/          # Config, OrderDesk state and view snapshots
//! ├── catalog/       # Menu catalog and seed data
//! ├── ordering/      # Modifier selection, cart ledger, guest registry, intents
//! ├── order_money/   # Decimal price and totals arithmetic
//! ├── message/       # Toast notification fan-out
//! ├── bill/          # Plain-text bill
//! └── utils/         # Logging, input validation
//! ```

pub mod bill;
pub mod catalog;
pub mod core;
pub mod message;
pub mod order_money;
pub mod ordering;
pub mod utils;

// Re-exports
pub use catalog::MenuCatalog;
pub use core::{Config, DeskView, OrderDesk};
pub use message::Notifier;
pub use order_money::BillingPolicy;
pub use ordering::{
    CartLedger, DeskIntent, GuestRegistry, ItemSelections, ModifierSelection, OrderError,
    OrderResult,
};

pub use utils::logger::init_logger_with_file;

/// Load `.env`, read configuration and start logging
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.is_production()),
        config.log_dir.as_deref(),
    );
    config
}
