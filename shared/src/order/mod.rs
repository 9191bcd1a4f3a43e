//! Order Module
//!
//! Types describing what a guest has ordered:
//! - Line items: customized, priced, quantity-bearing cart entries
//! - Totals: derived bill amounts for one ledger

pub mod totals;
pub mod types;

// Re-exports
pub use totals::LedgerTotals;
pub use types::*;
