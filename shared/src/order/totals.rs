//! Ledger totals

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Derived bill amounts for one ledger
///
/// Values are kept at full precision. Use [`LedgerTotals::rounded`] for display.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LedgerTotals {
    /// Σ(unit price × quantity)
    pub subtotal: Decimal,
    pub tax1: Decimal,
    pub tax2: Decimal,
    /// Flat fee, zero for an empty ledger
    pub service_fee: Decimal,
    pub grand_total: Decimal,
}

impl LedgerTotals {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Copy rounded to 2 decimal places (half away from zero)
    pub fn rounded(&self) -> Self {
        let r = |d: Decimal| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        Self {
            subtotal: r(self.subtotal),
            tax1: r(self.tax1),
            tax2: r(self.tax2),
            service_fee: r(self.service_fee),
            grand_total: r(self.grand_total),
        }
    }
}

impl AddAssign for LedgerTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.subtotal += rhs.subtotal;
        self.tax1 += rhs.tax1;
        self.tax2 += rhs.tax2;
        self.service_fee += rhs.service_fee;
        self.grand_total += rhs.grand_total;
    }
}
