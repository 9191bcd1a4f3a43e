//! Money calculation utilities using rust_decimal for precision
//!
//! All amounts are `Decimal` end to end. Nothing is rounded while computing;
//! rounding to 2 decimal places happens only when a value is displayed.

use crate::ordering::OrderError;
use rust_decimal::prelude::*;
use shared::order::{LedgerTotals, LineItem, MAX_QUANTITY};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per item or modifier (1,000,000)
const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Tax and fee settings applied to every ledger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillingPolicy {
    /// First tax rate (0.08 = 8%)
    pub tax1_rate: Decimal,
    /// Second tax rate (0.02 = 2%)
    pub tax2_rate: Decimal,
    /// Flat fee charged once per non-empty ledger
    pub service_fee: Decimal,
}

impl Default for BillingPolicy {
    fn default() -> Self {
        Self {
            tax1_rate: Decimal::new(8, 2),
            tax2_rate: Decimal::new(2, 2),
            service_fee: Decimal::new(246, 2),
        }
    }
}

/// Validate a catalog amount (item price, modifier price or option delta)
///
/// Amounts must be non-negative and at most `MAX_PRICE`.
pub fn validate_amount(value: Decimal, field: &str) -> Result<(), OrderError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(OrderError::InvalidAmount(format!(
            "{} must be non-negative, got {}",
            field, value
        )));
    }
    if value > MAX_PRICE {
        return Err(OrderError::InvalidAmount(format!(
            "{} exceeds maximum allowed ({}), got {}",
            field, MAX_PRICE, value
        )));
    }
    Ok(())
}

/// Validate a quantity for a new line (1..=MAX_QUANTITY)
pub fn validate_quantity(quantity: i32) -> Result<(), OrderError> {
    if !(1..=MAX_QUANTITY).contains(&quantity) {
        return Err(OrderError::InvalidQuantity(quantity));
    }
    Ok(())
}

/// Round to 2 decimal places for display
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal to f64 for JSON output, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_else(|| {
        tracing::error!(value = %value, "Decimal not representable as f64, defaulting to zero");
        0.0
    })
}

/// Format an amount for display, e.g. `$27.00` or `-$1.50`
pub fn format_money(value: Decimal) -> String {
    let rounded = round_money(value);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${:.2}", rounded.abs())
    } else {
        format!("${:.2}", rounded.abs())
    }
}

/// Price of one unit: base price + every selected modifier
///
/// Option labels are never parsed; an option's price lives in
/// `SelectedModifier::price`.
pub fn calculate_unit_price(line: &LineItem) -> Decimal {
    line.unit_price + line.modifiers_total()
}

/// Line total: unit price × quantity
pub fn calculate_line_total(line: &LineItem) -> Decimal {
    calculate_unit_price(line) * Decimal::from(line.quantity)
}

/// Compute ledger totals from lines
///
/// - subtotal = Σ line totals
/// - tax1 = subtotal × tax1_rate, tax2 = subtotal × tax2_rate
/// - service fee once per ledger, omitted when there are no lines
/// - grand total = subtotal + tax1 + tax2 + service fee
pub fn compute_totals(lines: &[LineItem], policy: &BillingPolicy) -> LedgerTotals {
    if lines.is_empty() {
        return LedgerTotals::zero();
    }

    let subtotal: Decimal = lines.iter().map(calculate_line_total).sum();
    let tax1 = subtotal * policy.tax1_rate;
    let tax2 = subtotal * policy.tax2_rate;
    let service_fee = policy.service_fee;

    LedgerTotals {
        subtotal,
        tax1,
        tax2,
        service_fee,
        grand_total: subtotal + tax1 + tax2 + service_fee,
    }
}
