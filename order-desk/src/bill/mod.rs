//! Plain-text bill
//!
//! Fixed-width layout for an 80mm receipt printer (48 columns).

mod text;

use crate::order_money::{self, BillingPolicy, format_money};
use crate::ordering::CartLedger;
use rust_decimal::Decimal;
use shared::models::Guest;
use shared::order::LineItem;
use text::{TextBuilder, pad, width, wrap};

/// Characters per line on an 80mm printer
pub const BILL_WIDTH: usize = 48;

/// Narrowest description column before amounts move to their own line
const MIN_DESC_WIDTH: usize = 8;

/// Prefix of modifier and special-request lines, and of their continuations
const DETAIL_INDENT: &str = "     ";

pub struct BillRenderer<'a> {
    guest: &'a Guest,
    ledger: &'a CartLedger,
    policy: &'a BillingPolicy,
    width: usize,
}

impl<'a> BillRenderer<'a> {
    pub fn new(guest: &'a Guest, ledger: &'a CartLedger, policy: &'a BillingPolicy) -> Self {
        Self {
            guest,
            ledger,
            policy,
            width: BILL_WIDTH,
        }
    }

    pub fn render(&self) -> String {
        let mut b = TextBuilder::new(self.width);

        b.text_center("BILL");
        b.line_lr(
            &format!("Guest: {}", self.guest.name),
            &format!("Items: {}", self.ledger.item_count()),
        );
        b.eq_sep();

        if self.ledger.is_empty() {
            b.text_center("No items ordered");
            b.eq_sep();
            return b.finalize();
        }

        // 4 + 1 + 23 + 1 + 8 + 1 + 10 = 48
        b.write_line(&format!(
            "{} {} {} {}",
            pad("QTY", 4, true),
            pad("DESCRIPTION", 23, false),
            pad("PRICE", 8, true),
            pad("TOTAL", 10, true)
        ));
        b.dash_sep();

        for line in self.ledger.lines() {
            self.render_line(&mut b, line);
        }
        b.eq_sep();

        let totals = self.ledger.compute_totals(self.policy);
        b.line_lr("Subtotal", &format_money(totals.subtotal));
        b.line_lr(
            &format!("Tax 1 ({}%)", percent(self.policy.tax1_rate)),
            &format_money(totals.tax1),
        );
        b.line_lr(
            &format!("Tax 2 ({}%)", percent(self.policy.tax2_rate)),
            &format_money(totals.tax2),
        );
        b.line_lr("Service fee", &format_money(totals.service_fee));
        b.dash_sep();
        b.line_lr("TOTAL", &format_money(totals.grand_total));
        b.eq_sep();

        b.finalize()
    }

    /// Quantity and amounts are never cut: a wide amount narrows the
    /// description, which wraps instead.
    fn render_line(&self, b: &mut TextBuilder, line: &LineItem) {
        let qty = format!("{:>4}", line.quantity);
        let amounts = format!(
            "{:>8} {:>10}",
            format_money(order_money::calculate_unit_price(line)),
            format_money(order_money::calculate_line_total(line))
        );
        let desc_width = self
            .width
            .saturating_sub(width(&qty) + width(&amounts) + 2);

        if desc_width >= MIN_DESC_WIDTH {
            let indent = " ".repeat(width(&qty) + 1);
            for (i, part) in wrap(&line.name, desc_width).iter().enumerate() {
                if i == 0 {
                    b.write_line(&format!("{} {} {}", qty, pad(part, desc_width, false), amounts));
                } else {
                    b.write_line(&format!("{}{}", indent, part));
                }
            }
        } else {
            b.write_wrapped(&format!("{} ", qty), &" ".repeat(width(&qty) + 1), &line.name);
            b.line_lr("", &amounts);
        }

        for modifier in &line.selected_modifiers {
            let label = match &modifier.option {
                Some(option) => format!("{}: {}", modifier.name, option),
                None => modifier.name.clone(),
            };
            let text = if modifier.price.is_zero() {
                label
            } else {
                format!("{} (+{})", label, format_money(modifier.price))
            };
            b.write_wrapped("   > ", DETAIL_INDENT, &text);
        }

        if line.has_special_request() {
            b.write_wrapped("   * ", DETAIL_INDENT, &line.special_request);
        }
    }
}

/// `0.08` -> `8`
fn percent(rate: Decimal) -> Decimal {
    (rate * Decimal::ONE_HUNDRED).normalize()
}
