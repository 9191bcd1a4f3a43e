//! Per-guest cart ledger
//!
//! Ordered line items for one guest. Adding never merges: two identical
//! customizations become two lines. The ledger itself emits nothing; the
//! registry that owns it reports changes.

use super::{LineDraft, OrderError, OrderResult};
use crate::order_money::{self, BillingPolicy};
use shared::models::MenuItem;
use shared::order::{LedgerTotals, LineItem, MAX_QUANTITY, SelectedModifier};
use shared::util::IdSequence;

/// Result of a quantity update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// Line not in this ledger; nothing changed
    Unknown,
    Updated,
    /// Quantity dropped to zero or below and the line was removed
    Removed,
}

#[derive(Debug, Clone)]
pub struct CartLedger {
    lines: Vec<LineItem>,
    ids: IdSequence,
}

impl Default for CartLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl CartLedger {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            ids: IdSequence::new("line"),
        }
    }

    /// Append a new line built from a menu item snapshot
    pub fn add_line(
        &mut self,
        menu_item: &MenuItem,
        selected_modifiers: Vec<SelectedModifier>,
        special_request: impl Into<String>,
        quantity: i32,
    ) -> OrderResult<&LineItem> {
        order_money::validate_quantity(quantity)?;
        let id = self.ids.next_id();
        let line = LineItem::from_menu_item(
            id,
            menu_item,
            selected_modifiers,
            special_request.into(),
            quantity,
        );
        tracing::debug!(line_id = %line.id, menu_item_id = %line.menu_item_id, quantity, "Line added");
        self.lines.push(line);
        Ok(&self.lines[self.lines.len() - 1])
    }

    /// Append a finalized customization
    pub fn add_draft(&mut self, menu_item: &MenuItem, draft: LineDraft) -> OrderResult<&LineItem> {
        self.add_line(
            menu_item,
            draft.selected_modifiers,
            draft.special_request,
            draft.quantity,
        )
    }

    /// Set a line's quantity; zero or below removes the line
    pub fn set_quantity(&mut self, line_id: &str, quantity: i32) -> OrderResult<QuantityChange> {
        if quantity > MAX_QUANTITY {
            return Err(OrderError::InvalidQuantity(quantity));
        }
        let Some(idx) = self.lines.iter().position(|l| l.id == line_id) else {
            tracing::debug!(line_id, "Quantity update for unknown line ignored");
            return Ok(QuantityChange::Unknown);
        };

        if quantity <= 0 {
            self.lines.remove(idx);
            tracing::debug!(line_id, "Line removed by quantity update");
            return Ok(QuantityChange::Removed);
        }
        self.lines[idx].quantity = quantity;
        Ok(QuantityChange::Updated)
    }

    /// Remove a line; false when the id is unknown
    pub fn remove_line(&mut self, line_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != line_id);
        let removed = self.lines.len() != before;
        if removed {
            tracing::debug!(line_id, "Line removed");
        }
        removed
    }

    pub fn compute_totals(&self, policy: &BillingPolicy) -> LedgerTotals {
        order_money::compute_totals(&self.lines, policy)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn get(&self, line_id: &str) -> Option<&LineItem> {
        self.lines.iter().find(|l| l.id == line_id)
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities over all lines
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| i64::from(l.quantity)).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MenuCatalog;
    use rust_decimal::Decimal;

    fn cheese() -> SelectedModifier {
        SelectedModifier {
            id: "cheese".to_string(),
            name: "Extra Cheese".to_string(),
            price: Decimal::new(150, 2),
            option: None,
        }
    }

    #[test]
    fn test_add_line_never_merges() {
        let catalog = MenuCatalog::seeded();
        let item = catalog.get("1").unwrap();
        let mut ledger = CartLedger::new();

        let first = ledger.add_line(item, vec![cheese()], "", 1).unwrap().id.clone();
        let second = ledger.add_line(item, vec![cheese()], "", 1).unwrap().id.clone();

        assert_ne!(first, second);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.item_count(), 2);
    }

    #[test]
    fn test_line_snapshots_menu_item() {
        let catalog = MenuCatalog::seeded();
        let item = catalog.get("3").unwrap();
        let mut ledger = CartLedger::new();
        let line = ledger.add_line(item, vec![], "no onions", 3).unwrap();

        assert!(line.id.starts_with("line-"));
        assert_eq!(line.menu_item_id, "3");
        assert_eq!(line.name, "Veal Parmigiana");
        assert_eq!(line.unit_price, Decimal::new(1300, 2));
        assert_eq!(line.category, "Hot subs");
        assert_eq!(line.special_request, "no onions");
        assert_eq!(line.quantity, 3);
    }

    #[test]
    fn test_add_line_rejects_bad_quantity() {
        let catalog = MenuCatalog::seeded();
        let item = catalog.get("1").unwrap();
        let mut ledger = CartLedger::new();
        assert_eq!(
            ledger.add_line(item, vec![], "", 0).unwrap_err(),
            OrderError::InvalidQuantity(0)
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_set_quantity_updates_and_removes() {
        let catalog = MenuCatalog::seeded();
        let item = catalog.get("1").unwrap();
        let mut ledger = CartLedger::new();
        let id = ledger.add_line(item, vec![], "", 1).unwrap().id.clone();

        assert_eq!(ledger.set_quantity(&id, 4).unwrap(), QuantityChange::Updated);
        assert_eq!(ledger.get(&id).unwrap().quantity, 4);
        assert_eq!(ledger.item_count(), 4);

        assert_eq!(ledger.set_quantity(&id, 0).unwrap(), QuantityChange::Removed);
        assert!(ledger.get(&id).is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_negative_quantity_removes_line() {
        let catalog = MenuCatalog::seeded();
        let item = catalog.get("2").unwrap();
        let mut ledger = CartLedger::new();
        let id = ledger.add_line(item, vec![], "", 2).unwrap().id.clone();
        assert_eq!(ledger.set_quantity(&id, -3).unwrap(), QuantityChange::Removed);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_unknown_line_is_noop() {
        let catalog = MenuCatalog::seeded();
        let item = catalog.get("1").unwrap();
        let mut ledger = CartLedger::new();
        ledger.add_line(item, vec![], "", 1).unwrap();

        assert_eq!(
            ledger.set_quantity("line-missing", 5).unwrap(),
            QuantityChange::Unknown
        );
        assert!(!ledger.remove_line("line-missing"));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_set_quantity_above_max_is_error() {
        let catalog = MenuCatalog::seeded();
        let item = catalog.get("1").unwrap();
        let mut ledger = CartLedger::new();
        let id = ledger.add_line(item, vec![], "", 1).unwrap().id.clone();
        assert!(ledger.set_quantity(&id, MAX_QUANTITY + 1).is_err());
        assert_eq!(ledger.get(&id).unwrap().quantity, 1);
    }

    #[test]
    fn test_remove_keeps_order_of_others() {
        let catalog = MenuCatalog::seeded();
        let mut ledger = CartLedger::new();
        let ids: Vec<String> = ["1", "2", "3"]
            .iter()
            .map(|id| {
                let item = catalog.get(id).unwrap();
                ledger.add_line(item, vec![], "", 1).unwrap().id.clone()
            })
            .collect();

        assert!(ledger.remove_line(&ids[1]));
        let names: Vec<&str> = ledger.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Chicken Parmigiana", "Veal Parmigiana"]);
    }

    #[test]
    fn test_totals_follow_lines() {
        let catalog = MenuCatalog::seeded();
        let item = catalog.get("1").unwrap();
        let mut ledger = CartLedger::new();
        let policy = BillingPolicy::default();
        assert_eq!(ledger.compute_totals(&policy), LedgerTotals::zero());

        ledger.add_line(item, vec![cheese()], "", 2).unwrap();
        let totals = ledger.compute_totals(&policy);
        assert_eq!(totals.subtotal, Decimal::new(2700, 2));
        assert_eq!(totals.grand_total, Decimal::new(3216, 2));

        ledger.clear();
        assert_eq!(ledger.compute_totals(&policy).grand_total, Decimal::ZERO);
    }

    #[test]
    fn test_line_ids_unique_across_ledgers() {
        let catalog = MenuCatalog::seeded();
        let item = catalog.get("1").unwrap();
        let mut first = CartLedger::new();
        let mut second = CartLedger::new();
        let mut ids = std::collections::HashSet::new();
        for _ in 0..500 {
            assert!(ids.insert(first.add_line(item, vec![], "", 1).unwrap().id.clone()));
            assert!(ids.insert(second.add_line(item, vec![], "", 1).unwrap().id.clone()));
        }
        assert!(second.get(&first.lines()[0].id).is_none());
    }
}
