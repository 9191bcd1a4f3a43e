//! Randomized operation sequences against ledger invariants

use order_desk::order_money::{BillingPolicy, calculate_line_total};
use order_desk::ordering::{CartLedger, ModifierSelection};
use order_desk::MenuCatalog;
use rand::Rng;
use rust_decimal::Decimal;
use std::collections::HashSet;

const ROUNDS: usize = 2_000;

#[test]
fn random_operations_keep_invariants() {
    let catalog = MenuCatalog::seeded();
    let policy = BillingPolicy::default();
    let mut ledger = CartLedger::new();
    let mut rng = rand::thread_rng();
    let mut seen_ids = HashSet::new();

    for _ in 0..ROUNDS {
        match rng.gen_range(0..4) {
            0 | 1 => {
                let items = catalog.items();
                let item = &items[rng.gen_range(0..items.len())];
                let mut selection = ModifierSelection::new(item);
                for modifier in item.modifiers.iter().filter(|m| m.is_toggle()) {
                    if rng.gen_bool(0.5) {
                        selection.toggle(&modifier.id, true).unwrap();
                    }
                }
                selection.set_quantity(rng.gen_range(1..=5)).unwrap();
                let line = ledger.add_draft(item, selection.finalize().unwrap()).unwrap();
                // Line ids are never reused
                assert!(seen_ids.insert(line.id.clone()));
            }
            2 if !ledger.is_empty() => {
                let idx = rng.gen_range(0..ledger.len());
                let id = ledger.lines()[idx].id.clone();
                ledger.set_quantity(&id, rng.gen_range(-1..=4)).unwrap();
            }
            3 if !ledger.is_empty() => {
                let idx = rng.gen_range(0..ledger.len());
                let id = ledger.lines()[idx].id.clone();
                assert!(ledger.remove_line(&id));
            }
            _ => {}
        }

        assert!(ledger.lines().iter().all(|l| l.quantity >= 1));

        let totals = ledger.compute_totals(&policy);
        let expected: Decimal = ledger.lines().iter().map(calculate_line_total).sum();
        assert_eq!(totals.subtotal, expected);
        if ledger.is_empty() {
            assert_eq!(totals.grand_total, Decimal::ZERO);
        } else {
            assert_eq!(totals.service_fee, policy.service_fee);
            assert_eq!(
                totals.grand_total,
                totals.subtotal + totals.tax1 + totals.tax2 + totals.service_fee
            );
        }
    }
}
