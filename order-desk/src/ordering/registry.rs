//! Guests of one booking
//!
//! Every guest owns exactly one cart ledger, created together with the guest.
//! Exactly one guest is active at any time; line operations apply to the
//! active guest's ledger. The registry publishes toast notifications for
//! guest and line changes.

use super::ledger::{CartLedger, QuantityChange};
use super::{LineDraft, OrderError, OrderResult};
use crate::message::Notifier;
use crate::order_money::BillingPolicy;
use crate::utils::validation::normalize_guest_name;
use shared::message::Notification;
use shared::models::{Guest, MenuItem};
use shared::order::{LedgerTotals, LineItem};
use shared::util::IdSequence;

#[derive(Debug, Clone)]
struct GuestEntry {
    guest: Guest,
    ledger: CartLedger,
}

#[derive(Debug)]
pub struct GuestRegistry {
    /// Creation order; never empty
    entries: Vec<GuestEntry>,
    /// Index into `entries`
    active: usize,
    ids: IdSequence,
    notifier: Notifier,
    notification_duration_ms: u64,
}

impl GuestRegistry {
    /// Registry seeded with one guest, who is active
    ///
    /// A blank `default_name` falls back to "Guest 1".
    pub fn new(default_name: &str, notifier: Notifier, notification_duration_ms: u64) -> Self {
        let ids = IdSequence::new("guest");
        let name = normalize_guest_name(default_name).unwrap_or_else(|_| "Guest 1".to_string());
        let first = GuestEntry {
            guest: Guest {
                id: ids.next_id(),
                name,
            },
            ledger: CartLedger::new(),
        };
        Self {
            entries: vec![first],
            active: 0,
            ids,
            notifier,
            notification_duration_ms,
        }
    }

    fn index_of(&self, guest_id: &str) -> OrderResult<usize> {
        self.entries
            .iter()
            .position(|e| e.guest.id == guest_id)
            .ok_or_else(|| OrderError::GuestNotFound(guest_id.to_string()))
    }

    /// Add a guest with an empty ledger and make them active
    ///
    /// The name is trimmed; a blank name is rejected and nothing changes.
    pub fn add_guest(&mut self, name: &str) -> OrderResult<&Guest> {
        let name = normalize_guest_name(name)?;
        let guest = Guest {
            id: self.ids.next_id(),
            name,
        };
        tracing::debug!(guest_id = %guest.id, name = %guest.name, "Guest added");
        self.notifier.publish(Notification::guest_added(
            &guest.name,
            self.notification_duration_ms,
        ));

        self.entries.push(GuestEntry {
            guest,
            ledger: CartLedger::new(),
        });
        self.active = self.entries.len() - 1;
        Ok(&self.entries[self.active].guest)
    }

    /// Switch the active guest; an unknown id leaves the active guest unchanged
    pub fn set_active_guest(&mut self, guest_id: &str) -> OrderResult<()> {
        self.active = self.index_of(guest_id)?;
        tracing::debug!(guest_id, "Active guest changed");
        Ok(())
    }

    pub fn rename_guest(&mut self, guest_id: &str, name: &str) -> OrderResult<()> {
        let idx = self.index_of(guest_id)?;
        let name = normalize_guest_name(name)?;
        tracing::debug!(guest_id, name = %name, "Guest renamed");
        self.entries[idx].guest.name = name;
        Ok(())
    }

    /// Guests in creation order
    pub fn guests(&self) -> impl Iterator<Item = &Guest> {
        self.entries.iter().map(|e| &e.guest)
    }

    pub fn guest_count(&self) -> usize {
        self.entries.len()
    }

    pub fn active_guest(&self) -> &Guest {
        &self.entries[self.active].guest
    }

    pub fn active_guest_id(&self) -> &str {
        &self.entries[self.active].guest.id
    }

    pub fn active_ledger(&self) -> &CartLedger {
        &self.entries[self.active].ledger
    }

    pub fn ledger(&self, guest_id: &str) -> Option<&CartLedger> {
        self.entries
            .iter()
            .find(|e| e.guest.id == guest_id)
            .map(|e| &e.ledger)
    }

    /// Add a finalized customization to the active guest's ledger
    pub fn add_line(&mut self, menu_item: &MenuItem, draft: LineDraft) -> OrderResult<&LineItem> {
        let entry = &mut self.entries[self.active];
        let line = entry.ledger.add_draft(menu_item, draft)?;
        self.notifier.publish(Notification::item_added(
            &line.name,
            &entry.guest.name,
            self.notification_duration_ms,
        ));
        Ok(line)
    }

    /// Set quantity on the active guest's ledger; zero or below removes
    pub fn set_quantity(&mut self, line_id: &str, quantity: i32) -> OrderResult<QuantityChange> {
        let change = self.entries[self.active]
            .ledger
            .set_quantity(line_id, quantity)?;
        if change == QuantityChange::Removed {
            self.notifier
                .publish(Notification::item_removed(self.notification_duration_ms));
        }
        Ok(change)
    }

    /// Remove a line from the active guest's ledger; false when unknown
    pub fn remove_line(&mut self, line_id: &str) -> bool {
        let removed = self.entries[self.active].ledger.remove_line(line_id);
        if removed {
            self.notifier
                .publish(Notification::item_removed(self.notification_duration_ms));
        }
        removed
    }

    /// Combined bill for the whole booking
    ///
    /// Sum of every non-empty ledger's totals, so the service fee is counted
    /// once per guest who ordered.
    pub fn booking_totals(&self, policy: &BillingPolicy) -> LedgerTotals {
        let mut totals = LedgerTotals::zero();
        for entry in self.entries.iter().filter(|e| !e.ledger.is_empty()) {
            totals += entry.ledger.compute_totals(policy);
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MenuCatalog;
    use crate::ordering::ModifierSelection;
    use rust_decimal::Decimal;
    use shared::message::NotificationKind;

    fn registry() -> GuestRegistry {
        GuestRegistry::new("Guest 1", Notifier::new(), 2000)
    }

    fn draft(catalog: &MenuCatalog, id: &str) -> LineDraft {
        ModifierSelection::new(catalog.get(id).unwrap())
            .finalize()
            .unwrap()
    }

    #[test]
    fn test_seeded_with_one_active_guest() {
        let reg = registry();
        assert_eq!(reg.guest_count(), 1);
        assert_eq!(reg.active_guest().name, "Guest 1");
        assert!(reg.active_guest_id().starts_with("guest-"));
        assert!(reg.active_ledger().is_empty());
    }

    #[test]
    fn test_blank_default_name_falls_back() {
        let reg = GuestRegistry::new("   ", Notifier::new(), 2000);
        assert_eq!(reg.active_guest().name, "Guest 1");
    }

    #[test]
    fn test_add_guest_trims_and_activates() {
        let mut reg = registry();
        let id = reg.add_guest("  Alice  ").unwrap().id.clone();
        assert_eq!(reg.active_guest_id(), id);
        assert_eq!(reg.active_guest().name, "Alice");
        assert!(reg.ledger(&id).unwrap().is_empty());
        assert_eq!(reg.guest_count(), 2);
    }

    #[test]
    fn test_blank_guest_name_changes_nothing() {
        let mut reg = registry();
        let mut rx = reg.notifier.subscribe();
        let before = reg.active_guest_id().to_string();

        assert_eq!(reg.add_guest("   ").unwrap_err(), OrderError::BlankGuestName);
        assert_eq!(reg.guest_count(), 1);
        assert_eq!(reg.active_guest_id(), before);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_unknown_guest_keeps_active() {
        let mut reg = registry();
        let before = reg.active_guest_id().to_string();
        assert_eq!(
            reg.set_active_guest("guest-404"),
            Err(OrderError::GuestNotFound("guest-404".to_string()))
        );
        assert_eq!(reg.active_guest_id(), before);
    }

    #[test]
    fn test_lines_go_to_active_guest_only() {
        let catalog = MenuCatalog::seeded();
        let mut reg = registry();
        let first = reg.active_guest_id().to_string();
        reg.add_line(catalog.get("1").unwrap(), draft(&catalog, "1"))
            .unwrap();

        let second = reg.add_guest("Bob").unwrap().id.clone();
        reg.add_line(catalog.get("2").unwrap(), draft(&catalog, "2"))
            .unwrap();
        reg.add_line(catalog.get("3").unwrap(), draft(&catalog, "3"))
            .unwrap();

        assert_eq!(reg.ledger(&first).unwrap().len(), 1);
        assert_eq!(reg.ledger(&second).unwrap().len(), 2);

        reg.set_active_guest(&first).unwrap();
        assert_eq!(reg.active_ledger().lines()[0].name, "Chicken Parmigiana");
    }

    #[test]
    fn test_line_ops_only_touch_active_ledger() {
        let catalog = MenuCatalog::seeded();
        let mut reg = registry();
        let first = reg.active_guest_id().to_string();
        let line_id = reg
            .add_line(catalog.get("1").unwrap(), draft(&catalog, "1"))
            .unwrap()
            .id
            .clone();

        reg.add_guest("Bob").unwrap();
        // Line belongs to the first guest: no-op from Bob's side
        assert!(!reg.remove_line(&line_id));
        assert_eq!(
            reg.set_quantity(&line_id, 0).unwrap(),
            QuantityChange::Unknown
        );
        assert_eq!(reg.ledger(&first).unwrap().len(), 1);
    }

    #[test]
    fn test_notifications_emitted() {
        let catalog = MenuCatalog::seeded();
        let mut reg = registry();
        let mut rx = reg.notifier.subscribe();

        reg.add_guest("Alice").unwrap();
        let line_id = reg
            .add_line(catalog.get("1").unwrap(), draft(&catalog, "1"))
            .unwrap()
            .id
            .clone();
        reg.set_quantity(&line_id, 3).unwrap();
        reg.set_quantity(&line_id, 0).unwrap();
        assert!(!reg.remove_line(&line_id));

        let guest = rx.try_recv().unwrap();
        assert_eq!(guest.kind, NotificationKind::GuestAdded);
        let added = rx.try_recv().unwrap();
        assert_eq!(added.kind, NotificationKind::ItemAdded);
        assert_eq!(
            added.description,
            "Chicken Parmigiana has been added to Alice's order"
        );
        assert_eq!(added.duration_ms, 2000);
        let removed = rx.try_recv().unwrap();
        assert_eq!(removed.kind, NotificationKind::ItemRemoved);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_rename_guest() {
        let mut reg = registry();
        let id = reg.active_guest_id().to_string();
        reg.rename_guest(&id, " Carol ").unwrap();
        assert_eq!(reg.active_guest().name, "Carol");
        assert_eq!(reg.rename_guest(&id, ""), Err(OrderError::BlankGuestName));
        assert_eq!(reg.active_guest().name, "Carol");
        assert!(matches!(
            reg.rename_guest("guest-404", "Dan"),
            Err(OrderError::GuestNotFound(_))
        ));
    }

    #[test]
    fn test_booking_totals_skip_empty_ledgers() {
        let catalog = MenuCatalog::seeded();
        let policy = BillingPolicy::default();
        let mut reg = registry();
        assert_eq!(reg.booking_totals(&policy), LedgerTotals::zero());

        reg.add_line(catalog.get("1").unwrap(), draft(&catalog, "1"))
            .unwrap();
        reg.add_guest("Bob").unwrap();
        reg.add_guest("Carol").unwrap();
        reg.add_line(catalog.get("3").unwrap(), draft(&catalog, "3"))
            .unwrap();

        let totals = reg.booking_totals(&policy);
        assert_eq!(totals.subtotal, Decimal::new(2500, 2));
        // Two ordering guests, Bob has nothing
        assert_eq!(totals.service_fee, Decimal::new(492, 2));
        assert_eq!(totals.grand_total, Decimal::new(3242, 2));
    }
}
