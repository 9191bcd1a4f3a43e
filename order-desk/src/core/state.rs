//! Desk state
//!
//! [`OrderDesk`] is the single owner of everything the ordering screen works
//! on: the catalog, the guests with their ledgers, the selected category and
//! the notification channel. The presentation layer sends [`DeskIntent`]s and
//! renders [`DeskView`] snapshots.

use super::Config;
use crate::bill::BillRenderer;
use crate::catalog::MenuCatalog;
use crate::message::Notifier;
use crate::order_money::{self, BillingPolicy};
use crate::ordering::{DeskIntent, GuestRegistry, ModifierSelection, OrderError, OrderResult};
use serde::Serialize;
use shared::message::Notification;
use shared::models::{Guest, MenuItem};
use shared::order::{LedgerTotals, LineItem};
use tokio::sync::broadcast;

/// One cart line with its derived prices
#[derive(Debug, Clone, Serialize)]
pub struct LineView {
    #[serde(flatten)]
    pub line: LineItem,
    /// Base price + modifiers, rounded for display
    pub unit_total: f64,
    /// Unit total × quantity, rounded for display
    pub line_total: f64,
}

/// Snapshot of what the ordering screen shows
#[derive(Debug, Clone, Serialize)]
pub struct DeskView {
    pub categories: Vec<String>,
    pub active_category: Option<String>,
    /// Items of the active category
    pub menu: Vec<MenuItem>,
    pub guests: Vec<Guest>,
    pub active_guest_id: String,
    /// Active guest's lines
    pub lines: Vec<LineView>,
    /// None while the active ledger is empty
    pub totals: Option<LedgerTotals>,
}

#[derive(Debug)]
pub struct OrderDesk {
    config: Config,
    policy: BillingPolicy,
    catalog: MenuCatalog,
    registry: GuestRegistry,
    active_category: Option<String>,
    notifier: Notifier,
}

impl OrderDesk {
    /// Desk over the seeded catalog
    pub fn new(config: Config) -> Self {
        Self::with_catalog(config, MenuCatalog::seeded())
    }

    pub fn with_catalog(config: Config, catalog: MenuCatalog) -> Self {
        let notifier = Notifier::new();
        let registry = GuestRegistry::new(
            &config.default_guest_name,
            notifier.clone(),
            config.notification_duration_ms,
        );
        let active_category = catalog.default_category().map(str::to_string);
        tracing::info!(
            items = catalog.items().len(),
            guest = %registry.active_guest().name,
            "Order desk ready"
        );
        Self {
            policy: config.billing_policy(),
            config,
            catalog,
            registry,
            active_category,
            notifier,
        }
    }

    /// Apply one user intent
    ///
    /// A rejected intent leaves the desk unchanged.
    pub fn dispatch(&mut self, intent: DeskIntent) -> OrderResult<()> {
        let name = intent.name();
        let result = self.apply(intent);
        if let Err(e) = &result {
            tracing::warn!(intent = name, error = %e, "Intent rejected");
        }
        result
    }

    fn apply(&mut self, intent: DeskIntent) -> OrderResult<()> {
        match intent {
            DeskIntent::AddItem {
                menu_item_id,
                selections,
            } => {
                let item = self.catalog.get(&menu_item_id)?;
                let draft = ModifierSelection::from_selections(item, &selections)?.finalize()?;
                self.registry.add_line(item, draft)?;
            }
            DeskIntent::SetQuantity { line_id, quantity } => {
                self.registry.set_quantity(&line_id, quantity)?;
            }
            DeskIntent::RemoveLine { line_id } => {
                self.registry.remove_line(&line_id);
            }
            DeskIntent::AddGuest { name } => {
                self.registry.add_guest(&name)?;
            }
            DeskIntent::SetActiveGuest { guest_id } => {
                self.registry.set_active_guest(&guest_id)?;
            }
            DeskIntent::RenameGuest { guest_id, name } => {
                self.registry.rename_guest(&guest_id, &name)?;
            }
            DeskIntent::ChangeCategory { category } => {
                if !self.catalog.has_category(&category) {
                    return Err(OrderError::CategoryNotFound(category));
                }
                tracing::debug!(category = %category, "Category changed");
                self.active_category = Some(category);
            }
        }
        Ok(())
    }

    pub fn view(&self) -> DeskView {
        let menu = match &self.active_category {
            Some(category) => self.catalog.items_in(category).cloned().collect(),
            None => Vec::new(),
        };
        let ledger = self.registry.active_ledger();
        let lines = ledger
            .lines()
            .iter()
            .map(|line| LineView {
                unit_total: order_money::to_f64(order_money::calculate_unit_price(line)),
                line_total: order_money::to_f64(order_money::calculate_line_total(line)),
                line: line.clone(),
            })
            .collect();
        let totals = (!ledger.is_empty()).then(|| ledger.compute_totals(&self.policy).rounded());

        DeskView {
            categories: self.catalog.categories().to_vec(),
            active_category: self.active_category.clone(),
            menu,
            guests: self.registry.guests().cloned().collect(),
            active_guest_id: self.registry.active_guest_id().to_string(),
            lines,
            totals,
        }
    }

    /// Receive notifications published after this call
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.notifier.subscribe()
    }

    /// Active guest's bill as 48-column text
    pub fn print_bill(&self) -> String {
        BillRenderer::new(
            self.registry.active_guest(),
            self.registry.active_ledger(),
            &self.policy,
        )
        .render()
    }

    /// Active guest's totals at full precision
    pub fn active_totals(&self) -> LedgerTotals {
        self.registry.active_ledger().compute_totals(&self.policy)
    }

    /// Totals over every guest of the booking
    pub fn booking_totals(&self) -> LedgerTotals {
        self.registry.booking_totals(&self.policy)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn registry(&self) -> &GuestRegistry {
        &self.registry
    }

    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }
}
