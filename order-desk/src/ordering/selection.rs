//! Item customization
//!
//! A [`ModifierSelection`] is the pending state of the "customize item"
//! dialog: chosen modifiers, special request and quantity for one menu item.
//! It prices itself as choices change and is finalized into the parts of a
//! new line item.

use super::{OrderError, OrderResult};
use crate::order_money;
use crate::utils::validation::{MAX_NOTE_LEN, validate_text_len};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{MenuItem, Modifier, ModifierKind};
use shared::order::{MAX_QUANTITY, SelectedModifier};

/// One single-choice pick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionChoice {
    pub modifier_id: String,
    pub option: String,
}

/// Serializable user choices for one menu item (add-item intent payload)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSelections {
    /// Toggle modifiers to include
    #[serde(default)]
    pub toggles: Vec<String>,
    #[serde(default)]
    pub choices: Vec<OptionChoice>,
    #[serde(default)]
    pub special_request: String,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

impl Default for ItemSelections {
    fn default() -> Self {
        Self {
            toggles: Vec::new(),
            choices: Vec::new(),
            special_request: String::new(),
            quantity: default_quantity(),
        }
    }
}

/// Finalized choices, ready to become a line item
#[derive(Debug, Clone, PartialEq)]
pub struct LineDraft {
    pub selected_modifiers: Vec<SelectedModifier>,
    pub special_request: String,
    pub quantity: i32,
}

/// Pending customization of one menu item
#[derive(Debug, Clone)]
pub struct ModifierSelection<'a> {
    item: &'a MenuItem,
    selected: Vec<SelectedModifier>,
    special_request: String,
    quantity: i32,
}

impl<'a> ModifierSelection<'a> {
    /// Start customizing `item`
    ///
    /// Required single-choice modifiers start on their default option and
    /// required toggles start included.
    pub fn new(item: &'a MenuItem) -> Self {
        let selected = item
            .modifiers
            .iter()
            .filter(|m| m.required)
            .filter_map(|m| match &m.kind {
                ModifierKind::Toggle => Some(selected_toggle(m)),
                ModifierKind::SingleChoice { .. } => m.default_option().map(|o| SelectedModifier {
                    id: m.id.clone(),
                    name: m.name.clone(),
                    price: m.price + o.price_delta,
                    option: Some(o.label.clone()),
                }),
            })
            .collect();

        Self {
            item,
            selected,
            special_request: String::new(),
            quantity: 1,
        }
    }

    /// Replay serialized choices on top of the defaults
    pub fn from_selections(item: &'a MenuItem, selections: &ItemSelections) -> OrderResult<Self> {
        let mut selection = Self::new(item);
        for modifier_id in &selections.toggles {
            selection.toggle(modifier_id, true)?;
        }
        for choice in &selections.choices {
            selection.choose_option(&choice.modifier_id, &choice.option)?;
        }
        selection.set_special_request(&selections.special_request)?;
        selection.set_quantity(selections.quantity)?;
        Ok(selection)
    }

    pub fn item(&self) -> &'a MenuItem {
        self.item
    }

    fn modifier(&self, modifier_id: &str) -> OrderResult<&'a Modifier> {
        self.item
            .modifier(modifier_id)
            .ok_or_else(|| OrderError::ModifierNotFound(modifier_id.to_string()))
    }

    fn position(&self, modifier_id: &str) -> Option<usize> {
        self.selected.iter().position(|s| s.id == modifier_id)
    }

    /// Include or exclude a toggle modifier
    pub fn toggle(&mut self, modifier_id: &str, included: bool) -> OrderResult<()> {
        let modifier = self.modifier(modifier_id)?;
        if !modifier.is_toggle() {
            return Err(OrderError::ModifierKindMismatch {
                modifier_id: modifier_id.to_string(),
                operation: "toggle",
            });
        }

        match (included, self.position(modifier_id)) {
            (true, None) => self.selected.push(selected_toggle(modifier)),
            (false, Some(_)) if modifier.required => {
                return Err(OrderError::RequiredModifierMissing(modifier_id.to_string()));
            }
            (false, Some(idx)) => {
                self.selected.remove(idx);
            }
            _ => {}
        }
        Ok(())
    }

    /// Pick an option of a single-choice modifier, replacing any earlier pick
    pub fn choose_option(&mut self, modifier_id: &str, label: &str) -> OrderResult<()> {
        let modifier = self.modifier(modifier_id)?;
        if modifier.is_toggle() {
            return Err(OrderError::ModifierKindMismatch {
                modifier_id: modifier_id.to_string(),
                operation: "choose_option",
            });
        }
        let option = modifier
            .find_option(label)
            .ok_or_else(|| OrderError::OptionNotFound {
                modifier_id: modifier_id.to_string(),
                option: label.to_string(),
            })?;

        let chosen = SelectedModifier {
            id: modifier.id.clone(),
            name: modifier.name.clone(),
            price: modifier.price + option.price_delta,
            option: Some(option.label.clone()),
        };
        match self.position(modifier_id) {
            Some(idx) => self.selected[idx] = chosen,
            None => self.selected.push(chosen),
        }
        Ok(())
    }

    /// Drop whatever is selected for a modifier
    pub fn clear(&mut self, modifier_id: &str) -> OrderResult<()> {
        let modifier = self.modifier(modifier_id)?;
        if modifier.required {
            return Err(OrderError::RequiredModifierMissing(modifier_id.to_string()));
        }
        if let Some(idx) = self.position(modifier_id) {
            self.selected.remove(idx);
        }
        Ok(())
    }

    pub fn is_selected(&self, modifier_id: &str) -> bool {
        self.position(modifier_id).is_some()
    }

    /// Chosen option label of a single-choice modifier
    pub fn chosen_option(&self, modifier_id: &str) -> Option<&str> {
        self.selected
            .iter()
            .find(|s| s.id == modifier_id)
            .and_then(|s| s.option.as_deref())
    }

    pub fn selected(&self) -> &[SelectedModifier] {
        &self.selected
    }

    pub fn set_special_request(&mut self, text: &str) -> OrderResult<()> {
        let text = text.trim();
        validate_text_len(text, "special_request", MAX_NOTE_LEN)?;
        self.special_request = text.to_string();
        Ok(())
    }

    pub fn special_request(&self) -> &str {
        &self.special_request
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn increment(&mut self) -> OrderResult<()> {
        self.set_quantity(self.quantity + 1)
    }

    /// Decrease quantity, never below 1
    pub fn decrement(&mut self) {
        self.quantity = (self.quantity - 1).max(1);
    }

    /// Values below 1 clamp to 1
    pub fn set_quantity(&mut self, quantity: i32) -> OrderResult<()> {
        if quantity > MAX_QUANTITY {
            return Err(OrderError::InvalidQuantity(quantity));
        }
        self.quantity = quantity.max(1);
        Ok(())
    }

    /// Base price + selected modifiers, for one unit
    pub fn unit_price(&self) -> Decimal {
        self.item.price + self.selected.iter().map(|s| s.price).sum::<Decimal>()
    }

    /// Unit price × pending quantity
    pub fn line_total(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.quantity)
    }

    /// Required modifiers with nothing selected
    pub fn missing_required(&self) -> Vec<&'a Modifier> {
        self.item
            .modifiers
            .iter()
            .filter(|m| m.required && !self.is_selected(&m.id))
            .collect()
    }

    /// Consume the selection, enforcing required modifiers
    pub fn finalize(self) -> OrderResult<LineDraft> {
        if let Some(missing) = self.missing_required().first() {
            return Err(OrderError::RequiredModifierMissing(missing.id.clone()));
        }
        order_money::validate_quantity(self.quantity)?;
        Ok(LineDraft {
            selected_modifiers: self.selected,
            special_request: self.special_request,
            quantity: self.quantity,
        })
    }
}

fn selected_toggle(modifier: &Modifier) -> SelectedModifier {
    SelectedModifier {
        id: modifier.id.clone(),
        name: modifier.name.clone(),
        price: modifier.price,
        option: None,
    }
}
