//! Menu Model
//!
//! Static catalog data. Built once at startup and never mutated.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Option of a single-choice modifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierOption {
    pub label: String,
    /// Non-negative price delta in currency unit, added on top of the
    /// modifier's own price
    #[serde(default)]
    pub price_delta: Decimal,
}

impl ModifierOption {
    pub fn new(label: impl Into<String>, price_delta: Decimal) -> Self {
        Self {
            label: label.into(),
            price_delta,
        }
    }

}

/// How a modifier is chosen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModifierKind {
    /// Included or excluded
    Toggle,
    /// Exactly one of the options, or none
    SingleChoice {
        options: Vec<ModifierOption>,
        /// Index into `options` pre-selected when customization starts
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_option: Option<usize>,
    },
}

/// Customization axis on a menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub id: String,
    pub name: String,
    /// Base price delta (may be zero)
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub required: bool,
    pub kind: ModifierKind,
}

impl Modifier {
    pub fn toggle(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            required: false,
            kind: ModifierKind::Toggle,
        }
    }

    pub fn single_choice(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        options: Vec<ModifierOption>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            required: false,
            kind: ModifierKind::SingleChoice {
                options,
                default_option: None,
            },
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Pre-select the option at `index` (ignored for toggles)
    pub fn with_default_option(mut self, index: usize) -> Self {
        if let ModifierKind::SingleChoice { default_option, .. } = &mut self.kind {
            *default_option = Some(index);
        }
        self
    }

    pub fn is_toggle(&self) -> bool {
        matches!(self.kind, ModifierKind::Toggle)
    }

    pub fn options(&self) -> &[ModifierOption] {
        match &self.kind {
            ModifierKind::Toggle => &[],
            ModifierKind::SingleChoice { options, .. } => options,
        }
    }

    pub fn find_option(&self, label: &str) -> Option<&ModifierOption> {
        self.options().iter().find(|o| o.label == label)
    }

    pub fn default_option(&self) -> Option<&ModifierOption> {
        match &self.kind {
            ModifierKind::Toggle => None,
            ModifierKind::SingleChoice {
                options,
                default_option,
            } => default_option.and_then(|idx| options.get(idx)),
        }
    }
}

/// Purchasable dish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    /// Image reference (asset path or URL)
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

impl MenuItem {
    pub fn modifier(&self, modifier_id: &str) -> Option<&Modifier> {
        self.modifiers.iter().find(|m| m.id == modifier_id)
    }
}
