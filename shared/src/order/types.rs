//! Shared types for guest orders

use crate::models::MenuItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Maximum allowed quantity per line item
pub const MAX_QUANTITY: i32 = 9999;

// ============================================================================
// Selected Modifier
// ============================================================================

/// Chosen state of one modifier on one line item
///
/// At most one per modifier id per line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedModifier {
    /// Modifier ID
    pub id: String,
    /// Modifier name snapshot
    pub name: String,
    /// Effective per-unit price: modifier price plus the chosen option's delta
    pub price: Decimal,
    /// Chosen option label (single-choice modifiers only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
}

// ============================================================================
// Line Item
// ============================================================================

/// One customized entry in a guest's cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Line ID (fresh per add, identical dishes never merge)
    pub id: String,
    /// Menu item reference
    pub menu_item_id: String,
    /// Menu item name snapshot
    pub name: String,
    /// Base price of the menu item, without modifiers
    pub unit_price: Decimal,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub selected_modifiers: Vec<SelectedModifier>,
    #[serde(default)]
    pub special_request: String,
    /// Always >= 1
    pub quantity: i32,
}

impl LineItem {
    /// Build a line from a catalog item and finalized choices
    pub fn from_menu_item(
        id: String,
        item: &MenuItem,
        selected_modifiers: Vec<SelectedModifier>,
        special_request: String,
        quantity: i32,
    ) -> Self {
        Self {
            id,
            menu_item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            image: item.image.clone(),
            category: item.category.clone(),
            selected_modifiers,
            special_request,
            quantity,
        }
    }

    /// Sum of selected modifier prices for one unit
    pub fn modifiers_total(&self) -> Decimal {
        self.selected_modifiers.iter().map(|m| m.price).sum()
    }

    pub fn has_special_request(&self) -> bool {
        !self.special_request.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_serializes_without_empty_option() {
        let line = LineItem {
            id: "line-1".to_string(),
            menu_item_id: "1".to_string(),
            name: "Chicken Parmigiana".to_string(),
            unit_price: Decimal::new(1200, 2),
            image: "chicken-parmigiana.jpg".to_string(),
            category: "Hot subs".to_string(),
            selected_modifiers: vec![SelectedModifier {
                id: "cheese".to_string(),
                name: "Extra Cheese".to_string(),
                price: Decimal::new(150, 2),
                option: None,
            }],
            special_request: String::new(),
            quantity: 2,
        };
        let json = serde_json::to_value(&line).unwrap();
        assert!(json["selected_modifiers"][0].get("option").is_none());
        assert_eq!(json["unit_price"], 12.0);
        assert_eq!(line.modifiers_total(), Decimal::new(150, 2));
        assert!(!line.has_special_request());
    }
}
