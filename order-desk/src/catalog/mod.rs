//! Menu catalog
//!
//! Immutable list of categories and menu items, validated once on
//! construction. The category filter is a read-only view over it.

mod seed;

use crate::order_money::validate_amount;
use crate::ordering::{OrderError, OrderResult};
use shared::models::{MenuItem, ModifierKind};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct MenuCatalog {
    categories: Vec<String>,
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Build a catalog, rejecting inconsistent data
    ///
    /// - item ids are unique, and so are modifier ids within one item
    /// - every item belongs to a listed category
    /// - item prices, modifier prices and option deltas are non-negative and
    ///   within bounds
    /// - single-choice defaults point at an existing option
    pub fn new(categories: Vec<String>, items: Vec<MenuItem>) -> OrderResult<Self> {
        let mut item_ids = HashSet::new();
        for item in &items {
            if !item_ids.insert(item.id.as_str()) {
                return Err(OrderError::InvalidCatalog(format!(
                    "duplicate menu item id {}",
                    item.id
                )));
            }
            if !categories.iter().any(|c| c == &item.category) {
                return Err(OrderError::CategoryNotFound(item.category.clone()));
            }
            validate_amount(item.price, "price")?;

            let mut modifier_ids = HashSet::new();
            for modifier in &item.modifiers {
                if !modifier_ids.insert(modifier.id.as_str()) {
                    return Err(OrderError::InvalidCatalog(format!(
                        "duplicate modifier id {} on item {}",
                        modifier.id, item.id
                    )));
                }
                validate_amount(modifier.price, "modifier price")?;
                if let ModifierKind::SingleChoice {
                    options,
                    default_option,
                } = &modifier.kind
                {
                    for option in options {
                        validate_amount(option.price_delta, "option price_delta")?;
                    }
                    if let Some(idx) = default_option
                        && *idx >= options.len()
                    {
                        return Err(OrderError::OptionNotFound {
                            modifier_id: modifier.id.clone(),
                            option: format!("#{}", idx),
                        });
                    }
                }
            }
        }

        tracing::debug!(
            categories = categories.len(),
            items = items.len(),
            "Menu catalog loaded"
        );
        Ok(Self { categories, items })
    }

    /// Catalog shipped with the desk
    pub fn seeded() -> Self {
        let (categories, items) = seed::default_menu();
        Self { categories, items }
    }

    /// Categories in display order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// First category, selected when the desk opens
    pub fn default_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Items of one category, in catalog order
    pub fn items_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a MenuItem> + 'a {
        self.items.iter().filter(move |i| i.category == category)
    }

    pub fn find(&self, menu_item_id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == menu_item_id)
    }

    /// Like [`find`](Self::find), but reports a missing item as an error
    pub fn get(&self, menu_item_id: &str) -> OrderResult<&MenuItem> {
        self.find(menu_item_id)
            .ok_or_else(|| OrderError::MenuItemNotFound(menu_item_id.to_string()))
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}
