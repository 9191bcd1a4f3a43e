use super::ItemSelections;
use serde::{Deserialize, Serialize};

/// User intent sent by the presentation layer
///
/// Serialized as `{"type": "add_item", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeskIntent {
    /// Finalize a customization and add it to the active guest
    AddItem {
        menu_item_id: String,
        #[serde(default)]
        selections: ItemSelections,
    },
    /// Zero or below removes the line
    SetQuantity { line_id: String, quantity: i32 },
    RemoveLine { line_id: String },
    AddGuest { name: String },
    SetActiveGuest { guest_id: String },
    RenameGuest { guest_id: String, name: String },
    ChangeCategory { category: String },
}

impl DeskIntent {
    /// Intent name for logging
    pub fn name(&self) -> &'static str {
        match self {
            DeskIntent::AddItem { .. } => "add_item",
            DeskIntent::SetQuantity { .. } => "set_quantity",
            DeskIntent::RemoveLine { .. } => "remove_line",
            DeskIntent::AddGuest { .. } => "add_guest",
            DeskIntent::SetActiveGuest { .. } => "set_active_guest",
            DeskIntent::RenameGuest { .. } => "rename_guest",
            DeskIntent::ChangeCategory { .. } => "change_category",
        }
    }
}
