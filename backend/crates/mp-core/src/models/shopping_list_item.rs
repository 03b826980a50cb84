use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: Uuid,
    pub shopping_list_id: Uuid,
    /// None for custom items that are not in the ingredient catalog
    pub ingredient_id: Option<Uuid>,
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub unit: Option<String>,
    pub is_checked: bool,
    /// Recipe titles this item was aggregated from
    pub added_from: Option<String>,
}

impl ShoppingListItem {
    pub fn new(shopping_list_id: Uuid, name: String, category: String, quantity: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            shopping_list_id,
            ingredient_id: None,
            name,
            category,
            quantity,
            unit: None,
            is_checked: false,
            added_from: None,
        }
    }
}
