use mp_core::{ShoppingList, ShoppingListItem};
use mp_store::ShoppingListWithItems;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItemDto {
    pub id: String,
    pub shopping_list_id: String,
    pub ingredient_id: Option<String>,
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub unit: Option<String>,
    pub is_checked: bool,
    pub added_from: Option<String>,
}

impl From<ShoppingListItem> for ShoppingListItemDto {
    fn from(i: ShoppingListItem) -> Self {
        Self {
            id: i.id.to_string(),
            shopping_list_id: i.shopping_list_id.to_string(),
            ingredient_id: i.ingredient_id.map(|id| id.to_string()),
            name: i.name,
            category: i.category,
            quantity: i.quantity,
            unit: i.unit,
            is_checked: i.is_checked,
            added_from: i.added_from,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListDto {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub meal_plan_id: Option<String>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ShoppingList> for ShoppingListDto {
    fn from(l: ShoppingList) -> Self {
        Self {
            id: l.id.to_string(),
            user_id: l.user_id.to_string(),
            name: l.name,
            meal_plan_id: l.meal_plan_id.map(|id| id.to_string()),
            is_completed: l.is_completed,
            created_at: l.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListDetailDto {
    #[serde(flatten)]
    pub list: ShoppingListDto,
    pub items: Vec<ShoppingListItemDto>,
}

impl From<ShoppingListWithItems> for ShoppingListDetailDto {
    fn from(joined: ShoppingListWithItems) -> Self {
        Self {
            list: joined.list.into(),
            items: joined.items.into_iter().map(Into::into).collect(),
        }
    }
}
