use serde::Deserialize;

pub const CURRENT_MEAL_PLAN: &str = "current";

/// Body of POST /api/shopping/generate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateShoppingListRequest {
    /// A meal plan id, or "current" for this week's plan
    pub meal_plan_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShoppingItemRequest {
    pub is_checked: bool,
}
