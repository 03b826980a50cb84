use chrono::NaiveDate;
use serde::Deserialize;

/// Week selector shared by plan creation and generation. Any date in the week
/// is accepted and moved back to its Sunday.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeekRequest {
    pub week_starting: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrentPlanQuery {
    pub week_starting: Option<NaiveDate>,
}

/// Body of POST /api/meal-plans/add-recipe
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRecipeRequest {
    pub recipe_id: String,
    /// RFC 3339 timestamp or `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub meal_type: Option<String>,
    #[serde(default)]
    pub day_of_week: Option<i64>,
}
