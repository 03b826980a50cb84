use crate::RecipeDto;

use mp_store::{MealPlanWithMeals, MealWithRecipe};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealDto {
    pub id: String,
    pub meal_plan_id: String,
    pub recipe_id: String,
    pub day_of_week: u8,
    pub day_name: String,
    pub meal_type: String,
    pub scheduled_time: Option<String>,
    pub recipe: RecipeDto,
}

impl From<MealWithRecipe> for MealDto {
    fn from(m: MealWithRecipe) -> Self {
        Self {
            id: m.meal.id.to_string(),
            meal_plan_id: m.meal.meal_plan_id.to_string(),
            recipe_id: m.meal.recipe_id.to_string(),
            day_of_week: m.meal.day_of_week,
            day_name: m.meal.day_name().to_string(),
            meal_type: m.meal.meal_type.as_str().to_string(),
            scheduled_time: m.meal.scheduled_time,
            recipe: m.recipe.into(),
        }
    }
}

/// Meal plan with its scheduled meals, ordered by day then meal type
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanDto {
    pub id: String,
    pub user_id: String,
    pub week_starting: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub meals: Vec<MealDto>,
}

impl From<MealPlanWithMeals> for MealPlanDto {
    fn from(joined: MealPlanWithMeals) -> Self {
        Self {
            id: joined.plan.id.to_string(),
            user_id: joined.plan.user_id.to_string(),
            week_starting: joined.plan.week_starting,
            created_at: joined.plan.created_at,
            meals: joined.meals.into_iter().map(Into::into).collect(),
        }
    }
}
