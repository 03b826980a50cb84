use crate::models::lenient;
use crate::{AiError, AiResult};

use std::collections::BTreeMap;

use chrono::NaiveDate;
use mp_core::{FamilyMember, UserPreferences};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inputs for a weekly plan call
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyPlanRequest {
    pub family_members: Vec<FamilyMember>,
    pub preferences: Option<UserPreferences>,
    pub pantry_items: Vec<String>,
    pub week_starting: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeal {
    pub title: String,
    pub description: String,
    pub cook_time: u32,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayMeals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<PlannedMeal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunch: Option<PlannedMeal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dinner: Option<PlannedMeal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: String,
    pub date: String,
    pub meals: DayMeals,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanShoppingList {
    pub ingredients: Vec<String>,
    pub categories: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionSummary {
    pub average_calories: u32,
    pub protein_balance: String,
    pub variety_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMealPlan {
    pub days: Vec<PlanDay>,
    pub shopping_list: PlanShoppingList,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition_summary: Option<NutritionSummary>,
}

impl WeeklyMealPlan {
    /// Validate and normalise the text model's reply. A reply without a
    /// `days` array is rejected.
    pub fn from_model_text(content: &str) -> AiResult<Self> {
        let parsed: Value = serde_json::from_str(content)?;

        let Some(days) = parsed.get("days").and_then(Value::as_array) else {
            return Err(AiError::schema("expected a `days` array"));
        };

        let days = days
            .iter()
            .filter(|day| day.is_object())
            .map(|day| PlanDay {
                day: lenient::text(day.get("day")).unwrap_or_default(),
                date: lenient::text(day.get("date")).unwrap_or_default(),
                meals: parse_day_meals(day.get("meals")),
            })
            .collect();

        let shopping_list = parsed
            .get("shoppingList")
            .map(parse_shopping_list)
            .unwrap_or_default();

        let nutrition_summary = parsed.get("nutritionSummary").and_then(|summary| {
            Some(NutritionSummary {
                average_calories: lenient::positive_u32(summary.get("averageCalories"))?,
                protein_balance: lenient::text(summary.get("proteinBalance"))
                    .unwrap_or_default(),
                variety_score: lenient::number(summary.get("varietyScore")).unwrap_or_default(),
            })
        });

        Ok(Self {
            days,
            shopping_list,
            nutrition_summary,
        })
    }
}

fn parse_day_meals(value: Option<&Value>) -> DayMeals {
    let Some(meals) = value else {
        return DayMeals::default();
    };

    DayMeals {
        breakfast: parse_meal(meals.get("breakfast")),
        lunch: parse_meal(meals.get("lunch")),
        dinner: parse_meal(meals.get("dinner")),
    }
}

fn parse_meal(value: Option<&Value>) -> Option<PlannedMeal> {
    let meal = value.filter(|v| v.is_object())?;

    Some(PlannedMeal {
        title: lenient::text(meal.get("title"))?,
        description: lenient::text(meal.get("description")).unwrap_or_default(),
        cook_time: lenient::positive_u32(meal.get("cookTime")).unwrap_or(30),
        ingredients: lenient::string_list(meal.get("ingredients")),
        instructions: lenient::string_list(meal.get("instructions")),
        tags: lenient::string_list(meal.get("tags")),
    })
}

fn parse_shopping_list(value: &Value) -> PlanShoppingList {
    let categories = match value.get("categories") {
        Some(Value::Object(map)) => map
            .iter()
            .map(|(category, items)| (category.clone(), lenient::string_list(Some(items))))
            .collect(),
        _ => BTreeMap::new(),
    };

    PlanShoppingList {
        ingredients: lenient::string_list(value.get("ingredients")),
        categories,
    }
}
