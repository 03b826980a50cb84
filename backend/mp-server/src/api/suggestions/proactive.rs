//! Rule-based proactive suggestions.
//!
//! Rules run in a fixed order: expiring pantry items, the best pantry
//! recipe, a missing plan for the week, a plan without a shopping list, then a
//! time-of-day cooking tip. Ids are derived from the data they describe, so a
//! dismissed suggestion stays dismissed until that data changes.

use crate::{ProactiveSuggestion, SuggestionPriority, SuggestionType};

use mp_core::{MealPlan, MealType, PantryItem, ScoredRecipe};

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset, NaiveDate, Timelike, Utc};
use serde_json::json;

pub const EXPIRY_WINDOW_DAYS: i64 = 3;

/// A pantry item with the ingredient name it refers to
#[derive(Debug, Clone)]
pub struct PantryEntry {
    pub item: PantryItem,
    pub name: String,
}

/// Everything the rules look at, gathered from the store by the handler
#[derive(Debug, Clone)]
pub struct SuggestionInputs {
    pub now: DateTime<FixedOffset>,
    pub pantry: Vec<PantryEntry>,
    pub best_recipe: Option<ScoredRecipe>,
    pub week_starting: NaiveDate,
    pub current_plan: Option<PlanStatus>,
    pub dismissed: HashSet<String>,
}

#[derive(Debug, Clone)]
pub struct PlanStatus {
    pub plan: MealPlan,
    pub meal_count: usize,
    pub has_shopping_list: bool,
}

pub fn proactive_suggestions(inputs: &SuggestionInputs) -> Vec<ProactiveSuggestion> {
    let created_at = inputs.now.with_timezone(&Utc);

    let candidates = [
        expiry_warning(inputs, created_at),
        recipe_suggestion(inputs, created_at),
        meal_plan_suggestion(inputs, created_at),
        shopping_suggestion(inputs, created_at),
        Some(cooking_tip(inputs.now, created_at)),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter(|s| !inputs.dismissed.contains(&s.id))
        .collect()
}

fn expiry_warning(inputs: &SuggestionInputs, now: DateTime<Utc>) -> Option<ProactiveSuggestion> {
    let expiring: Vec<&PantryEntry> = inputs
        .pantry
        .iter()
        .filter(|entry| entry.item.expires_within(now, EXPIRY_WINDOW_DAYS))
        .collect();

    if expiring.is_empty() {
        return None;
    }

    let mut ids: Vec<String> = expiring.iter().map(|e| e.item.id.to_string()).collect();
    ids.sort();
    let names: Vec<&str> = expiring.iter().map(|e| e.name.as_str()).collect();

    let description = if names.len() == 1 {
        format!(
            "{} expires within {} days. Use it before it goes to waste.",
            names[0], EXPIRY_WINDOW_DAYS
        )
    } else {
        format!(
            "{} pantry items expire within {} days. Use them before they go to waste.",
            names.len(),
            EXPIRY_WINDOW_DAYS
        )
    };

    Some(ProactiveSuggestion {
        id: format!("expiry-{}", ids.join("-")),
        kind: SuggestionType::ExpiryWarning,
        title: "Ingredients expiring soon".to_string(),
        description,
        action: None,
        priority: SuggestionPriority::High,
        data: Some(json!({ "expiringItems": names })),
        created_at: now,
    })
}

fn recipe_suggestion(inputs: &SuggestionInputs, now: DateTime<Utc>) -> Option<ProactiveSuggestion> {
    let best = inputs.best_recipe.as_ref().filter(|s| s.match_ratio > 0.0)?;
    let percentage = (best.match_ratio * 100.0).round() as u32;
    let meal_type = MealType::for_hour(inputs.now.hour());

    Some(ProactiveSuggestion {
        id: format!("recipe-{}", best.recipe.id),
        kind: SuggestionType::Recipe,
        title: format!("You can make {}", best.recipe.title),
        description: format!(
            "{}% of the ingredients are already in your pantry.",
            percentage
        ),
        action: Some("Generate a recipe".to_string()),
        priority: SuggestionPriority::Medium,
        data: Some(json!({
            "recipeId": best.recipe.id.to_string(),
            "mealType": meal_type.as_str(),
            "matchPercentage": percentage,
        })),
        created_at: now,
    })
}

fn meal_plan_suggestion(
    inputs: &SuggestionInputs,
    now: DateTime<Utc>,
) -> Option<ProactiveSuggestion> {
    if inputs.current_plan.is_some() {
        return None;
    }

    let week = inputs.week_starting.format("%Y-%m-%d").to_string();
    Some(ProactiveSuggestion {
        id: format!("meal-plan-{}", week),
        kind: SuggestionType::MealPlan,
        title: "Plan this week's meals".to_string(),
        description: "You don't have a meal plan for this week yet.".to_string(),
        action: Some("Create meal plan".to_string()),
        priority: SuggestionPriority::Medium,
        data: Some(json!({ "weekStarting": week })),
        created_at: now,
    })
}

fn shopping_suggestion(
    inputs: &SuggestionInputs,
    now: DateTime<Utc>,
) -> Option<ProactiveSuggestion> {
    let status = inputs
        .current_plan
        .as_ref()
        .filter(|s| s.meal_count > 0 && !s.has_shopping_list)?;

    Some(ProactiveSuggestion {
        id: format!("shopping-{}", status.plan.id),
        kind: SuggestionType::Shopping,
        title: "Create your shopping list".to_string(),
        description: format!(
            "Your plan has {} meals scheduled but no shopping list.",
            status.meal_count
        ),
        action: Some("Generate shopping list".to_string()),
        priority: SuggestionPriority::Medium,
        data: Some(json!({ "mealPlanId": status.plan.id.to_string() })),
        created_at: now,
    })
}

fn cooking_tip(local: DateTime<FixedOffset>, now: DateTime<Utc>) -> ProactiveSuggestion {
    let meal_type = MealType::for_hour(local.hour());

    let (title, description) = match meal_type {
        MealType::Breakfast => (
            "Breakfast tip",
            "Overnight oats or a veggie omelette keep you full until lunch.",
        ),
        MealType::Lunch => (
            "Lunch tip",
            "Cook a double batch at dinner and pack the leftovers for tomorrow's lunch.",
        ),
        MealType::Dinner | MealType::Snack => (
            "Dinner tip",
            "Prep vegetables while the oven heats to get dinner on the table sooner.",
        ),
    };

    ProactiveSuggestion {
        id: format!("tip-{}", meal_type.as_str()),
        kind: SuggestionType::CookingTip,
        title: title.to_string(),
        description: description.to_string(),
        action: None,
        priority: SuggestionPriority::Low,
        data: None,
        created_at: now,
    }
}
