use crate::api::suggestions::proactive::{
    PantryEntry, PlanStatus, SuggestionInputs, proactive_suggestions,
};
use crate::{SuggestionPriority, SuggestionType};

use mp_core::{MealPlan, PantryItem, Recipe, ScoredRecipe, week_start_for};

use std::collections::HashSet;

use chrono::{DateTime, Duration, FixedOffset, Utc};
use googletest::assert_that;
use googletest::prelude::{eq, len};
use uuid::Uuid;

fn at(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap()
}

fn empty_inputs(now: DateTime<FixedOffset>) -> SuggestionInputs {
    SuggestionInputs {
        now,
        pantry: Vec::new(),
        best_recipe: None,
        week_starting: week_start_for(now.date_naive()),
        current_plan: None,
        dismissed: HashSet::new(),
    }
}

fn pantry_entry(name: &str, expires_in_days: Option<i64>, now: DateTime<Utc>) -> PantryEntry {
    let mut item = PantryItem::new(Uuid::new_v4(), Uuid::new_v4());
    item.expiry_date = expires_in_days.map(|days| now + Duration::days(days));
    PantryEntry {
        item,
        name: name.to_string(),
    }
}

fn kinds(inputs: &SuggestionInputs) -> Vec<SuggestionType> {
    proactive_suggestions(inputs).iter().map(|s| s.kind).collect()
}

#[test]
fn given_nothing_known_when_suggesting_then_plan_and_tip() {
    // Given
    let inputs = empty_inputs(at("2025-03-12T18:30:00Z"));

    // When
    let suggestions = proactive_suggestions(&inputs);

    // Then
    assert_that!(suggestions, len(eq(2)));
    assert_eq!(suggestions[0].kind, SuggestionType::MealPlan);
    assert_eq!(suggestions[0].id, "meal-plan-2025-03-09");
    assert_eq!(suggestions[1].kind, SuggestionType::CookingTip);
    assert_eq!(suggestions[1].id, "tip-dinner");
    assert_eq!(suggestions[1].priority, SuggestionPriority::Low);
}

#[test]
fn given_items_expiring_when_suggesting_then_high_priority_warning_first() {
    // Given
    let now = at("2025-03-12T08:00:00Z");
    let utc = now.with_timezone(&Utc);
    let mut inputs = empty_inputs(now);
    inputs.pantry = vec![
        pantry_entry("Milk", Some(1), utc),
        pantry_entry("Rice", Some(90), utc),
        pantry_entry("Salt", None, utc),
        pantry_entry("Spinach", Some(3), utc),
    ];

    // When
    let suggestions = proactive_suggestions(&inputs);

    // Then
    let warning = &suggestions[0];
    assert_eq!(warning.kind, SuggestionType::ExpiryWarning);
    assert_eq!(warning.priority, SuggestionPriority::High);
    let data = warning.data.as_ref().unwrap();
    assert_eq!(data["expiringItems"], serde_json::json!(["Milk", "Spinach"]));
}

#[test]
fn given_best_recipe_when_suggesting_then_recipe_suggestion_carries_match() {
    // Given
    let mut inputs = empty_inputs(at("2025-03-12T12:00:00Z"));
    let recipe = Recipe::new("Garlic Pasta".to_string(), Vec::new(), 20, 2);
    let recipe_id = recipe.id;
    inputs.best_recipe = Some(ScoredRecipe {
        recipe,
        match_ratio: 0.75,
    });

    // When
    let suggestions = proactive_suggestions(&inputs);

    // Then
    let suggestion = suggestions
        .iter()
        .find(|s| s.kind == SuggestionType::Recipe)
        .unwrap();
    assert_eq!(suggestion.id, format!("recipe-{}", recipe_id));
    let data = suggestion.data.as_ref().unwrap();
    assert_eq!(data["matchPercentage"], 75);
    assert_eq!(data["mealType"], "lunch");
}

#[test]
fn given_recipe_with_no_match_when_suggesting_then_no_recipe_suggestion() {
    let mut inputs = empty_inputs(at("2025-03-12T12:00:00Z"));
    inputs.best_recipe = Some(ScoredRecipe {
        recipe: Recipe::new("Soup".to_string(), Vec::new(), 20, 2),
        match_ratio: 0.0,
    });

    assert!(!kinds(&inputs).contains(&SuggestionType::Recipe));
}

#[test]
fn given_plan_with_meals_and_no_list_when_suggesting_then_shopping_suggestion() {
    // Given
    let now = at("2025-03-12T12:00:00Z");
    let mut inputs = empty_inputs(now);
    let plan = MealPlan::new(Uuid::new_v4(), inputs.week_starting);
    let plan_id = plan.id;
    inputs.current_plan = Some(PlanStatus {
        plan,
        meal_count: 3,
        has_shopping_list: false,
    });

    // When
    let suggestions = proactive_suggestions(&inputs);

    // Then
    assert_eq!(
        kinds(&inputs),
        vec![SuggestionType::Shopping, SuggestionType::CookingTip]
    );
    assert_eq!(
        suggestions[0].data.as_ref().unwrap()["mealPlanId"],
        plan_id.to_string()
    );
}

#[test]
fn given_plan_with_list_when_suggesting_then_only_tip() {
    let mut inputs = empty_inputs(at("2025-03-12T12:00:00Z"));
    inputs.current_plan = Some(PlanStatus {
        plan: MealPlan::new(Uuid::new_v4(), inputs.week_starting),
        meal_count: 3,
        has_shopping_list: true,
    });

    assert_eq!(kinds(&inputs), vec![SuggestionType::CookingTip]);
}

#[test]
fn given_dismissed_ids_when_suggesting_then_filtered_out() {
    // Given
    let mut inputs = empty_inputs(at("2025-03-12T07:00:00Z"));
    inputs.dismissed = HashSet::from(["tip-breakfast".to_string()]);

    // When
    let suggestions = proactive_suggestions(&inputs);

    // Then
    assert_that!(suggestions, len(eq(1)));
    assert_eq!(suggestions[0].kind, SuggestionType::MealPlan);
}

#[test]
fn given_client_offset_when_suggesting_then_tip_uses_local_hour() {
    // 23:00 UTC the previous day
    let inputs = empty_inputs(at("2025-03-12T08:00:00+09:00"));

    let suggestions = proactive_suggestions(&inputs);

    assert_eq!(suggestions.last().unwrap().id, "tip-breakfast");
}
