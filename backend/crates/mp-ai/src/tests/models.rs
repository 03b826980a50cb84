use crate::{IngredientScanResult, RecipeRecommendation, WeeklyMealPlan};

use googletest::assert_that;
use googletest::prelude::*;
use mp_core::Difficulty;

// =========================================================================
// Ingredient scan normalisation
// =========================================================================

#[test]
fn given_confidence_above_one_when_normalised_then_clamped_to_one() {
    // Given
    let content = r#"{"ingredients":[{"name":"Basil","confidence":1.5,"category":"Herbs"}],"totalConfidence":0.9}"#;

    // When
    let result = IngredientScanResult::from_model_text(content).unwrap();

    // Then
    assert_that!(result.ingredients, len(eq(1)));
    assert_that!(result.ingredients[0].confidence, eq(1.0));
    assert_that!(result.total_confidence, eq(0.9));
}

#[test]
fn given_negative_confidence_when_normalised_then_clamped_to_minimum() {
    // Given
    let content = r#"{"ingredients":[{"name":"Basil","confidence":-0.2}],"totalConfidence":-3}"#;

    // When
    let result = IngredientScanResult::from_model_text(content).unwrap();

    // Then
    assert_that!(result.ingredients[0].confidence, eq(0.1));
    assert_that!(result.total_confidence, eq(0.1));
}

#[test]
fn given_zero_confidence_when_normalised_then_treated_as_missing() {
    // Given
    let content = r#"{"ingredients":[{"name":"Basil","confidence":0}],"totalConfidence":0}"#;

    // When
    let result = IngredientScanResult::from_model_text(content).unwrap();

    // Then
    assert_that!(result.ingredients[0].confidence, eq(0.5));
    assert_that!(result.total_confidence, eq(0.5));
}

#[test]
fn given_missing_fields_when_normalised_then_defaults_applied() {
    // Given
    let content = r#"{"ingredients":[{"quantity":2}]}"#;

    // When
    let result = IngredientScanResult::from_model_text(content).unwrap();

    // Then
    let ingredient = &result.ingredients[0];
    assert_that!(ingredient.name, eq("Unknown ingredient"));
    assert_that!(ingredient.category, eq("Unknown"));
    assert_that!(ingredient.confidence, eq(0.5));
    assert_that!(ingredient.quantity, some(eq("2")));
    assert_that!(ingredient.unit, none());
    assert_that!(result.total_confidence, eq(0.5));
    assert_that!(result.suggestions, is_empty());
}

#[test]
fn given_null_ingredients_when_normalised_then_empty_list() {
    // When
    let result =
        IngredientScanResult::from_model_text(r#"{"ingredients":null,"suggestions":["Try soup"]}"#)
            .unwrap();

    // Then
    assert_that!(result.ingredients, is_empty());
    assert_eq!(result.suggestions, vec!["Try soup".to_string()]);
}

#[test]
fn given_non_json_content_when_normalised_then_schema_error() {
    // When
    let result = IngredientScanResult::from_model_text("I see some tomatoes");

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_scan_result_when_serialized_then_uses_camel_case_total_confidence() {
    // Given
    let result = IngredientScanResult::from_model_text(r#"{"ingredients":[]}"#).unwrap();

    // When
    let json = serde_json::to_value(&result).unwrap();

    // Then
    assert_that!(json.get("totalConfidence").is_some(), eq(true));
}

// =========================================================================
// Recipe recommendation normalisation
// =========================================================================

#[test]
fn given_unknown_difficulty_when_normalised_then_medium() {
    // Given
    let content = r#"{"recipes":[{"title":"Lava Cake","difficulty":"Extreme","cookTime":40,"servings":6}]}"#;

    // When
    let recipes = RecipeRecommendation::list_from_model_text(content, 4).unwrap();

    // Then
    assert_that!(recipes, len(eq(1)));
    assert_that!(recipes[0].difficulty, eq(Difficulty::Medium));
    assert_that!(recipes[0].cook_time, eq(40));
    assert_that!(recipes[0].servings, eq(6));
}

#[test]
fn given_sparse_recipe_when_normalised_then_defaults_applied() {
    // When
    let recipes = RecipeRecommendation::list_from_model_text(r#"{"recipes":[{}]}"#, 3).unwrap();

    // Then
    let recipe = &recipes[0];
    assert_that!(recipe.title, eq("Untitled Recipe"));
    assert_that!(recipe.description, eq("No description available"));
    assert_that!(recipe.cook_time, eq(30));
    assert_that!(recipe.servings, eq(3));
    assert_that!(recipe.difficulty, eq(Difficulty::Medium));
    assert_that!(recipe.cuisine, none());
    assert_that!(recipe.ingredients, is_empty());
}

#[test]
fn given_top_level_array_when_normalised_then_accepted() {
    // Given
    let content = r#"[{"title":"Omelette","difficulty":"Easy","ingredients":["eggs","cheese"]}]"#;

    // When
    let recipes = RecipeRecommendation::list_from_model_text(content, 2).unwrap();

    // Then
    assert_that!(recipes[0].title, eq("Omelette"));
    assert_that!(recipes[0].difficulty, eq(Difficulty::Easy));
    assert_eq!(recipes[0].ingredients, vec!["eggs".to_string(), "cheese".to_string()]);
}

#[test]
fn given_object_without_recipes_when_normalised_then_schema_error() {
    // When
    let result = RecipeRecommendation::list_from_model_text(r#"{"dishes":[]}"#, 2);

    // Then
    assert_that!(result, err(anything()));
}

// =========================================================================
// Weekly plan validation
// =========================================================================

#[test]
fn given_plan_without_days_when_validated_then_schema_error() {
    // When
    let result = WeeklyMealPlan::from_model_text(r#"{"shoppingList":{"ingredients":[]}}"#);

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_plan_with_days_when_validated_then_meals_parsed() {
    // Given
    let content = r#"{
        "days": [
            {"day": "Sunday", "date": "2024-01-07", "meals": {
                "breakfast": {"title": "Porridge", "cookTime": 10, "ingredients": ["oats"]},
                "dinner": {"description": "no title"}
            }}
        ],
        "shoppingList": {"ingredients": ["oats"], "categories": {"Grains": ["oats"]}},
        "nutritionSummary": {"averageCalories": 1900, "proteinBalance": "Good", "varietyScore": 7}
    }"#;

    // When
    let plan = WeeklyMealPlan::from_model_text(content).unwrap();

    // Then
    assert_that!(plan.days, len(eq(1)));
    let meals = &plan.days[0].meals;
    assert_that!(meals.breakfast.as_ref().map(|m| m.title.as_str()), some(eq("Porridge")));
    assert_that!(meals.lunch, none());
    assert_that!(meals.dinner, none());
    assert_that!(plan.shopping_list.categories.get("Grains").map(Vec::len), some(eq(1)));
    assert_that!(
        plan.nutrition_summary.map(|s| s.average_calories),
        some(eq(1900))
    );
}
