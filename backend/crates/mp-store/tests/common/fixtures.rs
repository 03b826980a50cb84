#![allow(dead_code)]

use mp_core::{Difficulty, Recipe};
use mp_store::{MemoryStore, NewRecipeIngredient, RecipeRepository, RecipeWithIngredients};

/// Creates a test recipe with the given required ingredient names
pub fn create_test_recipe(
    store: &MemoryStore,
    title: &str,
    ingredients: &[&str],
) -> RecipeWithIngredients {
    let mut recipe = Recipe::new(
        title.to_string(),
        vec!["Prepare".to_string(), "Serve".to_string()],
        30,
        4,
    );
    recipe.difficulty = Difficulty::Easy;

    let lines: Vec<NewRecipeIngredient> = ingredients
        .iter()
        .map(|name| NewRecipeIngredient {
            name: name.to_string(),
            quantity: "1".to_string(),
            unit: Some("cup".to_string()),
            is_optional: false,
        })
        .collect();

    RecipeRepository::new(store.clone())
        .create_with_ingredients(&recipe, &lines)
        .expect("Failed to create test recipe")
}
