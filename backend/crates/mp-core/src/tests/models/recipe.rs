use crate::{Difficulty, Recipe};

fn pasta() -> Recipe {
    let mut recipe = Recipe::new(
        "Classic Pasta Marinara".to_string(),
        vec!["Boil pasta".to_string()],
        25,
        2,
    );
    recipe.description = Some("Simple Italian pasta with fresh basil".to_string());
    recipe
}

#[test]
fn test_recipe_new_defaults() {
    let recipe = pasta();
    assert_eq!(recipe.difficulty, Difficulty::Medium);
    assert!(recipe.tags.is_empty());
    assert_eq!(recipe.cook_time, 25);
}

#[test]
fn test_recipe_matches_query_in_title_and_description() {
    let recipe = pasta();
    assert!(recipe.matches_query("marinara"));
    assert!(recipe.matches_query("BASIL"));
    assert!(!recipe.matches_query("salmon"));
}
