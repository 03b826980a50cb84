use crate::{
    DEFAULT_RECOMMENDATION_LIMIT, Recipe, RecipeCandidate, ingredient_matches, match_ratio,
    rank_recipes,
};

use googletest::prelude::*;
use proptest::prelude::*;

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn candidate(title: &str, required: &[&str]) -> RecipeCandidate {
    RecipeCandidate {
        recipe: Recipe::new(title.to_string(), Vec::new(), 30, 4),
        required_ingredients: names(required),
    }
}

#[test]
fn given_substring_in_either_direction_when_matching_then_matches() {
    assert_that!(ingredient_matches("Garlic", "garlic cloves"), eq(true));
    assert_that!(ingredient_matches("Chicken breast", "chicken"), eq(true));
    assert_that!(ingredient_matches("Salmon", "Rice"), eq(false));
}

#[test]
fn given_blank_pantry_name_when_matching_then_no_match() {
    assert_that!(ingredient_matches("Garlic", "   "), eq(false));
}

#[test]
fn given_all_ingredients_present_when_scoring_then_ratio_is_one() {
    let ratio = match_ratio(&names(&["Pasta", "Garlic"]), &names(&["pasta", "garlic"]));
    assert_that!(ratio, some(eq(1.0)));
}

#[test]
fn given_no_ingredients_present_when_scoring_then_ratio_is_zero() {
    let ratio = match_ratio(&names(&["Pasta", "Garlic"]), &names(&["Salmon"]));
    assert_that!(ratio, some(eq(0.0)));
}

#[test]
fn given_recipe_without_required_ingredients_when_scoring_then_none() {
    assert_that!(match_ratio(&[], &names(&["Salmon"])), none());
}

#[test]
fn given_pantry_when_ranking_then_best_match_first() {
    let candidates = vec![
        candidate("Salmon", &["Salmon", "Lemon"]),
        candidate("Pasta", &["Pasta", "Garlic"]),
        candidate("Empty", &[]),
    ];

    let ranked = rank_recipes(&names(&["pasta", "garlic", "lemon"]), candidates, 10);

    assert_that!(ranked, len(eq(2)));
    assert_that!(ranked[0].recipe.title, eq("Pasta"));
    assert_that!(ranked[0].match_ratio, eq(1.0));
    assert_that!(ranked[1].recipe.title, eq("Salmon"));
    assert_that!(ranked[1].match_ratio, eq(0.5));
}

#[test]
fn given_ties_when_ranking_then_catalog_order_kept() {
    let candidates = vec![
        candidate("First", &["Eggs"]),
        candidate("Second", &["Eggs"]),
        candidate("Third", &["Eggs"]),
    ];

    let ranked = rank_recipes(&names(&["eggs"]), candidates, 10);
    let titles: Vec<&str> = ranked.iter().map(|s| s.recipe.title.as_str()).collect();

    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[test]
fn given_empty_pantry_when_ranking_then_first_n_with_zero_ratio() {
    let candidates: Vec<RecipeCandidate> = (0..15)
        .map(|i| candidate(&format!("Recipe {}", i), &["Eggs"]))
        .collect();

    let ranked = rank_recipes(&names(&["  "]), candidates, DEFAULT_RECOMMENDATION_LIMIT);

    assert_that!(ranked, len(eq(DEFAULT_RECOMMENDATION_LIMIT)));
    assert_that!(ranked[0].recipe.title, eq("Recipe 0"));
    assert!(ranked.iter().all(|s| s.match_ratio == 0.0));
}

#[test]
fn given_limit_when_ranking_then_truncated() {
    let candidates = vec![
        candidate("A", &["Eggs"]),
        candidate("B", &["Milk"]),
        candidate("C", &["Bread"]),
    ];

    let ranked = rank_recipes(&names(&["eggs"]), candidates, 2);
    assert_that!(ranked, len(eq(2)));
}

proptest! {
    #[test]
    fn match_ratio_is_bounded(
        required in proptest::collection::vec("[a-z]{1,8}", 1..8),
        pantry in proptest::collection::vec("[a-z]{0,8}", 0..8),
    ) {
        let ratio = match_ratio(&required, &pantry).unwrap();
        prop_assert!((0.0..=1.0).contains(&ratio));
    }

    #[test]
    fn ranking_is_sorted_descending(
        recipes in proptest::collection::vec(proptest::collection::vec("[a-c]{1,3}", 1..5), 0..12),
        pantry in proptest::collection::vec("[a-c]{1,3}", 1..5),
    ) {
        let candidates: Vec<RecipeCandidate> = recipes
            .into_iter()
            .enumerate()
            .map(|(i, required)| RecipeCandidate {
                recipe: Recipe::new(format!("R{}", i), Vec::new(), 10, 1),
                required_ingredients: required,
            })
            .collect();

        let ranked = rank_recipes(&pantry, candidates, DEFAULT_RECOMMENDATION_LIMIT);

        prop_assert!(ranked.len() <= DEFAULT_RECOMMENDATION_LIMIT);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].match_ratio >= pair[1].match_ratio);
        }
    }
}
