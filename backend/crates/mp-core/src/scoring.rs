//! Pantry-based recipe ranking.
//!
//! A recipe ingredient is considered "on hand" when its name and a pantry
//! name contain one another, ignoring case. The match is deliberately loose:
//! "Rice" also matches "Rice vinegar".

use crate::Recipe;

use serde::Serialize;

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 10;

/// A catalog recipe paired with the names of its non-optional ingredients
#[derive(Debug, Clone)]
pub struct RecipeCandidate {
    pub recipe: Recipe,
    pub required_ingredients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecipe {
    pub recipe: Recipe,
    /// Fraction of required ingredients found in the pantry, in [0, 1]
    pub match_ratio: f64,
}

pub fn ingredient_matches(recipe_ingredient: &str, pantry_name: &str) -> bool {
    let recipe_ingredient = recipe_ingredient.trim().to_lowercase();
    let pantry_name = pantry_name.trim().to_lowercase();

    if recipe_ingredient.is_empty() || pantry_name.is_empty() {
        return false;
    }

    pantry_name.contains(&recipe_ingredient) || recipe_ingredient.contains(&pantry_name)
}

/// Returns `None` when the recipe has no required ingredients.
pub fn match_ratio(required: &[String], pantry: &[String]) -> Option<f64> {
    if required.is_empty() {
        return None;
    }

    let matched = required
        .iter()
        .filter(|ingredient| pantry.iter().any(|name| ingredient_matches(ingredient, name)))
        .count();

    Some(matched as f64 / required.len() as f64)
}

/// Rank the catalog against the pantry, best match first.
///
/// Ties keep catalog order. With an empty pantry the first `limit` recipes
/// come back unranked with a ratio of 0.0.
pub fn rank_recipes(
    pantry: &[String],
    candidates: Vec<RecipeCandidate>,
    limit: usize,
) -> Vec<ScoredRecipe> {
    let pantry: Vec<String> = pantry
        .iter()
        .filter(|name| !name.trim().is_empty())
        .cloned()
        .collect();

    if pantry.is_empty() {
        return candidates
            .into_iter()
            .take(limit)
            .map(|candidate| ScoredRecipe {
                recipe: candidate.recipe,
                match_ratio: 0.0,
            })
            .collect();
    }

    let mut scored: Vec<ScoredRecipe> = candidates
        .into_iter()
        .filter_map(|candidate| {
            match_ratio(&candidate.required_ingredients, &pantry).map(|ratio| ScoredRecipe {
                recipe: candidate.recipe,
                match_ratio: ratio,
            })
        })
        .collect();

    scored.sort_by(|a, b| b.match_ratio.total_cmp(&a.match_ratio));
    scored.truncate(limit);
    scored
}
