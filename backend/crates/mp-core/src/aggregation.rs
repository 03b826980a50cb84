//! Consolidates the ingredients of scheduled meals into shopping list items.

use crate::models::ingredient::DEFAULT_INGREDIENT_CATEGORY;

use serde::Serialize;
use uuid::Uuid;

const DEFAULT_QUANTITY: &str = "1";

#[derive(Debug, Clone, PartialEq)]
pub struct IngredientLine {
    pub ingredient_id: Option<Uuid>,
    pub name: String,
    pub category: Option<String>,
    pub quantity: String,
    pub unit: Option<String>,
}

/// The resolved ingredient lines of one scheduled meal
#[derive(Debug, Clone, PartialEq)]
pub struct MealIngredients {
    pub recipe_title: String,
    pub lines: Vec<IngredientLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedItem {
    pub ingredient_id: Option<Uuid>,
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub unit: Option<String>,
    /// Distinct recipe titles in first-seen order
    pub recipes: Vec<String>,
}

impl AggregatedItem {
    pub fn provenance(&self) -> String {
        self.recipes.join(", ")
    }
}

/// Merge ingredient lines by exact name.
///
/// Quantities are not summed: the first line seen for a name supplies
/// quantity and unit. Output order is first-seen order across `meals`.
pub fn aggregate_ingredients(meals: &[MealIngredients]) -> Vec<AggregatedItem> {
    let mut items: Vec<AggregatedItem> = Vec::new();

    for meal in meals {
        for line in &meal.lines {
            match items.iter_mut().find(|item| item.name == line.name) {
                Some(item) => {
                    if !item.recipes.contains(&meal.recipe_title) {
                        item.recipes.push(meal.recipe_title.clone());
                    }
                }
                None => items.push(AggregatedItem {
                    ingredient_id: line.ingredient_id,
                    name: line.name.clone(),
                    category: line
                        .category
                        .clone()
                        .filter(|c| !c.trim().is_empty())
                        .unwrap_or_else(|| DEFAULT_INGREDIENT_CATEGORY.to_string()),
                    quantity: if line.quantity.trim().is_empty() {
                        DEFAULT_QUANTITY.to_string()
                    } else {
                        line.quantity.clone()
                    },
                    unit: line.unit.clone(),
                    recipes: vec![meal.recipe_title.clone()],
                }),
            }
        }
    }

    items
}
