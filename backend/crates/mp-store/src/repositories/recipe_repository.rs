use crate::joins::recipe_with_ingredients;
use crate::{MemoryStore, RecipeWithIngredients, Result as StoreResult, StoreError};

use mp_core::{
    DEFAULT_INGREDIENT_CATEGORY, Ingredient, Recipe, RecipeCandidate, RecipeIngredient,
    ScoredRecipe, rank_recipes,
};

use uuid::Uuid;

/// An ingredient line given by name; unknown names become new ingredients
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipeIngredient {
    pub name: String,
    pub quantity: String,
    pub unit: Option<String>,
    pub is_optional: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeSearch {
    /// Matched against title and description, ignoring case
    pub query: Option<String>,
    pub cuisine: Option<String>,
    /// A recipe matches when it carries any of these tags
    pub tags: Vec<String>,
    pub max_cook_time: Option<i32>,
}

impl RecipeSearch {
    fn matches(&self, recipe: &Recipe) -> bool {
        let query_ok = self
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .is_none_or(|q| recipe.matches_query(q));

        let cuisine_ok = self.cuisine.as_deref().is_none_or(|cuisine| {
            recipe
                .cuisine
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(cuisine))
        });

        let tags_ok = self.tags.is_empty()
            || self.tags.iter().any(|tag| {
                recipe
                    .tags
                    .iter()
                    .any(|t| t.eq_ignore_ascii_case(tag))
            });

        let time_ok = self
            .max_cook_time
            .is_none_or(|max| recipe.cook_time <= max);

        query_ok && cuisine_ok && tags_ok && time_ok
    }
}

pub struct RecipeRepository {
    store: MemoryStore,
}

impl RecipeRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Catalog page in insertion order
    pub fn list(&self, limit: usize, offset: usize) -> StoreResult<Vec<Recipe>> {
        let tables = self.store.read()?;
        Ok(tables
            .recipes
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    pub fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Recipe>> {
        let tables = self.store.read()?;
        Ok(tables.recipe(id).cloned())
    }

    pub fn find_with_ingredients(&self, id: Uuid) -> StoreResult<Option<RecipeWithIngredients>> {
        let tables = self.store.read()?;

        tables
            .recipe(id)
            .map(|recipe| recipe_with_ingredients(&tables, recipe))
            .transpose()
    }

    pub fn search(&self, search: &RecipeSearch) -> StoreResult<Vec<Recipe>> {
        let tables = self.store.read()?;
        Ok(tables
            .recipes
            .iter()
            .filter(|recipe| search.matches(recipe))
            .cloned()
            .collect())
    }

    /// Insert a recipe with its ingredient lines, creating unknown ingredients
    pub fn create_with_ingredients(
        &self,
        recipe: &Recipe,
        lines: &[NewRecipeIngredient],
    ) -> StoreResult<RecipeWithIngredients> {
        let mut tables = self.store.write()?;

        for line in lines {
            let name = line.name.trim();
            if name.is_empty() {
                continue;
            }

            let ingredient_id = match tables.ingredient_by_name(name) {
                Some(existing) => existing.id,
                None => {
                    let ingredient =
                        Ingredient::new(name.to_string(), DEFAULT_INGREDIENT_CATEGORY.to_string());
                    let id = ingredient.id;
                    tables.ingredients.push(ingredient);
                    id
                }
            };

            let mut row = RecipeIngredient::new(
                recipe.id,
                ingredient_id,
                line.quantity.clone(),
                line.unit.clone(),
            );
            row.is_optional = line.is_optional;
            tables.recipe_ingredients.push(row);
        }

        tables.recipes.push(recipe.clone());
        recipe_with_ingredients(&tables, recipe)
    }

    pub fn add_ingredient(&self, line: &RecipeIngredient) -> StoreResult<()> {
        let mut tables = self.store.write()?;

        if tables.recipe(line.recipe_id).is_none() {
            return Err(StoreError::dangling(
                "recipe ingredient",
                "recipe",
                line.recipe_id,
            ));
        }
        if tables.ingredient(line.ingredient_id).is_none() {
            return Err(StoreError::dangling(
                "recipe ingredient",
                "ingredient",
                line.ingredient_id,
            ));
        }

        tables.recipe_ingredients.push(line.clone());
        Ok(())
    }

    /// Catalog ranked against the user's pantry
    pub fn recommended(&self, user_id: Uuid, limit: usize) -> StoreResult<Vec<ScoredRecipe>> {
        let tables = self.store.read()?;

        let pantry: Vec<String> = tables
            .pantry_items
            .iter()
            .filter(|item| item.user_id == user_id)
            .filter_map(|item| tables.ingredient(item.ingredient_id))
            .map(|ingredient| ingredient.name.clone())
            .collect();

        let candidates = tables
            .recipes
            .iter()
            .map(|recipe| {
                let joined = recipe_with_ingredients(&tables, recipe)?;
                Ok(RecipeCandidate {
                    required_ingredients: joined.required_ingredient_names(),
                    recipe: joined.recipe,
                })
            })
            .collect::<StoreResult<Vec<_>>>()?;

        Ok(rank_recipes(&pantry, candidates, limit))
    }
}
