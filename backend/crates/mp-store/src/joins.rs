//! Read models that join an entity with the rows it references.

use crate::{Result as StoreResult, StoreError, memory_store::Tables};

use mp_core::{
    Ingredient, Meal, MealPlan, PantryItem, Recipe, RecipeIngredient, ShoppingList,
    ShoppingListItem,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PantryItemWithIngredient {
    pub item: PantryItem,
    pub ingredient: Ingredient,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeIngredientDetail {
    pub line: RecipeIngredient,
    pub ingredient: Ingredient,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeWithIngredients {
    pub recipe: Recipe,
    pub ingredients: Vec<RecipeIngredientDetail>,
}

impl RecipeWithIngredients {
    /// Names of the ingredients that are not marked optional
    pub fn required_ingredient_names(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .filter(|detail| !detail.line.is_optional)
            .map(|detail| detail.ingredient.name.clone())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MealWithRecipe {
    pub meal: Meal,
    pub recipe: Recipe,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MealPlanWithMeals {
    pub plan: MealPlan,
    /// Ordered by day, then meal type
    pub meals: Vec<MealWithRecipe>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListWithItems {
    pub list: ShoppingList,
    pub items: Vec<ShoppingListItem>,
}

pub(crate) fn pantry_item_with_ingredient(
    tables: &Tables,
    item: &PantryItem,
) -> StoreResult<PantryItemWithIngredient> {
    let ingredient = tables.ingredient(item.ingredient_id).ok_or_else(|| {
        StoreError::integrity(format!(
            "pantry item {} references missing ingredient {}",
            item.id, item.ingredient_id
        ))
    })?;

    Ok(PantryItemWithIngredient {
        item: item.clone(),
        ingredient: ingredient.clone(),
    })
}

pub(crate) fn recipe_with_ingredients(
    tables: &Tables,
    recipe: &Recipe,
) -> StoreResult<RecipeWithIngredients> {
    let ingredients = tables
        .recipe_ingredients
        .iter()
        .filter(|line| line.recipe_id == recipe.id)
        .map(|line| {
            let ingredient = tables.ingredient(line.ingredient_id).ok_or_else(|| {
                StoreError::integrity(format!(
                    "recipe ingredient {} references missing ingredient {}",
                    line.id, line.ingredient_id
                ))
            })?;
            Ok(RecipeIngredientDetail {
                line: line.clone(),
                ingredient: ingredient.clone(),
            })
        })
        .collect::<StoreResult<Vec<_>>>()?;

    Ok(RecipeWithIngredients {
        recipe: recipe.clone(),
        ingredients,
    })
}

pub(crate) fn meal_plan_with_meals(
    tables: &Tables,
    plan: &MealPlan,
) -> StoreResult<MealPlanWithMeals> {
    let mut meals = tables
        .meals
        .iter()
        .filter(|meal| meal.meal_plan_id == plan.id)
        .map(|meal| {
            let recipe = tables.recipe(meal.recipe_id).ok_or_else(|| {
                StoreError::integrity(format!(
                    "meal {} references missing recipe {}",
                    meal.id, meal.recipe_id
                ))
            })?;
            Ok(MealWithRecipe {
                meal: meal.clone(),
                recipe: recipe.clone(),
            })
        })
        .collect::<StoreResult<Vec<_>>>()?;

    meals.sort_by_key(|m| (m.meal.day_of_week, meal_type_order(m.meal.meal_type)));

    Ok(MealPlanWithMeals {
        plan: plan.clone(),
        meals,
    })
}

pub(crate) fn shopping_list_with_items(
    tables: &Tables,
    list: &ShoppingList,
) -> StoreResult<ShoppingListWithItems> {
    let items = tables
        .shopping_list_items
        .iter()
        .filter(|item| item.shopping_list_id == list.id)
        .map(|item| match item.ingredient_id {
            Some(id) if tables.ingredient(id).is_none() => Err(StoreError::integrity(format!(
                "shopping list item {} references missing ingredient {}",
                item.id, id
            ))),
            _ => Ok(item.clone()),
        })
        .collect::<StoreResult<Vec<_>>>()?;

    Ok(ShoppingListWithItems {
        list: list.clone(),
        items,
    })
}

fn meal_type_order(meal_type: mp_core::MealType) -> u8 {
    match meal_type {
        mp_core::MealType::Breakfast => 0,
        mp_core::MealType::Lunch => 1,
        mp_core::MealType::Dinner => 2,
        mp_core::MealType::Snack => 3,
    }
}
