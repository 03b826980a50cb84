use crate::joins::{meal_plan_with_meals, recipe_with_ingredients, shopping_list_with_items};
use crate::{MemoryStore, Result as StoreResult, ShoppingListWithItems, StoreError};

use mp_core::{
    IngredientLine, MealIngredients, ShoppingList, ShoppingListItem, aggregate_ingredients,
};

use uuid::Uuid;

pub struct ShoppingListRepository {
    store: MemoryStore,
}

impl ShoppingListRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// The user's lists, newest first
    pub fn find_by_user(&self, user_id: Uuid) -> StoreResult<Vec<ShoppingList>> {
        let tables = self.store.read()?;
        let mut lists: Vec<ShoppingList> = tables
            .shopping_lists
            .iter()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect();
        lists.reverse();
        Ok(lists)
    }

    pub fn find_with_items(&self, id: Uuid) -> StoreResult<Option<ShoppingListWithItems>> {
        let tables = self.store.read()?;

        tables
            .shopping_lists
            .iter()
            .find(|l| l.id == id)
            .map(|list| shopping_list_with_items(&tables, list))
            .transpose()
    }

    pub fn find_for_meal_plan(&self, meal_plan_id: Uuid) -> StoreResult<Option<ShoppingList>> {
        let tables = self.store.read()?;
        Ok(tables
            .shopping_lists
            .iter()
            .find(|l| l.meal_plan_id == Some(meal_plan_id))
            .cloned())
    }

    pub fn create(&self, list: &ShoppingList) -> StoreResult<()> {
        let mut tables = self.store.write()?;
        tables.shopping_lists.push(list.clone());
        Ok(())
    }

    pub fn add_item(&self, item: &ShoppingListItem) -> StoreResult<()> {
        let mut tables = self.store.write()?;

        if !tables
            .shopping_lists
            .iter()
            .any(|l| l.id == item.shopping_list_id)
        {
            return Err(StoreError::dangling(
                "shopping list item",
                "shopping list",
                item.shopping_list_id,
            ));
        }
        if let Some(ingredient_id) = item.ingredient_id
            && tables.ingredient(ingredient_id).is_none()
        {
            return Err(StoreError::dangling(
                "shopping list item",
                "ingredient",
                ingredient_id,
            ));
        }

        tables.shopping_list_items.push(item.clone());
        Ok(())
    }

    /// Item together with the user that owns its list
    pub fn find_item_owner(&self, item_id: Uuid) -> StoreResult<Option<(ShoppingListItem, Uuid)>> {
        let tables = self.store.read()?;

        let Some(item) = tables.shopping_list_items.iter().find(|i| i.id == item_id) else {
            return Ok(None);
        };

        let owner = tables
            .shopping_lists
            .iter()
            .find(|l| l.id == item.shopping_list_id)
            .map(|l| l.user_id)
            .ok_or_else(|| {
                StoreError::integrity(format!(
                    "shopping list item {} references missing list {}",
                    item.id, item.shopping_list_id
                ))
            })?;

        Ok(Some((item.clone(), owner)))
    }

    pub fn set_item_checked(&self, item_id: Uuid, is_checked: bool) -> StoreResult<ShoppingListItem> {
        let mut tables = self.store.write()?;

        let item = tables
            .shopping_list_items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| StoreError::not_found("Shopping list item", item_id))?;
        item.is_checked = is_checked;

        Ok(item.clone())
    }

    pub fn delete_item(&self, item_id: Uuid) -> StoreResult<()> {
        let mut tables = self.store.write()?;

        let before = tables.shopping_list_items.len();
        tables.shopping_list_items.retain(|i| i.id != item_id);

        if tables.shopping_list_items.len() == before {
            return Err(StoreError::not_found("Shopping list item", item_id));
        }

        Ok(())
    }

    /// Aggregate every meal of the plan into a new shopping list.
    ///
    /// Runs under one write lock so the list reflects a single snapshot of
    /// the plan.
    pub fn generate_from_meal_plan(&self, meal_plan_id: Uuid) -> StoreResult<ShoppingListWithItems> {
        let mut tables = self.store.write()?;

        let plan = tables
            .meal_plans
            .iter()
            .find(|p| p.id == meal_plan_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Meal plan", meal_plan_id))?;

        let joined = meal_plan_with_meals(&tables, &plan)?;

        let meals = joined
            .meals
            .iter()
            .map(|scheduled| {
                let recipe = recipe_with_ingredients(&tables, &scheduled.recipe)?;
                Ok(MealIngredients {
                    recipe_title: recipe.recipe.title.clone(),
                    lines: recipe
                        .ingredients
                        .into_iter()
                        .map(|detail| IngredientLine {
                            ingredient_id: Some(detail.ingredient.id),
                            name: detail.ingredient.name,
                            category: Some(detail.ingredient.category),
                            quantity: detail.line.quantity,
                            unit: detail.line.unit,
                        })
                        .collect(),
                })
            })
            .collect::<StoreResult<Vec<_>>>()?;

        let list = ShoppingList::new(
            plan.user_id,
            ShoppingList::name_for_week(plan.week_starting),
            Some(plan.id),
        );

        let items: Vec<ShoppingListItem> = aggregate_ingredients(&meals)
            .into_iter()
            .map(|aggregated| {
                let added_from = aggregated.provenance();
                let mut item = ShoppingListItem::new(
                    list.id,
                    aggregated.name,
                    aggregated.category,
                    aggregated.quantity,
                );
                item.ingredient_id = aggregated.ingredient_id;
                item.unit = aggregated.unit;
                item.added_from = Some(added_from);
                item
            })
            .collect();

        log::debug!(
            "Generated shopping list {} with {} items from meal plan {}",
            list.id,
            items.len(),
            plan.id
        );

        tables.shopping_lists.push(list.clone());
        tables.shopping_list_items.extend(items.iter().cloned());

        Ok(ShoppingListWithItems { list, items })
    }
}
