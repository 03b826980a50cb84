use crate::joins::pantry_item_with_ingredient;
use crate::{MemoryStore, PantryItemWithIngredient, Result as StoreResult, StoreError};

use mp_core::{DEFAULT_INGREDIENT_CATEGORY, Ingredient, PantryItem};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A pantry entry given by ingredient name; unknown names become new ingredients
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPantryItem {
    pub name: String,
    /// Category for a newly created ingredient ("Other" when absent)
    pub category: Option<String>,
    pub quantity: Option<String>,
    pub unit: Option<String>,
    pub expiry_date: Option<DateTime<Utc>>,
}

pub struct PantryRepository {
    store: MemoryStore,
}

impl PantryRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Pantry items for the user joined with their ingredients, oldest first
    pub fn find_by_user(&self, user_id: Uuid) -> StoreResult<Vec<PantryItemWithIngredient>> {
        let tables = self.store.read()?;

        tables
            .pantry_items
            .iter()
            .filter(|item| item.user_id == user_id)
            .map(|item| pantry_item_with_ingredient(&tables, item))
            .collect()
    }

    pub fn find_by_id(&self, id: Uuid) -> StoreResult<Option<PantryItemWithIngredient>> {
        let tables = self.store.read()?;

        tables
            .pantry_items
            .iter()
            .find(|item| item.id == id)
            .map(|item| pantry_item_with_ingredient(&tables, item))
            .transpose()
    }

    /// Ingredient names currently in the user's pantry
    pub fn ingredient_names(&self, user_id: Uuid) -> StoreResult<Vec<String>> {
        Ok(self
            .find_by_user(user_id)?
            .into_iter()
            .map(|joined| joined.ingredient.name)
            .collect())
    }

    /// Adds a new row every time; adding the same ingredient twice yields two items.
    pub fn create(&self, item: &PantryItem) -> StoreResult<PantryItemWithIngredient> {
        let mut tables = self.store.write()?;

        if tables.ingredient(item.ingredient_id).is_none() {
            return Err(StoreError::dangling(
                "pantry item",
                "ingredient",
                item.ingredient_id,
            ));
        }

        tables.pantry_items.push(item.clone());
        pantry_item_with_ingredient(&tables, item)
    }

    /// Resolves names and inserts every entry under one write lock, so either
    /// all entries land or none do.
    pub fn create_many(
        &self,
        user_id: Uuid,
        entries: &[NewPantryItem],
    ) -> StoreResult<Vec<PantryItemWithIngredient>> {
        let mut tables = self.store.write()?;

        let mut new_ingredients: Vec<Ingredient> = Vec::new();
        let mut items: Vec<PantryItem> = Vec::with_capacity(entries.len());

        for entry in entries {
            let name = entry.name.trim();
            let known = tables
                .ingredient_by_name(name)
                .or_else(|| new_ingredients.iter().find(|i| i.has_name(name)))
                .map(|i| i.id);

            let ingredient_id = match known {
                Some(id) => id,
                None => {
                    let category = entry
                        .category
                        .as_deref()
                        .map(str::trim)
                        .filter(|c| !c.is_empty())
                        .unwrap_or(DEFAULT_INGREDIENT_CATEGORY);
                    let ingredient = Ingredient::new(name.to_string(), category.to_string());
                    let id = ingredient.id;
                    new_ingredients.push(ingredient);
                    id
                }
            };

            let mut item = PantryItem::new(user_id, ingredient_id);
            item.quantity = entry.quantity.clone();
            item.unit = entry.unit.clone();
            item.expiry_date = entry.expiry_date;
            items.push(item);
        }

        if !new_ingredients.is_empty() {
            log::debug!("Created {} ingredients from pantry entries", new_ingredients.len());
        }
        tables.ingredients.extend(new_ingredients);
        tables.pantry_items.extend(items.iter().cloned());

        items
            .iter()
            .map(|item| pantry_item_with_ingredient(&tables, item))
            .collect()
    }

    pub fn update(&self, item: &PantryItem) -> StoreResult<PantryItemWithIngredient> {
        let mut tables = self.store.write()?;

        if tables.ingredient(item.ingredient_id).is_none() {
            return Err(StoreError::dangling(
                "pantry item",
                "ingredient",
                item.ingredient_id,
            ));
        }

        let existing = tables
            .pantry_items
            .iter_mut()
            .find(|i| i.id == item.id)
            .ok_or_else(|| StoreError::not_found("Pantry item", item.id))?;
        *existing = item.clone();

        pantry_item_with_ingredient(&tables, item)
    }

    pub fn delete(&self, id: Uuid) -> StoreResult<()> {
        let mut tables = self.store.write()?;

        let before = tables.pantry_items.len();
        tables.pantry_items.retain(|item| item.id != id);

        if tables.pantry_items.len() == before {
            return Err(StoreError::not_found("Pantry item", id));
        }

        Ok(())
    }
}
