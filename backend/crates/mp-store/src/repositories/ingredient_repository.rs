use crate::{MemoryStore, Result as StoreResult};

use mp_core::{DEFAULT_INGREDIENT_CATEGORY, Ingredient};

use uuid::Uuid;

pub struct IngredientRepository {
    store: MemoryStore,
}

impl IngredientRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> StoreResult<Vec<Ingredient>> {
        let tables = self.store.read()?;
        Ok(tables.ingredients.clone())
    }

    /// Case-insensitive substring search on name
    pub fn search(&self, query: &str) -> StoreResult<Vec<Ingredient>> {
        let query = query.trim().to_lowercase();
        let tables = self.store.read()?;

        Ok(tables
            .ingredients
            .iter()
            .filter(|i| i.name.to_lowercase().contains(&query))
            .cloned()
            .collect())
    }

    pub fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Ingredient>> {
        let tables = self.store.read()?;
        Ok(tables.ingredient(id).cloned())
    }

    pub fn find_by_name(&self, name: &str) -> StoreResult<Option<Ingredient>> {
        let tables = self.store.read()?;
        Ok(tables.ingredient_by_name(name).cloned())
    }

    pub fn create(&self, ingredient: &Ingredient) -> StoreResult<()> {
        let mut tables = self.store.write()?;
        tables.ingredients.push(ingredient.clone());
        Ok(())
    }

    /// Existing ingredient with this name (any case), or a new one in
    /// `category` ("Other" when absent).
    pub fn find_or_create(&self, name: &str, category: Option<&str>) -> StoreResult<Ingredient> {
        let mut tables = self.store.write()?;

        if let Some(existing) = tables.ingredient_by_name(name) {
            return Ok(existing.clone());
        }

        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_INGREDIENT_CATEGORY);
        let ingredient = Ingredient::new(name.trim().to_string(), category.to_string());
        log::debug!("Created ingredient '{}' ({})", ingredient.name, ingredient.category);
        tables.ingredients.push(ingredient.clone());

        Ok(ingredient)
    }
}
