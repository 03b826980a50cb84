use crate::{MemoryStore, Result as StoreResult, StoreError};

use mp_core::{Recipe, UserFavorite};

use uuid::Uuid;

pub struct FavoriteRepository {
    store: MemoryStore,
}

impl FavoriteRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Idempotent: favoriting twice returns the existing row
    pub fn add(&self, user_id: Uuid, recipe_id: Uuid) -> StoreResult<UserFavorite> {
        let mut tables = self.store.write()?;

        if tables.recipe(recipe_id).is_none() {
            return Err(StoreError::not_found("Recipe", recipe_id));
        }

        if let Some(existing) = tables
            .favorites
            .iter()
            .find(|f| f.user_id == user_id && f.recipe_id == recipe_id)
        {
            return Ok(existing.clone());
        }

        let favorite = UserFavorite::new(user_id, recipe_id);
        tables.favorites.push(favorite.clone());
        Ok(favorite)
    }

    /// Returns whether a favorite was removed
    pub fn remove(&self, user_id: Uuid, recipe_id: Uuid) -> StoreResult<bool> {
        let mut tables = self.store.write()?;

        let before = tables.favorites.len();
        tables
            .favorites
            .retain(|f| !(f.user_id == user_id && f.recipe_id == recipe_id));

        Ok(tables.favorites.len() != before)
    }

    pub fn is_favorite(&self, user_id: Uuid, recipe_id: Uuid) -> StoreResult<bool> {
        let tables = self.store.read()?;
        Ok(tables
            .favorites
            .iter()
            .any(|f| f.user_id == user_id && f.recipe_id == recipe_id))
    }

    pub fn find_recipes(&self, user_id: Uuid) -> StoreResult<Vec<Recipe>> {
        let tables = self.store.read()?;

        tables
            .favorites
            .iter()
            .filter(|f| f.user_id == user_id)
            .map(|f| {
                tables.recipe(f.recipe_id).cloned().ok_or_else(|| {
                    StoreError::integrity(format!(
                        "favorite {} references missing recipe {}",
                        f.id, f.recipe_id
                    ))
                })
            })
            .collect()
    }
}
