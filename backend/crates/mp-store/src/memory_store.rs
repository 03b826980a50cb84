//! Process-local tables behind a shared lock.
//!
//! Each repository call takes the lock once and releases it before
//! returning, so concurrent writers are last-write-wins and no call sees a
//! half-applied mutation. Nothing is persisted across restarts.

use crate::{Result as StoreResult, StoreError};

use mp_core::{
    ErrorLocation, FamilyMember, Ingredient, Meal, MealPlan, PantryItem, Recipe, RecipeIngredient,
    ShoppingList, ShoppingListItem, User, UserFavorite, UserPreferences,
};

use std::panic::Location;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

/// A suggestion id a user asked not to see again
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DismissedSuggestion {
    pub user_id: Uuid,
    pub suggestion_id: String,
}

/// Rows are kept in insertion order; listing operations rely on it.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub users: Vec<User>,
    pub ingredients: Vec<Ingredient>,
    pub pantry_items: Vec<PantryItem>,
    pub recipes: Vec<Recipe>,
    pub recipe_ingredients: Vec<RecipeIngredient>,
    pub favorites: Vec<UserFavorite>,
    pub meal_plans: Vec<MealPlan>,
    pub meals: Vec<Meal>,
    pub shopping_lists: Vec<ShoppingList>,
    pub shopping_list_items: Vec<ShoppingListItem>,
    pub family_members: Vec<FamilyMember>,
    pub preferences: Vec<UserPreferences>,
    pub dismissed_suggestions: Vec<DismissedSuggestion>,
}

impl Tables {
    pub fn ingredient(&self, id: Uuid) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    pub fn recipe(&self, id: Uuid) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn ingredient_by_name(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.has_name(name))
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the demo household
    pub fn seeded() -> StoreResult<Self> {
        let store = Self::new();
        crate::seed_demo_data(&store)?;
        Ok(store)
    }

    /// False once a writer has panicked while holding the lock
    pub fn is_available(&self) -> bool {
        !self.tables.is_poisoned()
    }

    #[track_caller]
    pub(crate) fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        let location = Location::caller();
        self.tables.read().map_err(|_| StoreError::LockPoisoned {
            location: ErrorLocation::from(location),
        })
    }

    #[track_caller]
    pub(crate) fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        let location = Location::caller();
        self.tables.write().map_err(|_| StoreError::LockPoisoned {
            location: ErrorLocation::from(location),
        })
    }
}
