use crate::{MemoryStore, Result as StoreResult};

use mp_core::UserPreferences;

use chrono::Utc;
use uuid::Uuid;

pub struct PreferencesRepository {
    store: MemoryStore,
}

impl PreferencesRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    pub fn find_by_user(&self, user_id: Uuid) -> StoreResult<Option<UserPreferences>> {
        let tables = self.store.read()?;
        Ok(tables
            .preferences
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    /// One row per user: replaces the existing row's settings, keeping its id
    pub fn upsert(&self, preferences: &UserPreferences) -> StoreResult<UserPreferences> {
        let mut tables = self.store.write()?;

        let mut saved = preferences.clone();
        saved.updated_at = Utc::now();

        match tables
            .preferences
            .iter_mut()
            .find(|p| p.user_id == preferences.user_id)
        {
            Some(existing) => {
                saved.id = existing.id;
                *existing = saved.clone();
            }
            None => tables.preferences.push(saved.clone()),
        }

        Ok(saved)
    }
}
