use crate::memory_store::DismissedSuggestion;
use crate::{MemoryStore, Result as StoreResult};

use std::collections::HashSet;

use uuid::Uuid;

/// Remembers which proactive suggestions each user dismissed
pub struct SuggestionRepository {
    store: MemoryStore,
}

impl SuggestionRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    pub fn dismiss(&self, user_id: Uuid, suggestion_id: &str) -> StoreResult<()> {
        let mut tables = self.store.write()?;

        let already = tables
            .dismissed_suggestions
            .iter()
            .any(|d| d.user_id == user_id && d.suggestion_id == suggestion_id);

        if !already {
            tables.dismissed_suggestions.push(DismissedSuggestion {
                user_id,
                suggestion_id: suggestion_id.to_string(),
            });
        }

        Ok(())
    }

    pub fn dismissed_ids(&self, user_id: Uuid) -> StoreResult<HashSet<String>> {
        let tables = self.store.read()?;
        Ok(tables
            .dismissed_suggestions
            .iter()
            .filter(|d| d.user_id == user_id)
            .map(|d| d.suggestion_id.clone())
            .collect())
    }
}
