use crate::{MemoryStore, Result as StoreResult};

use mp_core::User;

use uuid::Uuid;

pub struct UserRepository {
    store: MemoryStore,
}

impl UserRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    pub fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let tables = self.store.read()?;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    /// Insert the user, or replace the profile fields of an existing one
    pub fn upsert(&self, user: &User) -> StoreResult<User> {
        let mut tables = self.store.write()?;

        match tables.users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => {
                existing.email = user.email.clone();
                existing.first_name = user.first_name.clone();
                existing.last_name = user.last_name.clone();
                existing.profile_image_url = user.profile_image_url.clone();
                existing.name = user.name.clone();
                Ok(existing.clone())
            }
            None => {
                tables.users.push(user.clone());
                Ok(user.clone())
            }
        }
    }
}
