use crate::{MemoryStore, Result as StoreResult, StoreError};

use mp_core::FamilyMember;

use uuid::Uuid;

pub struct FamilyMemberRepository {
    store: MemoryStore,
}

impl FamilyMemberRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    pub fn find_by_user(&self, user_id: Uuid) -> StoreResult<Vec<FamilyMember>> {
        let tables = self.store.read()?;
        Ok(tables
            .family_members
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect())
    }

    /// Members that should be considered when planning meals
    pub fn find_active_by_user(&self, user_id: Uuid) -> StoreResult<Vec<FamilyMember>> {
        Ok(self
            .find_by_user(user_id)?
            .into_iter()
            .filter(|m| m.is_active)
            .collect())
    }

    pub fn find_by_id(&self, id: Uuid) -> StoreResult<Option<FamilyMember>> {
        let tables = self.store.read()?;
        Ok(tables.family_members.iter().find(|m| m.id == id).cloned())
    }

    pub fn create(&self, member: &FamilyMember) -> StoreResult<()> {
        let mut tables = self.store.write()?;
        tables.family_members.push(member.clone());
        Ok(())
    }

    pub fn update(&self, member: &FamilyMember) -> StoreResult<()> {
        let mut tables = self.store.write()?;

        let existing = tables
            .family_members
            .iter_mut()
            .find(|m| m.id == member.id)
            .ok_or_else(|| StoreError::not_found("Family member", member.id))?;
        *existing = member.clone();

        Ok(())
    }

    pub fn delete(&self, id: Uuid) -> StoreResult<()> {
        let mut tables = self.store.write()?;

        let before = tables.family_members.len();
        tables.family_members.retain(|m| m.id != id);

        if tables.family_members.len() == before {
            return Err(StoreError::not_found("Family member", id));
        }

        Ok(())
    }
}
