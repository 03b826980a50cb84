use crate::joins::meal_plan_with_meals;
use crate::{MealPlanWithMeals, MemoryStore, Result as StoreResult, StoreError};

use mp_core::{Meal, MealPlan};

use chrono::NaiveDate;
use uuid::Uuid;

pub struct MealPlanRepository {
    store: MemoryStore,
}

impl MealPlanRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    pub fn find_by_id(&self, id: Uuid) -> StoreResult<Option<MealPlan>> {
        let tables = self.store.read()?;
        Ok(tables.meal_plans.iter().find(|p| p.id == id).cloned())
    }

    pub fn find_for_week(
        &self,
        user_id: Uuid,
        week_starting: NaiveDate,
    ) -> StoreResult<Option<MealPlan>> {
        let tables = self.store.read()?;
        Ok(tables
            .meal_plans
            .iter()
            .find(|p| p.user_id == user_id && p.week_starting == week_starting)
            .cloned())
    }

    /// The user's plan for the week, created if it does not exist yet
    pub fn find_or_create(&self, user_id: Uuid, week_starting: NaiveDate) -> StoreResult<MealPlan> {
        let mut tables = self.store.write()?;

        if let Some(existing) = tables
            .meal_plans
            .iter()
            .find(|p| p.user_id == user_id && p.week_starting == week_starting)
        {
            return Ok(existing.clone());
        }

        let plan = MealPlan::new(user_id, week_starting);
        tables.meal_plans.push(plan.clone());
        Ok(plan)
    }

    pub fn find_with_meals(&self, plan_id: Uuid) -> StoreResult<Option<MealPlanWithMeals>> {
        let tables = self.store.read()?;

        tables
            .meal_plans
            .iter()
            .find(|p| p.id == plan_id)
            .map(|plan| meal_plan_with_meals(&tables, plan))
            .transpose()
    }

    pub fn add_meal(&self, meal: &Meal) -> StoreResult<Meal> {
        let mut tables = self.store.write()?;

        if !tables.meal_plans.iter().any(|p| p.id == meal.meal_plan_id) {
            return Err(StoreError::dangling("meal", "meal plan", meal.meal_plan_id));
        }
        if tables.recipe(meal.recipe_id).is_none() {
            return Err(StoreError::dangling("meal", "recipe", meal.recipe_id));
        }

        tables.meals.push(meal.clone());
        Ok(meal.clone())
    }

    pub fn find_meal(&self, meal_id: Uuid) -> StoreResult<Option<Meal>> {
        let tables = self.store.read()?;
        Ok(tables.meals.iter().find(|m| m.id == meal_id).cloned())
    }

    pub fn remove_meal(&self, meal_id: Uuid) -> StoreResult<()> {
        let mut tables = self.store.write()?;

        let before = tables.meals.len();
        tables.meals.retain(|m| m.id != meal_id);

        if tables.meals.len() == before {
            return Err(StoreError::not_found("Meal", meal_id));
        }

        Ok(())
    }
}
