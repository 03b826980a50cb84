pub mod error;
pub mod joins;
pub mod memory_store;
pub mod repositories;
pub mod seed;

#[cfg(test)]
mod tests;

pub use error::{Result, StoreError};
pub use joins::{
    MealPlanWithMeals, MealWithRecipe, PantryItemWithIngredient, RecipeIngredientDetail,
    RecipeWithIngredients, ShoppingListWithItems,
};
pub use memory_store::MemoryStore;
pub use repositories::family_member_repository::FamilyMemberRepository;
pub use repositories::favorite_repository::FavoriteRepository;
pub use repositories::ingredient_repository::IngredientRepository;
pub use repositories::meal_plan_repository::MealPlanRepository;
pub use repositories::pantry_repository::{NewPantryItem, PantryRepository};
pub use repositories::preferences_repository::PreferencesRepository;
pub use repositories::recipe_repository::{NewRecipeIngredient, RecipeRepository, RecipeSearch};
pub use repositories::shopping_list_repository::ShoppingListRepository;
pub use repositories::suggestion_repository::SuggestionRepository;
pub use repositories::user_repository::UserRepository;
pub use seed::{DEMO_USER_ID, seed_demo_data};
