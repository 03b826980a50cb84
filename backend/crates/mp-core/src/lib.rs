pub mod aggregation;
pub mod error;
pub mod models;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use aggregation::{AggregatedItem, IngredientLine, MealIngredients, aggregate_ingredients};
pub use error::{CoreError, Result as CoreResult};
pub use error_location::ErrorLocation;
pub use models::difficulty::Difficulty;
pub use models::family_member::FamilyMember;
pub use models::ingredient::{DEFAULT_INGREDIENT_CATEGORY, Ingredient};
pub use models::meal::Meal;
pub use models::meal_plan::{MealPlan, week_start_for};
pub use models::meal_type::MealType;
pub use models::pantry_item::PantryItem;
pub use models::recipe::Recipe;
pub use models::recipe_ingredient::RecipeIngredient;
pub use models::shopping_list::ShoppingList;
pub use models::shopping_list_item::ShoppingListItem;
pub use models::user::User;
pub use models::user_favorite::UserFavorite;
pub use models::user_preferences::UserPreferences;
pub use scoring::{
    DEFAULT_RECOMMENDATION_LIMIT, RecipeCandidate, ScoredRecipe, ingredient_matches, match_ratio,
    rank_recipes,
};
