pub mod difficulty;
pub mod family_member;
pub mod ingredient;
pub mod meal;
pub mod meal_plan;
pub mod meal_type;
pub mod pantry_item;
pub mod recipe;
pub mod recipe_ingredient;
pub mod shopping_list;
pub mod shopping_list_item;
pub mod user;
pub mod user_favorite;
pub mod user_preferences;
