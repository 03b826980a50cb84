pub mod family_member_repository;
pub mod favorite_repository;
pub mod ingredient_repository;
pub mod meal_plan_repository;
pub mod pantry_repository;
pub mod preferences_repository;
pub mod recipe_repository;
pub mod shopping_list_repository;
pub mod suggestion_repository;
pub mod user_repository;
