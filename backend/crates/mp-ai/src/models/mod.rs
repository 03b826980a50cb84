pub mod chat;
pub mod ingredient_scan;
pub mod recipe_recommendation;
pub mod weekly_meal_plan;

mod lenient;
