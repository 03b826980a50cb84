mod difficulty;
mod meal;
mod meal_plan;
mod meal_type;
mod pantry_item;
mod recipe;
