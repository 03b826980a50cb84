pub mod meal_plan_dto;
pub mod meal_plan_requests;
pub mod meal_plans;
pub mod meals;
