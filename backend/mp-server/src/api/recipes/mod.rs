pub mod list_recipes_query;
pub mod recipe_dto;
pub mod recommendation_request;
pub mod recommendations;
pub mod recipes;
pub mod search_recipes_request;
