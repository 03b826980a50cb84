pub mod ingredient_dto;
pub mod ingredients;
