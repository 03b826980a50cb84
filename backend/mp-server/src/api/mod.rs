pub mod auth;
pub mod chat;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod family;
pub mod ingredients;
pub mod meal_plans;
pub mod pantry;
pub mod preferences;
pub mod recipes;
pub mod scan;
pub mod shopping;
pub mod suggestions;
pub mod validate;
