pub mod shopping;
pub mod shopping_list_dto;
pub mod shopping_requests;
