pub mod add_pantry_request;
pub mod pantry;
pub mod pantry_item_dto;
pub mod update_pantry_item_request;
