pub mod preferences;
pub mod preferences_dto;
