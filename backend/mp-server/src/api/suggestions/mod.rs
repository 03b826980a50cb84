pub mod proactive;
pub mod suggestion_dto;
pub mod suggestion_requests;
pub mod suggestions;
