pub mod family;
pub mod family_member_dto;
pub mod family_member_request;
