pub mod set_role_request;
pub mod user_dto;
pub mod user_response;
pub mod users;
