pub mod auth;
pub mod callback_query;
