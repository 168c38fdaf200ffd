pub mod external_profile;
pub mod product;
pub mod role;
pub mod user;
