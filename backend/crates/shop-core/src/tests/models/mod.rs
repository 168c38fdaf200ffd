mod external_profile;
mod product;
mod role;
mod user;
