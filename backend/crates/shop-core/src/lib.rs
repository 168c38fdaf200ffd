pub mod error;
pub mod models;
pub mod normalize;

pub use error::{CoreError, CoreResult};
pub use models::external_profile::ExternalProfile;
pub use models::product::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, Product};
pub use models::role::Role;
pub use models::user::{DEFAULT_DISPLAY_NAME, User};
pub use normalize::{normalize_display_name, normalize_email};

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
