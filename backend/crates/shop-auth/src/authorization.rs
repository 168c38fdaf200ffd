use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use shop_core::{Role, User};

/// Role gate for handlers. Never assigns or changes a role.
#[track_caller]
pub fn authorize(identity: Option<&User>, required: Role) -> AuthErrorResult<&User> {
    let user = identity.ok_or_else(|| AuthError::Unauthenticated {
        location: ErrorLocation::from(Location::caller()),
    })?;

    if !user.has_role(required) {
        return Err(AuthError::Forbidden {
            required,
            actual: user.role,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(user)
}
