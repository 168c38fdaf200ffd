use crate::{ApiError, AppState, MaybeUser};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;
use shop_core::User;

/// The caller's user record; rejects anonymous requests with 401.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let MaybeUser(user) = MaybeUser::from_request_parts(parts, state).await?;

            user.map(CurrentUser).ok_or_else(|| ApiError::Unauthenticated {
                message: "Login required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}
