//! Session-cookie extractor for routes open to anonymous callers

use crate::{ApiError, AppState, cookie_value};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use shop_core::User;

/// The caller's user record, or `None` for an anonymous request.
///
/// A missing, tampered or expired cookie, or one naming a record that no
/// longer exists, yields `None`. Only a store failure rejects the request.
pub struct MaybeUser(pub Option<User>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(value) = cookie_value(&parts.headers, state.session_cookie.name()) else {
                return Ok(MaybeUser(None));
            };

            let Some(token) = state.session_cookie.open(value) else {
                return Ok(MaybeUser(None));
            };

            let user = state
                .authenticator
                .sessions()
                .unpack_session(&token)
                .await?;

            if let Some(ref user) = user {
                log::debug!("Session resolved to user {} ({})", user.id, user.role);
            }

            Ok(MaybeUser(user))
        }
    }
}
