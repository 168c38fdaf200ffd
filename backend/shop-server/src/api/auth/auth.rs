//! Login / logout REST handlers
//!
//! The login flow is a plain OAuth2 authorization-code exchange. A random
//! state value is stored in a short-lived cookie and must come back
//! unchanged on the callback.

use crate::{ApiError, ApiResult, AppState, CallbackQuery, cookie_value};

use shop_auth::{OAuthState, clear_cookie_header, set_cookie_header};

use std::panic::Location;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use error_location::ErrorLocation;

pub const OAUTH_STATE_COOKIE: &str = "shop_oauth_state";
const OAUTH_STATE_MAX_AGE_SECS: i64 = 10 * 60;

/// GET /auth/login
///
/// Redirect to the identity provider
pub async fn login(State(state): State<AppState>) -> Response {
    let (oauth_state, url) = state.authenticator.begin_login();

    let state_cookie = set_cookie_header(
        OAUTH_STATE_COOKIE,
        oauth_state.as_str(),
        OAUTH_STATE_MAX_AGE_SECS,
        state.session_cookie.secure(),
    );

    (AppendHeaders([(SET_COOKIE, state_cookie)]), Redirect::to(&url)).into_response()
}

/// GET /auth/callback
///
/// Finish the login, start a session and send the browser on
pub async fn callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CallbackQuery>,
) -> ApiResult<Response> {
    if let Some(error) = query.error {
        return Err(ApiError::Unauthenticated {
            message: format!("Login was not completed: {}", error),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    OAuthState::verify(
        cookie_value(&headers, OAUTH_STATE_COOKIE),
        query.state.as_deref(),
    )?;

    let code = query.code.ok_or_else(|| ApiError::BadRequest {
        message: "Missing authorization code".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let user = state.authenticator.complete_login(&code).await?;

    let token = state.authenticator.sessions().pack_session(&user);
    let session_cookie = state.session_cookie.set_cookie(&token)?;
    let clear_state = clear_cookie_header(OAUTH_STATE_COOKIE, state.session_cookie.secure());

    Ok((
        AppendHeaders([(SET_COOKIE, session_cookie), (SET_COOKIE, clear_state)]),
        Redirect::to(&state.login_redirect),
    )
        .into_response())
}

/// POST /auth/logout
///
/// Drop the session cookie. Sessions are stateless so there is nothing to revoke.
pub async fn logout(State(state): State<AppState>) -> Response {
    (
        StatusCode::NO_CONTENT,
        AppendHeaders([(SET_COOKIE, state.session_cookie.clear_cookie())]),
    )
        .into_response()
}
