#![allow(dead_code)]

//! Test infrastructure for shop-server API tests

use shop_auth::{Authenticator, OAuthCredentials, SessionCookie, UserStore};
use shop_core::{Product, Role, User};
use shop_db::{ProductRepository, UserRepository, connect_in_memory};
use shop_server::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use serde_json::Value;

pub const SESSION_COOKIE: &str = "shop_session";
pub const SESSION_SECRET: &[u8] = b"server-test-secret-at-least-32-bytes";
pub const LOGIN_REDIRECT: &str = "/welcome";

/// Provider endpoints rooted at `provider_uri` (a wiremock server, or an
/// unreachable address for tests that never talk to the provider)
pub fn test_credentials(provider_uri: &str) -> OAuthCredentials {
    OAuthCredentials {
        client_id: "test-client".to_string(),
        client_secret: "test-secret".to_string(),
        redirect_url: "http://127.0.0.1:8000/auth/callback".to_string(),
        auth_url: format!("{}/authorize", provider_uri),
        token_url: format!("{}/token", provider_uri),
        userinfo_url: format!("{}/userinfo", provider_uri),
        scopes: vec!["openid".to_string(), "email".to_string(), "profile".to_string()],
        request_timeout: Duration::from_secs(5),
    }
}

pub fn test_session_cookie() -> SessionCookie {
    SessionCookie::new(
        SESSION_COOKIE,
        SESSION_SECRET,
        chrono::Duration::hours(1),
        false,
    )
}

/// Create AppState for testing against the given provider
pub async fn create_test_app_state_with_provider(provider_uri: &str) -> AppState {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create test database");

    let store: Arc<dyn UserStore> = Arc::new(UserRepository::new(pool.clone()));
    let authenticator = Authenticator::new(test_credentials(provider_uri), store)
        .expect("Failed to build authenticator");

    AppState::new(pool, authenticator, test_session_cookie(), LOGIN_REDIRECT)
}

/// Create AppState for tests that never reach the provider
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with_provider("http://127.0.0.1:9").await
}

/// Create a user with the given role
pub async fn create_test_user(state: &AppState, role: Role) -> User {
    let mut user = User::new(
        Some(format!("ext-{}", uuid::Uuid::new_v4())),
        None,
        "Test User".to_string(),
    );
    if !role.is_unset() {
        user.assign_role(role).expect("Failed to assign role");
    }

    UserRepository::new(state.pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");

    user
}

/// Create a product owned by `merchant_id`
pub async fn create_test_product(state: &AppState, merchant_id: uuid::Uuid) -> Product {
    let product = Product::new(merchant_id, "Test Product", Some("A test product".into()), 1999)
        .expect("Invalid test product");

    ProductRepository::new(state.pool.clone())
        .create(&product)
        .await
        .expect("Failed to create test product");

    product
}

/// `Cookie` header value carrying a valid session for `user`
pub fn session_cookie_header(state: &AppState, user: &User) -> String {
    let token = state.authenticator.sessions().pack_session(user);
    let sealed = state
        .session_cookie
        .seal(&token)
        .expect("Failed to seal session");
    format!("{}={}", SESSION_COOKIE, sealed)
}

pub fn request(method: &str, uri: &str, cookie: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }

    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// All `Set-Cookie` values of a response
pub fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}
