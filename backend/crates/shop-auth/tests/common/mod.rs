#![allow(dead_code)]

use shop_auth::OAuthCredentials;

use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCESS_TOKEN: &str = "test-access-token";

/// Credentials pointing every provider endpoint at the mock server
pub fn mock_credentials(server: &MockServer) -> OAuthCredentials {
    OAuthCredentials {
        client_id: "test-client".to_string(),
        client_secret: "test-secret".to_string(),
        redirect_url: "http://127.0.0.1:8000/auth/callback".to_string(),
        auth_url: format!("{}/authorize", server.uri()),
        token_url: format!("{}/token", server.uri()),
        userinfo_url: format!("{}/userinfo", server.uri()),
        scopes: vec!["openid".to_string(), "email".to_string()],
        request_timeout: Duration::from_secs(5),
    }
}

/// Token endpoint accepting `code` and userinfo endpoint returning `profile`
pub async fn mount_provider(server: &MockServer, code: &str, profile: Value) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains(format!("code={}", code)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": ACCESS_TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/userinfo"))
        .and(header("authorization", format!("Bearer {}", ACCESS_TOKEN)))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile))
        .mount(server)
        .await;
}
