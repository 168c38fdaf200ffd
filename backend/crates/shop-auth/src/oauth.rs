use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use error_location::ErrorLocation;
use log::debug;
use reqwest::{Client as ReqwestClient, Response, Url};
use serde::Deserialize;
use shop_core::ExternalProfile;
use subtle::ConstantTimeEq;

const STATE_BYTES: usize = 32;

/// Client registration and provider endpoints
#[derive(Debug, Clone)]
pub struct OAuthCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
    pub scopes: Vec<String>,
    pub request_timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Authorization-code flow against an OAuth2 / OpenID provider
#[derive(Clone)]
pub struct OAuthClient {
    credentials: OAuthCredentials,
    auth_url: Url,
    http: ReqwestClient,
}

impl OAuthClient {
    #[track_caller]
    pub fn new(credentials: OAuthCredentials) -> AuthErrorResult<Self> {
        let auth_url = Url::parse(&credentials.auth_url).map_err(|e| {
            AuthError::configuration(format!(
                "Invalid authorization URL '{}': {}",
                credentials.auth_url, e
            ))
        })?;

        let http = ReqwestClient::builder()
            .timeout(credentials.request_timeout)
            .build()
            .map_err(|e| AuthError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            credentials,
            auth_url,
            http,
        })
    }

    /// Provider URL the browser is redirected to on login
    pub fn authorize_url(&self, state: &OAuthState) -> String {
        let mut url = self.auth_url.clone();
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.credentials.client_id)
            .append_pair("redirect_uri", &self.credentials.redirect_url)
            .append_pair("scope", &self.credentials.scopes.join(" "))
            .append_pair("state", state.as_str());
        url.into()
    }

    /// Exchange the authorization code for an access token
    pub async fn exchange_code(&self, code: &str) -> AuthErrorResult<String> {
        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.credentials.redirect_url.as_str()),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(&self.credentials.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| AuthError::provider(format!("Token request failed: {}", e)))?;

        let token: TokenResponse = Self::json_body(response, "token").await?;
        debug!("Exchanged authorization code for access token");
        Ok(token.access_token)
    }

    /// Fetch the userinfo document for an access token
    pub async fn fetch_profile(&self, access_token: &str) -> AuthErrorResult<ExternalProfile> {
        let response = self
            .http
            .get(&self.credentials.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::provider(format!("Userinfo request failed: {}", e)))?;

        let profile: ExternalProfile = Self::json_body(response, "userinfo").await?;
        if profile.external_id.trim().is_empty() {
            return Err(AuthError::provider("Userinfo response has an empty subject"));
        }

        Ok(profile)
    }

    async fn json_body<T: for<'de> Deserialize<'de>>(
        response: Response,
        what: &str,
    ) -> AuthErrorResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::provider(format!(
                "{} endpoint returned {}: {}",
                what, status, body
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AuthError::provider(format!("Malformed {} response: {}", what, e)))
    }
}

/// Anti-CSRF value round-tripped through the provider on login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthState(String);

impl OAuthState {
    pub fn generate() -> Self {
        let bytes: [u8; STATE_BYTES] = rand::random();
        Self(URL_SAFE_NO_PAD.encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compare the state stored in the browser cookie with the one the provider returned.
    #[track_caller]
    pub fn verify(expected: Option<&str>, received: Option<&str>) -> AuthErrorResult<()> {
        match (expected, received) {
            (Some(expected), Some(received))
                if !expected.is_empty()
                    && bool::from(expected.as_bytes().ct_eq(received.as_bytes())) =>
            {
                Ok(())
            }
            _ => Err(AuthError::InvalidState {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
