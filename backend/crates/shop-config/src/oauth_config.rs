use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_OAUTH_AUTH_URL, DEFAULT_OAUTH_REDIRECT_URL,
    DEFAULT_OAUTH_REQUEST_TIMEOUT_SECS, DEFAULT_OAUTH_SCOPES, DEFAULT_OAUTH_TOKEN_URL,
    DEFAULT_OAUTH_USERINFO_URL,
};

use serde::Deserialize;

/// External identity provider settings. Endpoint defaults point at Google.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Where the provider sends the user back (must match provider console)
    pub redirect_url: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
    /// Space-separated scopes
    pub scopes: String,
    pub request_timeout_secs: u64,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_url: String::from(DEFAULT_OAUTH_REDIRECT_URL),
            auth_url: String::from(DEFAULT_OAUTH_AUTH_URL),
            token_url: String::from(DEFAULT_OAUTH_TOKEN_URL),
            userinfo_url: String::from(DEFAULT_OAUTH_USERINFO_URL),
            scopes: String::from(DEFAULT_OAUTH_SCOPES),
            request_timeout_secs: DEFAULT_OAUTH_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl OAuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.client_id.trim().is_empty() {
            return Err(ConfigError::oauth(
                "oauth.client_id is required (set SHOP_OAUTH_CLIENT_ID)",
            ));
        }

        if self.client_secret.trim().is_empty() {
            return Err(ConfigError::oauth(
                "oauth.client_secret is required (set SHOP_OAUTH_CLIENT_SECRET)",
            ));
        }

        for (name, url) in [
            ("redirect_url", &self.redirect_url),
            ("auth_url", &self.auth_url),
            ("token_url", &self.token_url),
            ("userinfo_url", &self.userinfo_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::oauth(format!(
                    "oauth.{} must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::oauth(
                "oauth.request_timeout_secs must be greater than 0",
            ));
        }

        Ok(())
    }

    pub fn scope_list(&self) -> Vec<String> {
        self.scopes.split_whitespace().map(String::from).collect()
    }
}
