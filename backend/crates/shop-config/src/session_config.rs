use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOGIN_REDIRECT, DEFAULT_SESSION_COOKIE_NAME,
    DEFAULT_SESSION_TTL_HOURS, MAX_SESSION_TTL_HOURS, MIN_SESSION_SECRET_LENGTH,
    MIN_SESSION_TTL_HOURS,
};

use serde::Deserialize;

/// Signed session cookie settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// HMAC secret for signing the session cookie
    pub secret: String,
    pub cookie_name: String,
    pub ttl_hours: u64,
    /// Add the `Secure` attribute (disable only for plain-http development)
    pub secure_cookie: bool,
    /// Where the browser lands after a successful login
    pub login_redirect: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            cookie_name: String::from(DEFAULT_SESSION_COOKIE_NAME),
            ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            secure_cookie: true,
            login_redirect: String::from(DEFAULT_LOGIN_REDIRECT),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.secret.len() < MIN_SESSION_SECRET_LENGTH {
            return Err(ConfigError::session(format!(
                "session.secret must be at least {} characters (set SHOP_SESSION_SECRET)",
                MIN_SESSION_SECRET_LENGTH
            )));
        }

        if self.cookie_name.is_empty()
            || !self
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ConfigError::session(format!(
                "session.cookie_name must be non-empty and use only [A-Za-z0-9_-], got '{}'",
                self.cookie_name
            )));
        }

        if !(MIN_SESSION_TTL_HOURS..=MAX_SESSION_TTL_HOURS).contains(&self.ttl_hours) {
            return Err(ConfigError::session(format!(
                "session.ttl_hours must be {}-{}, got {}",
                MIN_SESSION_TTL_HOURS, MAX_SESSION_TTL_HOURS, self.ttl_hours
            )));
        }

        if !self.login_redirect.starts_with('/') {
            return Err(ConfigError::session(
                "session.login_redirect must be a local path starting with '/'",
            ));
        }

        Ok(())
    }
}
