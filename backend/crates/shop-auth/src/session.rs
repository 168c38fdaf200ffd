use crate::{
    AuthError, Result as AuthErrorResult, UserStore, clear_cookie_header, set_cookie_header,
};

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use log::debug;
use serde::{Deserialize, Serialize};
use shop_core::User;
use uuid::Uuid;

/// What a session remembers about its user: the record id and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionToken(Uuid);

impl SessionToken {
    pub fn new(user_id: Uuid) -> Self {
        Self(user_id)
    }

    pub fn user_id(&self) -> Uuid {
        self.0
    }
}

/// Packs a resolved user into a session token and restores it per request.
#[derive(Clone)]
pub struct SessionIdentity {
    store: Arc<dyn UserStore>,
}

impl SessionIdentity {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub fn pack_session(&self, user: &User) -> SessionToken {
        SessionToken::new(user.id)
    }

    /// `Ok(None)` when the record no longer exists; the caller is anonymous.
    pub async fn unpack_session(&self, token: &SessionToken) -> AuthErrorResult<Option<User>> {
        let user = self.store.find_by_id(token.user_id()).await?;
        if user.is_none() {
            debug!("Session refers to unknown user {}", token.user_id());
        }
        Ok(user)
    }
}

/// JWT claims carried in the session cookie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User record id
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and verifies the session cookie (HS256).
#[derive(Clone)]
pub struct SessionCookie {
    name: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
    secure: bool,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, secret: &[u8], ttl: Duration, secure: bool) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            name: name.into(),
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
            secure,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[track_caller]
    pub fn seal(&self, token: &SessionToken) -> AuthErrorResult<String> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: token.user_id().to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::configuration(format!("Failed to sign session: {}", e)))
    }

    /// Anything that does not verify is treated as no session.
    pub fn open(&self, value: &str) -> Option<SessionToken> {
        let data = match decode::<SessionClaims>(value, &self.decoding_key, &self.validation) {
            Ok(data) => data,
            Err(e) => {
                debug!("Rejected session cookie: {}", e);
                return None;
            }
        };

        match Uuid::parse_str(&data.claims.sub) {
            Ok(id) => Some(SessionToken::new(id)),
            Err(e) => {
                debug!("Session cookie has malformed subject: {}", e);
                None
            }
        }
    }

    /// `Set-Cookie` value carrying a freshly sealed token
    #[track_caller]
    pub fn set_cookie(&self, token: &SessionToken) -> AuthErrorResult<String> {
        let sealed = self.seal(token)?;
        Ok(set_cookie_header(
            &self.name,
            &sealed,
            self.ttl.num_seconds(),
            self.secure,
        ))
    }

    pub fn clear_cookie(&self) -> String {
        clear_cookie_header(&self.name, self.secure)
    }

    pub fn secure(&self) -> bool {
        self.secure
    }
}
