use shop_auth::{Authenticator, SessionCookie};
use shop_db::{ProductRepository, UserRepository};

use sqlx::SqlitePool;

/// Shared handler state, built once in `main`
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub authenticator: Authenticator,
    pub session_cookie: SessionCookie,
    /// Local path the browser lands on after login
    pub login_redirect: String,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        authenticator: Authenticator,
        session_cookie: SessionCookie,
        login_redirect: impl Into<String>,
    ) -> Self {
        Self {
            pool,
            authenticator,
            session_cookie,
            login_redirect: login_redirect.into(),
        }
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }

    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone())
    }
}
