use crate::{
    IdentityResolver, OAuthClient, OAuthCredentials, OAuthState, Result as AuthErrorResult,
    SessionIdentity, UserStore,
};

use std::sync::Arc;

use log::info;
use shop_core::User;

/// The login pipeline: provider client, identity resolver and session identity,
/// wired once at startup.
#[derive(Clone)]
pub struct Authenticator {
    oauth: OAuthClient,
    resolver: IdentityResolver,
    sessions: SessionIdentity,
}

impl Authenticator {
    #[track_caller]
    pub fn new(credentials: OAuthCredentials, store: Arc<dyn UserStore>) -> AuthErrorResult<Self> {
        let oauth = OAuthClient::new(credentials)?;

        Ok(Self {
            oauth,
            resolver: IdentityResolver::new(store.clone()),
            sessions: SessionIdentity::new(store),
        })
    }

    /// Start a login: a fresh state value and the provider URL carrying it
    pub fn begin_login(&self) -> (OAuthState, String) {
        let state = OAuthState::generate();
        let url = self.oauth.authorize_url(&state);
        (state, url)
    }

    /// Finish a login from the provider callback code
    pub async fn complete_login(&self, code: &str) -> AuthErrorResult<User> {
        let access_token = self.oauth.exchange_code(code).await?;
        let profile = self.oauth.fetch_profile(&access_token).await?;
        let user = self.resolver.resolve(&profile).await?;

        info!("User {} logged in (role: {})", user.id, user.role);
        Ok(user)
    }

    pub fn resolver(&self) -> &IdentityResolver {
        &self.resolver
    }

    pub fn sessions(&self) -> &SessionIdentity {
        &self.sessions
    }
}
