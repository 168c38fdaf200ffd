pub mod authenticator;
pub mod authorization;
pub mod cookie;
pub mod error;
pub mod oauth;
pub mod resolver;
pub mod session;
pub mod store;

pub use authenticator::Authenticator;
pub use authorization::authorize;
pub use cookie::{clear_cookie_header, read_cookie, set_cookie_header};
pub use error::{AuthError, Result};
pub use oauth::{OAuthClient, OAuthCredentials, OAuthState};
pub use resolver::IdentityResolver;
pub use session::{SessionClaims, SessionCookie, SessionIdentity, SessionToken};
pub use store::UserStore;
