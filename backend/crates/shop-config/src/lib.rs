mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod oauth_config;
mod server_config;
mod session_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use oauth_config::OAuthConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;

#[cfg(test)]
mod tests;

pub const CONFIG_DIR_ENV: &str = "SHOP_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".shop";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "shop.db";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const MIN_DB_MAX_CONNECTIONS: u32 = 1;
const MAX_DB_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_DB_ACQUIRE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_DB_BUSY_TIMEOUT_SECS: u64 = 5;

const DEFAULT_OAUTH_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const DEFAULT_OAUTH_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const DEFAULT_OAUTH_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";
const DEFAULT_OAUTH_REDIRECT_URL: &str = "http://127.0.0.1:8000/auth/callback";
const DEFAULT_OAUTH_SCOPES: &str = "openid email profile";
const DEFAULT_OAUTH_REQUEST_TIMEOUT_SECS: u64 = 10;

const MIN_SESSION_SECRET_LENGTH: usize = 32;
const DEFAULT_SESSION_COOKIE_NAME: &str = "shop_session";
const DEFAULT_SESSION_TTL_HOURS: u64 = 24 * 7;
const MIN_SESSION_TTL_HOURS: u64 = 1;
const MAX_SESSION_TTL_HOURS: u64 = 24 * 30;
const DEFAULT_LOGIN_REDIRECT: &str = "/";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
