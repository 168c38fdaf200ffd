use shop_server::error::Result as ServerErrorResult;
use shop_server::{AppState, build_router, logger};

use shop_auth::{Authenticator, OAuthCredentials, SessionCookie, UserStore};
use shop_config::Config;
use shop_db::{PoolSettings, UserRepository};

use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // .env is optional; real environment wins
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting shop-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool (runs migrations)
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = shop_db::connect(
        &database_path,
        PoolSettings {
            max_connections: config.database.max_connections,
            acquire_timeout: Duration::from_secs(config.database.acquire_timeout_secs),
            busy_timeout: Duration::from_secs(config.database.busy_timeout_secs),
        },
    )
    .await?;
    info!("Database ready");

    // Login pipeline
    let store: Arc<dyn UserStore> = Arc::new(UserRepository::new(pool.clone()));
    let authenticator = Authenticator::new(
        OAuthCredentials {
            client_id: config.oauth.client_id.clone(),
            client_secret: config.oauth.client_secret.clone(),
            redirect_url: config.oauth.redirect_url.clone(),
            auth_url: config.oauth.auth_url.clone(),
            token_url: config.oauth.token_url.clone(),
            userinfo_url: config.oauth.userinfo_url.clone(),
            scopes: config.oauth.scope_list(),
            request_timeout: Duration::from_secs(config.oauth.request_timeout_secs),
        },
        store,
    )?;

    let session_cookie = SessionCookie::new(
        config.session.cookie_name.clone(),
        config.session.secret.as_bytes(),
        chrono::Duration::hours(config.session.ttl_hours as i64),
        config.session.secure_cookie,
    );
    if !config.session.secure_cookie {
        log::warn!("Session cookie sent without Secure flag - development only");
    }

    let app_state = AppState::new(
        pool.clone(),
        authenticator,
        session_cookie,
        config.session.login_redirect.clone(),
    );

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
