use crate::request_log::log_request;
use crate::{
    AppState, callback, create_product, delete_product, get_me, get_product, health,
    list_products, login, logout, set_role, update_product,
};

use axum::{
    Router,
    middleware,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Login flow
        .route("/auth/login", get(login))
        .route("/auth/callback", get(callback))
        .route("/auth/logout", post(logout))
        // Current user
        .route("/api/v1/me", get(get_me))
        .route("/api/v1/me/role", put(set_role))
        // Products
        .route("/api/v1/products", get(list_products).post(create_product))
        .route(
            "/api/v1/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        // Add shared state
        .with_state(state)
        // One access line per request
        .layer(middleware::from_fn(log_request))
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
