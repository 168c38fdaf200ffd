//! One access line per request, logged under [`REQUEST_TARGET`]

use crate::logger::REQUEST_TARGET;

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis();
    if status.is_server_error() {
        log::warn!(target: REQUEST_TARGET, "{} {} -> {} ({}ms)", method, path, status.as_u16(), elapsed_ms);
    } else {
        log::info!(target: REQUEST_TARGET, "{} {} -> {} ({}ms)", method, path, status.as_u16(), elapsed_ms);
    }

    response
}
