//! HTTP route handlers.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.
//! Handler panics are caught and answered with a 500 JSON error.

pub mod health;
pub mod pairs;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use axum::http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::{panic_response, request_id_layer};
use crate::state::AppState;

/// Creates the Axum router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Pair finding - body size bounded by configuration
    let pair_routes = Router::new()
        .route("/find-pairs", post(pairs::find))
        .layer(DefaultBodyLimit::max(state.config.limits.max_body_bytes));

    // Health check - liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(pair_routes)
        .merge(health_routes)
        .with_state(state)
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Panic recovery - inside the request span so panics carry the request_id
        .layer(CatchPanicLayer::custom(panic_response))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
