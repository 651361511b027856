pub mod dto;
pub mod error;
pub mod routes;
pub mod state;
pub mod trace;

use crate::interface::http::state::AppState;
use crate::interface::http::trace::{request_id_middleware, request_log_middleware};
use axum::Router;
use axum::http::Method;
use axum::middleware;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Cross-origin policy: any origin may call the API.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any)
}

/// Assembles the full HTTP application. Paths not matched by a route are
/// served from `static_dir` (the built front-end bundle).
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(routes::person::router())
        .merge(routes::info::router())
        .merge(routes::probes::router())
        .merge(routes::metrics::router())
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_log_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors())
        .with_state(state)
}
