// HTTP routes: liveness and readiness probes.

use crate::interface::http::state::AppState;
use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Serialize)]
struct ProbeResponse {
    status: &'static str,
}

/// Builds `/health` (process is up) and `/ready` (database answers).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
}

async fn health() -> Json<ProbeResponse> {
    Json(ProbeResponse { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ProbeResponse>) {
    match state.ctx.repos.execute("SELECT 1").await {
        Ok(_) => (StatusCode::OK, Json(ProbeResponse { status: "ready" })),
        Err(err) => {
            warn!(error = %err, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ProbeResponse {
                    status: "not_ready",
                }),
            )
        }
    }
}
