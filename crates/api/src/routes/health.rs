use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    database: &'static str,
}

/// Liveness plus a store ping. Always answers 200; a failed ping is reported
/// in the body so probes can tell "process up" from "store reachable".
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match plotline_db::health_check(&state.pool).await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            "unreachable"
        }
    };

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
