//! Health check endpoint

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use shared::ApiEnvelope;

use crate::core::ServerState;
use crate::utils::{AppResult, ok};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub environment: String,
}

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// GET /health - liveness probe
pub async fn health(State(state): State<ServerState>) -> AppResult<Json<ApiEnvelope<HealthStatus>>> {
    Ok(ok(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
    }))
}
