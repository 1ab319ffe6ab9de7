//! Provider API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use shared::{ApiEnvelope, Provider, ProviderCreate};

use crate::core::ServerState;
use crate::utils::{AppResult, ok};

/// POST /api/providers - create a provider
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProviderCreate>,
) -> AppResult<(StatusCode, Json<ApiEnvelope<Provider>>)> {
    let provider = state.catalog.create_provider(payload).await?;
    Ok((StatusCode::CREATED, ok(provider)))
}

/// GET /api/providers - list all providers
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiEnvelope<Vec<Provider>>>> {
    let providers = state.catalog.list_providers().await?;
    Ok(ok(providers))
}

/// GET /api/providers/{id} - fetch one provider
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiEnvelope<Provider>>> {
    let provider = state.catalog.get_provider(&id).await?;
    Ok(ok(provider))
}
