//! Catalog item API handlers
//!
//! Create and update accept either a plain JSON body or a multipart form
//! with a `data` JSON field plus `images` file fields, matching what the
//! mobile form submits.

use axum::{
    Json,
    extract::{FromRequest, Multipart, Path, Query, Request, State},
    http::{StatusCode, header},
};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use shared::{ApiEnvelope, CatalogItem, ItemCreate, ItemUpdate};

use crate::core::ServerState;
use crate::services::ImagePayload;
use crate::utils::{AppError, AppResult, ok, ok_with_message};

/// Parse an item request body: multipart (`data` + `images`) or JSON.
async fn parse_item_request<T: DeserializeOwned>(
    req: Request,
) -> Result<(T, Vec<ImagePayload>), AppError> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if content_type.starts_with("multipart/form-data") {
        let mut multipart = Multipart::from_request(req, &())
            .await
            .map_err(|e| AppError::validation(format!("Invalid multipart request: {}", e)))?;

        let mut data: Option<T> = None;
        let mut uploads = Vec::new();

        while let Some(field) = multipart.next_field().await? {
            match field.name() {
                Some("data") => {
                    let text = field.text().await?;
                    data = Some(
                        serde_json::from_str(&text)
                            .map_err(|e| AppError::validation(format!("Invalid data field: {e}")))?,
                    );
                }
                Some("images") | Some("image") => {
                    let filename = field
                        .file_name()
                        .map(|s| s.to_string())
                        .ok_or_else(|| AppError::validation("Image field without a filename"))?;
                    let bytes = field.bytes().await?.to_vec();
                    uploads.push(ImagePayload {
                        filename,
                        bytes,
                    });
                }
                _ => {}
            }
        }

        let data =
            data.ok_or_else(|| AppError::validation("Missing 'data' field in multipart body"))?;
        Ok((data, uploads))
    } else {
        let Json(data) = Json::<T>::from_request(req, &())
            .await
            .map_err(|e| AppError::validation(format!("Invalid JSON body: {}", e)))?;
        Ok((data, Vec::new()))
    }
}

/// POST /api/items - create an item
pub async fn create(
    State(state): State<ServerState>,
    req: Request,
) -> AppResult<(StatusCode, Json<ApiEnvelope<CatalogItem>>)> {
    let (payload, uploads) = parse_item_request::<ItemCreate>(req).await?;
    let item = state.catalog.create_item(payload, uploads).await?;
    Ok((StatusCode::CREATED, ok(item)))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub provider_id: Option<String>,
}

/// GET /api/items?provider_id=... - union of both storage locations
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiEnvelope<Vec<CatalogItem>>>> {
    let provider_id = query
        .provider_id
        .ok_or_else(|| AppError::validation("provider_id is required"))?;
    let items = state.catalog.list_items(&provider_id).await?;
    Ok(ok(items))
}

/// GET /api/items/{id} - fetch one item
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiEnvelope<CatalogItem>>> {
    let item = state.catalog.get_item(&id).await?;
    Ok(ok(item))
}

/// PUT /api/items/{id} - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    req: Request,
) -> AppResult<Json<ApiEnvelope<CatalogItem>>> {
    let (payload, uploads) = parse_item_request::<ItemUpdate>(req).await?;
    let item = state.catalog.update_item(&id, payload, uploads).await?;
    Ok(ok(item))
}

/// DELETE /api/items/{id} - remove from whichever location holds it
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiEnvelope<bool>>> {
    state.catalog.delete_item(&id).await?;
    Ok(ok_with_message(true, "Item deleted"))
}
