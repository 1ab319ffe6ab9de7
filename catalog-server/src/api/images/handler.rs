//! Image serving handler

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /api/image/{filename} - serve a stored catalog image
pub async fn serve(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> AppResult<Response> {
    // Filenames are uuid-based, anything with a path separator is hostile
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        return Err(AppError::validation("Invalid image filename"));
    }

    let file_path = state.images_dir().join(&filename);
    let bytes = tokio::fs::read(&file_path)
        .await
        .map_err(|_| AppError::not_found(format!("Image {} not found", filename)))?;

    let mime = mime_guess::from_path(&file_path)
        .first_or_octet_stream()
        .to_string();

    Ok(([(header::CONTENT_TYPE, mime)], bytes).into_response())
}
