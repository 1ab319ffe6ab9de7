//! Input validation helpers
//!
//! Centralized text length constants and validation functions.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: item, provider, company
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions and free text
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Short identifiers: sku, sub-category, uom, phone
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Images per catalog item
pub const MAX_IMAGE_COUNT: usize = 4;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Parse a required numeric string field into f64.
pub fn parse_required_f64(value: &str, field: &str) -> Result<f64, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| AppError::validation(format!("{field} must be numeric, got '{value}'")))
}

/// Parse an optional numeric string field into f64; empty strings count as absent.
pub fn parse_optional_f64(value: &Option<String>, field: &str) -> Result<Option<f64>, AppError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v
            .parse::<f64>()
            .map(Some)
            .map_err(|_| AppError::validation(format!("{field} must be numeric, got '{v}'"))),
    }
}

/// Parse an optional integer string field; empty strings count as absent.
pub fn parse_optional_i64(value: &Option<String>, field: &str) -> Result<Option<i64>, AppError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v
            .parse::<i64>()
            .map(Some)
            .map_err(|_| AppError::validation(format!("{field} must be an integer, got '{v}'"))),
    }
}

/// Validate caller-supplied image URIs together with the pending upload
/// count against the per-item image bound.
pub fn validate_image_list(images: &[String], upload_count: usize) -> Result<(), AppError> {
    let total = images.len() + upload_count;
    if total > MAX_IMAGE_COUNT {
        return Err(AppError::validation(format!(
            "images allows at most {MAX_IMAGE_COUNT} entries, got {total}"
        )));
    }
    for uri in images {
        if uri.len() > MAX_URL_LEN {
            return Err(AppError::validation(format!(
                "image uri is too long ({} chars, max {MAX_URL_LEN})",
                uri.len()
            )));
        }
    }
    Ok(())
}

/// Parse an optional non-negative integer (stock counts).
pub fn parse_optional_count(value: &Option<String>, field: &str) -> Result<Option<i64>, AppError> {
    match parse_optional_i64(value, field)? {
        Some(n) if n < 0 => Err(AppError::validation(format!(
            "{field} must not be negative, got {n}"
        ))),
        other => Ok(other),
    }
}
