//! Image storage
//!
//! Validates incoming images (PNG, JPEG, WebP), recompresses them to JPEG
//! and stores them under uuid filenames. The store is behind a trait so
//! the catalog service does not care whether images land on the local
//! filesystem or in an external object store.

use std::io::Cursor;
use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use crate::utils::AppError;

/// Supported input formats, by file extension
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// JPEG quality for catalog images
const JPEG_QUALITY: u8 = 85;

/// One image file received from a client
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Object-storage collaborator: store one image, return the URI it will
/// be served under. A failure aborts the surrounding catalog operation.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn store(&self, payload: ImagePayload) -> Result<String, AppError>;
}

/// Filesystem-backed image store
pub struct LocalImageStore {
    images_dir: PathBuf,
    max_bytes: usize,
}

impl LocalImageStore {
    pub fn new(images_dir: PathBuf, max_bytes: usize) -> Self {
        Self {
            images_dir,
            max_bytes,
        }
    }

    /// Validate size, extension and decodability.
    fn validate(&self, payload: &ImagePayload) -> Result<(), AppError> {
        if payload.bytes.is_empty() {
            return Err(AppError::validation("Empty image file provided"));
        }
        if payload.bytes.len() > self.max_bytes {
            return Err(AppError::validation(format!(
                "Image too large ({} bytes, max {})",
                payload.bytes.len(),
                self.max_bytes
            )));
        }

        let ext = PathBuf::from(&payload.filename)
            .extension()
            .and_then(|ext| ext.to_str().map(|s| s.to_lowercase()))
            .ok_or_else(|| {
                AppError::validation(format!("Invalid file extension for: {}", payload.filename))
            })?;
        if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
            return Err(AppError::validation(format!(
                "Unsupported image format '{}'. Supported: {}",
                ext,
                SUPPORTED_FORMATS.join(", ")
            )));
        }

        if let Err(e) = image::load_from_memory(&payload.bytes) {
            return Err(AppError::validation(format!("Invalid image file: {}", e)));
        }
        Ok(())
    }

    /// Re-encode as JPEG with fixed quality.
    fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>, AppError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AppError::validation(format!("Invalid image: {}", e)))?;

        let mut buffer = Vec::new();
        {
            let mut cursor = Cursor::new(&mut buffer);
            let rgb_img = img.to_rgb8();
            let encoder =
                image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
            rgb_img
                .write_with_encoder(encoder)
                .map_err(|e| AppError::upload(format!("Failed to compress image: {}", e)))?;
        }
        Ok(buffer)
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn store(&self, payload: ImagePayload) -> Result<String, AppError> {
        self.validate(&payload)?;
        let compressed = self.compress(&payload.bytes)?;

        std::fs::create_dir_all(&self.images_dir)
            .map_err(|e| AppError::upload(format!("Failed to create images directory: {e}")))?;

        let filename = format!("{}.jpg", Uuid::new_v4());
        let file_path = self.images_dir.join(&filename);
        std::fs::write(&file_path, &compressed)
            .map_err(|e| AppError::upload(format!("Failed to save image: {e}")))?;

        tracing::info!(
            original_name = %payload.filename,
            size = %compressed.len(),
            file = %filename,
            "Image stored"
        );

        Ok(format!("/api/image/{}", filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_png() -> Vec<u8> {
        let img = image::RgbImage::from_pixel(4, 4, image::Rgb([120, 30, 30]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[tokio::test]
    async fn test_store_returns_served_uri() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path().to_path_buf(), 1024 * 1024);

        let uri = store
            .store(ImagePayload {
                filename: "photo.png".into(),
                bytes: sample_png(),
            })
            .await
            .unwrap();

        assert!(uri.starts_with("/api/image/"));
        assert!(uri.ends_with(".jpg"));
        let file = uri.strip_prefix("/api/image/").unwrap();
        assert!(dir.path().join(file).exists());
    }

    #[tokio::test]
    async fn test_rejects_garbage_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path().to_path_buf(), 1024);

        let err = store
            .store(ImagePayload {
                filename: "photo.png".into(),
                bytes: vec![0, 1, 2, 3],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path().to_path_buf(), 1024 * 1024);

        let err = store
            .store(ImagePayload {
                filename: "notes.txt".into(),
                bytes: sample_png(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
