//! Business services

pub mod catalog_service;
pub mod image_store;

pub use catalog_service::CatalogService;
pub use image_store::{ImagePayload, ImageStore, LocalImageStore};
