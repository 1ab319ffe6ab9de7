//! Shared types for the workshop catalog platform
//!
//! Common types used by both the catalog server and the client crate:
//! catalog item and provider models, create/update DTOs, the unified
//! response envelope, and vocabulary tag helpers.

pub mod models;
pub mod response;
pub mod vocab;

// Re-exports
pub use models::{
    CatalogItem, ItemCategory, ItemCreate, ItemStatus, ItemUpdate, Provider, ProviderCreate,
    ProviderType,
};
pub use response::ApiEnvelope;
pub use vocab::normalize_tag;
