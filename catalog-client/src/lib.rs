//! Catalog Client - client-side logic for the workshop catalog
//!
//! Provides the HTTP client for the catalog server API together with the
//! pure state behind the catalog form screen: the add/edit editor state
//! machine, the extensible category and unit-of-measure vocabularies, the
//! image picker cap, and the item list view-model.

pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod listing;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use form::{CatalogForm, FormMode, FormPhase, FormSubmission, ItemDraft, Vocabulary};
pub use http::CatalogClient;
pub use listing::{Availability, ItemRow};

// Re-export shared types for convenience
pub use shared::{
    ApiEnvelope, CatalogItem, ItemCategory, ItemCreate, ItemStatus, ItemUpdate, Provider,
    ProviderCreate, ProviderType,
};
