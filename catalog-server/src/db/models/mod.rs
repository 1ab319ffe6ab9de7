//! Database record models
//!
//! Storage-side structs carrying SurrealDB `RecordId` identities, plus the
//! conversions to and from the wire models in `shared`.

pub mod catalog_item;
pub mod provider;

pub use catalog_item::{CatalogItemRecord, ItemPatch};
pub use provider::ProviderRecord;
