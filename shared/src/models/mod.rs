//! Data models shared between server and client

pub mod catalog_item;
pub mod provider;

pub use catalog_item::{CatalogItem, ItemCategory, ItemCreate, ItemStatus, ItemUpdate};
pub use provider::{Provider, ProviderCreate, ProviderType};
