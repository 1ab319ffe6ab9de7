//! Provider model
//!
//! A provider is a workshop or an individual technician that owns catalog
//! items. Individual service providers keep their service items embedded
//! in the provider document rather than in the standalone item table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CatalogItem;

/// Provider entity type — decides where new service items are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderType {
    Workshop,
    IndividualServiceProvider,
}

impl ProviderType {
    /// Whether this provider embeds service items in its own document
    pub fn embeds_services(&self) -> bool {
        matches!(self, ProviderType::IndividualServiceProvider)
    }
}

/// Provider as returned by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub provider_type: ProviderType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Embedded service items (individual providers only)
    #[serde(default)]
    pub services: Vec<CatalogItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Provider creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderCreate {
    pub name: String,
    pub provider_type: ProviderType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
