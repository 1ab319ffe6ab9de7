//! Provider storage model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::{CatalogItem, Provider, ProviderType};

/// Provider document. Individual service providers carry their service
/// items in the embedded `services` array; workshop providers keep the
/// array empty and own standalone rows instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub provider_type: ProviderType,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub services: Vec<CatalogItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProviderRecord {
    pub fn into_provider(self) -> Provider {
        Provider {
            id: self.id.map(|id| id.key().to_string()).unwrap_or_default(),
            name: self.name,
            provider_type: self.provider_type,
            phone: self.phone,
            address: self.address,
            services: self.services,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
