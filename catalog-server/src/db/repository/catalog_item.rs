//! Catalog Item Repository — the dual-location item record store
//!
//! A catalog item physically lives in exactly one of two places:
//!
//! - the standalone `catalog_item` table, keyed by the item uuid
//! - the `services` array embedded in its owning provider document,
//!   matched by the same uuid in the `id` field
//!
//! Every by-id operation runs one two-phase probe (standalone first, then
//! a scan of embedding providers) and carries the hit along, so the
//! individual CRUD methods never re-implement the probe.

use chrono::Utc;
use shared::{CatalogItem, ItemCategory, ProviderType};
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{CatalogItemRecord, ItemPatch, ProviderRecord};

const ITEM_TABLE: &str = "catalog_item";
const PROVIDER_TABLE: &str = "provider";

/// Physical residence of a catalog item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemLocation {
    /// Row in the standalone table
    Standalone,
    /// Entry in the owning provider's embedded list
    Embedded { provider_id: String },
}

/// Result of the two-phase probe, carrying the data the probe already read
enum Located {
    Standalone(CatalogItemRecord),
    Embedded(ProviderRecord),
}

#[derive(Clone)]
pub struct CatalogItemRepository {
    base: BaseRepository,
}

impl CatalogItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Two-phase probe: standalone table first, then the embedded lists of
    /// individual-type providers. The embedded leg is a document scan; it
    /// only runs on the standalone miss path.
    async fn probe(&self, id: &str) -> RepoResult<Option<Located>> {
        let standalone: Option<CatalogItemRecord> =
            self.base.db().select((ITEM_TABLE, id)).await?;
        if let Some(record) = standalone {
            return Ok(Some(Located::Standalone(record)));
        }

        let providers = self.embedding_providers().await?;
        for provider in providers {
            if provider.services.iter().any(|item| item.id == id) {
                return Ok(Some(Located::Embedded(provider)));
            }
        }
        Ok(None)
    }

    async fn embedding_providers(&self) -> RepoResult<Vec<ProviderRecord>> {
        let providers: Vec<ProviderRecord> = self
            .base
            .db()
            .query("SELECT * FROM provider WHERE provider_type = $ptype")
            .bind(("ptype", ProviderType::IndividualServiceProvider))
            .await?
            .take(0)?;
        Ok(providers)
    }

    /// Resolve which physical location holds `id`, if any.
    pub async fn locate(&self, id: &str) -> RepoResult<Option<ItemLocation>> {
        Ok(self.probe(id).await?.map(|located| match located {
            Located::Standalone(_) => ItemLocation::Standalone,
            Located::Embedded(provider) => ItemLocation::Embedded {
                provider_id: provider
                    .id
                    .map(|id| id.key().to_string())
                    .unwrap_or_default(),
            },
        }))
    }

    /// Union of both storage locations for one provider: standalone rows
    /// first (newest creation first), then embedded items in document
    /// order. No de-duplication beyond the id itself.
    pub async fn find_by_provider(&self, provider_id: &str) -> RepoResult<Vec<CatalogItem>> {
        let standalone: Vec<CatalogItemRecord> = self
            .base
            .db()
            .query("SELECT * FROM catalog_item WHERE provider_id = $pid ORDER BY created_at DESC")
            .bind(("pid", provider_id.to_string()))
            .await?
            .take(0)?;

        let mut items: Vec<CatalogItem> = standalone
            .into_iter()
            .map(CatalogItemRecord::into_item)
            .collect();

        let provider: Option<ProviderRecord> =
            self.base.db().select((PROVIDER_TABLE, provider_id)).await?;
        if let Some(provider) = provider
            && provider.provider_type.embeds_services()
        {
            items.extend(provider.services);
        }

        Ok(items)
    }

    /// Store a new item, choosing its physical location from the provider
    /// type: service items of individual providers are appended to the
    /// provider's embedded list, everything else becomes a standalone row.
    /// A missing provider document falls back to the standalone table.
    pub async fn insert(
        &self,
        item: CatalogItem,
        provider_type: Option<ProviderType>,
    ) -> RepoResult<CatalogItem> {
        let embeds = provider_type.is_some_and(|t| t.embeds_services())
            && item.category == ItemCategory::Service;

        if embeds {
            let provider: Option<ProviderRecord> = self
                .base
                .db()
                .select((PROVIDER_TABLE, item.provider_id.as_str()))
                .await?;
            if let Some(provider) = provider {
                let mut services = provider.services.clone();
                services.push(item.clone());
                self.write_services(&provider, services).await?;
                return Ok(item);
            }
            tracing::warn!(
                provider_id = %item.provider_id,
                "Embedding provider not found, inserting item standalone"
            );
        }

        let content = CatalogItemRecord::from_item(&item);
        let created: Option<CatalogItemRecord> = self
            .base
            .db()
            .create((ITEM_TABLE, item.id.as_str()))
            .content(content)
            .await?;

        created
            .map(CatalogItemRecord::into_item)
            .ok_or_else(|| RepoError::Database("Failed to create catalog item".to_string()))
    }

    /// Fetch one item by id, probing both locations.
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<CatalogItem>> {
        match self.probe(id).await? {
            None => Ok(None),
            Some(Located::Standalone(record)) => Ok(Some(record.into_item())),
            Some(Located::Embedded(provider)) => Ok(provider
                .services
                .into_iter()
                .find(|item| item.id == id)),
        }
    }

    /// Shallow-merge `patch` over the item with this id, wherever it
    /// lives. Fails with `NotFound` when neither location matches.
    pub async fn update_by_id(&self, id: &str, patch: ItemPatch) -> RepoResult<CatalogItem> {
        match self.probe(id).await? {
            None => Err(RepoError::NotFound(format!("Item {} not found", id))),
            Some(Located::Standalone(record)) => {
                let mut item = record.into_item();
                patch.apply(&mut item);

                let content = CatalogItemRecord::from_item(&item);
                let updated: Option<CatalogItemRecord> = self
                    .base
                    .db()
                    .update((ITEM_TABLE, id))
                    .content(content)
                    .await?;
                updated
                    .map(CatalogItemRecord::into_item)
                    .ok_or_else(|| RepoError::NotFound(format!("Item {} not found", id)))
            }
            Some(Located::Embedded(provider)) => {
                let mut services = provider.services.clone();
                let item = services
                    .iter_mut()
                    .find(|item| item.id == id)
                    .ok_or_else(|| RepoError::NotFound(format!("Item {} not found", id)))?;
                patch.apply(item);
                let merged = item.clone();

                self.write_services(&provider, services).await?;
                Ok(merged)
            }
        }
    }

    /// Remove the item with this id from whichever location holds it.
    pub async fn delete_by_id(&self, id: &str) -> RepoResult<()> {
        match self.probe(id).await? {
            None => Err(RepoError::NotFound(format!("Item {} not found", id))),
            Some(Located::Standalone(_)) => {
                let deleted: Option<CatalogItemRecord> =
                    self.base.db().delete((ITEM_TABLE, id)).await?;
                if deleted.is_none() {
                    return Err(RepoError::NotFound(format!("Item {} not found", id)));
                }
                Ok(())
            }
            Some(Located::Embedded(provider)) => {
                let mut services = provider.services.clone();
                let before = services.len();
                services.retain(|item| item.id != id);
                if services.len() == before {
                    return Err(RepoError::NotFound(format!("Item {} not found", id)));
                }
                self.write_services(&provider, services).await?;
                Ok(())
            }
        }
    }

    /// Replace a provider's embedded service list.
    async fn write_services(
        &self,
        provider: &ProviderRecord,
        services: Vec<CatalogItem>,
    ) -> RepoResult<()> {
        let provider_id: RecordId = provider
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Provider record has no id".to_string()))?;

        let mut result = self
            .base
            .db()
            .query("UPDATE $provider SET services = $services, updated_at = $updated_at RETURN AFTER")
            .bind(("provider", provider_id))
            .bind(("services", services))
            .bind(("updated_at", Utc::now()))
            .await?;
        let updated: Vec<ProviderRecord> = result.take(0)?;

        if updated.is_empty() {
            return Err(RepoError::NotFound("Provider not found".to_string()));
        }
        Ok(())
    }
}
