//! Provider Repository

use chrono::Utc;
use shared::{Provider, ProviderCreate, ProviderType};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use uuid::Uuid;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::ProviderRecord;

const PROVIDER_TABLE: &str = "provider";

#[derive(Clone)]
pub struct ProviderRepository {
    base: BaseRepository,
}

impl ProviderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Provider>> {
        let providers: Vec<ProviderRecord> = self
            .base
            .db()
            .query("SELECT * FROM provider ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(providers
            .into_iter()
            .map(ProviderRecord::into_provider)
            .collect())
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Provider>> {
        let provider: Option<ProviderRecord> =
            self.base.db().select((PROVIDER_TABLE, id)).await?;
        Ok(provider.map(ProviderRecord::into_provider))
    }

    /// Type of the provider, if the document exists. Used when resolving
    /// the storage location of a new item.
    pub async fn provider_type(&self, id: &str) -> RepoResult<Option<ProviderType>> {
        let provider: Option<ProviderRecord> =
            self.base.db().select((PROVIDER_TABLE, id)).await?;
        Ok(provider.map(|p| p.provider_type))
    }

    pub async fn create(&self, data: ProviderCreate) -> RepoResult<Provider> {
        let now = Utc::now();
        let record = ProviderRecord {
            id: None,
            name: data.name,
            provider_type: data.provider_type,
            phone: data.phone,
            address: data.address,
            services: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        let key = Uuid::new_v4().to_string();
        let created: Option<ProviderRecord> = self
            .base
            .db()
            .create((PROVIDER_TABLE, key))
            .content(record)
            .await?;

        created
            .map(ProviderRecord::into_provider)
            .ok_or_else(|| RepoError::Database("Failed to create provider".to_string()))
    }
}
