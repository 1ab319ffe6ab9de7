//! Catalog Service — item CRUD orchestration
//!
//! Sits between the HTTP handlers and the record store: validates required
//! fields, coerces the form's numeric strings into numbers, runs image
//! uploads through the [`ImageStore`] collaborator, and delegates the
//! actual residence decision to the repository.

use std::sync::Arc;

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use uuid::Uuid;

use shared::{
    CatalogItem, ItemCategory, ItemCreate, ItemUpdate, Provider, ProviderCreate,
};

use crate::db::models::ItemPatch;
use crate::db::repository::{CatalogItemRepository, ProviderRepository};
use crate::services::{ImagePayload, ImageStore};
use crate::utils::AppResult;
use crate::utils::error::AppError;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN,
    parse_optional_count, parse_optional_f64, parse_optional_i64, parse_required_f64,
    validate_image_list, validate_optional_text, validate_required_text,
};

#[derive(Clone)]
pub struct CatalogService {
    items: CatalogItemRepository,
    providers: ProviderRepository,
    image_store: Arc<dyn ImageStore>,
}

impl CatalogService {
    pub fn new(db: Surreal<Db>, image_store: Arc<dyn ImageStore>) -> Self {
        Self {
            items: CatalogItemRepository::new(db.clone()),
            providers: ProviderRepository::new(db),
            image_store,
        }
    }

    pub fn items(&self) -> &CatalogItemRepository {
        &self.items
    }

    pub fn providers(&self) -> &ProviderRepository {
        &self.providers
    }

    // ── Items ───────────────────────────────────────────────────────

    /// Create a catalog item. Uploads run first; any upload failure
    /// aborts the operation before a record is written.
    pub async fn create_item(
        &self,
        data: ItemCreate,
        uploads: Vec<ImagePayload>,
    ) -> AppResult<CatalogItem> {
        validate_required_text(&data.provider_id, "provider_id", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
        let price = parse_required_f64(&data.price, "price")?;
        validate_image_list(&data.images, uploads.len())?;

        let mut images = data.images.clone();
        images.extend(self.upload_all(uploads).await?);

        let now = Utc::now();
        let mut item = CatalogItem {
            id: Uuid::new_v4().to_string(),
            provider_id: data.provider_id.clone(),
            category: data.category,
            name: data.name.trim().to_string(),
            price,
            status: Default::default(),
            images,
            description: data.description.clone(),
            duration: None,
            service_types: Vec::new(),
            other_service_name: None,
            sub_category: None,
            stock: None,
            sku: None,
            company: None,
            uom: None,
            purchase_price: None,
            tax_percentage: None,
            created_at: now,
            updated_at: now,
        };

        // Exactly one field group is meaningful, decided by the category.
        match data.category {
            ItemCategory::Service => {
                item.duration = parse_optional_i64(&data.duration, "duration")?;
                item.service_types = data.service_types.clone();
                item.other_service_name = data.other_service_name.clone();
            }
            ItemCategory::Product => {
                item.sub_category = data.sub_category.clone();
                item.stock = Some(parse_optional_count(&data.stock, "stock")?.unwrap_or(0));
                item.sku = data.sku.clone();
                item.company = data.company.clone();
                item.uom = data.uom.clone();
                item.purchase_price = parse_optional_f64(&data.purchase_price, "purchase_price")?;
                item.tax_percentage = parse_optional_f64(&data.tax_percentage, "tax_percentage")?;
            }
        }

        // Provider validity is only consulted here, to resolve residence.
        let provider_type = self.providers.provider_type(&data.provider_id).await?;
        let stored = self.items.insert(item, provider_type).await?;

        tracing::info!(
            id = %stored.id,
            provider_id = %stored.provider_id,
            category = stored.category.as_str(),
            "Catalog item created"
        );
        Ok(stored)
    }

    pub async fn list_items(&self, provider_id: &str) -> AppResult<Vec<CatalogItem>> {
        if provider_id.trim().is_empty() {
            return Err(AppError::validation("provider_id is required"));
        }
        Ok(self.items.find_by_provider(provider_id).await?)
    }

    pub async fn get_item(&self, id: &str) -> AppResult<CatalogItem> {
        self.items
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Item {} not found", id)))
    }

    /// Partially update an item, wherever it lives. Caller-supplied image
    /// URIs are preserved and newly uploaded ones appended.
    pub async fn update_item(
        &self,
        id: &str,
        data: ItemUpdate,
        uploads: Vec<ImagePayload>,
    ) -> AppResult<CatalogItem> {
        if let Some(name) = &data.name {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
        }
        validate_optional_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
        let price = match &data.price {
            Some(p) => Some(parse_required_f64(p, "price")?),
            None => None,
        };
        let duration = parse_optional_i64(&data.duration, "duration")?;
        let stock = parse_optional_count(&data.stock, "stock")?;
        let purchase_price = parse_optional_f64(&data.purchase_price, "purchase_price")?;
        let tax_percentage = parse_optional_f64(&data.tax_percentage, "tax_percentage")?;

        // Resolve the base image list first, so the bound is checked
        // before any upload hits the store.
        let base_images = match (data.images, uploads.is_empty()) {
            (Some(existing), _) => Some(existing),
            // Uploads without an explicit list append to the stored one.
            (None, false) => Some(self.get_item(id).await?.images),
            (None, true) => None,
        };
        if let Some(base) = &base_images {
            validate_image_list(base, uploads.len())?;
        }

        let uploaded = self.upload_all(uploads).await?;
        let images = base_images.map(|mut list| {
            list.extend(uploaded);
            list
        });

        let patch = ItemPatch {
            name: data.name,
            price,
            status: data.status,
            description: data.description,
            images,
            duration,
            service_types: data.service_types,
            other_service_name: data.other_service_name,
            sub_category: data.sub_category,
            stock,
            sku: data.sku,
            company: data.company,
            uom: data.uom,
            purchase_price,
            tax_percentage,
            updated_at: Utc::now(),
        };

        let updated = self.items.update_by_id(id, patch).await?;
        tracing::info!(id = %updated.id, "Catalog item updated");
        Ok(updated)
    }

    pub async fn delete_item(&self, id: &str) -> AppResult<()> {
        self.items.delete_by_id(id).await?;
        tracing::info!(id = %id, "Catalog item deleted");
        Ok(())
    }

    // ── Providers ───────────────────────────────────────────────────

    pub async fn create_provider(&self, data: ProviderCreate) -> AppResult<Provider> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&data.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&data.address, "address", MAX_ADDRESS_LEN)?;
        let provider = self.providers.create(data).await?;
        tracing::info!(id = %provider.id, "Provider created");
        Ok(provider)
    }

    pub async fn get_provider(&self, id: &str) -> AppResult<Provider> {
        self.providers
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Provider {} not found", id)))
    }

    pub async fn list_providers(&self) -> AppResult<Vec<Provider>> {
        Ok(self.providers.find_all().await?)
    }

    // ── Uploads ─────────────────────────────────────────────────────

    /// Store all uploads concurrently; the first failure aborts the
    /// batch and surfaces to the caller.
    async fn upload_all(&self, uploads: Vec<ImagePayload>) -> AppResult<Vec<String>> {
        if uploads.is_empty() {
            return Ok(Vec::new());
        }
        let futures = uploads
            .into_iter()
            .map(|payload| self.image_store.store(payload));
        futures::future::try_join_all(futures).await
    }
}
