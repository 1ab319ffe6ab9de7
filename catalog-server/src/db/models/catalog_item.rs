//! Catalog item storage model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::{CatalogItem, ItemCategory, ItemStatus};

/// Standalone catalog item row.
///
/// The record key is the item's logical uuid, so the same `id` string
/// identifies the item in both physical locations. Embedded items are
/// stored as plain [`CatalogItem`] objects inside the provider document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItemRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub provider_id: String,
    pub category: ItemCategory,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub images: Vec<String>,
    pub description: Option<String>,

    pub duration: Option<i64>,
    #[serde(default)]
    pub service_types: Vec<String>,
    pub other_service_name: Option<String>,

    pub sub_category: Option<String>,
    pub stock: Option<i64>,
    pub sku: Option<String>,
    pub company: Option<String>,
    pub uom: Option<String>,
    pub purchase_price: Option<f64>,
    pub tax_percentage: Option<f64>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogItemRecord {
    /// Build row content from a canonical item. The record id is left
    /// unset; the repository supplies the item's uuid as the record key.
    pub fn from_item(item: &CatalogItem) -> Self {
        Self {
            id: None,
            provider_id: item.provider_id.clone(),
            category: item.category,
            name: item.name.clone(),
            price: item.price,
            status: item.status,
            images: item.images.clone(),
            description: item.description.clone(),
            duration: item.duration,
            service_types: item.service_types.clone(),
            other_service_name: item.other_service_name.clone(),
            sub_category: item.sub_category.clone(),
            stock: item.stock,
            sku: item.sku.clone(),
            company: item.company.clone(),
            uom: item.uom.clone(),
            purchase_price: item.purchase_price,
            tax_percentage: item.tax_percentage,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }

    /// Convert a stored row back to the canonical item, flattening the
    /// record id to its key string.
    pub fn into_item(self) -> CatalogItem {
        CatalogItem {
            id: self.id.map(|id| id.key().to_string()).unwrap_or_default(),
            provider_id: self.provider_id,
            category: self.category,
            name: self.name,
            price: self.price,
            status: self.status,
            images: self.images,
            description: self.description,
            duration: self.duration,
            service_types: self.service_types,
            other_service_name: self.other_service_name,
            sub_category: self.sub_category,
            stock: self.stock,
            sku: self.sku,
            company: self.company,
            uom: self.uom,
            purchase_price: self.purchase_price,
            tax_percentage: self.tax_percentage,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Coerced partial update, produced by the catalog service from the
/// string-typed [`shared::ItemUpdate`] payload. Applied as a shallow
/// merge: present fields win per-key, absent fields stay untouched.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub status: Option<ItemStatus>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub duration: Option<i64>,
    pub service_types: Option<Vec<String>>,
    pub other_service_name: Option<String>,
    pub sub_category: Option<String>,
    pub stock: Option<i64>,
    pub sku: Option<String>,
    pub company: Option<String>,
    pub uom: Option<String>,
    pub purchase_price: Option<f64>,
    pub tax_percentage: Option<f64>,
    pub updated_at: DateTime<Utc>,
}

impl ItemPatch {
    /// Merge this patch over an existing item in place.
    pub fn apply(&self, item: &mut CatalogItem) {
        if let Some(v) = &self.name {
            item.name = v.clone();
        }
        if let Some(v) = self.price {
            item.price = v;
        }
        if let Some(v) = self.status {
            item.status = v;
        }
        if let Some(v) = &self.description {
            item.description = Some(v.clone());
        }
        if let Some(v) = &self.images {
            item.images = v.clone();
        }
        if let Some(v) = self.duration {
            item.duration = Some(v);
        }
        if let Some(v) = &self.service_types {
            item.service_types = v.clone();
        }
        if let Some(v) = &self.other_service_name {
            item.other_service_name = Some(v.clone());
        }
        if let Some(v) = &self.sub_category {
            item.sub_category = Some(v.clone());
        }
        if let Some(v) = self.stock {
            item.stock = Some(v);
        }
        if let Some(v) = &self.sku {
            item.sku = Some(v.clone());
        }
        if let Some(v) = &self.company {
            item.company = Some(v.clone());
        }
        if let Some(v) = &self.uom {
            item.uom = Some(v.clone());
        }
        if let Some(v) = self.purchase_price {
            item.purchase_price = Some(v);
        }
        if let Some(v) = self.tax_percentage {
            item.tax_percentage = Some(v);
        }
        item.updated_at = self.updated_at;
    }
}
