#![allow(dead_code)]

use std::sync::Arc;

use tempfile::TempDir;

use catalog_server::db::DbService;
use catalog_server::services::{CatalogService, LocalImageStore};
use shared::{ItemCategory, ItemCreate, Provider, ProviderCreate, ProviderType};

/// In-memory database plus a throwaway image directory. The tempdir is
/// kept alive for the duration of the test.
pub struct TestContext {
    pub catalog: CatalogService,
    pub _images_dir: TempDir,
}

pub async fn setup() -> TestContext {
    let db = DbService::open_in_memory().await.unwrap();
    let images_dir = tempfile::tempdir().unwrap();
    let image_store = Arc::new(LocalImageStore::new(
        images_dir.path().to_path_buf(),
        5 * 1024 * 1024,
    ));
    TestContext {
        catalog: CatalogService::new(db.db, image_store),
        _images_dir: images_dir,
    }
}

pub async fn create_workshop(ctx: &TestContext) -> Provider {
    ctx.catalog
        .create_provider(ProviderCreate {
            name: "City Auto Works".to_string(),
            provider_type: ProviderType::Workshop,
            phone: Some("0123456789".to_string()),
            address: None,
        })
        .await
        .unwrap()
}

pub async fn create_individual(ctx: &TestContext) -> Provider {
    ctx.catalog
        .create_provider(ProviderCreate {
            name: "Ravi Mobile Mechanic".to_string(),
            provider_type: ProviderType::IndividualServiceProvider,
            phone: None,
            address: None,
        })
        .await
        .unwrap()
}

pub fn service_payload(provider_id: &str, name: &str) -> ItemCreate {
    ItemCreate {
        provider_id: provider_id.to_string(),
        category: ItemCategory::Service,
        name: name.to_string(),
        price: "25".to_string(),
        duration: Some("45".to_string()),
        service_types: vec!["repair".to_string()],
        ..Default::default()
    }
}

pub fn product_payload(provider_id: &str, name: &str) -> ItemCreate {
    ItemCreate {
        provider_id: provider_id.to_string(),
        category: ItemCategory::Product,
        name: name.to_string(),
        price: "80".to_string(),
        stock: Some("12".to_string()),
        uom: Some("piece".to_string()),
        sub_category: Some("spare_parts".to_string()),
        ..Default::default()
    }
}
