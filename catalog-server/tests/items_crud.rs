//! Catalog item CRUD against an in-memory database.

mod common;

use catalog_server::AppError;
use shared::{ItemCategory, ItemCreate, ItemStatus, ItemUpdate, ProviderCreate, ProviderType};

use common::{create_workshop, product_payload, service_payload, setup};

#[tokio::test]
async fn test_create_and_fetch_service_item() {
    let ctx = setup().await;
    let workshop = create_workshop(&ctx).await;

    let mut payload = service_payload(&workshop.id, "Oil Change");
    payload.service_types = vec!["tuning".to_string(), "other".to_string()];
    payload.other_service_name = Some("Custom Wax".to_string());

    let created = ctx.catalog.create_item(payload, Vec::new()).await.unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.price, 25.0);
    assert_eq!(created.duration, Some(45));
    assert_eq!(created.status, ItemStatus::Active);

    let fetched = ctx.catalog.get_item(&created.id).await.unwrap();
    assert_eq!(fetched.name, "Oil Change");
    assert_eq!(fetched.service_types, vec!["tuning", "other"]);
    assert_eq!(fetched.other_service_name.as_deref(), Some("Custom Wax"));
}

#[tokio::test]
async fn test_product_numeric_coercion_and_defaults() {
    let ctx = setup().await;
    let workshop = create_workshop(&ctx).await;

    let mut payload = product_payload(&workshop.id, "Brake Pads");
    payload.purchase_price = Some("64.50".to_string());
    payload.tax_percentage = Some("18".to_string());

    let created = ctx.catalog.create_item(payload, Vec::new()).await.unwrap();
    assert_eq!(created.stock, Some(12));
    assert_eq!(created.purchase_price, Some(64.5));
    assert_eq!(created.tax_percentage, Some(18.0));

    // Products without an explicit stock start tracked at zero.
    let mut untracked = product_payload(&workshop.id, "Coolant");
    untracked.stock = None;
    let created = ctx
        .catalog
        .create_item(untracked, Vec::new())
        .await
        .unwrap();
    assert_eq!(created.stock, Some(0));
}

#[tokio::test]
async fn test_category_decides_field_group() {
    let ctx = setup().await;
    let workshop = create_workshop(&ctx).await;

    // Product fields ride along on a service payload and must be dropped.
    let mut payload = service_payload(&workshop.id, "Wheel Alignment");
    payload.stock = Some("5".to_string());
    payload.sku = Some("SKU-1".to_string());

    let created = ctx.catalog.create_item(payload, Vec::new()).await.unwrap();
    assert_eq!(created.category, ItemCategory::Service);
    assert!(created.stock.is_none());
    assert!(created.sku.is_none());
    assert_eq!(created.duration, Some(45));
}

#[tokio::test]
async fn test_create_validation_failures() {
    let ctx = setup().await;
    let workshop = create_workshop(&ctx).await;

    let missing_name = service_payload(&workshop.id, "   ");
    let err = ctx
        .catalog
        .create_item(missing_name, Vec::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let mut bad_price = service_payload(&workshop.id, "Oil Change");
    bad_price.price = "free".to_string();
    let err = ctx
        .catalog
        .create_item(bad_price, Vec::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let mut negative_stock = product_payload(&workshop.id, "Brake Pads");
    negative_stock.stock = Some("-3".to_string());
    let err = ctx
        .catalog
        .create_item(negative_stock, Vec::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let no_provider = ItemCreate {
        category: ItemCategory::Service,
        name: "Oil Change".to_string(),
        price: "25".to_string(),
        ..Default::default()
    };
    let err = ctx
        .catalog
        .create_item(no_provider, Vec::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_partial_update_leaves_other_fields_untouched() {
    let ctx = setup().await;
    let workshop = create_workshop(&ctx).await;
    let created = ctx
        .catalog
        .create_item(service_payload(&workshop.id, "Oil Change"), Vec::new())
        .await
        .unwrap();

    let patch = ItemUpdate {
        price: Some("30".to_string()),
        status: Some(ItemStatus::Inactive),
        ..Default::default()
    };
    let updated = ctx
        .catalog
        .update_item(&created.id, patch, Vec::new())
        .await
        .unwrap();

    assert_eq!(updated.price, 30.0);
    assert_eq!(updated.status, ItemStatus::Inactive);
    assert_eq!(updated.name, "Oil Change");
    assert_eq!(updated.duration, Some(45));
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn test_delete_then_fetch_is_not_found() {
    let ctx = setup().await;
    let workshop = create_workshop(&ctx).await;
    let created = ctx
        .catalog
        .create_item(service_payload(&workshop.id, "Oil Change"), Vec::new())
        .await
        .unwrap();

    ctx.catalog.delete_item(&created.id).await.unwrap();

    let err = ctx.catalog.get_item(&created.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = ctx.catalog.delete_item(&created.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let ctx = setup().await;

    let err = ctx
        .catalog
        .update_item(
            "no-such-item",
            ItemUpdate {
                price: Some("10".to_string()),
                ..Default::default()
            },
            Vec::new(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_image_count_bound_on_create_and_update() {
    let ctx = setup().await;
    let workshop = create_workshop(&ctx).await;

    // Four caller-supplied URIs are the cap.
    let mut payload = service_payload(&workshop.id, "Oil Change");
    payload.images = (0..4).map(|i| format!("/api/image/{i}.jpg")).collect();
    let created = ctx.catalog.create_item(payload, Vec::new()).await.unwrap();
    assert_eq!(created.images.len(), 4);

    let mut over = service_payload(&workshop.id, "Wheel Alignment");
    over.images = (0..5).map(|i| format!("/api/image/{i}.jpg")).collect();
    let err = ctx.catalog.create_item(over, Vec::new()).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // The update path enforces the same bound.
    let patch = ItemUpdate {
        images: Some((0..5).map(|i| format!("/api/image/{i}.jpg")).collect()),
        ..Default::default()
    };
    let err = ctx
        .catalog
        .update_item(&created.id, patch, Vec::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_provider_field_limits() {
    let ctx = setup().await;

    let err = ctx
        .catalog
        .create_provider(ProviderCreate {
            name: "City Auto Works".to_string(),
            provider_type: ProviderType::Workshop,
            phone: None,
            address: Some("x".repeat(501)),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = ctx
        .catalog
        .create_provider(ProviderCreate {
            name: "City Auto Works".to_string(),
            provider_type: ProviderType::Workshop,
            phone: Some("9".repeat(101)),
            address: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_list_requires_provider_id() {
    let ctx = setup().await;
    let err = ctx.catalog.list_items("  ").await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}
