//! Dual-location storage semantics: residence on create, probe-based
//! by-id operations and the union listing.

mod common;

use catalog_server::AppError;
use catalog_server::db::repository::ItemLocation;
use shared::{ItemStatus, ItemUpdate};

use common::{create_individual, create_workshop, product_payload, service_payload, setup};

#[tokio::test]
async fn test_workshop_service_is_standalone() {
    let ctx = setup().await;
    let workshop = create_workshop(&ctx).await;

    let created = ctx
        .catalog
        .create_item(service_payload(&workshop.id, "Oil Change"), Vec::new())
        .await
        .unwrap();

    let location = ctx.catalog.items().locate(&created.id).await.unwrap();
    assert_eq!(location, Some(ItemLocation::Standalone));
}

#[tokio::test]
async fn test_individual_service_is_embedded() {
    let ctx = setup().await;
    let individual = create_individual(&ctx).await;

    let created = ctx
        .catalog
        .create_item(service_payload(&individual.id, "Home Tuning"), Vec::new())
        .await
        .unwrap();

    let location = ctx.catalog.items().locate(&created.id).await.unwrap();
    assert_eq!(
        location,
        Some(ItemLocation::Embedded {
            provider_id: individual.id.clone()
        })
    );

    // The embedded item is visible on the provider document itself.
    let provider = ctx.catalog.get_provider(&individual.id).await.unwrap();
    assert_eq!(provider.services.len(), 1);
    assert_eq!(provider.services[0].id, created.id);
}

#[tokio::test]
async fn test_individual_product_is_standalone() {
    let ctx = setup().await;
    let individual = create_individual(&ctx).await;

    let created = ctx
        .catalog
        .create_item(product_payload(&individual.id, "Brake Pads"), Vec::new())
        .await
        .unwrap();

    let location = ctx.catalog.items().locate(&created.id).await.unwrap();
    assert_eq!(location, Some(ItemLocation::Standalone));
}

#[tokio::test]
async fn test_listing_unions_both_locations() {
    let ctx = setup().await;
    let individual = create_individual(&ctx).await;

    let product_a = ctx
        .catalog
        .create_item(product_payload(&individual.id, "Brake Pads"), Vec::new())
        .await
        .unwrap();
    let product_b = ctx
        .catalog
        .create_item(product_payload(&individual.id, "Coolant"), Vec::new())
        .await
        .unwrap();
    let service_a = ctx
        .catalog
        .create_item(service_payload(&individual.id, "Home Tuning"), Vec::new())
        .await
        .unwrap();
    let service_b = ctx
        .catalog
        .create_item(service_payload(&individual.id, "Pickup Wash"), Vec::new())
        .await
        .unwrap();

    let items = ctx.catalog.list_items(&individual.id).await.unwrap();
    let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();

    // Standalone rows first, newest creation first; then the embedded
    // list in document order.
    assert_eq!(
        ids,
        vec![
            product_b.id.as_str(),
            product_a.id.as_str(),
            service_a.id.as_str(),
            service_b.id.as_str(),
        ]
    );
}

#[tokio::test]
async fn test_listing_ignores_other_providers() {
    let ctx = setup().await;
    let workshop = create_workshop(&ctx).await;
    let individual = create_individual(&ctx).await;

    ctx.catalog
        .create_item(service_payload(&workshop.id, "Oil Change"), Vec::new())
        .await
        .unwrap();
    ctx.catalog
        .create_item(service_payload(&individual.id, "Home Tuning"), Vec::new())
        .await
        .unwrap();

    let items = ctx.catalog.list_items(&workshop.id).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Oil Change");
}

#[tokio::test]
async fn test_update_reaches_embedded_item() {
    let ctx = setup().await;
    let individual = create_individual(&ctx).await;

    let created = ctx
        .catalog
        .create_item(service_payload(&individual.id, "Home Tuning"), Vec::new())
        .await
        .unwrap();

    let patch = ItemUpdate {
        status: Some(ItemStatus::Inactive),
        price: Some("40".to_string()),
        ..Default::default()
    };
    let updated = ctx
        .catalog
        .update_item(&created.id, patch, Vec::new())
        .await
        .unwrap();
    assert_eq!(updated.status, ItemStatus::Inactive);
    assert_eq!(updated.price, 40.0);

    // The change is visible through every read path.
    let fetched = ctx.catalog.get_item(&created.id).await.unwrap();
    assert_eq!(fetched.status, ItemStatus::Inactive);

    let provider = ctx.catalog.get_provider(&individual.id).await.unwrap();
    assert_eq!(provider.services[0].status, ItemStatus::Inactive);
    assert_eq!(provider.services[0].price, 40.0);
}

#[tokio::test]
async fn test_delete_reaches_embedded_item() {
    let ctx = setup().await;
    let individual = create_individual(&ctx).await;

    let keep = ctx
        .catalog
        .create_item(service_payload(&individual.id, "Home Tuning"), Vec::new())
        .await
        .unwrap();
    let doomed = ctx
        .catalog
        .create_item(service_payload(&individual.id, "Pickup Wash"), Vec::new())
        .await
        .unwrap();

    ctx.catalog.delete_item(&doomed.id).await.unwrap();

    let err = ctx.catalog.get_item(&doomed.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // Siblings in the embedded list survive.
    let provider = ctx.catalog.get_provider(&individual.id).await.unwrap();
    assert_eq!(provider.services.len(), 1);
    assert_eq!(provider.services[0].id, keep.id);
}

#[tokio::test]
async fn test_missing_provider_falls_back_to_standalone() {
    let ctx = setup().await;

    // No provider document exists for this id; the item still lands in
    // the standalone table rather than failing.
    let created = ctx
        .catalog
        .create_item(service_payload("ghost-provider", "Oil Change"), Vec::new())
        .await
        .unwrap();

    let location = ctx.catalog.items().locate(&created.id).await.unwrap();
    assert_eq!(location, Some(ItemLocation::Standalone));

    let items = ctx.catalog.list_items("ghost-provider").await.unwrap();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn test_delete_unknown_id_with_embedded_items() {
    let ctx = setup().await;
    let individual = create_individual(&ctx).await;

    // An embedded list exists, but nothing in it carries this id; the
    // miss must survive the provider-array scan.
    let kept = ctx
        .catalog
        .create_item(service_payload(&individual.id, "Home Tuning"), Vec::new())
        .await
        .unwrap();

    let err = ctx.catalog.delete_item("no-such-item").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // The scan is read-only on a miss.
    let provider = ctx.catalog.get_provider(&individual.id).await.unwrap();
    assert_eq!(provider.services.len(), 1);
    assert_eq!(provider.services[0].id, kept.id);
}

#[tokio::test]
async fn test_locate_unknown_id_is_none() {
    let ctx = setup().await;
    let location = ctx.catalog.items().locate("no-such-item").await.unwrap();
    assert!(location.is_none());
}
