//! Catalog administration through the simulated-latency store.

use cbc_admin::services::ProductService;
use cbc_admin::views::{product_rows, Expansion};
use cbc_core::ProductRepository;
use cbc_integration_tests::{sample_draft, TestContext};
use cbc_storefront::services::CatalogService;

#[tokio::test]
async fn test_create_is_visible_on_the_storefront() {
    let ctx = TestContext::empty();
    let service = ProductService::new(ctx.admin.simulated_store());

    let (product, toast) = service
        .create(sample_draft("Routeur WiFi 6", 55_000, 7))
        .await
        .expect("create");

    assert_eq!(toast.title, "Produit ajouté");
    assert!(toast.description.contains("Routeur WiFi 6"));

    // The storefront reads the same store, without the simulated delay.
    let catalog = CatalogService::new(ctx.store.clone());
    let found = catalog.get(product.id).await.expect("get").expect("found");
    assert_eq!(found.name, "Routeur WiFi 6");
}

#[tokio::test]
async fn test_update_then_delete_through_the_simulated_store() {
    let ctx = TestContext::empty();
    let service = ProductService::new(ctx.admin.simulated_store());

    let (product, _) = service
        .create(sample_draft("Chargeur 65W", 15_000, 12))
        .await
        .expect("create");

    let (updated, toast) = service
        .update(product.id, sample_draft("Chargeur 65W USB-C", 17_000, 12))
        .await
        .expect("update")
        .expect("known id");
    assert_eq!(toast.title, "Produit mis à jour");
    assert_eq!(updated.name, "Chargeur 65W USB-C");
    assert_eq!(updated.id, product.id);

    let toast = service.delete(product.id).await.expect("delete");
    assert_eq!(toast.title, "Produit supprimé");
    assert!(ctx.store.product(product.id).await.expect("get").is_none());
}

#[tokio::test]
async fn test_low_stock_rows_flag_the_seeded_catalog() {
    let ctx = TestContext::new();
    let products = ctx.store.all_products().await.expect("catalog");
    let rows = product_rows(&products);

    assert_eq!(rows.len(), products.len());
    for (row, product) in rows.iter().zip(&products) {
        assert_eq!(row.low_stock, product.stock < 5);
    }
}

#[tokio::test]
async fn test_expansion_double_toggle_restores_the_view() {
    let ctx = TestContext::new();
    let service = ProductService::new(ctx.store.clone());
    let products = service.list().await.expect("list");
    let first = products.first().expect("seeded product").id;

    let mut expansion = Expansion::new();
    expansion.toggle(first);
    assert!(expansion.is_expanded(&first));

    expansion.toggle(first);
    expansion.toggle(first);
    assert!(expansion.is_expanded(&first));
}
