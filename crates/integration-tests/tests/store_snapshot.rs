//! Snapshot/restore round-trips over the shared store.

use cbc_admin::services::OrderService;
use cbc_core::{OrderStatus, ProductRepository};
use cbc_integration_tests::{sample_customer, TestContext};
use cbc_storefront::models::Cart;
use cbc_storefront::services::CheckoutService;

#[tokio::test]
async fn test_snapshot_round_trips_orders_and_catalog() {
    let ctx = TestContext::new();

    let products = ctx.store.all_products().await.expect("catalog");
    let mut cart = Cart::new();
    cart.add(products.first().expect("product").clone(), 1);

    let checkout = CheckoutService::new(ctx.store.clone());
    let order = checkout
        .place_order(&cart, sample_customer())
        .await
        .expect("checkout");

    let workflow = OrderService::new(ctx.store.clone());
    workflow
        .set_status(order.id, OrderStatus::Shipped)
        .await
        .expect("set");

    let snapshot = ctx.store.snapshot().await.expect("snapshot");

    // A fresh, empty store restored from the snapshot sees the same world.
    let restored = TestContext::empty();
    restored.store.restore(snapshot).await.expect("restore");

    let catalog = restored.store.all_products().await.expect("catalog");
    assert_eq!(catalog.len(), products.len());

    let reloaded = OrderService::new(restored.store.clone())
        .get(order.id)
        .await
        .expect("get")
        .expect("found");
    assert_eq!(reloaded.status, OrderStatus::Shipped);
    assert_eq!(reloaded.total, order.total);
}

#[tokio::test]
async fn test_restore_rejects_garbage_and_keeps_the_store() {
    let ctx = TestContext::new();
    let before = ctx.store.all_products().await.expect("catalog").len();

    let garbage = serde_json::json!({"products": "not a list"});
    assert!(ctx.store.restore(garbage).await.is_err());

    let after = ctx.store.all_products().await.expect("catalog").len();
    assert_eq!(before, after);
}
