//! Shared in-memory repository.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use cbc_core::{
    Order, OrderId, OrderRepository, OrderStatus, Product, ProductDraft, ProductId,
    ProductRepository, RepositoryError, Testimonial, TestimonialRepository,
};

use crate::seed;

/// Everything the shop persists, in one lock.
///
/// Mutations only happen in response to discrete user actions, so a single
/// `RwLock` is plenty; there is no contention to speak of.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Inner {
    products: Vec<Product>,
    orders: Vec<Order>,
    testimonials: Vec<Testimonial>,
}

/// The in-memory data layer behind all repository ports.
///
/// Cheaply cloneable via `Arc`; every clone sees the same data. Lifetime is
/// tied to the application: build one at startup and pass it to both the
/// storefront and the back office.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with the demo catalog and testimonials.
    #[must_use]
    pub fn with_seed_data() -> Self {
        let store = Self::new();
        {
            let mut inner = store
                .inner
                .try_write()
                .expect("fresh store has no other readers");
            inner.products = seed::products();
            inner.testimonials = seed::testimonials();
        }
        store
    }

    /// Serialize the whole store to schema-less JSON.
    ///
    /// The snapshot is an opaque blob; there is no schema versioning.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if serialization fails.
    pub async fn snapshot(&self) -> Result<serde_json::Value, RepositoryError> {
        let inner = self.inner.read().await;
        serde_json::to_value(&*inner).map_err(|e| RepositoryError::DataCorruption(e.to_string()))
    }

    /// Replace the store contents from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the snapshot cannot be
    /// decoded; the store is left unchanged in that case.
    pub async fn restore(&self, snapshot: serde_json::Value) -> Result<(), RepositoryError> {
        let decoded: Inner = serde_json::from_value(snapshot)
            .map_err(|e| RepositoryError::DataCorruption(e.to_string()))?;
        *self.inner.write().await = decoded;
        Ok(())
    }

    /// Add a testimonial.
    pub async fn insert_testimonial(&self, testimonial: Testimonial) {
        self.inner.write().await.testimonials.push(testimonial);
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn all_products(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.inner.read().await.products.clone())
    }

    async fn product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .inner
            .read()
            .await
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create_product(&self, draft: ProductDraft) -> Result<Product, RepositoryError> {
        let product = draft.into_product();
        tracing::info!(product_id = %product.id, name = %product.name, "Product created");
        self.inner.write().await.products.push(product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Option<Product>, RepositoryError> {
        let mut inner = self.inner.write().await;
        match inner.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.apply(draft);
                tracing::info!(product_id = %id, "Product updated");
                Ok(Some(product.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut inner = self.inner.write().await;
        let before = inner.products.len();
        inner.products.retain(|p| p.id != id);
        if inner.products.len() == before {
            tracing::warn!(product_id = %id, "Delete requested for unknown product; ignoring");
        } else {
            tracing::info!(product_id = %id, "Product deleted");
        }
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for MemoryStore {
    async fn orders(&self) -> Result<Vec<Order>, RepositoryError> {
        Ok(self.inner.read().await.orders.clone())
    }

    async fn order(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        Ok(self
            .inner
            .read()
            .await
            .orders
            .iter()
            .find(|o| o.id == id)
            .cloned())
    }

    async fn insert_order(&self, order: Order) -> Result<(), RepositoryError> {
        tracing::info!(order_id = %order.id, total = %order.total, "Order recorded");
        self.inner.write().await.orders.push(order);
        Ok(())
    }

    async fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<(), RepositoryError> {
        let mut inner = self.inner.write().await;
        match inner.orders.iter_mut().find(|o| o.id == id) {
            Some(order) => {
                tracing::info!(order_id = %id, from = %order.status, to = %status, "Order status changed");
                order.status = status;
            }
            None => {
                // The back office contract: unknown ids are ignored, not errors.
                tracing::warn!(order_id = %id, "Status change for unknown order; ignoring");
            }
        }
        Ok(())
    }
}

#[async_trait]
impl TestimonialRepository for MemoryStore {
    async fn testimonials(&self) -> Result<Vec<Testimonial>, RepositoryError> {
        Ok(self.inner.read().await.testimonials.clone())
    }
}
