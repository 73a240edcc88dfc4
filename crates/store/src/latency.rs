//! Fixed-delay repository decorator.
//!
//! The shop has no backend; saves "complete" after a hard-coded timer so
//! the interface feels like it is talking to a server. That timer lives
//! here, as a decorator over the repository ports, so production wiring
//! keeps the familiar pacing while tests use the bare store.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use cbc_core::{
    Order, OrderId, OrderRepository, OrderStatus, Product, ProductDraft, ProductId,
    ProductRepository, RepositoryError, Testimonial, TestimonialRepository,
};

/// Wraps a repository and sleeps a fixed delay before every operation.
///
/// No cancellation, retry or timeout handling: the delay is cosmetic.
#[derive(Debug, Clone)]
pub struct Simulated<R> {
    inner: R,
    delay: Duration,
}

impl<R> Simulated<R> {
    /// Decorate `inner` with a fixed per-operation delay.
    #[must_use]
    pub const fn new(inner: R, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Unwrap the decorated repository.
    pub fn into_inner(self) -> R {
        self.inner
    }

    async fn pause(&self) {
        sleep(self.delay).await;
    }
}

#[async_trait]
impl<R: ProductRepository> ProductRepository for Simulated<R> {
    async fn all_products(&self) -> Result<Vec<Product>, RepositoryError> {
        self.pause().await;
        self.inner.all_products().await
    }

    async fn product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        self.pause().await;
        self.inner.product(id).await
    }

    async fn create_product(&self, draft: ProductDraft) -> Result<Product, RepositoryError> {
        self.pause().await;
        self.inner.create_product(draft).await
    }

    async fn update_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Option<Product>, RepositoryError> {
        self.pause().await;
        self.inner.update_product(id, draft).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), RepositoryError> {
        self.pause().await;
        self.inner.delete_product(id).await
    }
}

#[async_trait]
impl<R: OrderRepository> OrderRepository for Simulated<R> {
    async fn orders(&self) -> Result<Vec<Order>, RepositoryError> {
        self.pause().await;
        self.inner.orders().await
    }

    async fn order(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        self.pause().await;
        self.inner.order(id).await
    }

    async fn insert_order(&self, order: Order) -> Result<(), RepositoryError> {
        self.pause().await;
        self.inner.insert_order(order).await
    }

    async fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<(), RepositoryError> {
        self.pause().await;
        self.inner.set_status(id, status).await
    }
}

#[async_trait]
impl<R: TestimonialRepository> TestimonialRepository for Simulated<R> {
    async fn testimonials(&self) -> Result<Vec<Testimonial>, RepositoryError> {
        self.pause().await;
        self.inner.testimonials().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use std::time::Instant;

    #[tokio::test]
    async fn test_simulated_delay_is_observed() {
        let repo = Simulated::new(MemoryStore::new(), Duration::from_millis(30));

        let started = Instant::now();
        let products = repo.all_products().await.expect("list");
        assert!(products.is_empty());
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_decorated_writes_reach_the_store() {
        let store = MemoryStore::new();
        let repo = Simulated::new(store.clone(), Duration::from_millis(1));

        repo.create_product(cbc_core::ProductDraft {
            name: "Webcam".to_string(),
            description: "1080p".to_string(),
            price: cbc_core::Price::fcfa(35_000),
            old_price: None,
            image: "https://example.com/webcam.jpg".to_string(),
            category: "Accessoires".to_string(),
            featured: false,
            stock: 10,
        })
        .await
        .expect("create");

        // Reading through the undecorated store sees the write immediately.
        assert_eq!(store.all_products().await.expect("list").len(), 1);
    }
}
