//! Repository traits the data layer implements.
//!
//! The storefront and back office talk to storage only through these ports,
//! so tests can swap the production data layer (which simulates network
//! latency) for a plain in-memory one.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Order, Product, ProductDraft, Testimonial};
use crate::types::{OrderId, OrderStatus, ProductId};

/// Errors a storage backend can surface.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Backend could not be reached or refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Stored data could not be decoded.
    #[error("stored data is corrupt: {0}")]
    DataCorruption(String),
}

/// Read and write access to the product catalog.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, in insertion order.
    async fn all_products(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Look up a single product.
    async fn product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    /// Add a product to the catalog.
    async fn create_product(&self, draft: ProductDraft) -> Result<Product, RepositoryError>;

    /// Replace a product's editable fields.
    ///
    /// Returns the updated product, or `None` when the ID is unknown.
    async fn update_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Option<Product>, RepositoryError>;

    /// Remove a product. Removing an unknown ID is a no-op.
    async fn delete_product(&self, id: ProductId) -> Result<(), RepositoryError>;
}

/// Read and write access to customer orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// All orders, most recent last.
    async fn orders(&self) -> Result<Vec<Order>, RepositoryError>;

    /// Look up a single order.
    async fn order(&self, id: OrderId) -> Result<Option<Order>, RepositoryError>;

    /// Record a newly placed order.
    async fn insert_order(&self, order: Order) -> Result<(), RepositoryError>;

    /// Set an order's status in place.
    ///
    /// Any status may follow any other; no transition table is enforced.
    /// An unknown ID is a silent no-op: callers observe changes by
    /// re-fetching, never through a failure signal.
    async fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<(), RepositoryError>;
}

/// Read access to customer testimonials.
#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    /// All testimonials, in display order.
    async fn testimonials(&self) -> Result<Vec<Testimonial>, RepositoryError>;
}
