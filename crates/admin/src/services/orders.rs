//! Order workflow and dashboard aggregates.

use tracing::instrument;

use cbc_core::{Order, OrderId, OrderRepository, OrderStatus, Price};

use crate::error::Result;

/// Order management for the back office.
pub struct OrderService<R> {
    orders: R,
}

impl<R: OrderRepository> OrderService<R> {
    /// Create an order service over an order repository.
    pub const fn new(orders: R) -> Self {
        Self { orders }
    }

    /// All orders, most recent last.
    ///
    /// # Errors
    ///
    /// Returns an error if the data layer fails.
    pub async fn list(&self) -> Result<Vec<Order>> {
        Ok(self.orders.orders().await?)
    }

    /// One order by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the data layer fails.
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>> {
        Ok(self.orders.order(id).await?)
    }

    /// Move an order to a new status.
    ///
    /// Any status may follow any other; the back office lets an
    /// administrator correct mistakes by moving orders backwards, even out
    /// of `Delivered` or `Cancelled`. An unknown id changes nothing and
    /// reports success; the caller sees the truth on the next `list`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data layer fails.
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<()> {
        self.orders.set_status(id, status).await?;
        tracing::info!(order_id = %id, status = %status, "Order status updated");
        Ok(())
    }

    /// Revenue across all orders that were not cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if the data layer fails.
    pub async fn total_revenue(&self) -> Result<Price> {
        let orders = self.orders.orders().await?;
        Ok(orders
            .iter()
            .filter(|order| order.status != OrderStatus::Cancelled)
            .map(|order| order.total)
            .sum())
    }

    /// Number of orders still awaiting treatment.
    ///
    /// # Errors
    ///
    /// Returns an error if the data layer fails.
    pub async fn pending_count(&self) -> Result<usize> {
        let orders = self.orders.orders().await?;
        Ok(orders
            .iter()
            .filter(|order| order.status == OrderStatus::Pending)
            .count())
    }
}
