//! Customer order model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Product;
use crate::types::{OrderId, OrderStatus, Price};

/// Customer contact details captured at checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// A single line of an order.
///
/// Carries a full product snapshot plus the unit price at order time, so
/// later catalog edits never change what the customer agreed to pay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product as it was when the order was placed.
    pub product: Product,
    pub quantity: u32,
    /// Selling price per unit at order time.
    pub unit_price: Price,
}

impl OrderItem {
    /// Snapshot a catalog product into an order line.
    #[must_use]
    pub fn new(product: Product, quantity: u32) -> Self {
        let unit_price = product.price;
        Self {
            product,
            quantity,
            unit_price,
        }
    }

    /// Price for the whole line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price * self.quantity
    }
}

/// A customer purchase record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
    /// Ordered lines, snapshotted at checkout.
    pub items: Vec<OrderItem>,
    /// Customer contact snapshot.
    pub customer: CustomerInfo,
    /// Current workflow status.
    pub status: OrderStatus,
    /// Grand total, computed once at creation and never recomputed.
    pub total: Price,
}

impl Order {
    /// Create a pending order from snapshotted lines.
    #[must_use]
    pub fn new(items: Vec<OrderItem>, customer: CustomerInfo) -> Self {
        let total = items.iter().map(OrderItem::line_total).sum();
        Self {
            id: OrderId::generate(),
            placed_at: Utc::now(),
            items,
            customer,
            status: OrderStatus::Pending,
            total,
        }
    }

    /// Number of articles across all lines.
    #[must_use]
    pub fn article_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}
