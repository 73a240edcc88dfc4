//! Checkout: turn a cart into an immutable order.

use thiserror::Error;
use tracing::instrument;

use cbc_core::{CustomerInfo, Order, OrderItem, OrderRepository, RepositoryError};

use crate::models::cart::Cart;

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// Data layer failed to record the order.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Places orders through the order repository port.
pub struct CheckoutService<R> {
    orders: R,
}

impl<R: OrderRepository> CheckoutService<R> {
    /// Create a checkout service over an order repository.
    pub const fn new(orders: R) -> Self {
        Self { orders }
    }

    /// Place an order from the cart contents.
    ///
    /// Unit prices and the grand total are snapshotted here, once; later
    /// catalog edits never touch the recorded order. The caller clears
    /// the cart after a successful checkout.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` for an empty cart, or a
    /// repository error if recording fails.
    #[instrument(skip(self, cart, customer))]
    pub async fn place_order(
        &self,
        cart: &Cart,
        customer: CustomerInfo,
    ) -> Result<Order, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let items = cart
            .lines()
            .iter()
            .map(|line| OrderItem::new(line.product.clone(), line.quantity))
            .collect();

        let order = Order::new(items, customer);
        self.orders.insert_order(order.clone()).await?;
        tracing::info!(order_id = %order.id, total = %order.total, "Order placed");

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cbc_core::{OrderStatus, Price, ProductDraft};
    use cbc_store::MemoryStore;

    fn customer() -> CustomerInfo {
        CustomerInfo {
            name: "Sena D.".to_string(),
            email: "sena@example.com".to_string(),
            phone: "+228 92 00 00 00".to_string(),
            address: "Agoè, Lomé".to_string(),
        }
    }

    fn cart_with(price: i64, quantity: u32) -> Cart {
        let mut cart = Cart::new();
        cart.add(
            ProductDraft {
                name: "Onduleur 1200VA".to_string(),
                description: String::new(),
                price: Price::fcfa(price),
                old_price: None,
                image: "https://example.com/ups.jpg".to_string(),
                category: "Accessoires".to_string(),
                featured: false,
                stock: 8,
            }
            .into_product(),
            quantity,
        );
        cart
    }

    #[tokio::test]
    async fn test_place_order_records_a_pending_order() {
        let store = MemoryStore::new();
        let checkout = CheckoutService::new(store.clone());

        let order = checkout
            .place_order(&cart_with(65_000, 2), customer())
            .await
            .expect("place");

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, Price::fcfa(130_000));
        assert_eq!(store.orders().await.expect("orders").len(), 1);
    }

    #[tokio::test]
    async fn test_empty_cart_is_rejected() {
        let checkout = CheckoutService::new(MemoryStore::new());
        let result = checkout.place_order(&Cart::new(), customer()).await;
        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
    }
}
