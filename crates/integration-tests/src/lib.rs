//! Integration tests for CBC Boutique.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cbc-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `order_workflow` - Checkout through the back-office status lifecycle
//! - `chatbot` - Assistance widget end to end
//! - `product_admin` - Catalog administration through the simulated store
//! - `store_snapshot` - Snapshot/restore round-trips
//!
//! The harness wires the storefront and back office over one shared
//! [`MemoryStore`], the way the applications share it, with all simulated
//! delays shortened so the suite stays fast.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::Duration;

use cbc_admin::{AdminConfig, AdminState};
use cbc_core::{CustomerInfo, Price, ProductDraft};
use cbc_store::MemoryStore;
use cbc_storefront::{AppState, StorefrontConfig};

/// Both applications over one seeded store, with millisecond delays.
pub struct TestContext {
    pub store: MemoryStore,
    pub storefront: AppState,
    pub admin: AdminState,
}

impl TestContext {
    /// Seeded context: demo catalog and testimonials, no orders.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(MemoryStore::with_seed_data())
    }

    /// Context over an empty store.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_store(MemoryStore::new())
    }

    fn with_store(store: MemoryStore) -> Self {
        let storefront_config = StorefrontConfig {
            typing_delay: Duration::from_millis(1),
            ..StorefrontConfig::default()
        };
        let admin_config = AdminConfig {
            save_delay: Duration::from_millis(1),
        };

        Self {
            storefront: AppState::new(storefront_config, store.clone()),
            admin: AdminState::new(admin_config, store.clone()),
            store,
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A checkout-ready customer snapshot.
#[must_use]
pub fn sample_customer() -> CustomerInfo {
    CustomerInfo {
        name: "Ayélé T.".to_string(),
        email: "ayele@example.com".to_string(),
        phone: "+228 90 12 34 56".to_string(),
        address: "Nyékonakpoè, Lomé".to_string(),
    }
}

/// A product draft for catalog tests.
#[must_use]
pub fn sample_draft(name: &str, price_fcfa: i64, stock: u32) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        description: "Produit de test".to_string(),
        price: Price::fcfa(price_fcfa),
        old_price: None,
        image: "https://images.cbc-boutique.tg/test.jpg".to_string(),
        category: "Accessoires".to_string(),
        featured: false,
        stock,
    }
}
