//! Application state shared across back-office consumers.

use std::sync::Arc;

use cbc_store::{MemoryStore, Simulated};

use crate::config::AdminConfig;

/// Application state shared across the back office.
///
/// Cheaply cloneable via `Arc`. Holds the same [`MemoryStore`] the
/// storefront uses, so order and catalog changes are visible on both
/// sides immediately.
#[derive(Clone)]
pub struct AdminState {
    inner: Arc<AdminStateInner>,
}

struct AdminStateInner {
    config: AdminConfig,
    store: MemoryStore,
}

impl AdminState {
    /// Create a new back-office state over a shared store.
    #[must_use]
    pub fn new(config: AdminConfig, store: MemoryStore) -> Self {
        Self {
            inner: Arc::new(AdminStateInner { config, store }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the shared store.
    #[must_use]
    pub fn store(&self) -> &MemoryStore {
        &self.inner.store
    }

    /// Store handle that simulates save latency, for the catalog forms.
    #[must_use]
    pub fn simulated_store(&self) -> Simulated<MemoryStore> {
        Simulated::new(self.inner.store.clone(), self.inner.config.save_delay)
    }
}
