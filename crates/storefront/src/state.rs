//! Application state shared across storefront consumers.

use std::sync::Arc;

use cbc_store::MemoryStore;

use crate::config::StorefrontConfig;

/// Application state shared across the storefront.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// shared store and configuration. Built once at application start; the
/// store's lifetime is the application's lifetime.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: MemoryStore,
}

impl AppState {
    /// Create a new application state over a shared store.
    #[must_use]
    pub fn new(config: StorefrontConfig, store: MemoryStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the shared store.
    #[must_use]
    pub fn store(&self) -> &MemoryStore {
        &self.inner.store
    }
}
