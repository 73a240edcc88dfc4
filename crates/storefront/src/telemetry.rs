//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with `EnvFilter`.
///
/// Defaults to info level for the boutique crates if `RUST_LOG` is not set.
/// Call once at application start; calling twice panics, so embedders that
/// install their own subscriber should skip this.
pub fn init() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cbc_storefront=info,cbc_admin=info,cbc_store=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
