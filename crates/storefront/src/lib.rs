//! CBC Boutique Storefront - Customer-facing shop logic.
//!
//! # Architecture
//!
//! - Catalog browsing and cart over the repository ports in `cbc-core`
//! - Checkout that snapshots prices into immutable orders
//! - The assistance chat widget: a scripted responder with a typing delay
//!
//! All state lives in the shared [`cbc_store::MemoryStore`] handed in via
//! [`state::AppState`]; nothing here owns global singletons.
//!
//! This crate only has access to read operations on the catalog and
//! testimonials plus order placement. Order workflow and product management
//! live in the `cbc-admin` crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod telemetry;

pub use config::StorefrontConfig;
pub use error::{AppError, Result};
pub use state::AppState;
