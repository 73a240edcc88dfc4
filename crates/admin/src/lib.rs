//! CBC Boutique Admin - Back-office logic.
//!
//! # Architecture
//!
//! - Order workflow: list orders, move them through their lifecycle, and
//!   compute the dashboard aggregates
//! - Catalog administration: create, update and delete products, each
//!   operation acknowledged with a notification toast
//! - View models: pure mappings from the stored collections to the rows
//!   the back-office tables render
//!
//! Shares the [`cbc_store::MemoryStore`] with the storefront via
//! [`state::AdminState`]. Writes go through the simulated-latency layer in
//! production wiring; tests use the bare store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod notifications;
pub mod services;
pub mod state;
pub mod views;

pub use config::AdminConfig;
pub use error::{AdminError, Result};
pub use state::AdminState;
