//! CBC Boutique Core - Shared types library.
//!
//! This crate provides common types used across all CBC Boutique components:
//! - `storefront` - Customer-facing shop logic (catalog, cart, chat widget)
//! - `admin` - Back-office logic (order workflow, product management)
//! - `store` - In-memory data layer implementing the repository ports
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage, no
//! clocks beyond timestamping. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, statuses and ratings
//! - [`models`] - Domain models (products, orders, testimonials)
//! - [`repo`] - Repository traits the data layer implements

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod repo;
pub mod types;

pub use models::*;
pub use repo::*;
pub use types::*;
