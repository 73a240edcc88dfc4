//! CBC Boutique Store - In-memory data layer.
//!
//! All shop data lives in process memory, with an opaque JSON snapshot as
//! the only persistence format. The [`MemoryStore`] is constructed at
//! application start and handed to every consumer; the [`Simulated`]
//! decorator adds the fake network latency the UI shows during product
//! saves.
//!
//! # Modules
//!
//! - [`memory`] - [`MemoryStore`], the shared in-memory repository
//! - [`latency`] - [`Simulated`], a fixed-delay repository decorator
//! - [`seed`] - Demo catalog and testimonials

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod latency;
pub mod memory;
pub mod seed;

pub use latency::Simulated;
pub use memory::MemoryStore;
