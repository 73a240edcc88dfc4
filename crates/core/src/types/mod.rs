//! Core types for CBC Boutique.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod rating;
pub mod status;

pub use id::*;
pub use money::{CurrencyCode, Price};
pub use rating::{Rating, RatingError};
pub use status::*;
