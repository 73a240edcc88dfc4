//! Storefront services.

pub mod catalog;
pub mod chat;
pub mod checkout;

pub use catalog::CatalogService;
pub use chat::{ChatService, Responder};
pub use checkout::{CheckoutError, CheckoutService};
