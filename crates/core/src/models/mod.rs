//! Domain models shared between the storefront and the back office.

pub mod order;
pub mod product;
pub mod testimonial;

pub use order::{CustomerInfo, Order, OrderItem};
pub use product::{Product, ProductDraft};
pub use testimonial::Testimonial;
