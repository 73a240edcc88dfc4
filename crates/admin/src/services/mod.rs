//! Back-office services.

pub mod orders;
pub mod products;
pub mod testimonials;

pub use orders::OrderService;
pub use products::ProductService;
pub use testimonials::TestimonialService;
