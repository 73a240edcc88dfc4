//! View models for the back-office tables.
//!
//! Pure mappings from the stored collections to the rows the tables
//! render; no storage access and no async in here.

pub mod expansion;
pub mod orders;
pub mod products;
pub mod testimonials;

pub use expansion::Expansion;
pub use orders::{order_rows, status_label, OrderDetails, OrderLineRow, OrderRow};
pub use products::{product_rows, ProductRow, LOW_STOCK_THRESHOLD};
pub use testimonials::{testimonial_rows, TestimonialRow};
