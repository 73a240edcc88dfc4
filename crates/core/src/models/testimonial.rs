//! Customer testimonial model.

use serde::{Deserialize, Serialize};

use crate::types::{Rating, TestimonialId};

/// A customer review shown on the site and in the back office.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    /// Unique testimonial ID.
    pub id: TestimonialId,
    /// Customer display name.
    pub name: String,
    /// Customer country.
    pub country: String,
    /// Star rating out of five.
    pub rating: Rating,
    /// Free-form comment.
    pub comment: String,
}
