//! Rows for the testimonials table.

use cbc_core::{Rating, Testimonial, TestimonialId};

/// One row of the testimonials table.
#[derive(Debug, Clone)]
pub struct TestimonialRow {
    pub id: TestimonialId,
    pub name: String,
    pub country: String,
    /// Star count rendered as "4/5".
    pub stars: String,
    pub comment: String,
}

/// Map testimonials to table rows.
#[must_use]
pub fn testimonial_rows(testimonials: &[Testimonial]) -> Vec<TestimonialRow> {
    testimonials
        .iter()
        .map(|testimonial| TestimonialRow {
            id: testimonial.id,
            name: testimonial.name.clone(),
            country: testimonial.country.clone(),
            stars: format!("{}/{}", testimonial.rating.stars(), Rating::MAX_STARS),
            comment: testimonial.comment.clone(),
        })
        .collect()
}
