//! Testimonial listing for the back office.

use cbc_core::{Testimonial, TestimonialRepository};

use crate::error::Result;

/// Read-only testimonial queries.
pub struct TestimonialService<R> {
    repo: R,
}

impl<R: TestimonialRepository> TestimonialService<R> {
    /// Create a testimonial service over a testimonial repository.
    pub const fn new(repo: R) -> Self {
        Self { repo }
    }

    /// All testimonials, in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the data layer fails.
    pub async fn list(&self) -> Result<Vec<Testimonial>> {
        Ok(self.repo.testimonials().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cbc_store::MemoryStore;

    #[tokio::test]
    async fn test_seeded_store_has_testimonials() {
        let service = TestimonialService::new(MemoryStore::with_seed_data());
        let testimonials = service.list().await.expect("list");
        assert!(!testimonials.is_empty());
    }
}
