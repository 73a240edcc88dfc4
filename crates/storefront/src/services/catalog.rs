//! Catalog browsing over the product repository port.

use cbc_core::{Product, ProductId, ProductRepository};

use crate::error::Result;

/// Read-only catalog queries for the shop pages.
pub struct CatalogService<R> {
    repo: R,
}

impl<R: ProductRepository> CatalogService<R> {
    /// Create a catalog service over a product repository.
    pub const fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Every product, for the shop page.
    ///
    /// # Errors
    ///
    /// Returns an error if the data layer fails.
    pub async fn all(&self) -> Result<Vec<Product>> {
        Ok(self.repo.all_products().await?)
    }

    /// Products highlighted on the home page.
    ///
    /// # Errors
    ///
    /// Returns an error if the data layer fails.
    pub async fn featured(&self) -> Result<Vec<Product>> {
        let mut products = self.repo.all_products().await?;
        products.retain(|p| p.featured);
        Ok(products)
    }

    /// Products in one category, matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the data layer fails.
    pub async fn by_category(&self, category: &str) -> Result<Vec<Product>> {
        let wanted = category.to_lowercase();
        let mut products = self.repo.all_products().await?;
        products.retain(|p| p.category.to_lowercase() == wanted);
        Ok(products)
    }

    /// One product, for the detail page.
    ///
    /// # Errors
    ///
    /// Returns an error if the data layer fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>> {
        Ok(self.repo.product(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cbc_store::MemoryStore;

    #[tokio::test]
    async fn test_featured_filters_the_catalog() {
        let catalog = CatalogService::new(MemoryStore::with_seed_data());

        let all = catalog.all().await.expect("all");
        let featured = catalog.featured().await.expect("featured");

        assert!(featured.len() < all.len());
        assert!(featured.iter().all(|p| p.featured));
    }

    #[tokio::test]
    async fn test_by_category_is_case_insensitive() {
        let catalog = CatalogService::new(MemoryStore::with_seed_data());

        let exact = catalog.by_category("Ordinateurs").await.expect("query");
        let shouted = catalog.by_category("ORDINATEURS").await.expect("query");

        assert!(!exact.is_empty());
        assert_eq!(exact.len(), shouted.len());
    }

    #[tokio::test]
    async fn test_get_unknown_product_is_none() {
        let catalog = CatalogService::new(MemoryStore::new());
        let found = catalog.get(ProductId::generate()).await.expect("get");
        assert!(found.is_none());
    }
}
