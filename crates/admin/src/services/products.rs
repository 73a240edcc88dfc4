//! Catalog administration: the product form's save and delete actions.

use tracing::instrument;

use cbc_core::{Product, ProductDraft, ProductId, ProductRepository};

use crate::error::Result;
use crate::notifications::Toast;

/// Product management for the back office.
///
/// Each action resolves to a French [`Toast`] the UI shows once the
/// (simulated) save completes.
pub struct ProductService<R> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a product service over a product repository.
    pub const fn new(repo: R) -> Self {
        Self { repo }
    }

    /// All products, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error if the data layer fails.
    pub async fn list(&self) -> Result<Vec<Product>> {
        Ok(self.repo.all_products().await?)
    }

    /// Add a new product to the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the data layer fails.
    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: ProductDraft) -> Result<(Product, Toast)> {
        let product = self.repo.create_product(draft).await?;
        tracing::info!(product_id = %product.id, name = %product.name, "Product created");

        let toast = Toast::new(
            "Produit ajouté",
            format!("{} a été ajouté à la boutique.", product.name),
        );
        Ok((product, toast))
    }

    /// Replace a product's editable fields.
    ///
    /// Returns `None` when the id is unknown, which the form treats as the
    /// product having been deleted under it.
    ///
    /// # Errors
    ///
    /// Returns an error if the data layer fails.
    #[instrument(skip(self, draft))]
    pub async fn update(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Option<(Product, Toast)>> {
        let Some(product) = self.repo.update_product(id, draft).await? else {
            tracing::warn!(product_id = %id, "Update for unknown product");
            return Ok(None);
        };
        tracing::info!(product_id = %product.id, name = %product.name, "Product updated");

        let toast = Toast::new(
            "Produit mis à jour",
            format!("{} a été mis à jour.", product.name),
        );
        Ok(Some((product, toast)))
    }

    /// Remove a product from the catalog. Unknown ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the data layer fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> Result<Toast> {
        self.repo.delete_product(id).await?;
        tracing::info!(product_id = %id, "Product deleted");

        Ok(Toast::new(
            "Produit supprimé",
            "Le produit a été retiré de la boutique.",
        ))
    }
}
