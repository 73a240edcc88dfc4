//! Catalog product model.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A product in the shop catalog.
///
/// Mutated only through the back-office product operations; the storefront
/// treats products as read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Current selling price.
    pub price: Price,
    /// Previous price, shown struck through when discounted.
    pub old_price: Option<Price>,
    /// Image URL.
    pub image: String,
    /// Category label (e.g., "Ordinateurs", "Smartphones").
    pub category: String,
    /// Highlighted on the home page.
    pub featured: bool,
    /// Units in stock.
    pub stock: u32,
}

impl Product {
    /// Overwrite every editable field from a draft, keeping the ID.
    pub fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.price = draft.price;
        self.old_price = draft.old_price;
        self.image = draft.image;
        self.category = draft.category;
        self.featured = draft.featured;
        self.stock = draft.stock;
    }
}

/// Product fields as edited in the back-office form, before an ID exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub old_price: Option<Price>,
    pub image: String,
    pub category: String,
    pub featured: bool,
    pub stock: u32,
}

impl ProductDraft {
    /// Materialize the draft as a new product with a fresh ID.
    #[must_use]
    pub fn into_product(self) -> Product {
        Product {
            id: ProductId::generate(),
            name: self.name,
            description: self.description,
            price: self.price,
            old_price: self.old_price,
            image: self.image,
            category: self.category,
            featured: self.featured,
            stock: self.stock,
        }
    }
}

impl From<Product> for ProductDraft {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            description: product.description,
            price: product.price,
            old_price: product.old_price,
            image: product.image,
            category: product.category,
            featured: product.featured,
            stock: product.stock,
        }
    }
}
