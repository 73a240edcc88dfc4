//! Rows for the products table.

use cbc_core::{Product, ProductId};

/// Stock level below which the table shows the low-stock badge.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// One row of the products table.
#[derive(Debug, Clone)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: u32,
    pub low_stock: bool,
    pub featured: bool,
}

/// Map catalog products to table rows.
#[must_use]
pub fn product_rows(products: &[Product]) -> Vec<ProductRow> {
    products
        .iter()
        .map(|product| ProductRow {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            stock: product.stock,
            low_stock: product.stock < LOW_STOCK_THRESHOLD,
            featured: product.featured,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cbc_core::{Price, ProductDraft};

    fn product(stock: u32) -> Product {
        ProductDraft {
            name: "Batterie externe".to_string(),
            description: String::new(),
            price: Price::fcfa(12_500),
            old_price: None,
            image: "https://example.com/batterie.jpg".to_string(),
            category: "Accessoires".to_string(),
            featured: true,
            stock,
        }
        .into_product()
    }

    #[test]
    fn test_low_stock_flag_is_strictly_below_threshold() {
        let products = vec![product(4), product(5)];
        let rows = product_rows(&products);

        assert!(rows.first().expect("row").low_stock);
        assert!(!rows.get(1).expect("row").low_stock);
    }

    #[test]
    fn test_row_formats_the_price() {
        let products = vec![product(10)];
        let row = product_rows(&products).remove(0);
        assert_eq!(row.price, "12 500 FCFA");
        assert!(row.featured);
    }
}
