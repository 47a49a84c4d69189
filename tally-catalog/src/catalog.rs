use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::error::CatalogError;
use crate::product::{Product, ProductHandle, ProductId};

/// Owner of every product the store sells.
///
/// Hands out [`ProductHandle`]s; carts and orders never own products.
#[derive(Debug, Default)]
pub struct Catalog {
    products: HashMap<ProductId, ProductHandle>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
        }
    }

    /// Register a product and return a handle to it
    pub fn add_product(&mut self, product: Product) -> Result<ProductHandle, CatalogError> {
        if self.products.contains_key(&product.product_id) {
            return Err(CatalogError::DuplicateProduct(product.product_id));
        }
        if product.price < Decimal::ZERO {
            return Err(CatalogError::InvalidPrice {
                product_id: product.product_id,
                price: product.price,
            });
        }

        tracing::debug!(
            product_id = product.product_id,
            name = %product.name,
            stock = product.stock,
            "Product added to catalog"
        );

        let handle = ProductHandle::new(product);
        self.products.insert(handle.id(), handle.clone());
        Ok(handle)
    }

    pub fn get(&self, product_id: ProductId) -> Option<ProductHandle> {
        self.products.get(&product_id).cloned()
    }

    pub fn get_required(&self, product_id: ProductId) -> Result<ProductHandle, CatalogError> {
        self.get(product_id)
            .ok_or(CatalogError::NotFound(product_id))
    }

    /// Add units back to a product's stock, returning the new level
    pub fn restock(&self, product_id: ProductId, quantity: u32) -> Result<u32, CatalogError> {
        let handle = self.get_required(product_id)?;
        let stock = handle.restock(quantity);
        tracing::debug!(product_id, quantity, stock, "Product restocked");
        Ok(stock)
    }

    /// Products in `category`, ordered by id
    pub fn by_category(&self, category: &str) -> Vec<ProductHandle> {
        let mut found: Vec<ProductHandle> = self
            .products
            .values()
            .filter(|p| p.category() == category)
            .cloned()
            .collect();
        found.sort_by_key(|p| p.id());
        found
    }

    /// Products whose stock is at or below `threshold`, ordered by id
    pub fn low_stock(&self, threshold: u32) -> Vec<ProductHandle> {
        let mut found: Vec<ProductHandle> = self
            .products
            .values()
            .filter(|p| p.stock() <= threshold)
            .cloned()
            .collect();
        found.sort_by_key(|p| p.id());
        found
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .add_product(Product::new(1, "Laptop", Decimal::from(50000), 10, "Electronics"))
            .unwrap();
        catalog
            .add_product(Product::new(2, "Mouse", Decimal::from(1500), 3, "Accessories"))
            .unwrap();
        catalog
            .add_product(Product::new(3, "Keyboard", Decimal::from(500), 20, "Accessories"))
            .unwrap();
        catalog
    }

    #[test]
    fn test_add_and_get() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(2).unwrap().name(), "Mouse");
        assert!(catalog.get(99).is_none());
        assert_eq!(catalog.get_required(99).unwrap_err(), CatalogError::NotFound(99));
    }

    #[test]
    fn test_handles_from_catalog_share_state() {
        let catalog = sample_catalog();
        let handle = catalog.get(1).unwrap();
        handle.take_stock(4).unwrap();
        assert_eq!(catalog.get(1).unwrap().stock(), 6);
    }

    #[test]
    fn test_rejects_duplicate_and_negative_price() {
        let mut catalog = sample_catalog();

        let dup = catalog.add_product(Product::new(1, "Other", Decimal::ONE, 1, "X"));
        assert_eq!(dup.unwrap_err(), CatalogError::DuplicateProduct(1));

        let neg = catalog.add_product(Product::new(9, "Bad", Decimal::from(-5), 1, "X"));
        assert!(matches!(neg, Err(CatalogError::InvalidPrice { product_id: 9, .. })));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_restock() {
        let catalog = sample_catalog();
        assert_eq!(catalog.restock(2, 7).unwrap(), 10);
        assert!(catalog.restock(42, 1).is_err());
    }

    #[test]
    fn test_category_and_low_stock_queries() {
        let catalog = sample_catalog();

        let ids: Vec<ProductId> = catalog
            .by_category("Accessories")
            .iter()
            .map(|p| p.id())
            .collect();
        assert_eq!(ids, vec![2, 3]);

        let low: Vec<ProductId> = catalog.low_stock(5).iter().map(|p| p.id()).collect();
        assert_eq!(low, vec![2]);
    }
}
