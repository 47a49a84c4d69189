use rust_decimal::Decimal;

use crate::product::ProductId;

/// Requested more units than a product has in stock
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Insufficient stock for '{name}' ({product_id}): requested {requested}, available {available}")]
pub struct StockShortfall {
    pub product_id: ProductId,
    pub name: String,
    pub requested: u32,
    pub available: u32,
}

/// Catalog-related errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Product already in catalog: {0}")]
    DuplicateProduct(ProductId),

    #[error("Invalid price {price} for product {product_id}")]
    InvalidPrice {
        product_id: ProductId,
        price: Decimal,
    },
}
