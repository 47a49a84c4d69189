pub mod catalog;
pub mod error;
pub mod product;

pub use catalog::Catalog;
pub use error::{CatalogError, StockShortfall};
pub use product::{Product, ProductHandle, ProductId};
