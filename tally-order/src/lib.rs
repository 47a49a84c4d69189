pub mod cart;
pub mod customer;
pub mod error;
pub mod models;
pub mod processing;

pub use cart::{CartItem, ShoppingCart};
pub use customer::{Customer, CustomerId};
pub use error::OrderError;
pub use models::{Order, OrderId, OrderItem, OrderStatus, OrderTotals};
