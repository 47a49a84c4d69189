use rust_decimal::Decimal;
use tally_catalog::StockShortfall;

use crate::customer::CustomerId;
use crate::models::OrderId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error(transparent)]
    InsufficientStock(#[from] StockShortfall),

    #[error("Discount must be between 0 and 100 percent, got {0}")]
    InvalidDiscount(Decimal),

    #[error("Order {0} total is too large to represent")]
    AmountOverflow(OrderId),

    #[error("Order {0} has already been processed")]
    AlreadyProcessed(OrderId),

    #[error("Order {order_id} belongs to customer {expected}, not {actual}")]
    CustomerMismatch {
        order_id: OrderId,
        expected: CustomerId,
        actual: CustomerId,
    },
}
