use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct OrderProcessedEvent {
    pub order_id: u32,
    pub customer_id: u32,
    pub line_count: usize,
    pub total_price: Decimal,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct StockDepletedEvent {
    pub product_id: u32,
    pub product_name: String,
    pub timestamp: DateTime<Utc>,
}

/// Serialize an event for the log stream.
///
/// Falls back to the `Debug` form if serialization fails.
pub fn to_log_line<E>(event: &E) -> String
where
    E: serde::Serialize + std::fmt::Debug,
{
    serde_json::to_string(event).unwrap_or_else(|_| format!("{:?}", event))
}
