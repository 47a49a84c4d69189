use chrono::Utc;
use tally_shared::events::{to_log_line, OrderProcessedEvent, StockDepletedEvent};

use crate::customer::Customer;
use crate::error::OrderError;
use crate::models::{Order, OrderStatus, OrderTotals};

impl Order {
    /// Take every line out of stock, price the order and file it with the customer.
    ///
    /// Stock is checked and the totals are computed before any stock moves, so
    /// a failure leaves inventory, the order and the customer's history
    /// exactly as they were.
    pub fn process_order(&mut self, customer: &mut Customer) -> Result<OrderTotals, OrderError> {
        if self.status == OrderStatus::Processed {
            return Err(OrderError::AlreadyProcessed(self.order_id));
        }
        if customer.customer_id != self.customer_id {
            return Err(OrderError::CustomerMismatch {
                order_id: self.order_id,
                expected: self.customer_id,
                actual: customer.customer_id,
            });
        }

        let precheck = self
            .items
            .iter()
            .try_for_each(|item| item.product.check_stock(item.quantity))
            .map_err(OrderError::from)
            .and_then(|()| self.compute_totals());
        let totals = match precheck {
            Ok(totals) => totals,
            Err(err) => {
                tracing::warn!(order_id = self.order_id, error = %err, "Order rejected");
                return Err(err);
            }
        };

        for item in &self.items {
            let remaining = item.product.take_stock(item.quantity)?;
            if remaining == 0 {
                let event = StockDepletedEvent {
                    product_id: item.product.id(),
                    product_name: item.product.name(),
                    timestamp: Utc::now(),
                };
                tracing::info!(event = %to_log_line(&event), "Stock depleted");
            }
        }

        self.total_price = totals.total;
        self.status = OrderStatus::Processed;
        self.processed_at = Some(Utc::now());
        customer.add_order(self.clone());

        let event = OrderProcessedEvent {
            order_id: self.order_id,
            customer_id: customer.customer_id,
            line_count: self.items.len(),
            total_price: self.total_price,
            timestamp: Utc::now(),
        };
        tracing::info!(event = %to_log_line(&event), "Order processed");

        Ok(totals)
    }
}
