use serde::{Deserialize, Serialize};
use tally_shared::Money;

use crate::models::Order;

pub type CustomerId = u32;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub name: String,
    pub email: String,
    #[serde(skip)]
    order_history: Vec<Order>,
}

impl Customer {
    pub fn new(customer_id: CustomerId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            customer_id,
            name: name.into(),
            email: email.into(),
            order_history: Vec::new(),
        }
    }

    /// Append to the history. No dedup.
    pub fn add_order(&mut self, order: Order) {
        self.order_history.push(order);
    }

    pub fn order_history(&self) -> &[Order] {
        &self.order_history
    }

    /// Sum of `total_price` over every order in the history
    pub fn lifetime_spend(&self) -> Money {
        self.order_history.iter().map(|o| o.total_price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::ShoppingCart;
    use rust_decimal::Decimal;

    #[test]
    fn test_add_order_appends_without_checks() {
        let mut alice = Customer::new(1, "Alice", "alice@example.com");
        let bob = Customer::new(2, "Bob", "bob@example.com");

        let mut order = Order::new(5, &bob, &ShoppingCart::new());
        order.total_price = Decimal::from(120);

        alice.add_order(order.clone());
        alice.add_order(order);

        assert_eq!(alice.order_history().len(), 2);
        assert_eq!(alice.lifetime_spend(), Decimal::from(240));
    }
}
