use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_catalog::{ProductHandle, ProductId};
use tally_shared::{checked_sum, percent_to_fraction, Money, Rate};

use crate::cart::ShoppingCart;
use crate::customer::{Customer, CustomerId};
use crate::error::OrderError;

pub type OrderId = u32;

/// Tax applied to every order unless overridden
pub fn default_tax_rate() -> Rate {
    Decimal::new(1, 1)
}

/// Order status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Proposed,
    Processed,
}

/// A product within an order, copied from the cart at construction
#[derive(Debug, Clone)]
pub struct OrderItem {
    pub product: ProductHandle,
    pub quantity: u32,
}

impl OrderItem {
    pub fn product_id(&self) -> ProductId {
        self.product.id()
    }

    /// Line total at the product's current price; `None` on overflow
    pub fn line_total(&self) -> Option<Money> {
        self.product.line_total(self.quantity)
    }
}

/// Breakdown produced by [`Order::compute_totals`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: Money,
    pub discount_amount: Money,
    pub taxed_amount: Money,
    pub total: Money,
}

/// A customer's purchase of a cart's contents
#[derive(Debug, Clone)]
pub struct Order {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub items: Vec<OrderItem>,
    pub total_price: Money,
    pub tax_rate: Rate,
    pub discount: Rate,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Snapshot `cart` into a new order for `customer`.
    ///
    /// Later cart edits do not reach the order; product prices and stock are
    /// still read live through the shared handles.
    pub fn new(order_id: OrderId, customer: &Customer, cart: &ShoppingCart) -> Self {
        let mut items: Vec<OrderItem> = cart
            .items()
            .map(|item| OrderItem {
                product: item.product.clone(),
                quantity: item.quantity,
            })
            .collect();
        items.sort_by_key(OrderItem::product_id);

        Self {
            order_id,
            customer_id: customer.customer_id,
            items,
            total_price: Decimal::ZERO,
            tax_rate: default_tax_rate(),
            discount: Decimal::ZERO,
            status: OrderStatus::Proposed,
            created_at: Utc::now(),
            processed_at: None,
        }
    }

    pub fn with_tax_rate(mut self, tax_rate: Rate) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    /// Set the discount as a percentage in `[0, 100]`
    pub fn set_discount(&mut self, discount_percent: Decimal) -> Result<(), OrderError> {
        if discount_percent < Decimal::ZERO || discount_percent > Decimal::ONE_HUNDRED {
            return Err(OrderError::InvalidDiscount(discount_percent));
        }
        self.discount = percent_to_fraction(discount_percent);
        Ok(())
    }

    pub fn subtotal(&self) -> Result<Money, OrderError> {
        checked_sum(self.items.iter().map(OrderItem::line_total))
            .ok_or(OrderError::AmountOverflow(self.order_id))
    }

    /// Price the order at current prices, discount and tax without storing it
    pub fn compute_totals(&self) -> Result<OrderTotals, OrderError> {
        let overflow = || OrderError::AmountOverflow(self.order_id);

        let subtotal = self.subtotal()?;
        let discount_amount = subtotal.checked_mul(self.discount).ok_or_else(overflow)?;
        let discounted = subtotal.checked_sub(discount_amount).ok_or_else(overflow)?;
        let taxed_amount = discounted.checked_mul(self.tax_rate).ok_or_else(overflow)?;
        let total = discounted.checked_add(taxed_amount).ok_or_else(overflow)?;

        Ok(OrderTotals {
            subtotal,
            discount_amount,
            taxed_amount,
            total,
        })
    }

    /// Recompute and store `total_price`. Leaves it unchanged on overflow.
    pub fn calculate_total(&mut self) -> Result<OrderTotals, OrderError> {
        let totals = self.compute_totals()?;
        self.total_price = totals.total;
        Ok(totals)
    }

    pub fn is_processed(&self) -> bool {
        self.status == OrderStatus::Processed
    }
}
