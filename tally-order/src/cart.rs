use rust_decimal::Decimal;
use std::collections::HashMap;
use tally_catalog::{ProductHandle, ProductId};
use tally_shared::Money;

/// One cart line: a product and how many of it
#[derive(Debug, Clone)]
pub struct CartItem {
    pub product: ProductHandle,
    pub quantity: u32,
}

impl CartItem {
    /// Line total at the product's current price; `None` on overflow
    pub fn line_total(&self) -> Option<Money> {
        self.product.line_total(self.quantity)
    }
}

/// Products a customer intends to buy, keyed by product id.
///
/// Every entry has a quantity above zero.
#[derive(Debug, Clone, Default)]
pub struct ShoppingCart {
    items: HashMap<ProductId, CartItem>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units; repeated adds of one product accumulate.
    ///
    /// An add that would push the line past `u32::MAX` is dropped and the
    /// line keeps its previous quantity.
    pub fn add_product(&mut self, product: &ProductHandle, quantity: u32) {
        if quantity == 0 {
            return;
        }

        let entry = self
            .items
            .entry(product.id())
            .or_insert_with(|| CartItem {
                product: product.clone(),
                quantity: 0,
            });
        let Some(accumulated) = entry.quantity.checked_add(quantity) else {
            tracing::warn!(
                product_id = product.id(),
                quantity = entry.quantity,
                added = quantity,
                "Cart quantity overflow, add ignored"
            );
            return;
        };
        entry.quantity = accumulated;

        tracing::debug!(product_id = product.id(), quantity = entry.quantity, "Cart updated");
    }

    /// Add a single unit
    pub fn add_one(&mut self, product: &ProductHandle) {
        self.add_product(product, 1);
    }

    pub fn remove_product(&mut self, product_id: ProductId) {
        if self.items.remove(&product_id).is_some() {
            tracing::debug!(product_id, "Removed from cart");
        }
    }

    /// Overwrite a line's quantity. Zero removes the line; unknown ids are ignored.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_product(product_id);
            return;
        }
        if let Some(item) = self.items.get_mut(&product_id) {
            item.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `price * quantity` at current prices.
    ///
    /// Saturates at `Decimal::MAX`; orders report overflow as an error instead.
    pub fn get_total_price(&self) -> Money {
        self.items.values().fold(Decimal::ZERO, |acc, item| {
            acc.saturating_add(item.line_total().unwrap_or(Decimal::MAX))
        })
    }

    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.values()
    }

    pub fn quantity_of(&self, product_id: ProductId) -> Option<u32> {
        self.items.get(&product_id).map(|item| item.quantity)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
