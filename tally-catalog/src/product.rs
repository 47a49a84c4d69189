use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use tally_shared::money::{line_total, Money};

use crate::error::{CatalogError, StockShortfall};

pub type ProductId = u32;

/// Core product structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub price: Money,
    pub stock: u32,
    pub category: String,
}

impl Product {
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        price: Money,
        stock: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            price,
            stock,
            category: category.into(),
        }
    }

    /// `None` when `price * quantity` overflows
    pub fn line_total(&self, quantity: u32) -> Option<Money> {
        line_total(self.price, quantity)
    }

    pub fn has_stock(&self, quantity: u32) -> bool {
        self.stock >= quantity
    }
}

/// Shared handle to a catalog product.
///
/// Carts and orders hold clones of the handle, so they always see the
/// product's live price and stock. Only the catalog and order processing
/// change stock.
#[derive(Debug, Clone)]
pub struct ProductHandle(Rc<RefCell<Product>>);

impl ProductHandle {
    pub fn new(product: Product) -> Self {
        Self(Rc::new(RefCell::new(product)))
    }

    pub fn id(&self) -> ProductId {
        self.0.borrow().product_id
    }

    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    pub fn price(&self) -> Money {
        self.0.borrow().price
    }

    pub fn stock(&self) -> u32 {
        self.0.borrow().stock
    }

    pub fn category(&self) -> String {
        self.0.borrow().category.clone()
    }

    /// Copy of the product as it is right now
    pub fn snapshot(&self) -> Product {
        self.0.borrow().clone()
    }

    pub fn line_total(&self, quantity: u32) -> Option<Money> {
        self.0.borrow().line_total(quantity)
    }

    pub fn has_stock(&self, quantity: u32) -> bool {
        self.0.borrow().has_stock(quantity)
    }

    /// `Ok` when at least `quantity` units are in stock
    pub fn check_stock(&self, quantity: u32) -> Result<(), StockShortfall> {
        let product = self.0.borrow();
        if product.has_stock(quantity) {
            return Ok(());
        }
        Err(StockShortfall {
            product_id: product.product_id,
            name: product.name.clone(),
            requested: quantity,
            available: product.stock,
        })
    }

    pub fn set_price(&self, price: Money) -> Result<(), CatalogError> {
        if price < Decimal::ZERO {
            return Err(CatalogError::InvalidPrice {
                product_id: self.id(),
                price,
            });
        }
        self.0.borrow_mut().price = price;
        Ok(())
    }

    /// Remove `quantity` units from stock.
    ///
    /// Leaves stock untouched when fewer than `quantity` units are available.
    pub fn take_stock(&self, quantity: u32) -> Result<u32, StockShortfall> {
        self.check_stock(quantity)?;
        let mut product = self.0.borrow_mut();
        product.stock -= quantity;
        Ok(product.stock)
    }

    pub fn restock(&self, quantity: u32) -> u32 {
        let mut product = self.0.borrow_mut();
        product.stock = product.stock.saturating_add(quantity);
        product.stock
    }

    /// Whether both handles point at the same catalog entry
    pub fn same_product(&self, other: &ProductHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
