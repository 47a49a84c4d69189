use anyhow::Context;
use rust_decimal::Decimal;
use tally_catalog::{Catalog, Product};
use tally_order::{Customer, Order, ShoppingCart};
use tally_payroll::{Developer, Manager, Payroll, SalaryComputable};
use tally_shared::{telemetry, Config};

fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!(
        tax_rate = %config.business_rules.tax_rate,
        discount = %config.business_rules.default_discount_percent,
        "Configuration loaded"
    );

    run_payroll();
    run_storefront(&config)?;
    Ok(())
}

fn run_payroll() {
    let manager = Manager::new("Ivan Ivanov", Decimal::from(50000), Decimal::from(15000));
    let developer = Developer::new(
        "Petr Petrov",
        Decimal::from(40000),
        Decimal::from(10),
        Decimal::from(500),
    );

    println!("Manager salary: {}", manager.calculate_salary());
    println!("Developer salary: {}", developer.calculate_salary());

    let mut payroll = Payroll::new();
    payroll.hire(manager);
    payroll.hire(developer);
    tracing::info!(members = payroll.len(), total = %payroll.total(), "Payroll computed");
}

fn run_storefront(config: &Config) -> anyhow::Result<()> {
    let mut catalog = Catalog::new();
    let laptop =
        catalog.add_product(Product::new(1, "Laptop", Decimal::from(50000), 10, "Electronics"))?;
    let mouse =
        catalog.add_product(Product::new(2, "Mouse", Decimal::from(1500), 50, "Accessories"))?;
    let pad =
        catalog.add_product(Product::new(3, "Mouse pad", Decimal::from(500), 100, "Accessories"))?;

    let mut customer = Customer::new(1, "Ivan Ivanov", "ivan@example.com");

    let mut cart = ShoppingCart::new();
    cart.add_product(&laptop, 1);
    cart.add_product(&mouse, 2);
    cart.add_one(&pad);
    println!("Cart total: {}", cart.get_total_price());

    let mut order = Order::new(1, &customer, &cart).with_tax_rate(config.business_rules.tax_rate);
    order.set_discount(config.business_rules.default_discount_percent)?;

    match order.process_order(&mut customer) {
        Ok(totals) => {
            println!("Subtotal: {}", totals.subtotal);
            println!("Discount: {}", totals.discount_amount);
            println!("Tax: {}", totals.taxed_amount);
            println!("Order total: {}", totals.total);
        }
        Err(e) => {
            tracing::error!("Order {} failed: {}", order.order_id, e);
            return Err(e.into());
        }
    }

    for product in catalog.low_stock(config.storefront.low_stock_threshold) {
        tracing::warn!(product_id = product.id(), stock = product.stock(), "Low stock");
    }
    println!(
        "Orders on file for {}: {}",
        customer.name,
        customer.order_history().len()
    );
    Ok(())
}
