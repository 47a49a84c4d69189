pub mod app_config;
pub mod events;
pub mod money;
pub mod telemetry;

pub use app_config::{BusinessRules, Config, StorefrontConfig};
pub use events::{OrderProcessedEvent, StockDepletedEvent};
pub use money::{checked_sum, line_total, percent_to_fraction, Money, Rate};
