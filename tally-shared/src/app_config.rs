use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub business_rules: BusinessRules,
    #[serde(default)]
    pub storefront: StorefrontConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,
    #[serde(default)]
    pub default_discount_percent: Decimal,
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            default_discount_percent: Decimal::ZERO,
        }
    }
}

fn default_tax_rate() -> Decimal { Decimal::new(1, 1) }

#[derive(Debug, Deserialize, Clone)]
pub struct StorefrontConfig {
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

fn default_low_stock_threshold() -> u32 { 5 }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, never checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `TALLY_BUSINESS_RULES__TAX_RATE=0.2`
            .add_source(
                config::Environment::with_prefix("TALLY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_source() {
        let cfg: Config = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.business_rules.tax_rate, Decimal::new(1, 1));
        assert_eq!(cfg.business_rules.default_discount_percent, Decimal::ZERO);
        assert_eq!(cfg.storefront.low_stock_threshold, 5);
    }

    #[test]
    fn test_overrides_from_toml() {
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                    [business_rules]
                    tax_rate = "0.2"
                    default_discount_percent = "15"

                    [storefront]
                    low_stock_threshold = 2
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.business_rules.tax_rate, Decimal::new(2, 1));
        assert_eq!(cfg.business_rules.default_discount_percent, Decimal::from(15));
        assert_eq!(cfg.storefront.low_stock_threshold, 2);
    }

    #[test]
    fn test_load_reads_prefixed_env() {
        env::set_var("TALLY_BUSINESS_RULES__TAX_RATE", "0.2");
        let loaded = Config::load();
        env::remove_var("TALLY_BUSINESS_RULES__TAX_RATE");

        let cfg = loaded.unwrap();
        assert_eq!(cfg.business_rules.tax_rate, Decimal::new(2, 1));
        assert_eq!(cfg.storefront.low_stock_threshold, 5);
    }
}
