//! Environment-driven settings for the demo binary.

use anyhow::{Context, bail};

use flowershop_observability::LogFormat;

pub const SHOP_NAME_VAR: &str = "FLOWERSHOP_NAME";
pub const LOW_STOCK_THRESHOLD_VAR: &str = "FLOWERSHOP_LOW_STOCK_THRESHOLD";
pub const LOG_FORMAT_VAR: &str = "FLOWERSHOP_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub shop_name: String,
    pub low_stock_threshold: u32,
    pub log_format: LogFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            shop_name: "Florists".to_string(),
            low_stock_threshold: 1,
            log_format: LogFormat::Json,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup; unset variables
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(name) = lookup(SHOP_NAME_VAR) {
            if name.trim().is_empty() {
                bail!("{SHOP_NAME_VAR} cannot be empty");
            }
            config.shop_name = name;
        }

        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_VAR) {
            config.low_stock_threshold = raw
                .trim()
                .parse()
                .with_context(|| format!("{LOW_STOCK_THRESHOLD_VAR} must be a non-negative integer, got {raw:?}"))?;
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            config.log_format = match raw.trim().to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                _ => bail!("{LOG_FORMAT_VAR} must be \"json\" or \"pretty\", got {raw:?}"),
            };
        }

        Ok(config)
    }
}
