use crate::order_money::BillingPolicy;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Desk configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | TAX1_RATE | 0.08 | first tax rate |
/// | TAX2_RATE | 0.02 | second tax rate |
/// | SERVICE_FEE | 2.46 | flat fee per non-empty ledger |
/// | NOTIFICATION_DURATION_MS | 2000 | toast duration hint |
/// | DEFAULT_GUEST_NAME | Guest 1 | guest seeded at startup |
/// | LOG_LEVEL | info | tracing filter |
/// | LOG_DIR | (unset) | daily log files, when the directory exists |
/// | ENVIRONMENT | development | development / production |
///
/// Unparseable or negative values fall back to the default with a warning.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub tax1_rate: Decimal,
    pub tax2_rate: Decimal,
    pub service_fee: Decimal,
    pub notification_duration_ms: u64,
    pub default_guest_name: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | production
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        let policy = BillingPolicy::default();
        Self {
            tax1_rate: policy.tax1_rate,
            tax2_rate: policy.tax2_rate,
            service_fee: policy.service_fee,
            notification_duration_ms: 2000,
            default_guest_name: "Guest 1".into(),
            log_level: "info".into(),
            log_dir: None,
            environment: "development".into(),
        }
    }
}

impl Config {
    /// Load from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup; missing keys use defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            tax1_rate: non_negative("TAX1_RATE", text("TAX1_RATE"), defaults.tax1_rate),
            tax2_rate: non_negative("TAX2_RATE", text("TAX2_RATE"), defaults.tax2_rate),
            service_fee: non_negative("SERVICE_FEE", text("SERVICE_FEE"), defaults.service_fee),
            notification_duration_ms: parse_or(
                "NOTIFICATION_DURATION_MS",
                text("NOTIFICATION_DURATION_MS"),
                defaults.notification_duration_ms,
            ),
            default_guest_name: text("DEFAULT_GUEST_NAME")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.default_guest_name),
            log_level: text("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: text("LOG_DIR"),
            environment: text("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// Tax and fee settings
    pub fn billing_policy(&self) -> BillingPolicy {
        BillingPolicy {
            tax1_rate: self.tax1_rate,
            tax2_rate: self.tax2_rate,
            service_fee: self.service_fee,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, default = %default, "Invalid config value, using default");
            default
        }),
    }
}

fn non_negative(key: &str, raw: Option<String>, default: Decimal) -> Decimal {
    let value = parse_or(key, raw, default);
    if value.is_sign_negative() && !value.is_zero() {
        tracing::warn!(key, value = %value, default = %default, "Negative config value, using default");
        return default;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.billing_policy(), BillingPolicy::default());
        assert!(config.is_development());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("TAX1_RATE", "0.21"),
            ("SERVICE_FEE", "0"),
            ("NOTIFICATION_DURATION_MS", "3500"),
            ("DEFAULT_GUEST_NAME", "  Table 4 "),
            ("LOG_DIR", "/tmp/logs"),
            ("ENVIRONMENT", "production"),
        ]));
        assert_eq!(config.tax1_rate, Decimal::new(21, 2));
        assert_eq!(config.tax2_rate, Decimal::new(2, 2));
        assert_eq!(config.service_fee, Decimal::ZERO);
        assert_eq!(config.notification_duration_ms, 3500);
        assert_eq!(config.default_guest_name, "Table 4");
        assert_eq!(config.log_dir.as_deref(), Some("/tmp/logs"));
        assert!(config.is_production());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("TAX1_RATE", "eight percent"),
            ("TAX2_RATE", "-0.02"),
            ("NOTIFICATION_DURATION_MS", "-1"),
            ("LOG_DIR", "   "),
        ]));
        assert_eq!(config.tax1_rate, Decimal::new(8, 2));
        assert_eq!(config.tax2_rate, Decimal::new(2, 2));
        assert_eq!(config.notification_duration_ms, 2000);
        assert_eq!(config.log_dir, None);
    }
}
