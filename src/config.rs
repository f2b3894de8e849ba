use std::fs;
use std::path::Path;

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{PlannerError, Result};

/// storage key the saved-plans document lives under
pub const DEFAULT_STORAGE_KEY: &str = "quickEMIPlans";

/// how summary totals are derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TotalsMethod {
    /// down payment + monthly payment * term, ignoring the close-out adjustment
    #[default]
    Theoretical,
    /// down payment + sum of the scheduled payments
    ScheduleSum,
}

/// planner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub storage_key: String,
    /// reported balances smaller than this are shown as zero
    pub balance_tolerance: Money,
    pub currency_symbol: String,
    pub totals_method: TotalsMethod,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            balance_tolerance: Money::from_decimal(dec!(0.01)),
            currency_symbol: "₹".to_string(),
            totals_method: TotalsMethod::Theoretical,
        }
    }
}

impl PlannerConfig {
    /// parse from json, missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PlannerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// load from a json file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn with_totals_method(mut self, method: TotalsMethod) -> Self {
        self.totals_method = method;
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_storage_key(&self.storage_key)?;

        if self.balance_tolerance.is_negative() {
            return Err(PlannerError::InvalidConfiguration {
                message: format!("balance tolerance must not be negative, got {}", self.balance_tolerance),
            });
        }

        Ok(())
    }
}

/// keys double as file names for the file store
pub(crate) fn validate_storage_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(PlannerError::InvalidConfiguration {
            message: "storage key must not be empty".to_string(),
        });
    }

    if key.contains(['/', '\\']) || key == "." || key == ".." {
        return Err(PlannerError::InvalidConfiguration {
            message: format!("storage key must not be a path: {key:?}"),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.storage_key, "quickEMIPlans");
        assert_eq!(config.balance_tolerance, Money::CENT);
        assert_eq!(config.totals_method, TotalsMethod::Theoretical);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PlannerConfig::from_json_str(r#"{"currency_symbol": "Rs."}"#).unwrap();
        assert_eq!(config.currency_symbol, "Rs.");
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_totals_method_from_json() {
        let config = PlannerConfig::from_json_str(r#"{"totals_method": "ScheduleSum"}"#).unwrap();
        assert_eq!(config.totals_method, TotalsMethod::ScheduleSum);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = PlannerConfig::from_json_str(r#"{"storage_key": "../plans"}"#).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidConfiguration { .. }));

        let err = PlannerConfig::from_json_str(r#"{"balance_tolerance": "-1"}"#).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidConfiguration { .. }));

        let err = PlannerConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, PlannerError::Serialization(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"storage_key": "bikePlans"}"#).unwrap();

        let config = PlannerConfig::load(file.path()).unwrap();
        assert_eq!(config.storage_key, "bikePlans");
    }
}
