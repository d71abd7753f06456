//! Application configuration

use serde::Deserialize;

use core_kernel::{CoreError, Currency};
use infra_store::StoreConfig;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level or `EnvFilter` directive
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Currency code for claims submitted without items
    pub currency: String,
    /// First claim id handed out by the store
    pub first_claim_id: u64,
    /// First document id handed out by the store
    pub first_document_id: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_json: false,
            currency: Currency::default().code().to_string(),
            first_claim_id: 1,
            first_document_id: 1,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `CMCS_`-prefixed environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(config::Environment::with_prefix("CMCS").try_parsing(true))
    }

    /// Loads configuration from any `config` source, filling gaps with defaults
    pub fn from_source<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    /// Builds the store configuration
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Money` for an unknown currency code and
    /// `CoreError::Configuration` for a zero starting id
    pub fn store_config(&self) -> Result<StoreConfig, CoreError> {
        let currency: Currency = self.currency.parse()?;

        if self.first_claim_id == 0 || self.first_document_id == 0 {
            return Err(CoreError::configuration("identifiers must start at 1 or above"));
        }

        Ok(StoreConfig::new()
            .currency(currency)
            .first_claim_id(self.first_claim_id)
            .first_document_id(self.first_document_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> AppConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_source(
            config::Environment::with_prefix("CMCS")
                .try_parsing(true)
                .source(Some(env)),
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(from_pairs(&[]), AppConfig::default());
    }

    #[test]
    fn test_reads_prefixed_variables() {
        let config = from_pairs(&[
            ("CMCS_LOG_LEVEL", "debug"),
            ("CMCS_LOG_JSON", "true"),
            ("CMCS_CURRENCY", "usd"),
            ("CMCS_FIRST_CLAIM_ID", "3"),
        ]);

        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
        assert_eq!(config.first_claim_id, 3);
        assert_eq!(config.first_document_id, 1);

        let store = config.store_config().unwrap();
        assert_eq!(store.currency, Currency::USD);
        assert_eq!(store.first_claim_id, 3);
    }

    #[test]
    fn test_unknown_currency() {
        let config = AppConfig {
            currency: "XYZ".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(config.store_config(), Err(CoreError::Money(_))));
    }

    #[test]
    fn test_zero_first_id() {
        let config = AppConfig {
            first_claim_id: 0,
            ..AppConfig::default()
        };
        assert!(matches!(config.store_config(), Err(CoreError::Configuration(_))));
    }
}
