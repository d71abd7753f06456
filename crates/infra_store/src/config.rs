//! Store configuration

use core_kernel::Currency;

/// Configuration options for the in-memory claim store
///
/// # Example
///
/// ```rust
/// use core_kernel::Currency;
/// use infra_store::StoreConfig;
///
/// let config = StoreConfig::new()
///     .currency(Currency::USD)
///     .first_claim_id(3);
/// assert_eq!(config.first_claim_id, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Currency for claims submitted without items
    pub currency: Currency,
    /// First identifier handed out to a claim
    pub first_claim_id: u64,
    /// First identifier handed out to a document
    pub first_document_id: u64,
}

impl StoreConfig {
    /// Creates a configuration with the default currency and ids starting at 1
    pub fn new() -> Self {
        Self {
            currency: Currency::default(),
            first_claim_id: 1,
            first_document_id: 1,
        }
    }

    /// Sets the fallback currency
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the first claim id
    ///
    /// # Arguments
    ///
    /// * `id` - Value for the first claim (default: 1)
    pub fn first_claim_id(mut self, id: u64) -> Self {
        self.first_claim_id = id;
        self
    }

    /// Sets the first document id
    pub fn first_document_id(mut self, id: u64) -> Self {
        self.first_document_id = id;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::new()
            .currency(Currency::GBP)
            .first_claim_id(3)
            .first_document_id(10);

        assert_eq!(config.currency, Currency::GBP);
        assert_eq!(config.first_claim_id, 3);
        assert_eq!(config.first_document_id, 10);
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.currency, Currency::ZAR);
        assert_eq!(config.first_claim_id, 1);
        assert_eq!(config.first_document_id, 1);
    }
}
