//! Claim line items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{Money, MoneyError};
use crate::validation::{not_blank, positive_money};

/// One block of work on a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ClaimItem {
    /// Task or work description
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    /// Number of hours worked
    #[validate(range(min = 1, message = "hours worked must be at least 1"))]
    pub hours_worked: u32,
    /// Hourly rate
    #[validate(custom(function = "positive_money"))]
    pub rate: Money,
}

impl ClaimItem {
    pub fn new(description: impl Into<String>, hours_worked: u32, rate: Money) -> Self {
        Self {
            description: description.into(),
            hours_worked,
            rate,
        }
    }

    /// Amount owed for this item: `hours_worked × rate`
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the product does not fit a `Decimal`
    pub fn total(&self) -> Result<Money, MoneyError> {
        self.rate.multiply(Decimal::from(self.hours_worked))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_returns_hours_times_rate() {
        let item = ClaimItem::new("Lecturing", 5, Money::new(dec!(100), Currency::ZAR));
        assert_eq!(item.total().unwrap(), Money::new(dec!(500), Currency::ZAR));
    }

    #[test]
    fn test_total_keeps_rate_currency() {
        let item = ClaimItem::new("Marking", 2, Money::new(dec!(12.50), Currency::GBP));
        let total = item.total().unwrap();
        assert_eq!(total.currency(), Currency::GBP);
        assert_eq!(total.amount(), dec!(25.00));
    }

    #[test]
    fn test_total_overflow() {
        let item = ClaimItem::new("Lecturing", 2, Money::new(Decimal::MAX, Currency::ZAR));
        assert_eq!(item.total(), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_validation_rejects_blank_description() {
        let item = ClaimItem::new("  ", 1, Money::new(dec!(100), Currency::ZAR));
        let errors = item.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
    }

    #[test]
    fn test_validation_rejects_zero_hours_and_rate() {
        let item = ClaimItem::new("Tutoring", 0, Money::zero(Currency::ZAR));
        let errors = item.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("hours_worked"));
        assert!(fields.contains_key("rate"));
    }
}
