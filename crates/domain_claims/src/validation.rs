//! Field validators shared by the claim submission types

use std::borrow::Cow;

use core_kernel::Money;
use validator::ValidationError;

/// Rejects empty or whitespace-only strings
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::Borrowed("must not be blank"));
        return Err(error);
    }
    Ok(())
}

/// Rejects zero and negative amounts
pub fn positive_money(value: &Money) -> Result<(), ValidationError> {
    if !value.is_positive() {
        let mut error = ValidationError::new("not_positive");
        error.message = Some(Cow::Owned(format!("must be greater than zero, got {value}")));
        return Err(error);
    }
    Ok(())
}

/// Returns the comment only when it carries text
pub fn meaningful_comment(comment: Option<&str>) -> Option<&str> {
    comment.filter(|c| !c.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Marking").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_positive_money() {
        assert!(positive_money(&Money::new(dec!(0.01), Currency::ZAR)).is_ok());
        assert!(positive_money(&Money::zero(Currency::ZAR)).is_err());
        assert!(positive_money(&Money::new(dec!(-5), Currency::ZAR)).is_err());
    }

    #[test]
    fn test_meaningful_comment() {
        assert_eq!(meaningful_comment(Some("ok")), Some("ok"));
        assert_eq!(meaningful_comment(Some(" \t")), None);
        assert_eq!(meaningful_comment(None), None);
    }
}
