//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating claim data that respects
//! the domain's validation rules.

use chrono::NaiveDate;
use core_kernel::{Currency, LecturerId, Money};
use domain_claims::{ClaimItem, NewClaim, ReviewOutcome, ReviewerRole};
use proptest::prelude::*;

/// Strategy for hourly rates between R0.01 and R10 000
pub fn rate_strategy() -> impl Strategy<Value = Money> {
    (1i64..1_000_000i64).prop_map(|cents| Money::from_minor(cents, Currency::ZAR))
}

/// Strategy for hours worked (1 to 200)
pub fn hours_strategy() -> impl Strategy<Value = u32> {
    1u32..=200u32
}

/// Strategy for a valid claim item
pub fn claim_item_strategy() -> impl Strategy<Value = ClaimItem> {
    ("[A-Z][a-z]{3,12}", hours_strategy(), rate_strategy())
        .prop_map(|(description, hours, rate)| ClaimItem::new(description, hours, rate))
}

/// Strategy for the first day of a month in 2024 or 2025
pub fn month_strategy() -> impl Strategy<Value = NaiveDate> {
    (2024i32..=2025i32, 1u32..=12u32)
        .prop_map(|(year, month)| NaiveDate::from_ymd_opt(year, month, 1).unwrap())
}

/// Strategy for a valid submission with 1 to 8 items
pub fn new_claim_strategy() -> impl Strategy<Value = NewClaim> {
    (
        1u64..20u64,
        month_strategy(),
        proptest::collection::vec(claim_item_strategy(), 1..=8),
    )
        .prop_map(|(lecturer, month, items)| NewClaim {
            lecturer_id: LecturerId::new(lecturer),
            lecturer_name: format!("Lecturer {lecturer}"),
            month: Some(month),
            items,
        })
}

/// Strategy for reviewer roles
pub fn role_strategy() -> impl Strategy<Value = ReviewerRole> {
    prop_oneof![
        Just(ReviewerRole::Coordinator),
        Just(ReviewerRole::AcademicManager),
    ]
}

/// Strategy for review outcomes, weighted towards approve/reject
pub fn outcome_strategy() -> impl Strategy<Value = ReviewOutcome> {
    prop_oneof![
        4 => Just(ReviewOutcome::Approved),
        2 => Just(ReviewOutcome::Rejected),
        1 => Just(ReviewOutcome::Other("On Hold".to_string())),
        1 => Just(ReviewOutcome::Other("Pending Clarification".to_string())),
    ]
}

/// Strategy for a sequence of (role, outcome) review steps
pub fn review_steps_strategy() -> impl Strategy<Value = Vec<(ReviewerRole, ReviewOutcome)>> {
    proptest::collection::vec((role_strategy(), outcome_strategy()), 0..12)
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_claims_are_valid(claim in new_claim_strategy()) {
            prop_assert!(claim.check(Currency::ZAR).is_ok());
        }

        #[test]
        fn generated_rates_are_positive(rate in rate_strategy()) {
            prop_assert!(rate.is_positive());
        }
    }
}
