//! Custom Test Assertions
//!
//! Assertion helpers for claim types that give more meaningful failure
//! messages than bare `assert_eq!`.

use core_kernel::Money;
use domain_claims::{AuditAction, AuditEntry, Claim, ClaimStatus};
use rust_decimal::Decimal;

/// Asserts that a claim has the expected status and approval flags
///
/// # Panics
///
/// Panics with the claim id and actual values if anything differs
pub fn assert_claim_state(
    claim: &Claim,
    status: ClaimStatus,
    coordinator_approved: bool,
    academic_manager_approved: bool,
) {
    assert_eq!(
        claim.status(),
        status,
        "Claim {} has status '{}', expected '{}'",
        claim.id,
        claim.status(),
        status
    );
    assert_eq!(
        (claim.coordinator_approved(), claim.academic_manager_approved()),
        (coordinator_approved, academic_manager_approved),
        "Claim {} approval flags (coordinator, academic manager) differ",
        claim.id
    );
}

/// Asserts that a claim's total equals the sum of hours × rate over its items
pub fn assert_total_matches_items(claim: &Claim) {
    let expected: Decimal = claim
        .items()
        .iter()
        .map(|item| item.rate.amount() * Decimal::from(item.hours_worked))
        .sum();
    assert_eq!(
        claim.total_amount().amount(),
        expected,
        "Claim {} total {} does not match its items",
        claim.id,
        claim.total_amount()
    );
}

/// Asserts that two Money values are equal in amount and currency
pub fn assert_money_eq(actual: &Money, expected: &Money) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );
    assert_eq!(
        actual.amount(),
        expected.amount(),
        "Amount mismatch: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that every listed claim is in a pending state
pub fn assert_all_pending(claims: &[Claim]) {
    for claim in claims {
        assert!(
            claim.status().is_pending(),
            "Claim {} with status '{}' listed as pending",
            claim.id,
            claim.status()
        );
    }
}

/// Asserts the audit trail's actions, ignoring ids and timestamps
pub fn assert_audit_actions(trail: &[AuditEntry], expected: &[AuditAction]) {
    let actual: Vec<&AuditAction> = trail.iter().map(|entry| &entry.action).collect();
    let expected: Vec<&AuditAction> = expected.iter().collect();
    assert_eq!(actual, expected, "Audit trail differs");
}
