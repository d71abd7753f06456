//! Pre-built Test Fixtures
//!
//! Ready-to-use values for claims tests. They are fixed so that expected
//! totals can be written down by hand.

use chrono::NaiveDate;
use core_kernel::{Currency, LecturerId, Money};
use domain_claims::ClaimItem;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard hourly rate
    pub fn rand_100() -> Money {
        Money::new(dec!(100.00), Currency::ZAR)
    }

    /// Tutoring rate
    pub fn rand_50() -> Money {
        Money::new(dec!(50.00), Currency::ZAR)
    }

    pub fn rand_zero() -> Money {
        Money::zero(Currency::ZAR)
    }

    /// A EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }
}

/// Fixture for claim line items
pub struct ItemFixtures;

impl ItemFixtures {
    /// 5 hours at R100
    pub fn lecturing() -> ClaimItem {
        ClaimItem::new("Lecturing PROG6212", 5, MoneyFixtures::rand_100())
    }

    /// 2 hours at R50
    pub fn marking() -> ClaimItem {
        ClaimItem::new("Marking assignments", 2, MoneyFixtures::rand_50())
    }

    /// The two items above, totalling R600
    pub fn standard_pair() -> Vec<ClaimItem> {
        vec![Self::lecturing(), Self::marking()]
    }
}

/// Fixture for claim months
pub struct MonthFixtures;

impl MonthFixtures {
    pub fn january() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    pub fn february() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    }

    pub fn march() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }
}

/// Fixture for identifiers
pub struct IdFixtures;

impl IdFixtures {
    pub fn lecturer() -> LecturerId {
        LecturerId::new(101)
    }

    pub fn other_lecturer() -> LecturerId {
        LecturerId::new(202)
    }
}

/// Fixture for actor names
pub struct ActorFixtures;

impl ActorFixtures {
    pub const LECTURER: &'static str = "lecturer-101";
    pub const COORDINATOR: &'static str = "coordinator-1";
    pub const ACADEMIC_MANAGER: &'static str = "academic-manager-1";
}
