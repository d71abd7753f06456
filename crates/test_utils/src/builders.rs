//! Test Data Builders
//!
//! Builder patterns for constructing claim submissions with sensible
//! defaults. Tests set only the fields they care about.

use chrono::{NaiveDate, Utc};
use core_kernel::{ClaimId, Currency, LecturerId, Money};
use domain_claims::{Claim, ClaimItem, NewClaim};

use crate::fixtures::{IdFixtures, ItemFixtures, MonthFixtures};

/// Builder for a lecturer's claim submission
pub struct NewClaimBuilder {
    lecturer_id: LecturerId,
    lecturer_name: String,
    month: Option<NaiveDate>,
    items: Vec<ClaimItem>,
}

impl Default for NewClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewClaimBuilder {
    /// Creates a builder for a March claim worth R600
    pub fn new() -> Self {
        Self {
            lecturer_id: IdFixtures::lecturer(),
            lecturer_name: "Thandi Mokoena".to_string(),
            month: Some(MonthFixtures::march()),
            items: ItemFixtures::standard_pair(),
        }
    }

    pub fn with_lecturer(mut self, id: LecturerId, name: impl Into<String>) -> Self {
        self.lecturer_id = id;
        self.lecturer_name = name.into();
        self
    }

    pub fn with_lecturer_name(mut self, name: impl Into<String>) -> Self {
        self.lecturer_name = name.into();
        self
    }

    pub fn with_month(mut self, month: NaiveDate) -> Self {
        self.month = Some(month);
        self
    }

    /// Leaves the month for the store to default
    pub fn without_month(mut self) -> Self {
        self.month = None;
        self
    }

    /// Replaces all items
    pub fn with_items(mut self, items: Vec<ClaimItem>) -> Self {
        self.items = items;
        self
    }

    /// Appends an item
    pub fn add_item(mut self, description: impl Into<String>, hours: u32, rate: Money) -> Self {
        self.items.push(ClaimItem::new(description, hours, rate));
        self
    }

    pub fn without_items(mut self) -> Self {
        self.items.clear();
        self
    }

    pub fn build(self) -> NewClaim {
        NewClaim {
            lecturer_id: self.lecturer_id,
            lecturer_name: self.lecturer_name,
            month: self.month,
            items: self.items,
        }
    }

    /// Builds a submitted claim directly, bypassing any store
    ///
    /// # Panics
    ///
    /// Panics if the items mix currencies
    pub fn submitted(self, id: ClaimId) -> Claim {
        Claim::submitted(id, self.build(), Currency::ZAR, Utc::now())
            .expect("builder items must share one currency")
    }
}
