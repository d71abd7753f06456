//! Claim aggregate

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{ClaimId, Currency, LecturerId, Money, MoneyError};
use crate::document::Document;
use crate::error::ClaimError;
use crate::item::ClaimItem;
use crate::review::{Approvals, ClaimStatus, ReviewComments, ReviewOutcome, ReviewState, ReviewerRole};
use crate::validation::not_blank;

/// A claim as submitted by a lecturer, before the store assigns an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewClaim {
    pub lecturer_id: LecturerId,
    #[validate(custom(function = "not_blank"))]
    pub lecturer_name: String,
    /// Month the work was done in; defaults to the current month
    #[serde(default)]
    pub month: Option<NaiveDate>,
    #[validate(length(min = 1, message = "Please add at least one claim item."), nested)]
    pub items: Vec<ClaimItem>,
}

impl NewClaim {
    /// Sum of `hours_worked × rate` over all items, in the currency of the
    /// item rates or `fallback` when there are no items
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` if items use different
    /// currencies and `MoneyError::Overflow` if the total does not fit a
    /// `Decimal`
    pub fn total(&self, fallback: Currency) -> Result<Money, MoneyError> {
        let currency = self
            .items
            .first()
            .map_or(fallback, |item| item.rate.currency());
        let totals = self
            .items
            .iter()
            .map(ClaimItem::total)
            .collect::<Result<Vec<Money>, MoneyError>>()?;
        Money::sum(&totals, currency)
    }

    /// Currency shared by every item rate, or `fallback` when there are no items
    pub fn currency(&self, fallback: Currency) -> Result<Currency, MoneyError> {
        Ok(self.total(fallback)?.currency())
    }

    /// Runs field validation and the currency and total checks
    pub fn check(&self, fallback: Currency) -> Result<Currency, ClaimError> {
        self.validate()?;
        Ok(self.currency(fallback)?)
    }
}

/// A lecturer's monthly compensation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub id: ClaimId,
    pub lecturer_id: LecturerId,
    pub lecturer_name: String,
    /// First day of the claimed month
    pub month: NaiveDate,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    items: Vec<ClaimItem>,
    total_amount: Money,
    review: ReviewState,
    comments: ReviewComments,
    documents: Vec<Document>,
}

impl Claim {
    /// Creates a freshly submitted claim awaiting coordinator review
    ///
    /// The month is normalised to its first day; a missing month becomes
    /// the month of `now`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` if item rates mix currencies
    /// and `MoneyError::Overflow` if the total does not fit a `Decimal`
    pub fn submitted(
        id: ClaimId,
        new_claim: NewClaim,
        fallback_currency: Currency,
        now: DateTime<Utc>,
    ) -> Result<Self, MoneyError> {
        let total_amount = new_claim.total(fallback_currency)?;
        let month = first_of_month(new_claim.month.unwrap_or_else(|| now.date_naive()));

        Ok(Self {
            id,
            lecturer_id: new_claim.lecturer_id,
            lecturer_name: new_claim.lecturer_name,
            month,
            submitted_at: now,
            updated_at: now,
            items: new_claim.items,
            total_amount,
            review: ReviewState::default(),
            comments: ReviewComments::default(),
            documents: Vec::new(),
        })
    }

    pub fn items(&self) -> &[ClaimItem] {
        &self.items
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn review_state(&self) -> &ReviewState {
        &self.review
    }

    pub fn comments(&self) -> &ReviewComments {
        &self.comments
    }

    pub fn currency(&self) -> Currency {
        self.total_amount.currency()
    }

    /// Current status, computed from the review state
    pub fn status(&self) -> ClaimStatus {
        self.review.status()
    }

    pub fn approvals(&self) -> Approvals {
        self.review.approvals()
    }

    pub fn coordinator_approved(&self) -> bool {
        self.approvals().coordinator
    }

    pub fn academic_manager_approved(&self) -> bool {
        self.approvals().academic_manager
    }

    /// Sum of `hours_worked × rate` over all items, fixed at submission
    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Applies a reviewer's decision and returns the resulting status
    pub fn apply_review(
        &mut self,
        outcome: &ReviewOutcome,
        role: ReviewerRole,
        comment: Option<&str>,
    ) -> ClaimStatus {
        self.review = self.review.next(outcome, role);
        self.comments.record(role, comment);
        self.updated_at = Utc::now();
        self.status()
    }

    /// Links a stored document to this claim
    pub fn attach(&mut self, document: Document) {
        self.documents.push(document);
        self.updated_at = Utc::now();
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
