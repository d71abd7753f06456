//! Claims domain service
//!
//! Orchestrates submissions, reviews and document attachments over an
//! injected [`ClaimStore`], recording an audit entry for each change.

use std::sync::Arc;

use tracing::{debug, info, warn};

use core_kernel::{ClaimId, Currency, DocumentId, LecturerId};

use crate::audit::{AuditAction, AuditEntry};
use crate::claim::{Claim, NewClaim};
use crate::document::{Document, NewDocument};
use crate::error::ClaimError;
use crate::review::{ReviewOutcome, ReviewerRole};
use crate::store::ClaimStore;
use crate::validation::not_blank;

/// Entry point for claim workflows
#[derive(Clone)]
pub struct ClaimsService {
    store: Arc<dyn ClaimStore>,
    currency: Currency,
}

impl ClaimsService {
    /// Creates a service that values empty claims in the default currency
    pub fn new(store: Arc<dyn ClaimStore>) -> Self {
        Self {
            store,
            currency: Currency::default(),
        }
    }

    /// Sets the currency used when a claim carries no items
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Validates and stores a lecturer's claim
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::Validation` if the lecturer name is blank, there
    /// are no items, or an item has a blank description, zero hours or a
    /// non-positive rate; `ClaimError::Money` if item rates mix currencies
    /// or the total overflows. Nothing is stored on error. Once the claim is
    /// stored, a failed audit write is logged and the claim still returned.
    pub fn submit(&self, claim: NewClaim, submitted_by: &str) -> Result<Claim, ClaimError> {
        claim.check(self.currency)?;

        let claim = self.store.add_claim(claim)?;
        self.record(AuditEntry::new(claim.id, AuditAction::Submitted, submitted_by));

        info!(
            claim_id = %claim.id,
            lecturer_id = %claim.lecturer_id,
            total = %claim.total_amount(),
            "Claim submitted"
        );
        Ok(claim)
    }

    /// Applies a reviewer's decision to a claim
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::ClaimNotFound` if the claim does not exist. A
    /// failed audit write after the review is applied is only logged.
    pub fn review(
        &self,
        id: ClaimId,
        outcome: ReviewOutcome,
        role: ReviewerRole,
        comment: Option<&str>,
        reviewer: &str,
    ) -> Result<Claim, ClaimError> {
        let claim = self
            .store
            .set_status(id, &outcome, role, comment)
            .map_err(ClaimError::for_claim(id))
            .inspect_err(|e| {
                if e.is_not_found() {
                    warn!(claim_id = %id, %role, "Review for unknown claim");
                }
            })?;

        let status = claim.status();
        self.record(AuditEntry::new(
            id,
            AuditAction::Reviewed {
                role,
                outcome: outcome.clone(),
                resulting_status: status.clone(),
            },
            reviewer,
        ));

        info!(claim_id = %id, %role, %outcome, %status, "Claim reviewed");
        if status.is_approved() {
            info!(claim_id = %id, lecturer_id = %claim.lecturer_id, "Claim fully approved");
        }
        Ok(claim)
    }

    pub fn approve(
        &self,
        id: ClaimId,
        role: ReviewerRole,
        comment: Option<&str>,
        reviewer: &str,
    ) -> Result<Claim, ClaimError> {
        self.review(id, ReviewOutcome::Approved, role, comment, reviewer)
    }

    pub fn reject(
        &self,
        id: ClaimId,
        role: ReviewerRole,
        comment: Option<&str>,
        reviewer: &str,
    ) -> Result<Claim, ClaimError> {
        self.review(id, ReviewOutcome::Rejected, role, comment, reviewer)
    }

    /// Records a supporting document against a claim
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::Validation` for a blank file name and
    /// `ClaimError::ClaimNotFound` if the claim does not exist. A failed
    /// audit write after the document is stored is only logged.
    pub fn attach_document(
        &self,
        claim_id: ClaimId,
        original_file_name: &str,
        content_type: &str,
        uploaded_by: &str,
    ) -> Result<Document, ClaimError> {
        not_blank(original_file_name)
            .map_err(|_| ClaimError::Validation("document file name must not be blank".to_string()))?;

        let document = self
            .store
            .add_document(NewDocument::new(claim_id, original_file_name, content_type))
            .map_err(ClaimError::for_claim(claim_id))?;

        self.record(AuditEntry::new(
            claim_id,
            AuditAction::DocumentAttached {
                document_id: document.id,
                file_name: document.original_file_name.clone(),
            },
            uploaded_by,
        ));

        info!(
            claim_id = %claim_id,
            document_id = %document.id,
            stored_as = %document.stored_file_name,
            "Document attached"
        );
        Ok(document)
    }

    /// Appends an audit entry for a change that has already been stored
    fn record(&self, entry: AuditEntry) {
        let claim_id = entry.claim_id;
        if let Err(e) = self.store.append_audit(entry) {
            warn!(claim_id = %claim_id, error = %e, "Audit entry not recorded");
        }
    }

    pub fn find(&self, id: ClaimId) -> Result<Claim, ClaimError> {
        self.store.find_by_id(id).map_err(ClaimError::for_claim(id))
    }

    pub fn claims_for_lecturer(&self, lecturer_id: LecturerId) -> Result<Vec<Claim>, ClaimError> {
        Ok(self.store.list_by_lecturer(lecturer_id)?)
    }

    /// Every claim still awaiting a review, oldest month first
    pub fn pending(&self) -> Result<Vec<Claim>, ClaimError> {
        Ok(self.store.list_pending()?)
    }

    /// Pending claims whose status names `role`
    pub fn queue_for(&self, role: ReviewerRole) -> Result<Vec<Claim>, ClaimError> {
        let queue: Vec<Claim> = self
            .store
            .list_pending()?
            .into_iter()
            .filter(|claim| claim.status().awaits(role))
            .collect();
        debug!(%role, size = queue.len(), "Built review queue");
        Ok(queue)
    }

    pub fn documents(&self, claim_id: ClaimId) -> Result<Vec<Document>, ClaimError> {
        self.store
            .documents_for_claim(claim_id)
            .map_err(ClaimError::for_claim(claim_id))
    }

    pub fn find_document(&self, id: DocumentId) -> Result<Document, ClaimError> {
        self.store.find_document(id).map_err(ClaimError::for_document(id))
    }

    pub fn audit_trail(&self, claim_id: ClaimId) -> Result<Vec<AuditEntry>, ClaimError> {
        self.store
            .audit_trail(claim_id)
            .map_err(ClaimError::for_claim(claim_id))
    }
}
