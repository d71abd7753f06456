//! Claim Store Port
//!
//! The storage contract the claims domain needs. Services receive an
//! `Arc<dyn ClaimStore>` so that the backing adapter can be swapped:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_claims::{ClaimsService, ClaimStore};
//! use infra_store::{InMemoryClaimStore, StoreConfig};
//!
//! let store: Arc<dyn ClaimStore> = Arc::new(InMemoryClaimStore::new(StoreConfig::default()));
//! let service = ClaimsService::new(store);
//! ```
//!
//! Every operation is atomic with respect to the claim it touches.

use core_kernel::{ClaimId, DocumentId, DomainPort, LecturerId, PortError};

use crate::audit::AuditEntry;
use crate::claim::{Claim, NewClaim};
use crate::document::{Document, NewDocument};
use crate::review::{ReviewOutcome, ReviewerRole};

/// Storage operations for claims, their documents and audit trail
pub trait ClaimStore: DomainPort {
    /// Stores a new claim and returns it with its assigned id
    ///
    /// The claim starts in `Pending Coordinator Review` with both approval
    /// flags cleared.
    fn add_claim(&self, claim: NewClaim) -> Result<Claim, PortError>;

    /// Retrieves a claim by id
    fn find_by_id(&self, id: ClaimId) -> Result<Claim, PortError>;

    /// Claims for one lecturer, most recent month first
    fn list_by_lecturer(&self, lecturer_id: LecturerId) -> Result<Vec<Claim>, PortError>;

    /// Claims whose status begins with "Pending", oldest month first
    fn list_pending(&self) -> Result<Vec<Claim>, PortError>;

    /// Applies a review decision to one claim and returns the updated claim
    ///
    /// # Errors
    ///
    /// Returns `PortError::NotFound` if the claim does not exist
    fn set_status(
        &self,
        id: ClaimId,
        outcome: &ReviewOutcome,
        role: ReviewerRole,
        comment: Option<&str>,
    ) -> Result<Claim, PortError>;

    /// Stores a document and links it to its claim
    ///
    /// # Errors
    ///
    /// Returns `PortError::NotFound` if the owning claim does not exist
    fn add_document(&self, document: NewDocument) -> Result<Document, PortError>;

    /// Documents attached to a claim, in attachment order
    fn documents_for_claim(&self, claim_id: ClaimId) -> Result<Vec<Document>, PortError>;

    /// Retrieves a document by id
    fn find_document(&self, id: DocumentId) -> Result<Document, PortError>;

    /// Appends an entry to a claim's audit trail
    fn append_audit(&self, entry: AuditEntry) -> Result<(), PortError>;

    /// Audit trail for a claim, oldest first
    fn audit_trail(&self, claim_id: ClaimId) -> Result<Vec<AuditEntry>, PortError>;
}
