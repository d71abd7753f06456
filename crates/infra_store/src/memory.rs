//! In-memory claim store
//!
//! Claims live in an id index of `Arc<Mutex<Claim>>`. The index lock is
//! only held long enough to clone an `Arc`; the work on a claim happens
//! under that claim's own mutex. Lock order is always claim, then the
//! document index.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use chrono::Utc;
use tracing::{debug, warn};

use core_kernel::{ClaimId, DocumentId, DomainPort, LecturerId, PortError};
use domain_claims::{
    AuditEntry, Claim, ClaimStore, Document, NewClaim, NewDocument, ReviewOutcome, ReviewerRole,
};

use crate::config::StoreConfig;

type ClaimCell = Arc<Mutex<Claim>>;

fn poisoned<T>(_: PoisonError<T>) -> PortError {
    PortError::internal("claim store lock poisoned")
}

/// Thread-safe, non-durable implementation of [`ClaimStore`]
#[derive(Debug)]
pub struct InMemoryClaimStore {
    config: StoreConfig,
    next_claim_id: AtomicU64,
    next_document_id: AtomicU64,
    claims: RwLock<BTreeMap<ClaimId, ClaimCell>>,
    documents: RwLock<BTreeMap<DocumentId, Document>>,
    audit: RwLock<HashMap<ClaimId, Vec<AuditEntry>>>,
}

impl InMemoryClaimStore {
    /// Creates an empty store
    pub fn new(config: StoreConfig) -> Self {
        Self {
            next_claim_id: AtomicU64::new(config.first_claim_id),
            next_document_id: AtomicU64::new(config.first_document_id),
            config,
            claims: RwLock::new(BTreeMap::new()),
            documents: RwLock::new(BTreeMap::new()),
            audit: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Number of stored claims
    pub fn len(&self) -> Result<usize, PortError> {
        Ok(self.claims.read().map_err(poisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, PortError> {
        Ok(self.len()? == 0)
    }

    /// Every stored claim in id order
    pub fn list_all(&self) -> Result<Vec<Claim>, PortError> {
        self.snapshot(|_| true)
    }

    fn cell(&self, id: ClaimId) -> Result<ClaimCell, PortError> {
        self.claims
            .read()
            .map_err(poisoned)?
            .get(&id)
            .cloned()
            .ok_or_else(|| {
                warn!(claim_id = %id, "Claim not found");
                PortError::not_found("Claim", id)
            })
    }

    fn ensure_claim(&self, id: ClaimId) -> Result<(), PortError> {
        self.cell(id).map(|_| ())
    }

    /// Clones every claim matching `keep`, in id order
    fn snapshot(&self, keep: impl Fn(&Claim) -> bool) -> Result<Vec<Claim>, PortError> {
        let cells: Vec<ClaimCell> = self
            .claims
            .read()
            .map_err(poisoned)?
            .values()
            .cloned()
            .collect();

        let mut claims = Vec::new();
        for cell in cells {
            let claim = cell.lock().map_err(poisoned)?;
            if keep(&*claim) {
                claims.push(claim.clone());
            }
        }
        Ok(claims)
    }
}

impl Default for InMemoryClaimStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl DomainPort for InMemoryClaimStore {}

impl ClaimStore for InMemoryClaimStore {
    fn add_claim(&self, claim: NewClaim) -> Result<Claim, PortError> {
        // Reject before allocating so rejected submissions leave no gap
        claim
            .currency(self.config.currency)
            .map_err(|e| PortError::validation_field(e.to_string(), "items"))?;

        let id = ClaimId::new(self.next_claim_id.fetch_add(1, Ordering::SeqCst));
        debug!(claim_id = %id, "Allocated claim id");

        let claim = Claim::submitted(id, claim, self.config.currency, Utc::now())
            .map_err(|e| PortError::validation_field(e.to_string(), "items"))?;

        match self.claims.write().map_err(poisoned)?.entry(id) {
            Entry::Occupied(_) => Err(PortError::conflict(format!("claim {id} already stored"))),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(claim.clone())));
                Ok(claim)
            }
        }
    }

    fn find_by_id(&self, id: ClaimId) -> Result<Claim, PortError> {
        let cell = self.cell(id)?;
        let claim = cell.lock().map_err(poisoned)?;
        Ok(claim.clone())
    }

    fn list_by_lecturer(&self, lecturer_id: LecturerId) -> Result<Vec<Claim>, PortError> {
        let mut claims = self.snapshot(|c| c.lecturer_id == lecturer_id)?;
        claims.sort_by(|a, b| b.month.cmp(&a.month));
        Ok(claims)
    }

    fn list_pending(&self) -> Result<Vec<Claim>, PortError> {
        let mut claims = self.snapshot(|c| c.status().is_pending())?;
        claims.sort_by(|a, b| a.month.cmp(&b.month));
        Ok(claims)
    }

    fn set_status(
        &self,
        id: ClaimId,
        outcome: &ReviewOutcome,
        role: ReviewerRole,
        comment: Option<&str>,
    ) -> Result<Claim, PortError> {
        let cell = self.cell(id)?;
        let mut claim = cell.lock().map_err(poisoned)?;
        let status = claim.apply_review(outcome, role, comment);
        debug!(claim_id = %id, %role, %status, "Status updated");
        Ok(claim.clone())
    }

    fn add_document(&self, document: NewDocument) -> Result<Document, PortError> {
        let cell = self.cell(document.claim_id)?;
        let mut claim = cell.lock().map_err(poisoned)?;

        let id = DocumentId::new(self.next_document_id.fetch_add(1, Ordering::SeqCst));
        let document = document.into_document(id, Utc::now());

        self.documents
            .write()
            .map_err(poisoned)?
            .insert(id, document.clone());
        claim.attach(document.clone());

        debug!(claim_id = %claim.id, document_id = %id, "Document stored");
        Ok(document)
    }

    fn documents_for_claim(&self, claim_id: ClaimId) -> Result<Vec<Document>, PortError> {
        let cell = self.cell(claim_id)?;
        let claim = cell.lock().map_err(poisoned)?;
        Ok(claim.documents().to_vec())
    }

    fn find_document(&self, id: DocumentId) -> Result<Document, PortError> {
        self.documents
            .read()
            .map_err(poisoned)?
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Document", id))
    }

    fn append_audit(&self, entry: AuditEntry) -> Result<(), PortError> {
        self.ensure_claim(entry.claim_id)?;
        self.audit
            .write()
            .map_err(poisoned)?
            .entry(entry.claim_id)
            .or_default()
            .push(entry);
        Ok(())
    }

    fn audit_trail(&self, claim_id: ClaimId) -> Result<Vec<AuditEntry>, PortError> {
        self.ensure_claim(claim_id)?;
        Ok(self
            .audit
            .read()
            .map_err(poisoned)?
            .get(&claim_id)
            .cloned()
            .unwrap_or_default())
    }
}
