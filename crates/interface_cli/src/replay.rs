//! Workflow replay
//!
//! A replay script is a JSON array of steps, each tagged by `"op"`:
//!
//! ```json
//! [
//!   { "op": "submit", "by": "lecturer-101", "claim": {
//!       "lecturer_id": 101, "lecturer_name": "T. Mokoena", "month": "2025-03-01",
//!       "items": [{ "description": "Lecturing", "hours_worked": 5,
//!                   "rate": { "amount": "100", "currency": "ZAR" } }] } },
//!   { "op": "attach", "claim": { "submission": 0 }, "file_name": "timesheet.pdf" },
//!   { "op": "review", "claim": { "submission": 0 }, "role": "coordinator",
//!     "outcome": "Approved", "comment": "Hours verified" },
//!   { "op": "review", "claim": { "id": 1 }, "role": "academicManager", "outcome": "Approved" }
//! ]
//! ```
//!
//! Claims are referenced either by the position of their `submit` step
//! among all submissions or by store id.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use core_kernel::{ClaimId, Currency, LecturerId};
use domain_claims::{
    Claim, ClaimStatus, ClaimsService, Document, NewClaim, ReviewOutcome, ReviewerRole,
};
use infra_store::{InMemoryClaimStore, StoreConfig};

use crate::error::ReplayError;

const DEFAULT_ACTOR: &str = "replay";
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

fn default_actor() -> String {
    DEFAULT_ACTOR.to_string()
}

fn default_content_type() -> String {
    DEFAULT_CONTENT_TYPE.to_string()
}

/// Reference to a claim from within a script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ClaimRef {
    /// Zero-based position among the script's submissions
    Submission { submission: usize },
    /// Store-assigned id
    Id { id: ClaimId },
}

/// One scripted action
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Submit {
        claim: NewClaim,
        #[serde(default = "default_actor")]
        by: String,
    },
    Review {
        claim: ClaimRef,
        role: ReviewerRole,
        outcome: ReviewOutcome,
        #[serde(default)]
        comment: Option<String>,
        #[serde(default = "default_actor")]
        by: String,
    },
    Attach {
        claim: ClaimRef,
        file_name: String,
        #[serde(default = "default_content_type")]
        content_type: String,
        #[serde(default = "default_actor")]
        by: String,
    },
}

/// Parses a replay script
pub fn parse_script(json: &str) -> Result<Vec<Step>, ReplayError> {
    Ok(serde_json::from_str(json)?)
}

/// Final state of a claim after a replay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimSummary {
    pub id: ClaimId,
    pub lecturer_id: LecturerId,
    pub lecturer_name: String,
    pub month: NaiveDate,
    pub status: ClaimStatus,
    pub coordinator_approved: bool,
    pub academic_manager_approved: bool,
    pub coordinator_comment: Option<String>,
    pub academic_manager_comment: Option<String>,
    pub total_amount: Decimal,
    pub currency: Currency,
    pub documents: Vec<Document>,
}

impl From<&Claim> for ClaimSummary {
    fn from(claim: &Claim) -> Self {
        let comments = claim.comments();
        Self {
            id: claim.id,
            lecturer_id: claim.lecturer_id,
            lecturer_name: claim.lecturer_name.clone(),
            month: claim.month,
            status: claim.status(),
            coordinator_approved: claim.coordinator_approved(),
            academic_manager_approved: claim.academic_manager_approved(),
            coordinator_comment: comments.coordinator.clone(),
            academic_manager_comment: comments.academic_manager.clone(),
            total_amount: claim.total_amount().round_to_currency().amount(),
            currency: claim.currency(),
            documents: claim.documents().to_vec(),
        }
    }
}

/// Runs scripted steps against a fresh in-memory store
pub struct Replay {
    store: Arc<InMemoryClaimStore>,
    service: ClaimsService,
    submissions: Vec<ClaimId>,
}

impl Replay {
    pub fn new(config: StoreConfig) -> Self {
        let currency = config.currency;
        let store = Arc::new(InMemoryClaimStore::new(config));
        let service = ClaimsService::new(store.clone()).with_currency(currency);
        Self {
            store,
            service,
            submissions: Vec::new(),
        }
    }

    pub fn service(&self) -> &ClaimsService {
        &self.service
    }

    /// Applies every step in order, stopping at the first failure
    ///
    /// # Errors
    ///
    /// Returns `ReplayError::Step` with the one-based step number when a
    /// step is rejected by the claims service, or
    /// `ReplayError::UnknownSubmission` for a dangling reference
    pub fn run(&mut self, steps: Vec<Step>) -> Result<(), ReplayError> {
        let count = steps.len();
        for (index, step) in steps.into_iter().enumerate() {
            self.apply(index + 1, step)?;
        }
        info!(steps = count, claims = self.submissions.len(), "Replay complete");
        Ok(())
    }

    /// Applies a single step
    pub fn apply(&mut self, step: usize, action: Step) -> Result<(), ReplayError> {
        match action {
            Step::Submit { claim, by } => {
                let claim = self
                    .service
                    .submit(claim, &by)
                    .map_err(ReplayError::at_step(step))?;
                self.submissions.push(claim.id);
            }
            Step::Review {
                claim,
                role,
                outcome,
                comment,
                by,
            } => {
                let id = self.resolve(step, claim)?;
                self.service
                    .review(id, outcome, role, comment.as_deref(), &by)
                    .map_err(ReplayError::at_step(step))?;
            }
            Step::Attach {
                claim,
                file_name,
                content_type,
                by,
            } => {
                let id = self.resolve(step, claim)?;
                self.service
                    .attach_document(id, &file_name, &content_type, &by)
                    .map_err(ReplayError::at_step(step))?;
            }
        }
        debug!(step, "Step applied");
        Ok(())
    }

    fn resolve(&self, step: usize, claim: ClaimRef) -> Result<ClaimId, ReplayError> {
        match claim {
            ClaimRef::Id { id } => Ok(id),
            ClaimRef::Submission { submission } => self
                .submissions
                .get(submission)
                .copied()
                .ok_or(ReplayError::UnknownSubmission { step, submission }),
        }
    }

    /// Summaries of every stored claim in id order
    pub fn summaries(&self) -> Result<Vec<ClaimSummary>, ReplayError> {
        let claims = self.store.list_all().map_err(domain_claims::ClaimError::from)?;
        Ok(claims.iter().map(ClaimSummary::from).collect())
    }
}

impl Default for Replay {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
