//! Claim audit trail

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{ClaimId, DocumentId};
use crate::review::{ClaimStatus, ReviewOutcome, ReviewerRole};

/// What happened to a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AuditAction {
    Submitted,
    Reviewed {
        role: ReviewerRole,
        outcome: ReviewOutcome,
        resulting_status: ClaimStatus,
    },
    DocumentAttached {
        document_id: DocumentId,
        file_name: String,
    },
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditAction::Submitted => f.write_str("Submitted"),
            AuditAction::Reviewed { role, outcome, resulting_status } => {
                write!(f, "{outcome} by {role} -> {resulting_status}")
            }
            AuditAction::DocumentAttached { document_id, file_name } => {
                write!(f, "Attached {file_name} ({document_id})")
            }
        }
    }
}

/// One entry in a claim's audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: Uuid,
    pub claim_id: ClaimId,
    pub action: AuditAction,
    pub performed_by: String,
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    /// Creates a new entry stamped with the current time
    pub fn new(claim_id: ClaimId, action: AuditAction, performed_by: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            claim_id,
            action,
            performed_by: performed_by.into(),
            timestamp: Utc::now(),
        }
    }
}
