//! Dual-approval review state machine
//!
//! A claim needs both a coordinator approval and an academic manager
//! approval before it is `Approved`. The two approvals are independent
//! flags and may arrive in either order. Any outcome other than
//! `Approved` replaces the status outright and leaves the flags alone.
//!
//! The displayed status is never stored: it is computed from
//! [`ReviewState`] so that the text and the flags cannot disagree.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validation::meaningful_comment;

const PENDING_COORDINATOR: &str = "Pending Coordinator Review";
const PENDING_ACADEMIC_MANAGER: &str = "Pending Academic Manager Review";
const APPROVED: &str = "Approved";
const REJECTED: &str = "Rejected";

/// The two human approval roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewerRole {
    Coordinator,
    AcademicManager,
}

impl ReviewerRole {
    /// Human readable role name, as it appears in pending statuses
    pub fn label(&self) -> &'static str {
        match self {
            ReviewerRole::Coordinator => "Coordinator",
            ReviewerRole::AcademicManager => "Academic Manager",
        }
    }

    /// The role that must act after this one has approved
    pub fn counterpart(&self) -> ReviewerRole {
        match self {
            ReviewerRole::Coordinator => ReviewerRole::AcademicManager,
            ReviewerRole::AcademicManager => ReviewerRole::Coordinator,
        }
    }
}

impl fmt::Display for ReviewerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome requested by a reviewer
///
/// Only the exact literals `"Approved"` and `"Rejected"` map to the named
/// variants; any other text is kept verbatim as a manual status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReviewOutcome {
    Approved,
    Rejected,
    Other(String),
}

impl ReviewOutcome {
    pub fn as_str(&self) -> &str {
        match self {
            ReviewOutcome::Approved => APPROVED,
            ReviewOutcome::Rejected => REJECTED,
            ReviewOutcome::Other(status) => status,
        }
    }
}

impl From<&str> for ReviewOutcome {
    fn from(value: &str) -> Self {
        match value {
            APPROVED => ReviewOutcome::Approved,
            REJECTED => ReviewOutcome::Rejected,
            other => ReviewOutcome::Other(other.to_string()),
        }
    }
}

impl From<String> for ReviewOutcome {
    fn from(value: String) -> Self {
        match value.as_str() {
            APPROVED => ReviewOutcome::Approved,
            REJECTED => ReviewOutcome::Rejected,
            _ => ReviewOutcome::Other(value),
        }
    }
}

impl From<ReviewOutcome> for String {
    fn from(outcome: ReviewOutcome) -> Self {
        match outcome {
            ReviewOutcome::Other(status) => status,
            named => named.as_str().to_string(),
        }
    }
}

impl fmt::Display for ReviewOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Independent approval flags, one per role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approvals {
    pub coordinator: bool,
    pub academic_manager: bool,
}

impl Approvals {
    /// Returns whether `role` has approved
    pub fn by(&self, role: ReviewerRole) -> bool {
        match role {
            ReviewerRole::Coordinator => self.coordinator,
            ReviewerRole::AcademicManager => self.academic_manager,
        }
    }

    /// Returns a copy with `role`'s approval recorded
    pub fn with(mut self, role: ReviewerRole) -> Self {
        match role {
            ReviewerRole::Coordinator => self.coordinator = true,
            ReviewerRole::AcademicManager => self.academic_manager = true,
        }
        self
    }

    pub fn both(&self) -> bool {
        self.coordinator && self.academic_manager
    }
}

/// Where a claim sits in review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ReviewState {
    /// Waiting on one or both approvals, or fully approved
    InReview { approvals: Approvals },
    /// Rejected by `by`; approvals given earlier are kept
    Rejected { by: ReviewerRole, approvals: Approvals },
    /// A reviewer set a literal status other than approve/reject
    Manual {
        status: String,
        set_by: ReviewerRole,
        approvals: Approvals,
    },
}

impl Default for ReviewState {
    fn default() -> Self {
        ReviewState::InReview {
            approvals: Approvals::default(),
        }
    }
}

impl ReviewState {
    pub fn approvals(&self) -> Approvals {
        match self {
            ReviewState::InReview { approvals }
            | ReviewState::Rejected { approvals, .. }
            | ReviewState::Manual { approvals, .. } => *approvals,
        }
    }

    /// Computes the displayed status
    pub fn status(&self) -> ClaimStatus {
        match self {
            ReviewState::InReview { approvals } => match (approvals.coordinator, approvals.academic_manager) {
                (true, true) => ClaimStatus::Approved,
                (true, false) => ClaimStatus::PendingAcademicManagerReview,
                (false, _) => ClaimStatus::PendingCoordinatorReview,
            },
            ReviewState::Rejected { .. } => ClaimStatus::Rejected,
            ReviewState::Manual { status, .. } => ClaimStatus::from(status.as_str()),
        }
    }

    /// Computes the state after `role` requests `outcome`
    ///
    /// Approving records the role's flag and re-enters review, so the
    /// result is `Approved` exactly when the other role had already
    /// approved. Every other outcome replaces the status and keeps the
    /// existing flags.
    pub fn next(&self, outcome: &ReviewOutcome, role: ReviewerRole) -> ReviewState {
        let approvals = self.approvals();
        match outcome {
            ReviewOutcome::Approved => ReviewState::InReview {
                approvals: approvals.with(role),
            },
            ReviewOutcome::Rejected => ReviewState::Rejected { by: role, approvals },
            ReviewOutcome::Other(status) => ReviewState::Manual {
                status: status.clone(),
                set_by: role,
                approvals,
            },
        }
    }
}

/// Displayed claim status
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClaimStatus {
    PendingCoordinatorReview,
    PendingAcademicManagerReview,
    Approved,
    Rejected,
    Other(String),
}

impl ClaimStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ClaimStatus::PendingCoordinatorReview => PENDING_COORDINATOR,
            ClaimStatus::PendingAcademicManagerReview => PENDING_ACADEMIC_MANAGER,
            ClaimStatus::Approved => APPROVED,
            ClaimStatus::Rejected => REJECTED,
            ClaimStatus::Other(status) => status,
        }
    }

    /// True for any status beginning with "Pending", ignoring case
    pub fn is_pending(&self) -> bool {
        self.as_str()
            .get(..7)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("pending"))
    }

    /// True when the claim is pending and the status names `role`
    pub fn awaits(&self, role: ReviewerRole) -> bool {
        self.is_pending()
            && self
                .as_str()
                .to_ascii_lowercase()
                .contains(&role.label().to_ascii_lowercase())
    }

    /// True once both roles have approved
    pub fn is_approved(&self) -> bool {
        matches!(self, ClaimStatus::Approved)
    }
}

impl From<&str> for ClaimStatus {
    fn from(value: &str) -> Self {
        match value {
            PENDING_COORDINATOR => ClaimStatus::PendingCoordinatorReview,
            PENDING_ACADEMIC_MANAGER => ClaimStatus::PendingAcademicManagerReview,
            APPROVED => ClaimStatus::Approved,
            REJECTED => ClaimStatus::Rejected,
            other => ClaimStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for ClaimStatus {
    fn from(value: String) -> Self {
        ClaimStatus::from(value.as_str())
    }
}

impl From<ClaimStatus> for String {
    fn from(status: ClaimStatus) -> Self {
        match status {
            ClaimStatus::Other(status) => status,
            named => named.as_str().to_string(),
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-text reviewer comments, one slot per role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewComments {
    pub coordinator: Option<String>,
    pub academic_manager: Option<String>,
}

impl ReviewComments {
    pub fn by(&self, role: ReviewerRole) -> Option<&str> {
        match role {
            ReviewerRole::Coordinator => self.coordinator.as_deref(),
            ReviewerRole::AcademicManager => self.academic_manager.as_deref(),
        }
    }

    /// Stores `comment` for `role` unless it is blank; a blank comment
    /// leaves the previous one in place
    pub fn record(&mut self, role: ReviewerRole, comment: Option<&str>) {
        let Some(comment) = meaningful_comment(comment) else {
            return;
        };
        let slot = match role {
            ReviewerRole::Coordinator => &mut self.coordinator,
            ReviewerRole::AcademicManager => &mut self.academic_manager,
        };
        *slot = Some(comment.to_string());
    }
}
