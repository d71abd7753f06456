//! Lecturer Claims Domain
//!
//! This crate implements the monthly claim lifecycle: a lecturer submits a
//! claim with line items, a coordinator and an academic manager each
//! approve or reject it, and supporting documents can be attached at any
//! point.
//!
//! # Review Lifecycle
//!
//! ```text
//!                    coordinator approves
//! Pending Coordinator ───────────────────▶ Pending Academic Manager
//!       Review        ◀─── manager approves      Review
//!          │            (coordinator pending)      │
//!          │                                       │ manager approves
//!          └──────── either rejects ──▶ Rejected   ▼
//!                                              Approved
//! ```
//!
//! Both approvals are required before a claim reaches `Approved`; a
//! rejection from either role overrides the status immediately.

pub mod item;
pub mod claim;
pub mod review;
pub mod document;
pub mod audit;
pub mod store;
pub mod service;
pub mod validation;
pub mod error;

pub use item::ClaimItem;
pub use claim::{Claim, NewClaim};
pub use review::{
    Approvals, ClaimStatus, ReviewComments, ReviewOutcome, ReviewState, ReviewerRole,
};
pub use document::{Document, NewDocument};
pub use audit::{AuditAction, AuditEntry};
pub use store::ClaimStore;
pub use service::ClaimsService;
pub use error::ClaimError;
