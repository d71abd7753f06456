//! Claims domain errors

use thiserror::Error;
use validator::ValidationErrors;

use core_kernel::{ClaimId, DocumentId, MoneyError, PortError};

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    ClaimNotFound(ClaimId),

    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    #[error("Invalid claim: {0}")]
    Validation(String),

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Store error: {0}")]
    Store(#[from] PortError),
}

impl ClaimError {
    /// Maps a port error for a claim lookup, turning `NotFound` into
    /// [`ClaimError::ClaimNotFound`]
    pub fn for_claim(id: ClaimId) -> impl FnOnce(PortError) -> ClaimError {
        move |error| {
            if error.is_not_found() {
                ClaimError::ClaimNotFound(id)
            } else {
                ClaimError::Store(error)
            }
        }
    }

    /// Maps a port error for a document lookup
    pub fn for_document(id: DocumentId) -> impl FnOnce(PortError) -> ClaimError {
        move |error| {
            if error.is_not_found() {
                ClaimError::DocumentNotFound(id)
            } else {
                ClaimError::Store(error)
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClaimError::ClaimNotFound(_) | ClaimError::DocumentNotFound(_))
    }
}

impl From<ValidationErrors> for ClaimError {
    fn from(errors: ValidationErrors) -> Self {
        ClaimError::Validation(errors.to_string())
    }
}
