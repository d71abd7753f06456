//! Ports and Adapters Infrastructure
//!
//! Domain crates define their storage needs as port traits that extend
//! [`DomainPort`]. Adapters (the in-memory store today) implement them and
//! report failures through the shared [`PortError`].
//!
//! ```text
//!   ClaimsService ──uses──▶ ClaimStore (port, domain_claims)
//!                                ▲
//!                                │ implements
//!                      InMemoryClaimStore (infra_store)
//! ```

use std::fmt;
use thiserror::Error;

/// Error type for port operations
///
/// All adapters return this type so that domain services handle storage
/// failures the same way regardless of the backing implementation.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// A validation error occurred
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// An internal error occurred (e.g. a poisoned lock)
    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Validation error with field information
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for all domain ports
///
/// Ports must be shareable across threads so a single store can back
/// several services.
pub trait DomainPort: Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_not_found() {
        let error = PortError::not_found("Claim", "CLM-3");
        assert!(error.is_not_found());
        assert!(error.to_string().contains("Claim"));
        assert!(error.to_string().contains("CLM-3"));
    }

    #[test]
    fn test_validation_field() {
        let error = PortError::validation_field("must not be blank", "lecturer_name");
        match error {
            PortError::Validation { field, .. } => {
                assert_eq!(field.as_deref(), Some("lecturer_name"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_internal_is_not_not_found() {
        assert!(!PortError::internal("lock poisoned").is_not_found());
        assert!(!PortError::conflict("duplicate").is_not_found());
    }
}
