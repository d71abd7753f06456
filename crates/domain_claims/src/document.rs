//! Supporting documents attached to claims
//!
//! Only metadata is tracked here. The stored file name is random so that
//! two uploads named `timesheet.pdf` never collide; the original name is
//! kept for display.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{ClaimId, DocumentId};

/// A document that has been stored and assigned an identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub claim_id: ClaimId,
    pub original_file_name: String,
    pub stored_file_name: String,
    pub content_type: String,
    pub uploaded_at: DateTime<Utc>,
}

/// A document waiting to be stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDocument {
    pub claim_id: ClaimId,
    pub original_file_name: String,
    pub stored_file_name: String,
    pub content_type: String,
}

impl NewDocument {
    /// Creates a document record with a freshly generated stored file name
    pub fn new(
        claim_id: ClaimId,
        original_file_name: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        let original_file_name = original_file_name.into();
        let stored_file_name = stored_name_for(&original_file_name);
        Self {
            claim_id,
            original_file_name,
            stored_file_name,
            content_type: content_type.into(),
        }
    }

    /// Assigns the store's identifier
    pub fn into_document(self, id: DocumentId, uploaded_at: DateTime<Utc>) -> Document {
        Document {
            id,
            claim_id: self.claim_id,
            original_file_name: self.original_file_name,
            stored_file_name: self.stored_file_name,
            content_type: self.content_type,
            uploaded_at,
        }
    }
}

/// Random name that keeps the original extension, lower-cased
fn stored_name_for(original: &str) -> String {
    let stem = Uuid::new_v4().simple().to_string();
    match Path::new(original).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if !ext.is_empty() => format!("{stem}.{}", ext.to_ascii_lowercase()),
        _ => stem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_name_keeps_extension() {
        let doc = NewDocument::new(ClaimId::new(3), "Timesheet.PDF", "application/pdf");
        assert!(doc.stored_file_name.ends_with(".pdf"));
        assert_eq!(doc.stored_file_name.len(), 32 + ".pdf".len());
        assert_eq!(doc.original_file_name, "Timesheet.PDF");
    }

    #[test]
    fn test_stored_name_without_extension() {
        let doc = NewDocument::new(ClaimId::new(3), "README", "text/plain");
        assert_eq!(doc.stored_file_name.len(), 32);
        assert!(!doc.stored_file_name.contains('.'));
    }

    #[test]
    fn test_stored_names_are_unique() {
        let a = NewDocument::new(ClaimId::new(1), "a.docx", "application/msword");
        let b = NewDocument::new(ClaimId::new(1), "a.docx", "application/msword");
        assert_ne!(a.stored_file_name, b.stored_file_name);
    }

    #[test]
    fn test_into_document_assigns_id() {
        let now = Utc::now();
        let doc = NewDocument::new(ClaimId::new(4), "proof.xlsx", "application/vnd.ms-excel")
            .into_document(DocumentId::new(9), now);
        assert_eq!(doc.id, DocumentId::new(9));
        assert_eq!(doc.claim_id, ClaimId::new(4));
        assert_eq!(doc.uploaded_at, now);
    }
}
