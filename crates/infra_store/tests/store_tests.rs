//! Tests for the in-memory claim store
//!
//! These exercise the `ClaimStore` contract directly: id allocation,
//! listing order, pending filtering and per-claim atomic updates.

use std::sync::Arc;
use std::thread;

use chrono::Datelike;
use core_kernel::{ClaimId, DocumentId, LecturerId};
use domain_claims::{ClaimStatus, ClaimStore, NewDocument, ReviewOutcome, ReviewerRole};
use infra_store::{InMemoryClaimStore, StoreConfig};
use proptest::prelude::*;
use test_utils::*;

fn store() -> InMemoryClaimStore {
    InMemoryClaimStore::new(StoreConfig::default())
}

mod add_and_find {
    use super::*;

    #[test]
    fn test_new_claim_starts_pending_coordinator() {
        let store = store();
        let claim = store.add_claim(NewClaimBuilder::new().build()).unwrap();

        assert_claim_state(&claim, ClaimStatus::PendingCoordinatorReview, false, false);
        assert!(claim.documents().is_empty());
        assert_eq!(store.find_by_id(claim.id).unwrap(), claim);
    }

    #[test]
    fn test_find_unknown_claim() {
        let err = store().find_by_id(ClaimId::new(42)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let store = store();
        let ids: Vec<u64> = (0..5)
            .map(|_| store.add_claim(NewClaimBuilder::new().build()).unwrap().id.value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_missing_month_is_defaulted() {
        let claim = store()
            .add_claim(NewClaimBuilder::new().without_month().build())
            .unwrap();
        let today = chrono::Utc::now().date_naive();
        assert_eq!(claim.month, today.with_day0(0).unwrap());
    }
}

mod listing {
    use super::*;

    #[test]
    fn test_list_by_lecturer_newest_month_first() {
        let store = store();
        for month in [MonthFixtures::february(), MonthFixtures::march(), MonthFixtures::january()] {
            store
                .add_claim(NewClaimBuilder::new().with_month(month).build())
                .unwrap();
        }
        store
            .add_claim(
                NewClaimBuilder::new()
                    .with_lecturer(IdFixtures::other_lecturer(), "Other")
                    .build(),
            )
            .unwrap();

        let months: Vec<_> = store
            .list_by_lecturer(IdFixtures::lecturer())
            .unwrap()
            .into_iter()
            .map(|c| c.month)
            .collect();
        assert_eq!(
            months,
            vec![MonthFixtures::march(), MonthFixtures::february(), MonthFixtures::january()]
        );
    }

    #[test]
    fn test_list_by_unknown_lecturer_is_empty() {
        let store = store();
        store.add_claim(NewClaimBuilder::new().build()).unwrap();
        assert!(store.list_by_lecturer(LecturerId::new(999)).unwrap().is_empty());
    }

    #[test]
    fn test_list_pending_oldest_month_first_and_excludes_decided() {
        let store = store();
        let march = store
            .add_claim(NewClaimBuilder::new().with_month(MonthFixtures::march()).build())
            .unwrap();
        let january = store
            .add_claim(NewClaimBuilder::new().with_month(MonthFixtures::january()).build())
            .unwrap();
        let rejected = store
            .add_claim(NewClaimBuilder::new().with_month(MonthFixtures::february()).build())
            .unwrap();
        store
            .set_status(rejected.id, &ReviewOutcome::Rejected, ReviewerRole::Coordinator, None)
            .unwrap();

        let pending: Vec<ClaimId> = store.list_pending().unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(pending, vec![january.id, march.id]);
    }

    #[test]
    fn test_list_pending_includes_manual_pending_status() {
        let store = store();
        let claim = store.add_claim(NewClaimBuilder::new().build()).unwrap();
        store
            .set_status(
                claim.id,
                &ReviewOutcome::from("PENDING payroll check"),
                ReviewerRole::AcademicManager,
                None,
            )
            .unwrap();

        let pending = store.list_pending().unwrap();
        assert_eq!(pending.len(), 1);
        assert_all_pending(&pending);
    }

    #[test]
    fn test_list_all_in_id_order() {
        let store = InMemoryClaimStore::new(StoreConfig::new().first_claim_id(3));
        store.add_claim(NewClaimBuilder::new().build()).unwrap();
        store.add_claim(NewClaimBuilder::new().build()).unwrap();

        let ids: Vec<u64> = store.list_all().unwrap().iter().map(|c| c.id.value()).collect();
        assert_eq!(ids, vec![3, 4]);
        assert!(!store.is_empty().unwrap());
    }
}

mod status_transitions {
    use super::*;

    #[test]
    fn test_full_approval_walkthrough() {
        let store = store();
        let claim = store.add_claim(NewClaimBuilder::new().build()).unwrap();

        let claim = store
            .set_status(claim.id, &ReviewOutcome::Approved, ReviewerRole::Coordinator, Some("Verified"))
            .unwrap();
        assert_claim_state(&claim, ClaimStatus::PendingAcademicManagerReview, true, false);

        let claim = store
            .set_status(claim.id, &ReviewOutcome::Approved, ReviewerRole::AcademicManager, None)
            .unwrap();
        assert_claim_state(&claim, ClaimStatus::Approved, true, true);
        assert_eq!(claim.comments().by(ReviewerRole::Coordinator), Some("Verified"));
    }

    #[test]
    fn test_rejection_comment_goes_to_acting_role() {
        let store = store();
        let claim = store.add_claim(NewClaimBuilder::new().build()).unwrap();

        let claim = store
            .set_status(
                claim.id,
                &ReviewOutcome::Rejected,
                ReviewerRole::AcademicManager,
                Some("Rate exceeds contract"),
            )
            .unwrap();

        assert_claim_state(&claim, ClaimStatus::Rejected, false, false);
        assert_eq!(
            claim.comments().by(ReviewerRole::AcademicManager),
            Some("Rate exceeds contract")
        );
        assert_eq!(claim.comments().by(ReviewerRole::Coordinator), None);
    }

    #[test]
    fn test_concurrent_approvals_on_one_claim() {
        let store = Arc::new(store());
        let id = store.add_claim(NewClaimBuilder::new().build()).unwrap().id;

        let handles: Vec<_> = [ReviewerRole::Coordinator, ReviewerRole::AcademicManager]
            .into_iter()
            .map(|role| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store
                        .set_status(id, &ReviewOutcome::Approved, role, None)
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let claim = store.find_by_id(id).unwrap();
        assert_claim_state(&claim, ClaimStatus::Approved, true, true);
    }

    #[test]
    fn test_concurrent_submissions_get_distinct_ids() {
        let store = Arc::new(store());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.add_claim(NewClaimBuilder::new().build()).unwrap().id)
            })
            .collect();

        let mut ids: Vec<ClaimId> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert_eq!(store.len().unwrap(), 8);
    }
}

mod documents {
    use super::*;

    #[test]
    fn test_add_document_links_to_claim() {
        let store = InMemoryClaimStore::new(StoreConfig::new().first_document_id(10));
        let claim = store.add_claim(NewClaimBuilder::new().build()).unwrap();

        let doc = store
            .add_document(NewDocument::new(claim.id, "timesheet.pdf", "application/pdf"))
            .unwrap();
        assert_eq!(doc.id, DocumentId::new(10));

        assert_eq!(store.documents_for_claim(claim.id).unwrap(), vec![doc.clone()]);
        assert_eq!(store.find_document(doc.id).unwrap(), doc);
        assert_eq!(store.find_by_id(claim.id).unwrap().documents(), &[doc]);
    }

    #[test]
    fn test_documents_stay_with_their_claim() {
        let store = store();
        let first = store.add_claim(NewClaimBuilder::new().build()).unwrap();
        let second = store.add_claim(NewClaimBuilder::new().build()).unwrap();

        store
            .add_document(NewDocument::new(first.id, "a.pdf", "application/pdf"))
            .unwrap();
        store
            .add_document(NewDocument::new(second.id, "b.pdf", "application/pdf"))
            .unwrap();
        store
            .add_document(NewDocument::new(first.id, "c.docx", "application/msword"))
            .unwrap();

        let names: Vec<String> = store
            .documents_for_claim(first.id)
            .unwrap()
            .into_iter()
            .map(|d| d.original_file_name)
            .collect();
        assert_eq!(names, vec!["a.pdf", "c.docx"]);
    }

    #[test]
    fn test_documents_for_unknown_claim() {
        assert!(store().documents_for_claim(ClaimId::new(1)).unwrap_err().is_not_found());
    }
}

proptest! {
    #[test]
    fn pending_listing_only_returns_pending(
        claims in proptest::collection::vec(new_claim_strategy(), 1..6),
        steps in proptest::collection::vec((0usize..6, role_strategy(), outcome_strategy()), 0..15)
    ) {
        let store = store();
        let ids: Vec<ClaimId> = claims
            .into_iter()
            .map(|c| store.add_claim(c).unwrap().id)
            .collect();

        for (index, role, outcome) in steps {
            let id = ids[index % ids.len()];
            store.set_status(id, &outcome, role, None).unwrap();
        }

        let pending = store.list_pending().unwrap();
        for claim in &pending {
            prop_assert!(claim.status().as_str().to_ascii_lowercase().starts_with("pending"));
        }
        let months: Vec<_> = pending.iter().map(|c| c.month).collect();
        let mut sorted = months.clone();
        sorted.sort();
        prop_assert_eq!(months, sorted);
    }

    #[test]
    fn stored_total_matches_items(claim in new_claim_strategy()) {
        let stored = store().add_claim(claim).unwrap();
        assert_total_matches_items(&stored);
    }
}
