//! Repository Integration Tests
//!
//! Save-then-reconcile against the in-memory store.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::domain::{
    Milestone, MilestoneError, MilestoneRecord, MilestoneResult, NewMilestone, SaveOp, StoredStatus,
};
use crate::editor::{EditorState, Submission};
use crate::form::MilestoneForm;
use crate::repository::{save_and_reconcile, InMemoryMilestoneRepository, MilestoneRepository};

fn seeded() -> InMemoryMilestoneRepository {
    InMemoryMilestoneRepository::with_items(vec![
        Milestone::new("1", "Launch Website", "2023-10-15", StoredStatus::Completed),
        Milestone::new("7", "Eat Pizza", "2023-10-15", StoredStatus::Pending),
    ])
}

/// Hands control back to the executor before each save, like a network round trip
struct Slow<'a>(&'a InMemoryMilestoneRepository);

#[async_trait(?Send)]
impl MilestoneRepository for Slow<'_> {
    async fn list(&self) -> MilestoneResult<Vec<Milestone>> {
        self.0.list().await
    }

    async fn upsert(&self, record: &MilestoneRecord) -> MilestoneResult<Milestone> {
        tokio::task::yield_now().await;
        self.0.upsert(record).await
    }
}

/// Save and write the merged list back, the way the page does
async fn save_into<R: MilestoneRepository>(repo: &R, shown: &RefCell<Vec<Milestone>>, record: MilestoneRecord) {
    let (_, next) = save_and_reconcile(repo, &record, || shown.borrow().clone())
        .await
        .expect("Save failed");
    *shown.borrow_mut() = next;
}

#[tokio::test]
async fn test_list_returns_collection() {
    let repo = seeded();
    let items = repo.list().await.expect("List failed");
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].id, "7");
}

#[tokio::test]
async fn test_create_appends_with_server_id() {
    let repo = seeded();
    let current = repo.list().await.unwrap();
    let record = MilestoneRecord::from(NewMilestone::new("Ship", "2025-06-01"));

    let (saved, next) = save_and_reconcile(&repo, &record, || current.clone()).await.expect("Create failed");

    assert_eq!(saved.id, "8");
    assert_eq!(saved.status, StoredStatus::Pending);
    assert_eq!(next.len(), current.len() + 1);
    assert_eq!(next.last(), Some(&saved));
}

#[tokio::test]
async fn test_update_replaces_matching_record() {
    let repo = seeded();
    let current = repo.list().await.unwrap();
    let record = MilestoneRecord::from(Milestone::new("7", "Eat Pizza", "2023-10-15", StoredStatus::Completed));

    let (saved, next) = save_and_reconcile(&repo, &record, || current.clone()).await.expect("Update failed");

    assert_eq!(next.len(), current.len());
    assert_eq!(next[0], current[0]);
    assert_eq!(next[1], saved);
    assert_eq!(repo.snapshot()[1].status, StoredStatus::Completed);
}

#[tokio::test]
async fn test_update_unknown_id_fails_as_update() {
    let repo = seeded();
    let record = MilestoneRecord::from(Milestone::new("99", "Ghost", "2025-01-01", StoredStatus::Pending));

    let err = repo.upsert(&record).await.unwrap_err();
    assert!(matches!(err, MilestoneError::SaveFailed { op: SaveOp::Update, .. }));
}

#[tokio::test]
async fn test_failed_save_leaves_list_alone() {
    let repo = seeded();
    let current = repo.list().await.unwrap();
    repo.set_failing(true);

    let record = MilestoneRecord::from(NewMilestone::new("Ship", "2025-06-01"));
    let err = save_and_reconcile(&repo, &record, || current.clone()).await.unwrap_err();

    assert_eq!(err.user_message(), "Failed to create milestone");
    assert_eq!(current.len(), 2);
    assert_eq!(repo.snapshot().len(), 2);
}

#[tokio::test]
async fn test_failed_fetch_is_fetch_error() {
    let repo = seeded();
    repo.set_failing(true);
    let err = repo.list().await.unwrap_err();
    assert!(matches!(err, MilestoneError::FetchFailed { .. }));
}

#[tokio::test]
async fn test_invalid_form_never_reaches_repository() {
    let repo = seeded();
    let mut editor = EditorState::default();
    editor.open_create();

    if let Submission::Ready(record) = editor.submit(&MilestoneForm::new("", "")) {
        repo.upsert(&record).await.unwrap();
    }

    assert_eq!(repo.request_count(), 0);
    assert!(editor.is_open());
}

#[tokio::test]
async fn test_toggle_completion_saves_flipped_status() {
    let repo = seeded();
    let current = repo.list().await.unwrap();
    let record = MilestoneRecord::from(current[1].toggled());

    let (saved, next) = save_and_reconcile(&repo, &record, || current.clone()).await.unwrap();

    assert_eq!(saved.status, StoredStatus::Completed);
    assert_eq!(next[1].status, StoredStatus::Completed);
}

#[tokio::test]
async fn test_overlapping_saves_keep_both_results() {
    let repo = seeded();
    let slow = Slow(&repo);
    let shown = RefCell::new(repo.list().await.unwrap());
    let first = MilestoneRecord::from(shown.borrow()[0].toggled());
    let second = MilestoneRecord::from(shown.borrow()[1].toggled());

    tokio::join!(save_into(&slow, &shown, first), save_into(&slow, &shown, second));

    let shown = shown.into_inner();
    assert_eq!(shown[0].status, StoredStatus::Pending);
    assert_eq!(shown[1].status, StoredStatus::Completed);
    assert_eq!(shown, repo.snapshot());
}

#[tokio::test]
async fn test_failed_save_never_reads_list() {
    let repo = seeded();
    repo.set_failing(true);
    let record = MilestoneRecord::from(NewMilestone::new("Ship", "2025-06-01"));

    let result = save_and_reconcile(&repo, &record, || panic!("list read after failed save")).await;
    assert!(result.is_err());
}
