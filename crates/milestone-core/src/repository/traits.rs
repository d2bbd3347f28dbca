//! Repository Layer - Core Traits
//!
//! Futures are not `Send`: the browser fetch they wrap lives on one thread.

use async_trait::async_trait;

use crate::domain::{Milestone, MilestoneRecord, MilestoneResult};
use crate::reconcile::reconcile;

/// Remote source of truth for milestones
#[async_trait(?Send)]
pub trait MilestoneRepository {
    /// Fetch the whole collection
    async fn list(&self) -> MilestoneResult<Vec<Milestone>>;

    /// Create (no id) or update (id) a milestone, returning what was stored
    async fn upsert(&self, record: &MilestoneRecord) -> MilestoneResult<Milestone>;
}

/// Save `record`, then merge the stored result into the list returned by
/// `current`.
///
/// `current` is only called once the upsert has finished, so saves that
/// overlap each merge into the latest list instead of a copy taken before
/// the request. On failure it is never called and the error carries the
/// attempted operation.
pub async fn save_and_reconcile<R, F>(
    repo: &R,
    record: &MilestoneRecord,
    current: F,
) -> MilestoneResult<(Milestone, Vec<Milestone>)>
where
    R: MilestoneRepository + ?Sized,
    F: FnOnce() -> Vec<Milestone>,
{
    let saved = repo.upsert(record).await?;
    let next = reconcile(&current(), saved.clone(), record.op().is_update());
    log::info!("saved milestone {} ({})", saved.id, record.op());
    Ok((saved, next))
}
