//! Domain Layer
//!
//! Milestone entity, status types and the error vocabulary.
//! No browser or network dependencies live here.

mod entity;
mod milestone;

pub use entity::{Entity, MilestoneError, MilestoneResult, SaveOp};
pub use milestone::{EffectiveStatus, Milestone, MilestoneRecord, NewMilestone, StoredStatus};
