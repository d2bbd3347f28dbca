//! Milestone Core
//!
//! Host-testable rules behind the milestones web client: effective status,
//! create-vs-update planning, list reconciliation, form checks and the
//! editor flow. Nothing in here touches the browser.

pub mod config;
pub mod domain;
pub mod editor;
pub mod form;
pub mod lifetime;
pub mod reconcile;
pub mod repository;
pub mod status;
pub mod upsert;

pub use config::ApiConfig;
pub use domain::{
    EffectiveStatus, Entity, Milestone, MilestoneError, MilestoneRecord, MilestoneResult,
    NewMilestone, SaveOp, StoredStatus,
};
pub use editor::{EditorState, Submission};
pub use form::{FieldError, FieldErrors, FormField, MilestoneForm};
pub use lifetime::{LivenessToken, ViewLifetime};
pub use reconcile::reconcile;
pub use repository::{save_and_reconcile, InMemoryMilestoneRepository, MilestoneRepository};
pub use status::{parse_due_date, resolve_status, today_from};
pub use upsert::{plan_upsert, resource_path, UpsertPlan};
