//! UI Components
//!
//! Reusable Leptos components.

mod empty_placeholder;
mod milestone_card;
mod status_badge;
mod toast;
mod upsert_modal;

pub use empty_placeholder::EmptyPlaceholder;
pub use milestone_card::MilestoneCard;
pub use status_badge::StatusBadge;
pub use toast::{use_toasts, ToastHost, Toasts};
pub use upsert_modal::UpsertModal;
