//! Repository Layer
//!
//! Where milestones are listed from and saved to. The browser client talks
//! HTTP; tests use the in-memory store.

mod memory;
mod traits;

#[cfg(test)]
mod tests;

pub use memory::InMemoryMilestoneRepository;
pub use traits::{save_and_reconcile, MilestoneRepository};
