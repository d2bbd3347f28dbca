//! Milestones Service Client
//!
//! Frontend bindings to the remote milestones HTTP API.

mod milestones;

pub use milestones::HttpMilestoneRepository;
