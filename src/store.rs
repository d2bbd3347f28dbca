//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Owned by the
//! page controller; components only read snapshots.

use leptos::prelude::*;
use milestone_core::Milestone;
use reactive_stores::Store;

/// Milestones page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Collection as last fetched or patched
    pub milestones: Vec<Milestone>,
    /// Initial or reload fetch in flight
    pub loading: bool,
    /// Message of the last failed fetch
    pub load_error: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_milestones(store: &AppStore) -> Vec<Milestone> {
    store.milestones().get()
}

pub fn store_milestones_untracked(store: &AppStore) -> Vec<Milestone> {
    store.milestones().get_untracked()
}

/// Replace the whole collection (fetch result or reconciled list)
pub fn store_replace_milestones(store: &AppStore, milestones: Vec<Milestone>) {
    store.milestones().set(milestones);
    store.load_error().set(None);
}

pub fn store_loading(store: &AppStore) -> bool {
    store.loading().get()
}

pub fn store_set_loading(store: &AppStore, loading: bool) {
    store.loading().set(loading);
}

pub fn store_load_error(store: &AppStore) -> Option<String> {
    store.load_error().get()
}

pub fn store_set_load_error(store: &AppStore, message: Option<String>) {
    store.load_error().set(message);
}
