//! List Reconciliation
//!
//! Merges a freshly saved record into the in-memory collection.

use crate::domain::Entity;

/// Replace matching entries (update) or append (create).
///
/// `current` is left untouched; the result is a fresh vector so observers
/// holding the old snapshot keep seeing it.
pub fn reconcile<T: Entity>(current: &[T], saved: T, was_update: bool) -> Vec<T> {
    if !was_update {
        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend_from_slice(current);
        next.push(saved);
        return next;
    }

    let id = saved.id();
    current
        .iter()
        .map(|item| if item.id() == id { saved.clone() } else { item.clone() })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Milestone, StoredStatus};

    fn make_milestone(id: &str, title: &str) -> Milestone {
        Milestone::new(id, title, "2025-01-01", StoredStatus::Pending)
    }

    fn sample() -> Vec<Milestone> {
        vec![
            make_milestone("1", "Launch Website"),
            make_milestone("7", "Eat Pizza"),
            make_milestone("3", "Drink Coke"),
        ]
    }

    #[test]
    fn test_update_replaces_in_place() {
        let current = sample();
        let saved = make_milestone("7", "Eat More Pizza").with_status(StoredStatus::Completed);

        let next = reconcile(&current, saved.clone(), true);

        assert_eq!(next.len(), current.len());
        assert_eq!(next[0], current[0]);
        assert_eq!(next[1], saved);
        assert_eq!(next[2], current[2]);
        // input untouched
        assert_eq!(current[1].title, "Eat Pizza");
    }

    #[test]
    fn test_create_appends() {
        let current = sample();
        let saved = make_milestone("9", "Ship");

        let next = reconcile(&current, saved.clone(), false);

        assert_eq!(next.len(), current.len() + 1);
        assert_eq!(&next[..3], &current[..]);
        assert_eq!(next[3], saved);
    }

    #[test]
    fn test_update_unknown_id_changes_nothing() {
        let current = sample();
        let next = reconcile(&current, make_milestone("404", "Ghost"), true);
        assert_eq!(next, current);
    }

    #[test]
    fn test_create_into_empty_list() {
        let next = reconcile(&[], make_milestone("1", "First"), false);
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].id, "1");
    }
}
