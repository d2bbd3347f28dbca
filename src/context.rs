//! Application Context
//!
//! Shared page signals provided via Leptos Context API.

use chrono::{DateTime, NaiveDate, TimeZone};
use leptos::prelude::*;
use milestone_core::{today_from, EditorState, Milestone};

/// Page-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch milestones - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch milestones - write
    set_reload_trigger: WriteSignal<u32>,
    /// Create/edit modal state
    pub editor: RwSignal<EditorState>,
    /// Calendar day used to derive Overdue, moved forward on every load
    pub today: RwSignal<NaiveDate>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        editor: RwSignal<EditorState>,
        today: NaiveDate,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            editor,
            today: RwSignal::new(today),
        }
    }

    /// Trigger a refetch of the collection
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Re-derive today from `now`; only notifies when the day changed
    pub fn refresh_today<Tz: TimeZone>(&self, now: DateTime<Tz>) {
        let day = today_from(now);
        if self.today.get_untracked() != day {
            self.today.set(day);
        }
    }

    pub fn open_create(&self) {
        self.editor.update(EditorState::open_create);
    }

    pub fn open_edit(&self, milestone: Milestone) {
        self.editor.update(|state| state.open_edit(milestone));
    }

    pub fn cancel_edit(&self) {
        self.editor.update(EditorState::cancel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use milestone_core::{EffectiveStatus, StoredStatus};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_refresh_today_crosses_midnight() {
        let ctx = AppContext::new(signal(0), RwSignal::new(EditorState::default()), day(2025, 1, 1));
        let overdue_tomorrow = Milestone::new("1", "Ship", "2025-01-01", StoredStatus::Pending);

        assert_eq!(
            overdue_tomorrow.effective_status(ctx.today.get_untracked()),
            EffectiveStatus::Pending
        );

        ctx.refresh_today(Utc.with_ymd_and_hms(2025, 1, 2, 0, 5, 0).unwrap());

        assert_eq!(ctx.today.get_untracked(), day(2025, 1, 2));
        assert_eq!(
            overdue_tomorrow.effective_status(ctx.today.get_untracked()),
            EffectiveStatus::Overdue
        );
    }
}
