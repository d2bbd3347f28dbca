//! Milestone Card Component
//!
//! One milestone in the grid: title, due date, effective status, and the
//! toggle/edit actions.

use leptos::prelude::*;
use milestone_core::{Milestone, StoredStatus};

use super::StatusBadge;
use crate::context::AppContext;

/// Label of the completion toggle for a stored status
fn toggle_label(status: StoredStatus) -> &'static str {
    match status {
        StoredStatus::Pending => "Mark Completed",
        StoredStatus::Completed => "Mark Pending",
    }
}

#[component]
pub fn MilestoneCard(
    milestone: Milestone,
    #[prop(into)] on_edit: Callback<Milestone>,
    #[prop(into)] on_toggle: Callback<Milestone>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let for_badge = milestone.clone();
    let label = toggle_label(milestone.status);
    let title = milestone.title.clone();
    let due_date = milestone.due_date.clone();
    let for_toggle = milestone.clone();
    let for_edit = milestone;

    view! {
        <div class="milestone-card">
            <h3 class="milestone-title">{title}</h3>
            <p class="milestone-due">"Due: " {due_date}</p>
            {move || view! { <StatusBadge status=for_badge.effective_status(ctx.today.get()) /> }}
            <div class="card-actions">
                <button
                    class="toggle-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_toggle.run(for_toggle.clone());
                    }
                >
                    {label}
                </button>
                <button
                    class="edit-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_edit.run(for_edit.clone());
                    }
                >
                    "Edit"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label_follows_stored_status() {
        assert_eq!(toggle_label(StoredStatus::Pending), "Mark Completed");
        assert_eq!(toggle_label(StoredStatus::Completed), "Mark Pending");
    }
}
