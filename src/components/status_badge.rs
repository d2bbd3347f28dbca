//! Status Badge Component

use leptos::prelude::*;
use milestone_core::EffectiveStatus;

/// CSS classes for each effective status
pub fn badge_class(status: EffectiveStatus) -> &'static str {
    match status {
        EffectiveStatus::Pending => "status-badge pending",
        EffectiveStatus::Completed => "status-badge completed",
        EffectiveStatus::Overdue => "status-badge overdue",
    }
}

/// Pill showing the effective status of a milestone
#[component]
pub fn StatusBadge(status: EffectiveStatus) -> impl IntoView {
    view! {
        <span class=badge_class(status)>{status.as_str()}</span>
    }
}
