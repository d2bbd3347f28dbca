//! Empty List Placeholder

use leptos::prelude::*;

#[component]
pub fn EmptyPlaceholder() -> impl IntoView {
    view! {
        <div class="empty-placeholder">
            <div class="empty-icon">"+"</div>
            <h2>"No milestones yet"</h2>
            <p>"Start by creating your first milestone to track progress."</p>
        </div>
    }
}
