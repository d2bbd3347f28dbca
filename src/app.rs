//! Milestones Frontend App
//!
//! Page controller: owns the collection, the editor state and the view
//! lifetime, and wires fetch/save results back into them.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use milestone_core::{
    save_and_reconcile, today_from, EditorState, Milestone, MilestoneForm, MilestoneRecord,
    MilestoneRepository, Submission, ViewLifetime,
};

use crate::api::HttpMilestoneRepository;
use crate::components::{EmptyPlaceholder, MilestoneCard, ToastHost, Toasts, UpsertModal};
use crate::context::AppContext;
use crate::store::{
    store_load_error, store_loading, store_milestones, store_milestones_untracked,
    store_replace_milestones, store_set_load_error, store_set_loading, AppState,
};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let toasts = Toasts::new();
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let editor = RwSignal::new(EditorState::default());
    let today = today_from(chrono::Local::now());

    let ctx = AppContext::new((reload_trigger, set_reload_trigger), editor, today);
    provide_context(ctx);
    provide_context(toasts);

    // Late completions after teardown are dropped
    let lifetime = ViewLifetime::new();
    let token = lifetime.token();
    on_cleanup(move || lifetime.end());

    // Load milestones on mount and whenever a reload is triggered
    let load_token = token.clone();
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let token = load_token.clone();
        log::debug!("[APP] loading milestones, trigger={}", trigger);
        ctx.refresh_today(chrono::Local::now());
        store_set_loading(&store, true);

        spawn_local(async move {
            let result = HttpMilestoneRepository::from_env().list().await;
            token.run_if_alive(|| {
                match result {
                    Ok(loaded) => store_replace_milestones(&store, loaded),
                    Err(err) => {
                        log::warn!("[APP] {}", err);
                        store_set_load_error(&store, Some(err.user_message()));
                        toasts.error(err.user_message());
                    }
                }
                store_set_loading(&store, false);
            });
        });
    });

    // Save a record, then merge the stored result into the collection as it
    // is when the response arrives. `from_editor` ties the outcome to the modal.
    let persist = move |record: MilestoneRecord, from_editor: bool| {
        let token = token.clone();
        spawn_local(async move {
            let repo = HttpMilestoneRepository::from_env();
            let latest = || {
                token
                    .run_if_alive(|| store_milestones_untracked(&store))
                    .unwrap_or_default()
            };
            let result = save_and_reconcile(&repo, &record, latest).await;

            token.run_if_alive(|| match result {
                Ok((saved, next)) => {
                    store_replace_milestones(&store, next);
                    if from_editor {
                        editor.update(EditorState::save_succeeded);
                    }
                    toasts.success(format!("Saved \"{}\"", saved.title));
                }
                Err(err) => {
                    log::warn!("[APP] {}", err);
                    if from_editor {
                        editor.update(EditorState::save_failed);
                    }
                    toasts.error(err.user_message());
                }
            });
        });
    };

    let persist_form = persist.clone();
    let on_submit = Callback::new(move |form: MilestoneForm| {
        let Some(submission) = editor.try_update(|state| state.submit(&form)) else {
            return;
        };
        match submission {
            Submission::Ready(record) => persist_form(record, true),
            Submission::Rejected(errors) => log::debug!("[APP] form rejected: {}", errors),
            Submission::Ignored => {}
        }
    });

    let on_toggle = Callback::new(move |milestone: Milestone| {
        persist(MilestoneRecord::from(milestone.toggled()), false);
    });

    let on_edit = Callback::new(move |milestone: Milestone| ctx.open_edit(milestone));

    view! {
        <div class="app-layout">
            <header class="page-header">
                <h1>"Milestones"</h1>
                <div class="header-actions">
                    <button class="refresh-btn" on:click=move |_| ctx.reload()>"Refresh"</button>
                    <button class="new-btn" on:click=move |_| ctx.open_create()>"New Milestone"</button>
                </div>
            </header>

            <main class="main-content">
                {move || store_load_error(&store).map(|message| view! {
                    <p class="load-error">{message}</p>
                })}

                {move || {
                    if store_loading(&store) {
                        return view! { <p class="loading">"Loading milestones..."</p> }.into_any();
                    }
                    let milestones = store_milestones(&store);
                    if milestones.is_empty() {
                        return view! { <EmptyPlaceholder /> }.into_any();
                    }
                    view! {
                        <div class="milestone-grid">
                            {milestones.into_iter().map(|milestone| view! {
                                <MilestoneCard milestone=milestone on_edit=on_edit on_toggle=on_toggle />
                            }).collect_view()}
                        </div>
                    }.into_any()
                }}

                <p class="milestone-count">
                    {move || format!("{} milestones", store_milestones(&store).len())}
                </p>
            </main>

            <UpsertModal on_submit=on_submit />
            <ToastHost />
        </div>
    }
}
