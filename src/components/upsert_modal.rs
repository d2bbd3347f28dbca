//! Upsert Milestone Modal
//!
//! Create/edit form shown while the editor is open. Validation errors come
//! from the editor state and render inline under each field.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use milestone_core::{EditorState, FormField, MilestoneForm};

use crate::context::AppContext;

/// Current value of the input that fired `ev`
fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Modal wrapper; the body is rebuilt each time the editor opens
#[component]
pub fn UpsertModal(#[prop(into)] on_submit: Callback<MilestoneForm>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let editor = ctx.editor;

    view! {
        <Show when=move || editor.with(EditorState::is_open)>
            <ModalBody on_submit=on_submit />
        </Show>
    }
}

#[component]
fn ModalBody(on_submit: Callback<MilestoneForm>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let editor = ctx.editor;

    let initial = editor.with_untracked(EditorState::initial_form);
    let (title, set_title) = signal(initial.title);
    let (due_date, set_due_date) = signal(initial.due_date);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(MilestoneForm::new(title.get_untracked(), due_date.get_untracked()));
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>{move || editor.with(EditorState::heading)}</h2>

                <form class="milestone-form" on:submit=submit>
                    <div class="form-field">
                        <label for="title">{FormField::Title.label()}</label>
                        <input
                            id="title"
                            name="title"
                            type="text"
                            placeholder="Enter milestone title"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(input_value(&ev))
                        />
                        <FieldErrorText field=FormField::Title />
                    </div>

                    <div class="form-field">
                        <label for="dueDate">{FormField::DueDate.label()}</label>
                        <input
                            id="dueDate"
                            name="dueDate"
                            type="date"
                            prop:value=move || due_date.get()
                            on:input=move |ev| set_due_date.set(input_value(&ev))
                        />
                        <FieldErrorText field=FormField::DueDate />
                    </div>

                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| ctx.cancel_edit()>
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="save-btn"
                            disabled=move || editor.with(EditorState::is_submitting)
                        >
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Inline error for one field, if any
#[component]
fn FieldErrorText(field: FormField) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    move || {
        ctx.editor
            .with(|state| state.field_error(field))
            .map(|message| view! { <div class="field-error">{message}</div> })
    }
}
