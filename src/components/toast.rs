//! Toast Notifications
//!
//! Short-lived success/error messages stacked in a corner. Each toast
//! dismisses itself after a few seconds or on click.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const TOAST_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: u32,
    kind: ToastKind,
    message: String,
}

/// Handle to the toast list, provided via context
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u32) {
        // The host may already be gone when a timer fires
        self.items.try_update(|items| items.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        self.next_id.update_value(|id| *id += 1);
        let id = self.next_id.get_value();
        self.items.update(|items| items.push(Toast { id, kind, message }));

        let toasts = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            toasts.dismiss(id);
        });
    }
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Renders the current toasts
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-host">
            {move || toasts.items.get().into_iter().map(|toast| {
                let id = toast.id;
                view! {
                    <div class=toast.kind.class() role="status" on:click=move |_| toasts.dismiss(id)>
                        {toast.message}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
