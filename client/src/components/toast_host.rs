//! Stack of transient notices in the corner of the screen.

use leptos::prelude::*;
use sitecraft::collab::NoticeKind;

use crate::state::toasts::ToastState;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For each=move || toasts.get().items key=|toast| toast.id let:toast>
                <div
                    class="toast"
                    class:toast--success=toast.kind == NoticeKind::Success
                    class:toast--error=toast.kind == NoticeKind::Error
                >
                    <span class="toast__message">{toast.message.clone()}</span>
                    <button
                        class="toast__close"
                        aria-label="Dismiss"
                        on:click=move |_| toasts.update(|t| t.dismiss(toast.id))
                    >
                        "✕"
                    </button>
                </div>
            </For>
        </div>
    }
}
