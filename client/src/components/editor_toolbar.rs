//! Top bar for the editor page.

use leptos::prelude::*;
use sitecraft::engine::EditorCore;

/// Back, mode toggle and save controls.
///
/// `on_back` and `on_save` are supplied by the page, which holds the
/// navigator and notifier the engine calls into.
#[component]
pub fn EditorToolbar(on_back: Callback<()>, on_save: Callback<()>) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorCore>>();
    let toggle_label = move || editor.with(|e| e.mode().toggle_label());

    view! {
        <header class="editor-toolbar">
            <button class="btn" on:click=move |_| on_back.run(())>
                "← Back to Dashboard"
            </button>
            <h1 class="editor-toolbar__title">"Website Editor"</h1>
            <span class="editor-toolbar__spacer"></span>
            <button
                class="btn"
                on:click=move |_| {
                    editor.update(|e| {
                        e.toggle_mode();
                    });
                }
            >
                {toggle_label}
            </button>
            <button class="btn btn--primary" on:click=move |_| on_save.run(())>
                "Save Changes"
            </button>
        </header>
    }
}
