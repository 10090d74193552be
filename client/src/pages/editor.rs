//! Editor page: palette, canvas and property panel around one `EditorCore`.
//!
//! ARCHITECTURE
//! ============
//! The page creates the core for the routed project and provides it as an
//! `RwSignal<EditorCore>` context. Child components forward DOM events to
//! core methods; nothing else mutates the page. Save and back go through the
//! toast notifier and route navigator so the core stays host-agnostic.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use sitecraft::config::EditorConfig;
use sitecraft::engine::EditorCore;

use crate::components::component_palette::ComponentPalette;
use crate::components::editor_toolbar::EditorToolbar;
use crate::components::page_canvas::PageCanvas;
use crate::components::property_panel::PropertyPanel;
use crate::state::auth::AuthState;
use crate::state::toasts::ToastState;
use crate::util::auth::install_unauth_redirect;
use crate::util::collab::{RouteNavigator, ToastNotifier};

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

#[component]
pub fn EditorPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let params = use_params_map();
    let project_id = params.with_untracked(|p| p.get("project_id")).unwrap_or_default();
    let editor = RwSignal::new(EditorCore::new(project_id, editor_config()));
    provide_context(editor);

    let notifier = ToastNotifier::new(toasts);
    let navigator = RouteNavigator::new(navigate, "/dashboard");

    let on_save = Callback::new(move |()| {
        if let Err(e) = editor.with_untracked(|core| core.save(&notifier)) {
            log::warn!("save failed: {e}");
        }
    });
    let on_back = Callback::new(move |()| {
        editor.with_untracked(|core| {
            core.go_back(&navigator);
        });
    });

    let editing = move || editor.with(|e| e.mode().is_interactive());

    view! {
        <div class="editor-page">
            <EditorToolbar on_back=on_back on_save=on_save/>
            <div class="editor-page__body" class:editor-page__body--preview=move || !editing()>
                <Show when=editing>
                    <ComponentPalette/>
                </Show>
                <PageCanvas/>
                <Show when=editing>
                    <PropertyPanel/>
                </Show>
            </div>
        </div>
    }
}

/// Every project opens on the starter page.
fn editor_config() -> EditorConfig {
    EditorConfig { seed_starter_content: true, ..EditorConfig::default() }
}
