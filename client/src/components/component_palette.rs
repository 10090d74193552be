//! Palette of draggable component kinds.
//!
//! A drag start records the kind in the editor's drag slot. The browser's
//! `DataTransfer` also gets the kind symbol since some browsers refuse to
//! start a drag without data, but the drop handler reads the slot only.

use leptos::prelude::*;
use sitecraft::engine::EditorCore;
use sitecraft::registry::ComponentKind;

#[component]
pub fn ComponentPalette() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorCore>>();
    let entries = move || editor.with(EditorCore::palette);

    view! {
        <aside class="palette">
            <h2 class="palette__title">"Components"</h2>
            <div class="palette__list">
                {move || {
                    entries()
                        .into_iter()
                        .map(|entry| {
                            let kind = entry.kind;
                            view! {
                                <div
                                    class="palette__item"
                                    draggable="true"
                                    on:dragstart=move |ev: leptos::ev::DragEvent| {
                                        set_drag_data(&ev, kind);
                                        editor.update(|e| {
                                            e.drag_start(kind);
                                        });
                                    }
                                    on:dragend=move |_| editor.update(EditorCore::drag_cancel)
                                >
                                    <span class="palette__icon">{icon(kind)}</span>
                                    <span class="palette__label">{entry.label}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </aside>
    }
}

fn icon(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::Heading | ComponentKind::Paragraph => "T",
        ComponentKind::Image => "▣",
        ComponentKind::Button => "□",
    }
}

#[cfg(feature = "csr")]
fn set_drag_data(ev: &leptos::ev::DragEvent, kind: ComponentKind) {
    if let Some(transfer) = ev.data_transfer() {
        if transfer.set_data("text/plain", kind.as_str()).is_err() {
            log::warn!("drag data rejected for {kind}");
        }
    }
}

#[cfg(not(feature = "csr"))]
fn set_drag_data(_ev: &leptos::ev::DragEvent, _kind: ComponentKind) {}
