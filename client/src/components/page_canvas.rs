//! Canvas rendering the page and accepting palette drops.

use leptos::prelude::*;
use sitecraft::engine::EditorCore;
use sitecraft::render::{RenderBlock, RenderItem};

#[component]
pub fn PageCanvas() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorCore>>();

    view! {
        <main
            class="page-canvas"
            class:page-canvas--preview=move || !editor.with(|e| e.mode().is_interactive())
            on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
            on:drop=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                editor.update(|e| {
                    e.drop_pending();
                });
            }
        >
            {move || {
                editor
                    .with(EditorCore::render_items)
                    .into_iter()
                    .map(|item| view! { <CanvasBlock item=item/> })
                    .collect::<Vec<_>>()
            }}
        </main>
    }
}

/// One placed block with its selection outline and inline style.
#[component]
fn CanvasBlock(item: RenderItem) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorCore>>();
    let RenderItem { id, block, style, selected, interactive } = item;

    let body = match block {
        RenderBlock::Heading(text) => view! { <h2>{text}</h2> }.into_any(),
        RenderBlock::Paragraph(text) => view! { <p>{text}</p> }.into_any(),
        RenderBlock::Image { src } => view! { <img class="page-canvas__image" src=src alt="Content"/> }.into_any(),
        RenderBlock::Button { label } => view! { <button class="page-canvas__button">{label}</button> }.into_any(),
    };

    view! {
        <div
            class="page-canvas__block"
            class:page-canvas__block--interactive=interactive
            class:page-canvas__block--selected=selected
            style=style
            on:click=move |_| {
                if interactive {
                    editor.update(|e| {
                        e.select(&id);
                    });
                }
            }
        >
            {body}
        </div>
    }
}
