//! Property panel editing the selected block.
//!
//! ARCHITECTURE
//! ============
//! Inputs read from the editor's property mirror and write back through
//! `EditorCore::set_content` / `set_style_property`, so the canvas and the
//! panel always show the same values.

use leptos::prelude::*;
use sitecraft::consts::{STYLE_COLOR, STYLE_FONT_SIZE};
use sitecraft::engine::EditorCore;

#[component]
pub fn PropertyPanel() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorCore>>();

    let has_selection = move || editor.with(|e| e.selected().is_some());
    let content = move || editor.with(|e| e.selected().map(|c| c.content.clone()).unwrap_or_default());
    let style = move |property: &'static str| {
        move || editor.with(|e| e.selected().map(|c| c.style_value(property).to_owned()).unwrap_or_default())
    };
    let set_style = move |property: &'static str| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            editor.update(|e| {
                e.set_style_property(property, &value);
            });
        }
    };

    view! {
        <aside class="property-panel">
            <h2 class="property-panel__title">"Properties"</h2>
            <Show
                when=has_selection
                fallback=|| view! { <p class="property-panel__empty">"Select a component to edit its properties"</p> }
            >
                <label class="property-panel__label">
                    "Content"
                    <textarea
                        class="property-panel__input"
                        rows="3"
                        prop:value=content
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            editor.update(|e| {
                                e.set_content(&value);
                            });
                        }
                    ></textarea>
                </label>
                <label class="property-panel__label">
                    "Font Size"
                    <input
                        class="property-panel__input"
                        type="text"
                        prop:value=style(STYLE_FONT_SIZE)
                        on:input=set_style(STYLE_FONT_SIZE)
                    />
                </label>
                <label class="property-panel__label">
                    "Color"
                    <input
                        class="property-panel__input"
                        type="text"
                        prop:value=style(STYLE_COLOR)
                        on:input=set_style(STYLE_COLOR)
                    />
                </label>
            </Show>
        </aside>
    }
}
