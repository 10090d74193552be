use leptos::prelude::*;

use crate::state::projects::Template;

/// Clickable template tile in the "Choose a Template" grid.
#[component]
pub fn TemplateCard(template: Template, on_pick: Callback<String>) -> impl IntoView {
    let id = template.id.to_owned();
    view! {
        <button class="template-card" on:click=move |_| on_pick.run(id.clone())>
            <img class="template-card__thumb" src=template.thumbnail alt=template.name/>
            <span class="template-card__body">
                <h3>{template.name}</h3>
                <p>{template.description}</p>
                <span class="template-card__category">{template.category}</span>
            </span>
        </button>
    }
}
