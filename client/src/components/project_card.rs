//! Card for one project on the dashboard.

use leptos::prelude::*;

use crate::state::projects::{Project, ProjectStatus};

#[component]
pub fn ProjectCard(project: Project, on_edit: Callback<String>, on_delete: Callback<String>) -> impl IntoView {
    let status_class = match project.status {
        ProjectStatus::Published => "project-card__status project-card__status--published",
        ProjectStatus::Draft => "project-card__status project-card__status--draft",
    };
    let visit = project.visit_url().map(str::to_owned);
    let edit_id = project.id.clone();
    let delete_id = project.id.clone();

    view! {
        <div class="project-card">
            <div class="project-card__header">
                <h3 class="project-card__name">{project.name.clone()}</h3>
                <span class=status_class>{project.status.label()}</span>
            </div>
            <p class="project-card__template">{format!("Template: {}", project.template)}</p>
            <p class="project-card__edited">{format!("Last edited: {}", project.last_edited)}</p>
            <div class="project-card__actions">
                <button class="btn btn--small" on:click=move |_| on_edit.run(edit_id.clone())>
                    "Edit"
                </button>
                {visit.map(|url| {
                    view! {
                        <a class="btn btn--small" href=url target="_blank" rel="noopener">
                            "Visit"
                        </a>
                    }
                })}
                <button class="btn btn--small" disabled=true title="Settings">
                    "Settings"
                </button>
                <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
