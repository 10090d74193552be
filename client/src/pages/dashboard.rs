//! Dashboard page listing projects with the template picker.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use sitecraft::collab;

use crate::components::project_card::ProjectCard;
use crate::components::template_card::TemplateCard;
use crate::state::auth::AuthState;
use crate::state::projects::{ProjectsState, templates};
use crate::util::auth::install_unauth_redirect;

/// Dashboard page: greeting, project grid and "Create New Website".
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let greeting = move || collab::greeting(&auth.get());
    let showing_templates = move || projects.get().show_templates;

    let on_pick_template = Callback::new({
        let navigate = navigate.clone();
        move |template_id: String| {
            let today = today();
            let created = projects.try_update(|p| p.create_from_template(&template_id, &today)).flatten();
            if let Some(project) = created {
                navigate(&format!("/editor/{}", project.id), NavigateOptions::default());
            }
        }
    });
    let on_edit = Callback::new(move |project_id: String| {
        navigate(&format!("/editor/{project_id}"), NavigateOptions::default());
    });
    let on_delete = Callback::new(move |project_id: String| {
        projects.update(|p| {
            p.delete(&project_id);
        });
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <h1>{greeting}</h1>
                    <p class="dashboard-page__subtitle">"Manage your websites and create new ones"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| projects.update(|p| p.show_templates = true)>
                    "+ Create New Website"
                </button>
            </header>

            <Show
                when=showing_templates
                fallback=move || {
                    view! {
                        <section class="dashboard-page__section">
                            <h2>"Your Projects"</h2>
                            <div class="dashboard-page__cards">
                                <For
                                    each=move || projects.get().projects
                                    key=|project| project.id.clone()
                                    let:project
                                >
                                    <ProjectCard project=project on_edit=on_edit on_delete=on_delete/>
                                </For>
                            </div>
                        </section>
                    }
                }
            >
                <section class="dashboard-page__section">
                    <div class="dashboard-page__section-header">
                        <h2>"Choose a Template"</h2>
                        <button class="btn" on:click=move |_| projects.update(|p| p.show_templates = false)>
                            "Back to Projects"
                        </button>
                    </div>
                    <div class="dashboard-page__cards">
                        {templates()
                            .iter()
                            .map(|template| view! { <TemplateCard template=template.clone() on_pick=on_pick_template/> })
                            .collect::<Vec<_>>()}
                    </div>
                </section>
            </Show>
        </div>
    }
}

/// Local calendar date as `YYYY-MM-DD`.
#[cfg(feature = "csr")]
fn today() -> String {
    let now = js_sys::Date::new_0();
    format!("{:04}-{:02}-{:02}", now.get_full_year(), now.get_month() + 1, now.get_date())
}

#[cfg(not(feature = "csr"))]
fn today() -> String {
    String::new()
}
