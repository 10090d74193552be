//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{
    dashboard::DashboardPage, editor::EditorPage, login::LoginPage, not_found::NotFoundPage, signup::SignupPage,
};
use crate::state::{auth::AuthState, projects::ProjectsState, toasts::ToastState};

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let projects = RwSignal::new(ProjectsState::seeded());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(projects);
    provide_context(toasts);

    view! {
        <Title text="SiteCraft"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("editor"), ParamSegment("project_id")) view=EditorPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
