use leptos::prelude::*;

/// Fallback for unmatched routes.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/dashboard" class="btn btn--primary">
                "Go to Dashboard"
            </a>
        </div>
    }
}
