//! Login page with local e-mail + password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use sitecraft::collab::NoticeKind;

use crate::state::auth::AuthState;
use crate::state::toasts::ToastState;
use crate::util::validate::{message, validate_email, validate_password};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(String::new());
    let password_error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get();
        let email_check = validate_email(&email_value);
        let password_check = validate_password(&password.get());
        email_error.set(message(email_check));
        password_error.set(message(password_check));
        if email_check.is_err() || password_check.is_err() {
            return;
        }
        auth.update(|a| {
            a.login(&email_value);
        });
        toasts.update(|t| {
            t.push(NoticeKind::Success, "Login successful!");
        });
        navigate("/dashboard", NavigateOptions::default());
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email address"
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !email_error.get().is_empty()>
                        <p class="auth-form__error">{move || email_error.get()}</p>
                    </Show>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !password_error.get().is_empty()>
                        <p class="auth-form__error">{move || password_error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit">
                        "Sign in"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
