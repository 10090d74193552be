//! Signup page creating a local account.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use sitecraft::collab::NoticeKind;

use crate::state::auth::AuthState;
use crate::state::toasts::ToastState;
use crate::util::validate::{message, validate_confirm, validate_email, validate_name, validate_password};

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let name_error = RwSignal::new(String::new());
    let email_error = RwSignal::new(String::new());
    let password_error = RwSignal::new(String::new());
    let confirm_error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (name_value, email_value, password_value) = (name.get(), email.get(), password.get());
        let checks = [
            (name_error, validate_name(&name_value)),
            (email_error, validate_email(&email_value)),
            (password_error, validate_password(&password_value)),
            (confirm_error, validate_confirm(&password_value, &confirm.get())),
        ];
        let mut valid = true;
        for (field, check) in checks {
            valid &= check.is_ok();
            field.set(message(check));
        }
        if !valid {
            return;
        }
        auth.update(|a| {
            a.signup(&name_value, &email_value);
        });
        toasts.update(|t| {
            t.push(NoticeKind::Success, "Account created successfully!");
        });
        navigate("/dashboard", NavigateOptions::default());
    };

    let field = move |label: &'static str, kind: &'static str, value: RwSignal<String>, error: RwSignal<String>| {
        view! {
            <label class="auth-form__label">
                {label}
                <input
                    class="auth-form__input"
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || !error.get().is_empty()>
                <p class="auth-form__error">{move || error.get()}</p>
            </Show>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <p class="auth-card__subtitle">"Start building your website"</p>
                <form class="auth-form" on:submit=on_submit>
                    {field("Full name", "text", name, name_error)}
                    {field("Email address", "email", email, email_error)}
                    {field("Password", "password", password, password_error)}
                    {field("Confirm password", "password", confirm, confirm_error)}
                    <button class="btn btn--primary" type="submit">
                        "Create account"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
