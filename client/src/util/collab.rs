//! Browser-side implementations of the editor's host seams.
//!
//! `ToastNotifier` pushes save outcomes onto the toast stack and
//! `RouteNavigator` leaves the editor through the router.

#[cfg(test)]
#[path = "collab_test.rs"]
mod collab_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use sitecraft::collab::{Navigator, NoticeKind, Notifier};

use crate::state::toasts::ToastState;
#[cfg(feature = "csr")]
use crate::state::toasts::TOAST_LIFETIME_MS;

/// Shows editor notices as toasts that dismiss themselves.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
}

impl ToastNotifier {
    #[must_use]
    pub fn new(toasts: RwSignal<ToastState>) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        if let Some(id) = self.toasts.try_update(|t| t.push(kind, message)) {
            schedule_dismiss(self.toasts, id);
        }
    }
}

#[cfg(feature = "csr")]
fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64) {
    gloo_timers::callback::Timeout::new(TOAST_LIFETIME_MS, move || {
        toasts.update(|t| t.dismiss(id));
    })
    .forget();
}

#[cfg(not(feature = "csr"))]
fn schedule_dismiss(_toasts: RwSignal<ToastState>, _id: u64) {}

/// Leaves the editor by routing to a fixed path.
#[derive(Clone)]
pub struct RouteNavigator<F> {
    navigate: F,
    target: &'static str,
}

impl<F> RouteNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F, target: &'static str) -> Self {
        Self { navigate, target }
    }
}

impl<F> Navigator for RouteNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn go_back(&self) {
        (self.navigate)(self.target, NavigateOptions::default());
    }
}
