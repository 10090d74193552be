//! Seams to the host application.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routing, auth and toasts live outside the editor core. The core only needs
//! a display name for greetings, a way to leave the editor, and a way to
//! report how a save went. Hosts implement these traits; the engine borrows
//! them per call and never stores them.

#[cfg(test)]
#[path = "collab_test.rs"]
mod collab_test;

/// Severity of a notice shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Supplies the logged-in user's display name.
pub trait Identity {
    /// Opaque display name, or `None` when nobody is signed in.
    fn current_user(&self) -> Option<String>;
}

/// Leaves the editor.
pub trait Navigator {
    fn go_back(&self);
}

/// Shows a transient notice.
pub trait Notifier {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Greeting line for the signed-in user.
#[must_use]
pub fn greeting(identity: &dyn Identity) -> String {
    match identity.current_user() {
        Some(name) if !name.trim().is_empty() => format!("Welcome, {}", name.trim()),
        _ => "Welcome".to_owned(),
    }
}
