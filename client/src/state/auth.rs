//! Signed-in user for the current browser session.
//!
//! Sign-in is local only: there is no backend, and nothing is persisted
//! across reloads. `AuthState` also serves as the editor's `Identity`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use sitecraft::collab::Identity;

/// A signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Authentication state tracking the current user.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    /// Sign in with an e-mail address. The display name is the local part.
    pub fn login(&mut self, email: &str) -> &User {
        let email = email.trim();
        let name = email.split('@').next().unwrap_or(email);
        self.user.insert(User { id: new_user_id(), name: name.to_owned(), email: email.to_owned() })
    }

    /// Create an account and sign in with it.
    pub fn signup(&mut self, name: &str, email: &str) -> &User {
        self.user.insert(User { id: new_user_id(), name: name.trim().to_owned(), email: email.trim().to_owned() })
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Identity for AuthState {
    fn current_user(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.name.clone())
    }
}

fn new_user_id() -> String {
    let raw = uuid::Uuid::new_v4().simple().to_string();
    format!("user_{}", &raw[..9])
}
