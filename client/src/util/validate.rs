//! Auth form validation.
//!
//! Each check returns the message shown under its field. Pages run every
//! check on submit so all field errors appear at once.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const MIN_PASSWORD_CHARS: usize = 6;
pub const MIN_NAME_CHARS: usize = 2;

/// # Errors
///
/// Returns the field message for a blank or malformed address.
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() {
        return Err("Email is required");
    }
    if !looks_like_email(email) {
        return Err("Email is invalid");
    }
    Ok(())
}

/// # Errors
///
/// Returns the field message for an empty or short password.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

/// # Errors
///
/// Returns the field message for a blank or short name.
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required");
    }
    if name.chars().count() < MIN_NAME_CHARS {
        return Err("Name must be at least 2 characters");
    }
    Ok(())
}

/// # Errors
///
/// Returns the field message when the confirmation is empty or differs.
pub fn validate_confirm(password: &str, confirm: &str) -> Result<(), &'static str> {
    if confirm.is_empty() {
        return Err("Please confirm your password");
    }
    if confirm != password {
        return Err("Passwords do not match");
    }
    Ok(())
}

/// Field message for display; empty when the field is valid.
#[must_use]
pub fn message(result: Result<(), &'static str>) -> String {
    result.err().map(str::to_owned).unwrap_or_default()
}

/// Some run of non-space text holding `x@y.z` with each part non-empty.
fn looks_like_email(value: &str) -> bool {
    value.split_whitespace().any(|token| {
        token.match_indices('@').any(|(at, _)| {
            let domain = &token[at + 1..];
            at > 0 && domain.match_indices('.').any(|(dot, _)| dot > 0 && dot + 1 < domain.len())
        })
    })
}
