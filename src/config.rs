//! Editor configuration.
//!
//! Native hosts read the process environment through
//! [`EditorConfig::from_env`]. The browser has no environment, so the client
//! either uses the defaults or feeds its own values through
//! [`EditorConfig::from_lookup`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{BUTTON_FALLBACK_LABEL, PLACEHOLDER_IMAGE_URL};
use crate::error::EditorError;

pub const ENV_PLACEHOLDER_IMAGE_URL: &str = "SITECRAFT_PLACEHOLDER_IMAGE_URL";
pub const ENV_BUTTON_LABEL: &str = "SITECRAFT_BUTTON_LABEL";
pub const ENV_SEED_STARTER: &str = "SITECRAFT_SEED_STARTER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Image source rendered for an image block with empty content.
    pub placeholder_image_url: String,
    /// Label rendered for a button block with empty content.
    pub button_fallback_label: String,
    /// Open new editors on the starter page instead of an empty one.
    pub seed_starter_content: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            placeholder_image_url: PLACEHOLDER_IMAGE_URL.to_owned(),
            button_fallback_label: BUTTON_FALLBACK_LABEL.to_owned(),
            seed_starter_content: false,
        }
    }
}

impl EditorConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `SITECRAFT_PLACEHOLDER_IMAGE_URL`
    /// - `SITECRAFT_BUTTON_LABEL`
    /// - `SITECRAFT_SEED_STARTER`: `true`/`false`/`1`/`0` (default false)
    ///
    /// # Errors
    ///
    /// Returns `Config` if `SITECRAFT_SEED_STARTER` is not a boolean.
    pub fn from_env() -> Result<Self, EditorError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// Blank values fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the seed flag is not a boolean.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EditorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let placeholder_image_url = read(ENV_PLACEHOLDER_IMAGE_URL).unwrap_or(defaults.placeholder_image_url);
        let button_fallback_label = read(ENV_BUTTON_LABEL).unwrap_or(defaults.button_fallback_label);
        let seed_starter_content = match read(ENV_SEED_STARTER) {
            Some(raw) => parse_bool(ENV_SEED_STARTER, &raw)?,
            None => defaults.seed_starter_content,
        };

        Ok(Self { placeholder_image_url, button_fallback_label, seed_starter_content })
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, EditorError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(EditorError::Config(format!("{key}: expected true or false, got '{other}'"))),
    }
}
