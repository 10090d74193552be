//! Property editor: content and style edits on the selected instance.
//!
//! The editor keeps a mirror of the selected instance for the property
//! panel. Every edit writes through the page first and then refreshes the
//! mirror from the page's copy, so the panel never shows a value the page
//! does not hold.

#[cfg(test)]
#[path = "properties_test.rs"]
mod properties_test;

use crate::error::EditorError;
use crate::page::{ComponentInstance, InstanceId, Page};

/// Mirror of the selected instance shown in the property panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyEditor {
    mirror: Option<ComponentInstance>,
}

impl PropertyEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The instance the panel is showing.
    #[must_use]
    pub fn current(&self) -> Option<&ComponentInstance> {
        self.mirror.as_ref()
    }

    /// Reload the mirror from `page` for `selected`.
    ///
    /// # Errors
    ///
    /// Returns `StaleSelection` if the page no longer holds `selected`; the
    /// mirror is emptied.
    pub fn refresh(&mut self, page: &Page, selected: Option<&InstanceId>) -> Result<(), EditorError> {
        self.mirror = None;
        let Some(id) = selected else {
            return Ok(());
        };
        let instance = page.get(id).ok_or_else(|| EditorError::StaleSelection(id.clone()))?;
        self.mirror = Some(instance.clone());
        Ok(())
    }

    /// Replace the selected instance's content.
    ///
    /// Returns `Ok(None)` without touching the page when nothing is selected.
    ///
    /// # Errors
    ///
    /// Returns `StaleSelection` if the selected id is missing from the page.
    pub fn set_content(
        &mut self,
        page: &mut Page,
        selected: Option<&InstanceId>,
        content: &str,
    ) -> Result<Option<&ComponentInstance>, EditorError> {
        let Some(id) = selected else {
            tracing::debug!("content edit ignored: nothing selected");
            return Ok(None);
        };
        let updated = page.update_content(id, content).map_err(|e| self.stale(e))?.clone();
        Ok(Some(&*self.mirror.insert(updated)))
    }

    /// Set one style property on the selected instance.
    ///
    /// Returns `Ok(None)` without touching the page when nothing is selected.
    ///
    /// # Errors
    ///
    /// Returns `StaleSelection` if the selected id is missing from the page.
    pub fn set_style_property(
        &mut self,
        page: &mut Page,
        selected: Option<&InstanceId>,
        property: &str,
        value: &str,
    ) -> Result<Option<&ComponentInstance>, EditorError> {
        let Some(id) = selected else {
            tracing::debug!(property, "style edit ignored: nothing selected");
            return Ok(None);
        };
        let updated = page.update_style(id, property, value).map_err(|e| self.stale(e))?.clone();
        Ok(Some(&*self.mirror.insert(updated)))
    }

    fn stale(&mut self, err: EditorError) -> EditorError {
        self.mirror = None;
        match err {
            EditorError::NotFound(id) => EditorError::StaleSelection(id),
            other => other,
        }
    }
}
