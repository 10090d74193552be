//! Selection state: at most one selected instance, referenced by id.
//!
//! The selection never owns the instance. Every read goes back through the
//! page, and [`Selection::validate`] drops a reference the page no longer
//! holds.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::error::EditorError;
use crate::page::{InstanceId, Page};

/// The currently selected instance, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<InstanceId>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id`, which must be on `page`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `page` has no instance with that id; the
    /// previous selection is kept.
    pub fn select(&mut self, id: &InstanceId, page: &Page) -> Result<(), EditorError> {
        if !page.contains(id) {
            return Err(EditorError::NotFound(id.clone()));
        }
        self.selected = Some(id.clone());
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn get(&self) -> Option<&InstanceId> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn is_selected(&self, id: &InstanceId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Check the selection still points at a live instance.
    ///
    /// A stale reference is cleared before the error is returned, so callers
    /// can recover by simply re-rendering.
    ///
    /// # Errors
    ///
    /// Returns `StaleSelection` with the dropped id.
    pub fn validate(&mut self, page: &Page) -> Result<(), EditorError> {
        match self.selected.take() {
            Some(id) if !page.contains(&id) => Err(EditorError::StaleSelection(id)),
            other => {
                self.selected = other;
                Ok(())
            }
        }
    }
}
