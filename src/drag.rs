//! Drag-insert protocol: the two-phase gesture that places a new block.
//!
//! Drag-start records which kind left the palette in a single-slot
//! [`DragState`]. Drop consumes the slot, builds a fresh instance from the
//! registry defaults, and appends it to the page. The slot is emptied on
//! every drop and on drag-end, so an abandoned or foreign drag can never
//! leak a stale kind into a later drop.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::error::EditorError;
use crate::page::{ComponentInstance, InstanceId, Page};
use crate::registry::ComponentKind;

/// The gesture currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No palette drag in progress.
    #[default]
    Idle,
    /// A palette entry is being dragged toward the canvas.
    Dragging {
        /// Kind recorded at drag-start.
        kind: ComponentKind,
    },
}

/// Single-slot carrier between drag-start and drop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragInsert {
    state: DragState,
}

impl DragInsert {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the kind picked up from the palette, replacing any earlier one.
    pub fn drag_start(&mut self, kind: ComponentKind) {
        tracing::debug!(%kind, "drag started");
        self.state = DragState::Dragging { kind };
    }

    /// Record a kind given by its symbol.
    ///
    /// # Errors
    ///
    /// Returns `UnknownKind` for a symbol outside the catalog; the slot is
    /// left as it was.
    pub fn drag_start_symbol(&mut self, symbol: &str) -> Result<ComponentKind, EditorError> {
        let kind: ComponentKind = symbol.parse()?;
        self.drag_start(kind);
        Ok(kind)
    }

    /// Drag ended without a drop on the canvas.
    pub fn drag_cancel(&mut self) {
        if let DragState::Dragging { kind } = self.state {
            tracing::debug!(%kind, "drag abandoned");
        }
        self.state = DragState::Idle;
    }

    /// Kind waiting for a drop, if any.
    #[must_use]
    pub fn pending(&self) -> Option<ComponentKind> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { kind } => Some(kind),
        }
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Complete the gesture: append a new instance of the pending kind.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDrop` if no drag-start preceded this drop. The page is
    /// untouched.
    pub fn drop_on(&mut self, page: &mut Page) -> Result<InstanceId, EditorError> {
        let DragState::Dragging { kind } = std::mem::take(&mut self.state) else {
            return Err(EditorError::InvalidDrop);
        };
        let instance = ComponentInstance::from_kind(kind);
        let id = instance.id.clone();
        page.append(instance);
        Ok(id)
    }
}
