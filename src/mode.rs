//! Edit / preview mode.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use serde::{Deserialize, Serialize};

/// Whether the canvas is interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    /// Palette and property panel shown; blocks can be dropped and selected.
    #[default]
    Edit,
    /// Read-only render with no side panels.
    Preview,
}

impl EditorMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Edit => Self::Preview,
            Self::Preview => Self::Edit,
        }
    }

    /// Whether drag, drop, select and property edits are accepted.
    #[must_use]
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Edit)
    }

    /// Caption for the button that switches away from this mode.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Edit => "Preview",
            Self::Preview => "Edit Mode",
        }
    }
}
