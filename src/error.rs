//! Error taxonomy for the editor core.
//!
//! DESIGN
//! ======
//! None of these errors reach the user. `UnknownKind` aborts a single insert,
//! `InvalidDrop` is swallowed by the engine, and `StaleSelection` is recovered
//! by clearing the selection. The remaining variants surface from snapshot
//! loading, saving and configuration, where the host decides what to show.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::page::InstanceId;

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("unknown component kind: {0}")]
    UnknownKind(String),
    #[error("selection references a missing component: {0}")]
    StaleSelection(InstanceId),
    #[error("drop carried no component kind")]
    InvalidDrop,
    #[error("component not found: {0}")]
    NotFound(InstanceId),
    #[error("duplicate component id: {0}")]
    DuplicateId(InstanceId),
    #[error("page serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("config parse failed: {0}")]
    Config(String),
}

impl EditorError {
    /// Stable machine-readable code for logs and host-side handling.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownKind(_) => "E_UNKNOWN_KIND",
            Self::StaleSelection(_) => "E_STALE_SELECTION",
            Self::InvalidDrop => "E_INVALID_DROP",
            Self::NotFound(_) => "E_NOT_FOUND",
            Self::DuplicateId(_) => "E_DUPLICATE_ID",
            Self::Serialize(_) => "E_SERIALIZE",
            Self::Config(_) => "E_CONFIG",
        }
    }
}
