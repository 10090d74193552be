//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `projects`, `toasts`) so pages and
//! components depend on small focused models. Each model is a plain struct
//! held in an `RwSignal` and provided via context from `App`. Editor state is
//! not here: the editor page owns its `EditorCore` directly.

pub mod auth;
pub mod projects;
pub mod toasts;
