//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser and routing concerns from page and
//! component logic so the pure parts stay testable off-browser.

pub mod auth;
pub mod collab;
pub mod validate;
