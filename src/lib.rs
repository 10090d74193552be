//! Headless page-composition engine for the site builder.
//!
//! This crate owns everything the visual editor knows about a page: the
//! closed catalog of placeable blocks, the ordered list of placed blocks, the
//! single selection, the two-phase drag-insert gesture, property edits, and
//! the edit/preview mode switch. It has no browser dependencies so the same
//! code runs inside the WASM client and under `cargo test`. The host UI
//! layer wires DOM events to [`engine::EditorCore`] and reacts to the
//! [`engine::Action`]s it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Owned editor state and the [`engine::Action`]s it emits |
//! | [`registry`] | Closed catalog of component kinds and their defaults |
//! | [`page`] | Ordered page model and its persistence snapshot |
//! | [`selection`] | At-most-one selected instance |
//! | [`drag`] | Drag-start / drop insertion protocol |
//! | [`properties`] | Content and style edits on the selected instance |
//! | [`mode`] | Edit / preview switch |
//! | [`render`] | Closed kind-to-block mapping for renderers |
//! | [`collab`] | Identity, navigation and notification seams to the host |
//! | [`config`] | Editor configuration |
//! | [`error`] | Error taxonomy |
//! | [`consts`] | Default content, style values and labels |

pub mod collab;
pub mod config;
pub mod consts;
pub mod drag;
pub mod engine;
pub mod error;
pub mod mode;
pub mod page;
pub mod properties;
pub mod registry;
pub mod render;
pub mod selection;
