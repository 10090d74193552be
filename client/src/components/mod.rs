//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Editor components read and write the page's `EditorCore` signal from
//! context; dashboard cards take their data and callbacks as props.

pub mod component_palette;
pub mod editor_toolbar;
pub mod page_canvas;
pub mod project_card;
pub mod property_panel;
pub mod template_card;
pub mod toast_host;
