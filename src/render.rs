//! Render model: what each placed block looks like to a renderer.
//!
//! The mapping from [`ComponentKind`] to [`RenderBlock`] is a single
//! exhaustive match, so adding a kind without a render rule fails to
//! compile. Renderers (the Leptos client) turn [`RenderItem`]s into markup
//! and never inspect component kinds themselves.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::config::EditorConfig;
use crate::page::{ComponentInstance, InstanceId, StyleMap};
use crate::registry::ComponentKind;

/// Renderable body of one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderBlock {
    Heading(String),
    Paragraph(String),
    Image { src: String },
    Button { label: String },
}

impl RenderBlock {
    /// Resolve the body of `instance`, substituting placeholders for empty
    /// image and button content.
    #[must_use]
    pub fn for_instance(instance: &ComponentInstance, config: &EditorConfig) -> Self {
        let content = instance.content.clone();
        match instance.kind {
            ComponentKind::Heading => Self::Heading(content),
            ComponentKind::Paragraph => Self::Paragraph(content),
            ComponentKind::Image => Self::Image { src: or_fallback(content, &config.placeholder_image_url) },
            ComponentKind::Button => Self::Button { label: or_fallback(content, &config.button_fallback_label) },
        }
    }
}

/// One block in render order with its presentation flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderItem {
    pub id: InstanceId,
    pub block: RenderBlock,
    /// Inline CSS declarations, e.g. `color: #1a1a1a; font-size: 2rem;`.
    pub style: String,
    /// Drawn with the selection outline.
    pub selected: bool,
    /// Accepts click-to-select and shows a hover outline.
    pub interactive: bool,
}

/// Render a style map as inline CSS, converting camelCase keys to kebab-case.
#[must_use]
pub fn inline_css(style: &StyleMap) -> String {
    style
        .iter()
        .map(|(key, value)| format!("{}: {value};", kebab_case(key)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn or_fallback(content: String, fallback: &str) -> String {
    if content.is_empty() { fallback.to_owned() } else { content }
}
