//! Component registry: the closed catalog of placeable block kinds.
//!
//! The palette the host shows is generated from [`catalog`], and every drop
//! resolves its kind through the same enum, so the set of draggable entries
//! and the set of creatable kinds cannot diverge.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BODY_FONT_SIZE, DEFAULT_COLOR, DEFAULT_MARGIN_BOTTOM, HEADING_CONTENT, HEADING_FONT_SIZE, PARAGRAPH_CONTENT,
    STYLE_COLOR, STYLE_FONT_SIZE, STYLE_MARGIN_BOTTOM,
};
use crate::error::EditorError;
use crate::page::StyleMap;

/// The kind of a placed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Section heading text.
    Heading,
    /// Body text.
    Paragraph,
    /// Image; content holds the source URL.
    Image,
    /// Call-to-action button; content holds the label.
    Button,
}

impl ComponentKind {
    /// Every kind, in palette order.
    pub const ALL: [Self; 4] = [Self::Heading, Self::Paragraph, Self::Image, Self::Button];

    /// Short symbolic name, also used as the id prefix.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::Image => "image",
            Self::Button => "button",
        }
    }

    /// Caption shown on the palette entry.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Heading => "Heading",
            Self::Paragraph => "Paragraph",
            Self::Image => "Image",
            Self::Button => "Button",
        }
    }

    /// Defaults for a freshly placed instance of this kind.
    ///
    /// Each call builds a new style map, so instances never alias the
    /// registry's defaults or each other.
    #[must_use]
    pub fn defaults(self) -> ComponentDefaults {
        let (content, font_size) = match self {
            Self::Heading => (HEADING_CONTENT, HEADING_FONT_SIZE),
            Self::Paragraph => (PARAGRAPH_CONTENT, BODY_FONT_SIZE),
            Self::Image | Self::Button => ("", BODY_FONT_SIZE),
        };
        let mut style = StyleMap::new();
        style.insert(STYLE_FONT_SIZE.to_owned(), font_size.to_owned());
        style.insert(STYLE_COLOR.to_owned(), DEFAULT_COLOR.to_owned());
        style.insert(STYLE_MARGIN_BOTTOM.to_owned(), DEFAULT_MARGIN_BOTTOM.to_owned());
        ComponentDefaults { content: content.to_owned(), style }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EditorError::UnknownKind(s.to_owned()))
    }
}

/// Default content and style for a newly created instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDefaults {
    pub content: String,
    pub style: StyleMap,
}

/// One draggable palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub kind: ComponentKind,
    pub label: &'static str,
}

/// The palette, in display order.
#[must_use]
pub fn catalog() -> Vec<CatalogEntry> {
    ComponentKind::ALL
        .into_iter()
        .map(|kind| CatalogEntry { kind, label: kind.label() })
        .collect()
}

/// Resolve a kind symbol to its defaults.
///
/// # Errors
///
/// Returns `UnknownKind` if the symbol is not in the catalog.
pub fn lookup(symbol: &str) -> Result<ComponentDefaults, EditorError> {
    let kind: ComponentKind = symbol.parse()?;
    Ok(kind.defaults())
}
