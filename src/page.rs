//! Page model: placed component instances and the ordered store that owns them.
//!
//! Insertion order is render order, top to bottom. New instances only ever
//! go on the end; edits replace a field of one instance in place and never
//! move it. The page is the single source of truth for what is on the
//! canvas: selection and the property panel refer into it by id.
//!
//! [`PageSnapshot`] is the serialized form handed to a persistence
//! collaborator on save.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{
    BODY_FONT_SIZE, DEFAULT_MARGIN_BOTTOM, STYLE_COLOR, STYLE_FONT_SIZE, STYLE_FONT_WEIGHT, STYLE_LINE_HEIGHT,
    STYLE_MARGIN_BOTTOM,
};
use crate::error::EditorError;
use crate::registry::ComponentKind;

/// Style property name to CSS value, kept in key order for stable output.
pub type StyleMap = BTreeMap<String, String>;

/// Identifier of a placed instance, unique within its page.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(String);

impl InstanceId {
    /// Fresh id of the form `{kind}-{uuid}`.
    #[must_use]
    pub fn generate(kind: ComponentKind) -> Self {
        Self(format!("{kind}-{}", Uuid::new_v4().simple()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InstanceId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for InstanceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A block placed on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentInstance {
    /// Assigned at creation, never reassigned.
    pub id: InstanceId,
    /// Fixed at creation.
    pub kind: ComponentKind,
    /// Text for heading, paragraph and button; URL for image.
    pub content: String,
    /// Inline style properties (`fontSize`, `color`, `marginBottom`, ...).
    pub style: StyleMap,
}

impl ComponentInstance {
    /// Create an instance of `kind` with a fresh id and the registry defaults.
    #[must_use]
    pub fn from_kind(kind: ComponentKind) -> Self {
        let defaults = kind.defaults();
        Self { id: InstanceId::generate(kind), kind, content: defaults.content, style: defaults.style }
    }

    /// Style value for `property`, or empty when unset.
    #[must_use]
    pub fn style_value(&self, property: &str) -> &str {
        self.style.get(property).map_or("", String::as_str)
    }
}

/// Ordered store of the instances on one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    instances: Vec<ComponentInstance>,
}

impl Page {
    /// Create an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self { instances: Vec::new() }
    }

    /// The page a new project opens with: a welcome heading and a sample paragraph.
    #[must_use]
    pub fn starter() -> Self {
        let heading = ComponentInstance {
            id: InstanceId::from("header-1"),
            kind: ComponentKind::Heading,
            content: "Welcome to my website".to_owned(),
            style: style_map(&[
                (STYLE_FONT_SIZE, "2.5rem"),
                (STYLE_FONT_WEIGHT, "bold"),
                (STYLE_COLOR, "#1a1a1a"),
                (STYLE_MARGIN_BOTTOM, DEFAULT_MARGIN_BOTTOM),
            ]),
        };
        let paragraph = ComponentInstance {
            id: InstanceId::from("paragraph-1"),
            kind: ComponentKind::Paragraph,
            content: "This is a sample paragraph. Edit this text to add your own content.".to_owned(),
            style: style_map(&[
                (STYLE_FONT_SIZE, BODY_FONT_SIZE),
                (STYLE_COLOR, "#4a4a4a"),
                (STYLE_LINE_HEIGHT, "1.6"),
                (STYLE_MARGIN_BOTTOM, DEFAULT_MARGIN_BOTTOM),
            ]),
        };
        Self { instances: vec![heading, paragraph] }
    }

    /// Rebuild a page from a previously produced snapshot.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if two components share an id.
    pub fn from_snapshot(snapshot: PageSnapshot) -> Result<Self, EditorError> {
        {
            let mut seen = HashSet::with_capacity(snapshot.components.len());
            for component in &snapshot.components {
                if !seen.insert(&component.id) {
                    return Err(EditorError::DuplicateId(component.id.clone()));
                }
            }
        }
        Ok(Self { instances: snapshot.components })
    }

    /// Add an instance to the end of the page.
    pub fn append(&mut self, instance: ComponentInstance) {
        tracing::debug!(id = %instance.id, kind = %instance.kind, position = self.instances.len(), "component appended");
        self.instances.push(instance);
    }

    /// Replace the content of the instance with `id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no instance has that id; the page is unchanged.
    pub fn update_content(&mut self, id: &InstanceId, content: &str) -> Result<&ComponentInstance, EditorError> {
        let instance = self.get_mut(id)?;
        content.clone_into(&mut instance.content);
        Ok(&*instance)
    }

    /// Set one style property on the instance with `id`, keeping all other keys.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no instance has that id; the page is unchanged.
    pub fn update_style(
        &mut self,
        id: &InstanceId,
        property: &str,
        value: &str,
    ) -> Result<&ComponentInstance, EditorError> {
        let instance = self.get_mut(id)?;
        instance.style.insert(property.to_owned(), value.to_owned());
        Ok(&*instance)
    }

    /// Instances in render order.
    #[must_use]
    pub fn list(&self) -> &[ComponentInstance] {
        &self.instances
    }

    /// Look up an instance by id.
    #[must_use]
    pub fn get(&self, id: &InstanceId) -> Option<&ComponentInstance> {
        self.instances.iter().find(|c| &c.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &InstanceId) -> bool {
        self.get(id).is_some()
    }

    /// Ids in render order.
    pub fn ids(&self) -> impl Iterator<Item = &InstanceId> {
        self.instances.iter().map(|c| &c.id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Copy the current page into a snapshot keyed by `project_id`.
    #[must_use]
    pub fn snapshot(&self, project_id: &str) -> PageSnapshot {
        PageSnapshot { project_id: project_id.to_owned(), components: self.instances.clone() }
    }

    fn get_mut(&mut self, id: &InstanceId) -> Result<&mut ComponentInstance, EditorError> {
        self.instances
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| EditorError::NotFound(id.clone()))
    }
}

/// Serialized page handed to a persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub project_id: String,
    pub components: Vec<ComponentInstance>,
}

impl PageSnapshot {
    /// Encode as JSON.
    ///
    /// # Errors
    ///
    /// Returns `Serialize` if encoding fails.
    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON.
    ///
    /// # Errors
    ///
    /// Returns `Serialize` on malformed input, including unknown kinds.
    pub fn from_json(raw: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(raw)?)
    }
}

fn style_map(pairs: &[(&str, &str)]) -> StyleMap {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}
