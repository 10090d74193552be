//! Editor engine: the owned state unit behind the visual editor.
//!
//! DESIGN
//! ======
//! `EditorCore` owns the page, the selection, the drag slot, the property
//! mirror and the mode. Hosts never write those fields directly; every DOM
//! event maps to one method here, the method runs to completion, and the
//! returned [`Action`] tells the host what changed. Errors the user cannot
//! cause through the UI (`InvalidDrop`, stale selections, edits in preview)
//! are logged and folded into `Action::None` or a selection reset.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::collab::{self, Identity, Navigator, NoticeKind, Notifier};
use crate::config::EditorConfig;
use crate::consts::{SAVE_FAILURE_MESSAGE, SAVE_SUCCESS_MESSAGE};
use crate::drag::DragInsert;
use crate::error::EditorError;
use crate::mode::EditorMode;
use crate::page::{ComponentInstance, InstanceId, Page, PageSnapshot};
use crate::properties::PropertyEditor;
use crate::registry::{self, CatalogEntry, ComponentKind};
use crate::render::{self, RenderBlock, RenderItem};
use crate::selection::Selection;

/// Outcome of an editor operation for the host to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    InstanceCreated(ComponentInstance),
    InstanceUpdated(ComponentInstance),
    SelectionChanged(Option<InstanceId>),
    ModeChanged(EditorMode),
    NavigateBack,
}

/// Editor state for one project's page.
#[derive(Debug, Clone)]
pub struct EditorCore {
    project_id: String,
    page: Page,
    selection: Selection,
    drag: DragInsert,
    properties: PropertyEditor,
    mode: EditorMode,
    config: EditorConfig,
}

impl EditorCore {
    /// Open an editor for `project_id`, on the starter page if configured.
    #[must_use]
    pub fn new(project_id: impl Into<String>, config: EditorConfig) -> Self {
        let page = if config.seed_starter_content { Page::starter() } else { Page::new() };
        Self::with_page(project_id, page, config)
    }

    /// Open an editor on an existing page.
    #[must_use]
    pub fn with_page(project_id: impl Into<String>, page: Page, config: EditorConfig) -> Self {
        let project_id = project_id.into();
        tracing::debug!(%project_id, components = page.len(), "editor opened");
        Self {
            project_id,
            page,
            selection: Selection::new(),
            drag: DragInsert::new(),
            properties: PropertyEditor::new(),
            mode: EditorMode::Edit,
            config,
        }
    }

    /// Replace the page with a previously saved snapshot.
    ///
    /// Selection, the drag slot and the property mirror are reset.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if the snapshot repeats an id; the current page
    /// is kept.
    pub fn load_snapshot(&mut self, snapshot: PageSnapshot) -> Result<(), EditorError> {
        self.page = Page::from_snapshot(snapshot)?;
        self.selection.clear();
        self.drag.drag_cancel();
        self.properties = PropertyEditor::new();
        Ok(())
    }

    // --- Drag-insert ---

    /// A palette entry started dragging.
    pub fn drag_start(&mut self, kind: ComponentKind) -> Action {
        if !self.mode.is_interactive() {
            tracing::debug!(%kind, "drag ignored in preview");
            return Action::None;
        }
        self.drag.drag_start(kind);
        Action::None
    }

    /// A palette entry started dragging, identified by its kind symbol.
    ///
    /// # Errors
    ///
    /// Returns `UnknownKind` for a symbol outside the catalog.
    pub fn drag_start_symbol(&mut self, symbol: &str) -> Result<Action, EditorError> {
        let kind = symbol.parse::<ComponentKind>().inspect_err(|e| {
            tracing::warn!(error = %e, code = e.error_code(), "drag start rejected");
        })?;
        Ok(self.drag_start(kind))
    }

    /// The drag ended without reaching the canvas.
    pub fn drag_cancel(&mut self) {
        self.drag.drag_cancel();
    }

    /// Something was dropped on the canvas.
    ///
    /// Appends a new instance of the pending kind. A drop with nothing
    /// pending, or any drop in preview, changes nothing.
    pub fn drop_pending(&mut self) -> Action {
        if !self.mode.is_interactive() {
            self.drag.drag_cancel();
            return Action::None;
        }
        match self.drag.drop_on(&mut self.page) {
            Ok(id) => self.page.get(&id).cloned().map_or(Action::None, Action::InstanceCreated),
            Err(e) => {
                tracing::debug!(error = %e, code = e.error_code(), "drop ignored");
                Action::None
            }
        }
    }

    // --- Selection ---

    /// Select a placed instance (click on the canvas).
    pub fn select(&mut self, id: &InstanceId) -> Action {
        if !self.mode.is_interactive() {
            tracing::debug!(%id, "select ignored in preview");
            return Action::None;
        }
        if let Err(e) = self.selection.select(id, &self.page) {
            tracing::warn!(error = %e, code = e.error_code(), "select rejected");
            return Action::None;
        }
        self.sync_properties();
        Action::SelectionChanged(self.selection.get().cloned())
    }

    pub fn clear_selection(&mut self) -> Action {
        self.selection.clear();
        self.sync_properties();
        Action::SelectionChanged(None)
    }

    // --- Property edits ---

    /// Replace the selected instance's content.
    pub fn set_content(&mut self, content: &str) -> Action {
        if !self.mode.is_interactive() {
            tracing::debug!("content edit ignored in preview");
            return Action::None;
        }
        let result = self.properties.set_content(&mut self.page, self.selection.get(), content);
        match result {
            Ok(Some(updated)) => Action::InstanceUpdated(updated.clone()),
            Ok(None) => Action::None,
            Err(e) => self.recover(e),
        }
    }

    /// Set one style property on the selected instance.
    pub fn set_style_property(&mut self, property: &str, value: &str) -> Action {
        if !self.mode.is_interactive() {
            tracing::debug!(property, "style edit ignored in preview");
            return Action::None;
        }
        let result = self.properties.set_style_property(&mut self.page, self.selection.get(), property, value);
        match result {
            Ok(Some(updated)) => Action::InstanceUpdated(updated.clone()),
            Ok(None) => Action::None,
            Err(e) => self.recover(e),
        }
    }

    // --- Mode ---

    /// Switch between edit and preview. Page and selection are untouched.
    pub fn toggle_mode(&mut self) -> Action {
        self.mode = self.mode.toggled();
        if !self.mode.is_interactive() {
            self.drag.drag_cancel();
        }
        tracing::debug!(mode = ?self.mode, "mode toggled");
        Action::ModeChanged(self.mode)
    }

    // --- Collaborators ---

    /// Serialize the page and report the outcome through `notifier`.
    ///
    /// Exactly one notice is sent per call. On success the JSON snapshot is
    /// returned for whatever persistence the host provides.
    ///
    /// # Errors
    ///
    /// Returns `Serialize` if the snapshot cannot be encoded.
    pub fn save(&self, notifier: &dyn Notifier) -> Result<String, EditorError> {
        match self.snapshot().to_json() {
            Ok(json) => {
                tracing::debug!(project_id = %self.project_id, bytes = json.len(), "page saved");
                notifier.notify(NoticeKind::Success, SAVE_SUCCESS_MESSAGE);
                Ok(json)
            }
            Err(e) => {
                tracing::error!(error = %e, project_id = %self.project_id, "page save failed");
                notifier.notify(NoticeKind::Error, SAVE_FAILURE_MESSAGE);
                Err(e)
            }
        }
    }

    /// Leave the editor.
    pub fn go_back(&self, navigator: &dyn Navigator) -> Action {
        navigator.go_back();
        Action::NavigateBack
    }

    #[must_use]
    pub fn greeting(&self, identity: &dyn Identity) -> String {
        collab::greeting(identity)
    }

    // --- Queries ---

    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The selected id, kept across preview round-trips.
    #[must_use]
    pub fn selection(&self) -> Option<&InstanceId> {
        self.selection.get()
    }

    /// The property panel's copy of the selected instance.
    #[must_use]
    pub fn selected(&self) -> Option<&ComponentInstance> {
        self.properties.current()
    }

    /// Kind waiting for a drop, if a drag is in flight.
    #[must_use]
    pub fn pending_drag(&self) -> Option<ComponentKind> {
        self.drag.pending()
    }

    /// Palette entries; empty in preview.
    #[must_use]
    pub fn palette(&self) -> Vec<CatalogEntry> {
        if self.mode.is_interactive() { registry::catalog() } else { Vec::new() }
    }

    /// Page contents in render order with presentation flags.
    #[must_use]
    pub fn render_items(&self) -> Vec<RenderItem> {
        let interactive = self.mode.is_interactive();
        self.page
            .list()
            .iter()
            .map(|instance| RenderItem {
                id: instance.id.clone(),
                block: RenderBlock::for_instance(instance, &self.config),
                style: render::inline_css(&instance.style),
                selected: interactive && self.selection.is_selected(&instance.id),
                interactive,
            })
            .collect()
    }

    #[must_use]
    pub fn snapshot(&self) -> PageSnapshot {
        self.page.snapshot(&self.project_id)
    }

    fn sync_properties(&mut self) {
        if let Err(e) = self.properties.refresh(&self.page, self.selection.get()) {
            tracing::warn!(error = %e, code = e.error_code(), "property panel refresh failed");
            self.selection.clear();
        }
    }

    fn recover(&mut self, err: EditorError) -> Action {
        tracing::warn!(error = %err, code = err.error_code(), "edit dropped");
        if matches!(err, EditorError::StaleSelection(_)) {
            self.selection.clear();
            self.sync_properties();
            return Action::SelectionChanged(None);
        }
        Action::None
    }
}
