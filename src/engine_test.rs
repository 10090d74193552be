use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use super::*;

// =============================================================
// Helpers
// =============================================================

#[derive(Default)]
struct RecordingNotifier {
    notices: RefCell<Vec<(NoticeKind, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.notices.borrow_mut().push((kind, message.to_owned()));
    }
}

#[derive(Default)]
struct CountingNavigator {
    calls: Cell<u32>,
}

impl Navigator for CountingNavigator {
    fn go_back(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

struct NamedUser(&'static str);

impl Identity for NamedUser {
    fn current_user(&self) -> Option<String> {
        Some(self.0.to_owned())
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().with_max_level(tracing::Level::DEBUG).try_init();
}

fn editor() -> EditorCore {
    init_tracing();
    EditorCore::new("project-1", EditorConfig::default())
}

fn insert(core: &mut EditorCore, kind: ComponentKind) -> InstanceId {
    core.drag_start(kind);
    match core.drop_pending() {
        Action::InstanceCreated(instance) => instance.id,
        other => panic!("expected InstanceCreated, got {other:?}"),
    }
}

fn kinds(core: &EditorCore) -> Vec<ComponentKind> {
    core.page().list().iter().map(|c| c.kind).collect()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_editor_is_empty_in_edit_mode() {
    let core = editor();
    assert_eq!(core.project_id(), "project-1");
    assert!(core.page().is_empty());
    assert_eq!(core.mode(), EditorMode::Edit);
    assert!(core.selection().is_none());
    assert!(core.selected().is_none());
    assert!(core.pending_drag().is_none());
}

#[test]
fn seeded_editor_opens_on_starter_page() {
    let cfg = EditorConfig { seed_starter_content: true, ..EditorConfig::default() };
    let core = EditorCore::new("p", cfg);
    assert_eq!(core.page(), &Page::starter());
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn drop_paragraph_once_appends_default_paragraph() {
    let mut core = editor();
    core.drag_start(ComponentKind::Paragraph);
    let action = core.drop_pending();
    assert!(matches!(action, Action::InstanceCreated(_)));
    let list = core.page().list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].kind, ComponentKind::Paragraph);
    assert_eq!(list[0].content, "New Paragraph");
    assert_eq!(list[0].style_value("fontSize"), "1rem");
    assert_eq!(list[0].style_value("color"), "#1a1a1a");
    assert_eq!(list[0].style_value("marginBottom"), "1rem");
    assert_eq!(list[0].style.len(), 3);
}

#[test]
fn set_content_updates_page_and_panel_mirror() {
    let mut core = editor();
    let id = insert(&mut core, ComponentKind::Heading);
    core.select(&id);
    let action = core.set_content("Hello");
    assert!(matches!(action, Action::InstanceUpdated(ref c) if c.content == "Hello"));
    assert_eq!(core.page().list()[0].content, "Hello");
    assert_eq!(core.selected().map(|c| c.content.as_str()), Some("Hello"));
}

#[test]
fn heading_then_button_keeps_drop_order() {
    let mut core = editor();
    insert(&mut core, ComponentKind::Heading);
    insert(&mut core, ComponentKind::Button);
    assert_eq!(kinds(&core), [ComponentKind::Heading, ComponentKind::Button]);
}

#[test]
fn drop_without_drag_start_changes_nothing() {
    let mut core = editor();
    assert_eq!(core.drop_pending(), Action::None);
    assert!(core.page().is_empty());
}

// =============================================================
// Ordering and identity
// =============================================================

#[test]
fn order_matches_drops_despite_interleaved_edits() {
    let mut core = editor();
    let sequence = [
        ComponentKind::Image,
        ComponentKind::Heading,
        ComponentKind::Button,
        ComponentKind::Paragraph,
        ComponentKind::Heading,
    ];
    for (i, kind) in sequence.iter().enumerate() {
        let id = insert(&mut core, *kind);
        core.select(&id);
        core.set_content(&format!("block {i}"));
        core.set_style_property("color", "#222222");
        if i % 2 == 0 {
            core.clear_selection();
        }
    }
    assert_eq!(kinds(&core), sequence);
    let contents: Vec<&str> = core.page().list().iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, ["block 0", "block 1", "block 2", "block 3", "block 4"]);
}

#[test]
fn ids_are_pairwise_distinct() {
    let mut core = editor();
    for _ in 0..10 {
        for kind in ComponentKind::ALL {
            insert(&mut core, kind);
        }
    }
    let ids: HashSet<&InstanceId> = core.page().ids().collect();
    assert_eq!(ids.len(), 40);
}

#[test]
fn editing_one_heading_leaves_sibling_at_default() {
    let mut core = editor();
    let a = insert(&mut core, ComponentKind::Heading);
    let b = insert(&mut core, ComponentKind::Heading);
    core.select(&a);
    core.set_style_property("color", "#ff0000");
    assert_eq!(core.page().get(&a).map(|c| c.style_value("color")), Some("#ff0000"));
    assert_eq!(core.page().get(&b).map(|c| c.style_value("color")), Some("#1a1a1a"));
    let fresh = insert(&mut core, ComponentKind::Heading);
    assert_eq!(core.page().get(&fresh).map(|c| c.style_value("color")), Some("#1a1a1a"));
}

// =============================================================
// Drag slot
// =============================================================

#[test]
fn drag_start_symbol_accepts_catalog_kinds() {
    let mut core = editor();
    assert_eq!(core.drag_start_symbol("image").unwrap(), Action::None);
    assert_eq!(core.pending_drag(), Some(ComponentKind::Image));
}

#[test]
fn drag_start_symbol_rejects_unknown_kind() {
    let mut core = editor();
    assert!(matches!(core.drag_start_symbol("slider"), Err(EditorError::UnknownKind(_))));
    assert!(core.pending_drag().is_none());
    assert_eq!(core.drop_pending(), Action::None);
    assert!(core.page().is_empty());
}

#[test]
fn abandoned_drag_does_not_leak_into_next_drop() {
    let mut core = editor();
    core.drag_start(ComponentKind::Button);
    core.drag_cancel();
    assert_eq!(core.drop_pending(), Action::None);
    assert!(core.page().is_empty());
}

#[test]
fn second_drop_after_one_drag_is_ignored() {
    let mut core = editor();
    insert(&mut core, ComponentKind::Paragraph);
    assert_eq!(core.drop_pending(), Action::None);
    assert_eq!(core.page().len(), 1);
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_emits_selection_changed_and_loads_mirror() {
    let mut core = editor();
    let id = insert(&mut core, ComponentKind::Button);
    assert_eq!(core.select(&id), Action::SelectionChanged(Some(id.clone())));
    assert_eq!(core.selection(), Some(&id));
    assert_eq!(core.selected().map(|c| &c.id), Some(&id));
}

#[test]
fn select_unknown_id_is_ignored() {
    let mut core = editor();
    let id = insert(&mut core, ComponentKind::Button);
    core.select(&id);
    assert_eq!(core.select(&InstanceId::from("ghost")), Action::None);
    assert_eq!(core.selection(), Some(&id));
}

#[test]
fn clear_selection_empties_panel() {
    let mut core = editor();
    let id = insert(&mut core, ComponentKind::Heading);
    core.select(&id);
    assert_eq!(core.clear_selection(), Action::SelectionChanged(None));
    assert!(core.selection().is_none());
    assert!(core.selected().is_none());
}

#[test]
fn edits_without_selection_are_noops() {
    let mut core = editor();
    insert(&mut core, ComponentKind::Heading);
    let before = core.page().clone();
    assert_eq!(core.set_content("x"), Action::None);
    assert_eq!(core.set_style_property("color", "red"), Action::None);
    assert_eq!(core.page(), &before);
}

#[test]
fn load_snapshot_resets_selection() {
    let mut core = editor();
    let id = insert(&mut core, ComponentKind::Heading);
    core.select(&id);
    core.load_snapshot(Page::starter().snapshot("project-1")).unwrap();
    assert!(core.selection().is_none());
    assert!(core.selected().is_none());
    assert_eq!(core.page().len(), 2);
}

#[test]
fn load_snapshot_with_duplicates_keeps_current_page() {
    let mut core = editor();
    insert(&mut core, ComponentKind::Heading);
    let before = core.page().clone();
    let mut snap = Page::starter().snapshot("project-1");
    snap.components[1].id = snap.components[0].id.clone();
    assert!(matches!(core.load_snapshot(snap), Err(EditorError::DuplicateId(_))));
    assert_eq!(core.page(), &before);
}

// =============================================================
// Mode
// =============================================================

#[test]
fn toggle_mode_round_trip_keeps_selection() {
    let mut core = editor();
    let id = insert(&mut core, ComponentKind::Heading);
    core.select(&id);
    assert_eq!(core.toggle_mode(), Action::ModeChanged(EditorMode::Preview));
    assert_eq!(core.selection(), Some(&id));
    assert_eq!(core.toggle_mode(), Action::ModeChanged(EditorMode::Edit));
    assert_eq!(core.selection(), Some(&id));
    assert!(core.render_items()[0].selected);
}

#[test]
fn preview_blocks_select_and_edits() {
    let mut core = editor();
    let a = insert(&mut core, ComponentKind::Heading);
    let b = insert(&mut core, ComponentKind::Paragraph);
    core.select(&a);
    core.toggle_mode();
    let before = core.page().clone();

    assert_eq!(core.select(&b), Action::None);
    assert_eq!(core.set_content("changed"), Action::None);
    assert_eq!(core.set_style_property("color", "#000000"), Action::None);

    assert_eq!(core.page(), &before);
    assert_eq!(core.selection(), Some(&a));
}

#[test]
fn preview_blocks_drag_insert() {
    let mut core = editor();
    core.toggle_mode();
    core.drag_start(ComponentKind::Image);
    assert!(core.pending_drag().is_none());
    assert_eq!(core.drop_pending(), Action::None);
    assert!(core.page().is_empty());
}

#[test]
fn entering_preview_drops_pending_drag() {
    let mut core = editor();
    core.drag_start(ComponentKind::Image);
    core.toggle_mode();
    core.toggle_mode();
    assert_eq!(core.drop_pending(), Action::None);
    assert!(core.page().is_empty());
}

#[test]
fn palette_hidden_in_preview() {
    let mut core = editor();
    assert_eq!(core.palette().len(), 4);
    core.toggle_mode();
    assert!(core.palette().is_empty());
}

// =============================================================
// Render items
// =============================================================

#[test]
fn render_items_follow_page_order_with_flags() {
    let mut core = editor();
    let heading = insert(&mut core, ComponentKind::Heading);
    insert(&mut core, ComponentKind::Image);
    insert(&mut core, ComponentKind::Button);
    core.select(&heading);

    let items = core.render_items();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].block, RenderBlock::Heading("New Heading".into()));
    assert!(items[0].selected);
    assert!(items.iter().all(|i| i.interactive));
    assert_eq!(items[1].block, RenderBlock::Image { src: "https://via.placeholder.com/400x300".into() });
    assert!(!items[1].selected);
    assert_eq!(items[2].block, RenderBlock::Button { label: "Click me".into() });
    assert_eq!(items[0].style, "color: #1a1a1a; font-size: 2rem; margin-bottom: 1rem;");
}

#[test]
fn render_items_in_preview_are_inert_and_unselected() {
    let mut core = editor();
    let id = insert(&mut core, ComponentKind::Paragraph);
    core.select(&id);
    core.toggle_mode();
    let items = core.render_items();
    assert!(!items[0].interactive);
    assert!(!items[0].selected);
}

// =============================================================
// Collaborators
// =============================================================

#[test]
fn save_notifies_success_exactly_once_and_returns_snapshot() {
    let mut core = editor();
    insert(&mut core, ComponentKind::Heading);
    let notifier = RecordingNotifier::default();
    let json = core.save(&notifier).unwrap();
    assert_eq!(
        notifier.notices.borrow().as_slice(),
        [(NoticeKind::Success, "Changes saved successfully!".to_owned())]
    );
    let snap = PageSnapshot::from_json(&json).unwrap();
    assert_eq!(snap.project_id, "project-1");
    assert_eq!(snap.components, core.page().list());
}

#[test]
fn save_of_empty_page_still_notifies() {
    let core = editor();
    let notifier = RecordingNotifier::default();
    core.save(&notifier).unwrap();
    assert_eq!(notifier.notices.borrow().len(), 1);
}

#[test]
fn snapshot_is_not_affected_by_later_edits() {
    let mut core = editor();
    let id = insert(&mut core, ComponentKind::Heading);
    let snap = core.snapshot();
    core.select(&id);
    core.set_content("after");
    assert_eq!(snap.components[0].content, "New Heading");
}

#[test]
fn go_back_calls_navigator() {
    let core = editor();
    let nav = CountingNavigator::default();
    assert_eq!(core.go_back(&nav), Action::NavigateBack);
    assert_eq!(nav.calls.get(), 1);
}

#[test]
fn greeting_uses_identity() {
    let core = editor();
    assert_eq!(core.greeting(&NamedUser("sam")), "Welcome, sam");
}
