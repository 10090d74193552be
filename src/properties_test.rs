use super::*;
use crate::registry::ComponentKind;

fn page_with_heading() -> (Page, InstanceId) {
    let mut page = Page::new();
    let instance = ComponentInstance::from_kind(ComponentKind::Heading);
    let id = instance.id.clone();
    page.append(instance);
    (page, id)
}

// =============================================================
// Content
// =============================================================

#[test]
fn set_content_writes_page_and_mirror() {
    let (mut page, id) = page_with_heading();
    let mut editor = PropertyEditor::new();
    let mirror = editor.set_content(&mut page, Some(&id), "Hello").unwrap().cloned();
    assert_eq!(mirror.map(|c| c.content), Some("Hello".to_owned()));
    assert_eq!(page.list()[0].content, "Hello");
    assert_eq!(editor.current().map(|c| c.content.as_str()), Some("Hello"));
}

#[test]
fn set_content_without_selection_is_noop() {
    let (mut page, _) = page_with_heading();
    let before = page.clone();
    let mut editor = PropertyEditor::new();
    assert!(editor.set_content(&mut page, None, "Hello").unwrap().is_none());
    assert_eq!(page, before);
    assert!(editor.current().is_none());
}

#[test]
fn set_content_on_stale_id_reports_stale_selection() {
    let (mut page, _) = page_with_heading();
    let mut editor = PropertyEditor::new();
    let ghost = InstanceId::from("ghost");
    let err = editor.set_content(&mut page, Some(&ghost), "x").unwrap_err();
    assert!(matches!(err, EditorError::StaleSelection(ref id) if id == &ghost));
    assert!(editor.current().is_none());
}

#[test]
fn empty_content_is_allowed() {
    let (mut page, id) = page_with_heading();
    let mut editor = PropertyEditor::new();
    editor.set_content(&mut page, Some(&id), "").unwrap();
    assert_eq!(page.list()[0].content, "");
}

// =============================================================
// Style
// =============================================================

#[test]
fn set_style_property_merges_into_page_and_mirror() {
    let (mut page, id) = page_with_heading();
    let mut editor = PropertyEditor::new();
    editor.set_style_property(&mut page, Some(&id), "fontSize", "3rem").unwrap();
    assert_eq!(page.list()[0].style_value("fontSize"), "3rem");
    assert_eq!(page.list()[0].style_value("color"), "#1a1a1a");
    let mirror = editor.current().unwrap();
    assert_eq!(mirror.style_value("fontSize"), "3rem");
    assert_eq!(mirror.style_value("marginBottom"), "1rem");
}

#[test]
fn set_style_property_without_selection_is_noop() {
    let (mut page, _) = page_with_heading();
    let before = page.clone();
    let mut editor = PropertyEditor::new();
    assert!(editor.set_style_property(&mut page, None, "color", "red").unwrap().is_none());
    assert_eq!(page, before);
}

#[test]
fn consecutive_edits_accumulate_in_mirror() {
    let (mut page, id) = page_with_heading();
    let mut editor = PropertyEditor::new();
    editor.set_content(&mut page, Some(&id), "Title").unwrap();
    editor.set_style_property(&mut page, Some(&id), "color", "#333333").unwrap();
    let mirror = editor.current().unwrap();
    assert_eq!(mirror.content, "Title");
    assert_eq!(mirror.style_value("color"), "#333333");
    assert_eq!(mirror, &page.list()[0]);
}

// =============================================================
// Refresh
// =============================================================

#[test]
fn refresh_loads_selected_instance() {
    let (page, id) = page_with_heading();
    let mut editor = PropertyEditor::new();
    editor.refresh(&page, Some(&id)).unwrap();
    assert_eq!(editor.current().map(|c| &c.id), Some(&id));
}

#[test]
fn refresh_with_no_selection_empties_mirror() {
    let (page, id) = page_with_heading();
    let mut editor = PropertyEditor::new();
    editor.refresh(&page, Some(&id)).unwrap();
    editor.refresh(&page, None).unwrap();
    assert!(editor.current().is_none());
}

#[test]
fn refresh_with_stale_id_errors_and_empties_mirror() {
    let (page, id) = page_with_heading();
    let mut editor = PropertyEditor::new();
    editor.refresh(&page, Some(&id)).unwrap();
    assert!(matches!(
        editor.refresh(&Page::new(), Some(&id)),
        Err(EditorError::StaleSelection(_))
    ));
    assert!(editor.current().is_none());
}
