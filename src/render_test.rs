use super::*;

fn instance(kind: ComponentKind, content: &str) -> ComponentInstance {
    let mut c = ComponentInstance::from_kind(kind);
    c.content = content.to_owned();
    c
}

// =============================================================
// RenderBlock
// =============================================================

#[test]
fn text_kinds_render_content_verbatim() {
    let cfg = EditorConfig::default();
    assert_eq!(
        RenderBlock::for_instance(&instance(ComponentKind::Heading, "Hi"), &cfg),
        RenderBlock::Heading("Hi".into())
    );
    assert_eq!(
        RenderBlock::for_instance(&instance(ComponentKind::Paragraph, ""), &cfg),
        RenderBlock::Paragraph(String::new())
    );
}

#[test]
fn empty_image_uses_placeholder() {
    let cfg = EditorConfig::default();
    assert_eq!(
        RenderBlock::for_instance(&instance(ComponentKind::Image, ""), &cfg),
        RenderBlock::Image { src: "https://via.placeholder.com/400x300".into() }
    );
}

#[test]
fn image_with_url_uses_it() {
    let cfg = EditorConfig::default();
    assert_eq!(
        RenderBlock::for_instance(&instance(ComponentKind::Image, "https://img.test/a.png"), &cfg),
        RenderBlock::Image { src: "https://img.test/a.png".into() }
    );
}

#[test]
fn empty_button_uses_configured_label() {
    let cfg = EditorConfig { button_fallback_label: "Go".into(), ..EditorConfig::default() };
    assert_eq!(
        RenderBlock::for_instance(&instance(ComponentKind::Button, ""), &cfg),
        RenderBlock::Button { label: "Go".into() }
    );
    assert_eq!(
        RenderBlock::for_instance(&instance(ComponentKind::Button, "Buy"), &cfg),
        RenderBlock::Button { label: "Buy".into() }
    );
}

// =============================================================
// inline_css
// =============================================================

#[test]
fn inline_css_converts_keys_to_kebab_case() {
    let style = ComponentKind::Heading.defaults().style;
    assert_eq!(inline_css(&style), "color: #1a1a1a; font-size: 2rem; margin-bottom: 1rem;");
}

#[test]
fn inline_css_of_empty_map_is_empty() {
    assert_eq!(inline_css(&StyleMap::new()), "");
}

#[test]
fn kebab_case_leaves_lowercase_keys() {
    assert_eq!(kebab_case("color"), "color");
    assert_eq!(kebab_case("lineHeight"), "line-height");
}
