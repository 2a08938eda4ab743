use std::collections::HashSet;

use album_studio::element::{SHAPE_FILL, TEXT_FILL, create_element};
use album_studio::geometry::ShapeKind;
use album_studio::{EditError, EditorModel, ElementKind, ElementPatch, ElementType};
use egui::{Color32, Vec2, pos2};

#[test]
fn test_defaults_per_type() {
    let image = create_element(ElementType::Image, None, None, ElementPatch::default());
    assert_eq!(image.position(), pos2(100.0, 100.0));
    assert_eq!(image.size(), Vec2::new(200.0, 150.0));
    assert!(matches!(image.kind, ElementKind::Image { frame: ShapeKind::Rectangle, .. }));

    let text = create_element(ElementType::Text, None, None, ElementPatch::default());
    assert_eq!(text.size(), Vec2::new(250.0, 50.0));
    assert_eq!(text.content(), Some("New Text"));
    assert_eq!(text.style.fill, Some(TEXT_FILL));

    let shape = create_element(ElementType::Shape, None, None, ElementPatch::default());
    assert_eq!(shape.size(), Vec2::new(100.0, 100.0));
    assert_eq!(shape.style.fill, Some(SHAPE_FILL));
    assert_eq!(shape.content(), None);
}

#[test]
fn test_empty_content_uses_defaults() {
    let image = create_element(ElementType::Image, Some(""), None, ElementPatch::default());
    assert_eq!(image.content(), Some("https://picsum.photos/seed/new/400/300"));
    let text = create_element(ElementType::Text, Some(""), None, ElementPatch::default());
    assert_eq!(text.content(), Some("New Text"));
}

#[test]
fn test_shape_preset_json_is_consumed() {
    let shape = create_element(
        ElementType::Shape,
        Some(r##"{"shapeType":"circle","fill":"#FFD700"}"##),
        Some(pos2(40.0, 60.0)),
        ElementPatch::default(),
    );
    assert_eq!(shape.content(), None);
    assert_eq!(shape.clip_shape(), Some(ShapeKind::Circle));
    assert_eq!(shape.style.fill, Some(Color32::from_rgb(0xFF, 0xD7, 0x00)));
    assert_eq!(shape.position(), pos2(40.0, 60.0));
}

#[test]
fn test_malformed_shape_preset_keeps_defaults() {
    let shape = create_element(ElementType::Shape, Some("{not json"), None, ElementPatch::default());
    assert_eq!(shape.clip_shape(), Some(ShapeKind::Rectangle));
    assert_eq!(shape.content(), None);
}

#[test]
fn test_extra_attributes_override_defaults() {
    let extra = ElementPatch {
        fill: Some(Color32::RED),
        opacity: Some(0.5),
        ..Default::default()
    };
    let sticker = create_element(ElementType::Sticker, Some("M0 0 L10 10 Z"), None, extra);
    assert_eq!(sticker.style.fill, Some(Color32::RED));
    assert_eq!(sticker.style.opacity, 0.5);
    assert_eq!(sticker.content(), Some("M0 0 L10 10 Z"));
}

#[test]
fn test_ids_are_unique() {
    let mut model = EditorModel::default();
    let page = model.active_page().unwrap();
    let mut ids = HashSet::new();
    for i in 0..50 {
        let element_type = [ElementType::Image, ElementType::Text, ElementType::Shape][i % 3];
        let id = model
            .add_element(page, element_type, None, None, ElementPatch::default())
            .unwrap();
        assert!(ids.insert(id));
    }
    assert_eq!(model.album().page(page).unwrap().elements().len(), 50);
}

#[test]
fn test_new_element_is_selected_and_last() {
    let mut model = EditorModel::default();
    let page = model.active_page().unwrap();
    model
        .add_element(page, ElementType::Image, None, None, ElementPatch::default())
        .unwrap();
    let id = model
        .add_element(page, ElementType::Text, Some("Top"), None, ElementPatch::default())
        .unwrap();

    assert_eq!(model.selection(), Some(id));
    let elements = model.album().page(page).unwrap().elements();
    assert_eq!(elements.last().map(|e| e.id), Some(id));
}

#[test]
fn test_end_papers_take_no_elements() {
    let mut model = EditorModel::default();
    let end_paper = model.album().pages()[1].id;

    let result = model.add_element(end_paper, ElementType::Text, None, None, ElementPatch::default());
    assert_eq!(result, Err(EditError::PageNotEditable(end_paper)));
    assert!(model.album().pages()[1].is_empty());
    assert_eq!(model.selection(), None);
}

#[test]
fn test_update_text_patch_ignores_shape_fields() {
    let mut model = EditorModel::default();
    let page = model.active_page().unwrap();
    let id = model
        .add_element(page, ElementType::Text, None, None, ElementPatch::default())
        .unwrap();

    let patch = ElementPatch {
        content: Some("Summer".to_owned()),
        font_family: Some("Inter".to_owned()),
        shape_type: Some(ShapeKind::Star),
        ..Default::default()
    };
    model.update_element(page, id, &patch).unwrap();

    let (_, element) = model.album().find_element(id).unwrap();
    match &element.kind {
        ElementKind::Text { text, font_family, .. } => {
            assert_eq!(text, "Summer");
            assert_eq!(font_family, "Inter");
        }
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn test_delete_clears_matching_selection() {
    let mut model = EditorModel::default();
    let page = model.active_page().unwrap();
    let id = model
        .add_element(page, ElementType::Shape, None, None, ElementPatch::default())
        .unwrap();

    model.delete_element(id).unwrap();
    assert_eq!(model.selection(), None);
    assert_eq!(model.delete_element(id), Err(EditError::ElementNotFound(id)));
}
