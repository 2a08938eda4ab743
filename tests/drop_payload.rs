use album_studio::drop_payload::{DragKind, DragPayload, DropAction, resolve_drop};
use album_studio::{Command, EditError, EditorModel, ElementType};
use egui::{Color32, pos2};

#[test]
fn test_color_drop_only_changes_background() {
    let mut model = EditorModel::default();
    let page = model.active_page().unwrap();
    model
        .add_element(page, ElementType::Text, None, None, Default::default())
        .unwrap();
    let elements_before = model.album().page(page).unwrap().elements().to_vec();

    let payload = DragPayload::new(DragKind::Color, "#A1C4FD").to_json().unwrap();
    model.drop_payload(page, &payload, pos2(10.0, 10.0)).unwrap();

    let after = model.album().page(page).unwrap();
    assert_eq!(after.background, Some(Color32::from_rgb(0xA1, 0xC4, 0xFD)));
    assert_eq!(after.elements(), elements_before.as_slice());
}

#[test]
fn test_element_drop_lands_at_pointer() {
    let mut model = EditorModel::default();
    let page = model.active_page().unwrap();
    let payload = DragPayload::new(DragKind::Sticker, "M10 10 L90 90").to_json().unwrap();

    model.execute(Command::Drop {
        page_id: page,
        payload,
        position: pos2(120.0, 80.0),
    });

    let elements = model.album().page(page).unwrap().elements();
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].element_type(), ElementType::Sticker);
    assert_eq!(elements[0].position(), pos2(120.0, 80.0));
    assert_eq!(model.selection(), Some(elements[0].id));
}

#[test]
fn test_shape_drop_uses_preset() {
    let mut model = EditorModel::default();
    let page = model.active_page().unwrap();
    let payload = r#"{"type":"shape","data":"{\"shapeType\":\"triangle\"}"}"#;

    model.drop_payload(page, payload, pos2(0.0, 0.0)).unwrap();
    let element = &model.album().page(page).unwrap().elements()[0];
    assert_eq!(element.content(), None);
    assert_eq!(
        element.clip_shape(),
        Some(album_studio::geometry::ShapeKind::Triangle)
    );
}

#[test]
fn test_plain_text_is_an_image_uri() {
    assert_eq!(
        resolve_drop("  https://example.com/a.jpg "),
        Ok(DropAction::AddElement {
            element_type: ElementType::Image,
            content: "https://example.com/a.jpg".to_owned(),
        })
    );
    assert!(matches!(resolve_drop("   "), Err(EditError::MalformedPayload(_))));
}

#[test]
fn test_unknown_payload_kind_is_rejected() {
    assert!(matches!(
        resolve_drop(r#"{"type":"video","data":"x"}"#),
        Err(EditError::MalformedPayload(_))
    ));
    assert!(matches!(
        resolve_drop(r#"{"data":"x"}"#),
        Err(EditError::MalformedPayload(_))
    ));

    let mut model = EditorModel::default();
    let page = model.active_page().unwrap();
    let before = model.album().clone();
    model.execute(Command::Drop {
        page_id: page,
        payload: r#"{"type":"video","data":"x"}"#.to_owned(),
        position: pos2(10.0, 10.0),
    });
    assert_eq!(model.album(), &before);
}

#[test]
fn test_empty_data_falls_back_to_defaults() {
    let mut model = EditorModel::default();
    let page = model.active_page().unwrap();
    let payload = DragPayload::new(DragKind::Text, "").to_json().unwrap();
    model.drop_payload(page, &payload, pos2(20.0, 20.0)).unwrap();

    let (_, text) = model.album().find_element(model.selection().unwrap()).unwrap();
    assert_eq!(text.content(), Some("New Text"));
}

#[test]
fn test_bad_color_is_rejected_without_changes() {
    let mut model = EditorModel::default();
    let page = model.active_page().unwrap();
    let before = model.album().clone();
    let payload = DragPayload::new(DragKind::Color, "sky").to_json().unwrap();

    assert!(matches!(
        model.drop_payload(page, &payload, pos2(0.0, 0.0)),
        Err(EditError::MalformedPayload(_))
    ));
    assert_eq!(model.album(), &before);
}

#[test]
fn test_drop_on_end_paper_is_refused() {
    let mut model = EditorModel::default();
    let end_paper = model.album().pages()[2].id;
    let payload = DragPayload::new(DragKind::Text, "Hi").to_json().unwrap();

    assert_eq!(
        model.drop_payload(end_paper, &payload, pos2(0.0, 0.0)),
        Err(EditError::PageNotEditable(end_paper))
    );
}
