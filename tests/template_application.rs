use album_studio::album::END_PAPER_COLOR;
use album_studio::catalog::{cover_templates, layouts, templates};
use album_studio::{EditError, EditorModel, ElementId, ElementType};
use std::collections::HashSet;
use egui::Color32;

#[test]
fn test_template_replaces_album_and_resets_view() {
    let mut model = EditorModel::default();
    let page = model.active_page().unwrap();
    model
        .add_element(page, ElementType::Text, None, None, Default::default())
        .unwrap();
    model.add_pages().unwrap();

    let template = &templates()[2];
    model.apply_template(template).unwrap();

    assert_eq!(model.album().page_count(), template.pages.len());
    assert_eq!(model.current_spread(), 0);
    assert_eq!(model.selection(), None);
    assert!(model.album().page(page).is_none());
    assert_eq!(model.album().pages()[1].background, Some(END_PAPER_COLOR));
}

#[test]
fn test_template_pages_get_fresh_ids() {
    let template = &templates()[1];
    let first = template.expand().unwrap();
    let second = template.expand().unwrap();
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_ne!(a.id, b.id);
        assert_eq!(a.elements().len(), b.elements().len());
        for (x, y) in a.elements().iter().zip(b.elements()) {
            assert_ne!(x.id, y.id);
            assert_eq!(x.geometry, y.geometry);
        }
    }
}

#[test]
fn test_template_shapes_are_valid_albums() {
    for template in templates() {
        let model = EditorModel::from_template("Album", &template).unwrap();
        let count = model.album().page_count();
        assert!(count % 2 == 0 && (4..=16).contains(&count), "{}", template.id);
    }
}

#[test]
fn test_cover_template_only_touches_front_cover() {
    let mut model = EditorModel::from_template("Album", &templates()[0]).unwrap();
    model.go_to_spread(2);
    let before: Vec<_> = model.album().pages()[1..].to_vec();
    let cover = &cover_templates()[0];

    model.apply_cover_template(cover).unwrap();

    let pages = model.album().pages();
    assert_eq!(pages[0].background, Some(cover.background));
    assert_eq!(pages[0].elements().len(), cover.elements.len());
    assert_eq!(&pages[1..], before.as_slice());
    assert_eq!(model.current_spread(), 0);
}

#[test]
fn test_layout_replaces_elements_and_keeps_background() {
    let mut model = EditorModel::default();
    let page = model.active_page().unwrap();
    model.set_background(page, Color32::LIGHT_BLUE).unwrap();
    model
        .add_element(page, ElementType::Text, None, None, Default::default())
        .unwrap();
    let layout = layouts().into_iter().next().unwrap();

    model.apply_layout(page, &layout).unwrap();

    let page = model.album().page(page).unwrap();
    assert_eq!(page.background, Some(Color32::LIGHT_BLUE));
    assert_eq!(page.elements().len(), layout.elements.len());
}

#[test]
fn test_layout_on_end_paper_is_refused() {
    let mut model = EditorModel::default();
    let end_paper = model.album().pages()[1].id;
    let layout = layouts().into_iter().next().unwrap();
    assert_eq!(
        model.apply_layout(end_paper, &layout),
        Err(EditError::PageNotEditable(end_paper))
    );
}

#[test]
fn test_every_layout_round_trips_except_ids() {
    let mut model = EditorModel::default();
    let page = model.active_page().unwrap();
    let mut seen: HashSet<ElementId> = HashSet::new();

    for layout in layouts() {
        for _ in 0..2 {
            model.apply_layout(page, &layout).unwrap();
            let elements = model.album().page(page).unwrap().elements();
            assert_eq!(elements.len(), layout.elements.len(), "{}", layout.id);
            for (element, template) in elements.iter().zip(&layout.elements) {
                assert_eq!(element.geometry, template.geometry, "{}", layout.id);
                assert_eq!(element.style, template.style, "{}", layout.id);
                assert_eq!(element.kind, template.kind, "{}", layout.id);
                assert!(seen.insert(element.id), "{} reused an id", layout.id);
            }
        }
    }
}
