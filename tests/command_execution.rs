use album_studio::file_handler::LoadTarget;
use album_studio::{Command, EditorModel, ElementType};
use egui::{Color32, pos2};

#[test]
fn test_user_facing_rejections_become_notices() {
    let mut model = EditorModel::default();
    model.execute(Command::AddPages);
    model.execute(Command::RemoveSpread(1));

    let notices = model.take_notices();
    assert_eq!(notices, vec!["This spread contains non-removable end papers.".to_owned()]);
    assert!(model.take_notices().is_empty());
}

#[test]
fn test_page_limit_notice() {
    let mut model = EditorModel::default();
    for _ in 0..7 {
        model.execute(Command::AddPages);
    }
    assert_eq!(model.album().page_count(), 16);
    assert_eq!(
        model.take_notices(),
        vec!["Maximum of 12 content pages reached.".to_owned()]
    );
}

#[test]
fn test_quiet_failures_leave_no_notice() {
    let mut model = EditorModel::default();
    let end_paper = model.album().pages()[1].id;
    model.execute(Command::AddElement {
        page_id: end_paper,
        element_type: ElementType::Text,
        content: None,
        position: None,
        extra: Default::default(),
    });
    model.execute(Command::RemoveSpread(0));
    assert!(model.take_notices().is_empty());
    assert!(model.album().pages()[1].is_empty());
}

#[test]
fn test_late_completion_for_deleted_target_is_noop() {
    let mut model = EditorModel::default();
    model.execute(Command::AddPages);
    model.execute(Command::AddPages);
    let page = model.album().pages()[3].id;
    model.execute(Command::AddElement {
        page_id: page,
        element_type: ElementType::Image,
        content: None,
        position: None,
        extra: Default::default(),
    });
    let image = model.selection().unwrap();
    model.execute(Command::RequestImageReplace {
        page_id: page,
        element_id: image,
    });
    model.execute(Command::RemoveSpread(2));
    let before = model.album().clone();

    model.execute(Command::ReplaceImageContent {
        page_id: page,
        element_id: image,
        data_uri: "data:image/png;base64,AAAA".to_owned(),
    });
    model.execute(Command::AddElement {
        page_id: page,
        element_type: ElementType::Image,
        content: Some("data:image/png;base64,AAAA".to_owned()),
        position: None,
        extra: Default::default(),
    });

    assert_eq!(model.album(), &before);
    assert!(model.take_notices().is_empty());
}

#[test]
fn test_delete_selected() {
    let mut model = EditorModel::default();
    let page = model.active_page().unwrap();
    model.execute(Command::AddElement {
        page_id: page,
        element_type: ElementType::Shape,
        content: None,
        position: Some(pos2(10.0, 10.0)),
        extra: Default::default(),
    });
    assert!(model.selection().is_some());

    model.execute(Command::DeleteSelected);
    assert_eq!(model.selection(), None);
    assert!(model.album().page(page).unwrap().is_empty());

    // Nothing selected: nothing happens.
    model.execute(Command::DeleteSelected);
    assert!(model.take_notices().is_empty());
}

#[test]
fn test_replace_request_requires_image() {
    let mut model = EditorModel::default();
    let page = model.active_page().unwrap();
    model.execute(Command::AddElement {
        page_id: page,
        element_type: ElementType::Text,
        content: None,
        position: None,
        extra: Default::default(),
    });
    let text = model.selection().unwrap();

    model.execute(Command::RequestImageReplace {
        page_id: page,
        element_id: text,
    });
    assert_eq!(model.replace_target(), None);
}

#[test]
fn test_file_drop_target_prefers_editable_page() {
    let mut model = EditorModel::default();
    model.execute(Command::AddPages);
    // Spread 1 is [end paper, page 1]; the content page takes the file.
    assert_eq!(model.current_spread(), 1);
    let content = model.album().pages()[2].id;
    let end_paper = model.album().pages()[1].id;

    model.execute(Command::SetActivePage(end_paper));
    assert_eq!(model.file_drop_target(), Some(content));

    model.execute(Command::SetBackground {
        page_id: content,
        color: Color32::YELLOW,
    });
    assert_eq!(model.album().pages()[2].background, Some(Color32::YELLOW));
}

#[test]
fn test_title_and_selection_commands() {
    let mut model = EditorModel::default();
    model.execute(Command::SetTitle("Lisbon 2024".to_owned()));
    assert_eq!(model.album().title, "Lisbon 2024");

    model.execute(Command::SelectElement(None));
    assert_eq!(model.selection(), None);
    model.execute(Command::GoToSpread(5));
    assert_eq!(model.current_spread(), 1);
}

#[test]
fn test_upload_request_targets_drop_page_once() {
    let mut model = EditorModel::default();
    assert_eq!(model.take_file_request(), None);

    model.execute(Command::RequestImageUpload);
    let page_id = model.file_drop_target().unwrap();
    assert_eq!(model.take_file_request(), Some(LoadTarget::NewImage { page_id }));
    assert_eq!(model.take_file_request(), None);
}

#[test]
fn test_replace_request_opens_picker_and_completion_disarms() {
    let mut model = EditorModel::default();
    let page_id = model.active_page().unwrap();
    model.execute(Command::AddElement {
        page_id,
        element_type: ElementType::Image,
        content: None,
        position: None,
        extra: Default::default(),
    });
    let element_id = model.selection().unwrap();

    model.execute(Command::RequestImageReplace {
        page_id,
        element_id,
    });
    assert_eq!(
        model.take_file_request(),
        Some(LoadTarget::Replace {
            page_id,
            element_id
        })
    );
    assert_eq!(model.replace_target(), Some((page_id, element_id)));

    let picked = LoadTarget::Replace {
        page_id,
        element_id,
    }
    .into_command("data:image/png;base64,AAAA".to_owned());
    model.execute(picked);
    assert_eq!(model.replace_target(), None);
    let (_, element) = model.album().find_element(element_id).unwrap();
    assert_eq!(element.content(), Some("data:image/png;base64,AAAA"));
}

#[test]
fn test_upload_request_without_editable_page_is_quiet() {
    // Four pages: spread 1 is both end papers.
    let mut model = EditorModel::default();
    model.execute(Command::GoToSpread(1));
    assert_eq!(model.file_drop_target(), None);

    model.execute(Command::RequestImageUpload);
    assert_eq!(model.take_file_request(), None);
    assert!(model.take_notices().is_empty());
}
