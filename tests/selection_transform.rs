use album_studio::config::EditorConfig;
use album_studio::tools::{CanvasContext, Guide, SelectionState};
use album_studio::{Command, EditorModel, ElementId, ElementPatch, ElementType, PageId, SelectionTool, Tool};
use egui::{Pos2, pos2};

/// Runs one press-move-release gesture against the model's page and applies
/// whatever the tool emits.
fn gesture(
    model: &mut EditorModel,
    tool: &mut SelectionTool,
    page_id: PageId,
    from: Pos2,
    to: Pos2,
) -> (Vec<Command>, Vec<Guide>) {
    let config = EditorConfig::default();
    let mut commands = Vec::new();
    let guides;
    {
        let page = model.album().page(page_id).unwrap();
        let ctx = CanvasContext {
            page,
            editable: model.album().is_editable(Some(page_id)),
            config: &config,
        };
        commands.extend(tool.on_pointer_down(from, &ctx));
        commands.extend(tool.on_pointer_move(to, &ctx));
        guides = tool.guides().to_vec();
        commands.extend(tool.on_pointer_up(to, &ctx));
    }
    for command in commands.clone() {
        model.execute(command);
    }
    (commands, guides)
}

fn model_with_shape(at: Pos2) -> (EditorModel, PageId, ElementId) {
    let mut model = EditorModel::default();
    let page = model.active_page().unwrap();
    let id = model
        .add_element(page, ElementType::Shape, None, Some(at), ElementPatch::default())
        .unwrap();
    model.select(None);
    (model, page, id)
}

#[test]
fn test_drag_moves_element_and_shows_center_guide() {
    let (mut model, page, id) = model_with_shape(pos2(20.0, 20.0));
    let mut tool = SelectionTool::new();

    // Center of the 100x100 shape ends at x = 202, within 5 of the page center.
    let (commands, guides) = gesture(&mut model, &mut tool, page, pos2(70.0, 70.0), pos2(202.0, 70.0));

    assert_eq!(commands[0], Command::SelectElement(Some(id)));
    assert!(guides.contains(&Guide::Vertical(200.0)));
    assert!(!guides.iter().any(|g| matches!(g, Guide::Horizontal(_))));
    assert!(tool.guides().is_empty());

    // Guides are advisory: the element keeps the exact pointer offset.
    let (_, element) = model.album().find_element(id).unwrap();
    assert_eq!(element.position(), pos2(152.0, 20.0));
    assert_eq!(model.selection(), Some(id));
}

#[test]
fn test_rotate_handle_sets_rotation() {
    let (mut model, page, id) = model_with_shape(pos2(100.0, 100.0));
    let mut tool = SelectionTool::new();
    tool.sync_selection(Some((page, id)));

    // Rotate handle sits 30 above the top edge center; sweep a quarter turn.
    gesture(&mut model, &mut tool, page, pos2(150.0, 70.0), pos2(200.0, 150.0));

    let (_, element) = model.album().find_element(id).unwrap();
    assert!((element.geometry.rotation - 90.0).abs() < 1e-3);
    assert!((element.geometry.center().x - 150.0).abs() < 1e-3);
    assert!((element.geometry.center().y - 150.0).abs() < 1e-3);
    assert_eq!(element.size(), egui::Vec2::new(100.0, 100.0));
}

#[test]
fn test_corner_resize_clamps_to_minimum() {
    let (mut model, page, id) = model_with_shape(pos2(100.0, 100.0));
    let mut tool = SelectionTool::new();
    tool.sync_selection(Some((page, id)));

    // Drag the bottom-right corner far past the top-left one.
    gesture(&mut model, &mut tool, page, pos2(200.0, 200.0), pos2(0.0, 0.0));

    let (_, element) = model.album().find_element(id).unwrap();
    assert_eq!(element.position(), pos2(100.0, 100.0));
    assert!((element.size().x - 5.0).abs() < 1e-3);
    assert!((element.size().y - 5.0).abs() < 1e-3);
}

#[test]
fn test_end_paper_ignores_pointer() {
    let mut model = EditorModel::default();
    let end_paper = model.album().pages()[1].id;
    let mut tool = SelectionTool::new();

    let (commands, _) = gesture(&mut model, &mut tool, end_paper, pos2(10.0, 10.0), pos2(50.0, 50.0));
    assert!(commands.is_empty());
    assert_eq!(tool.state(), &SelectionState::Idle);
}

#[test]
fn test_double_click_arms_image_replacement() {
    let mut model = EditorModel::default();
    let page = model.active_page().unwrap();
    let image = model
        .add_element(page, ElementType::Image, None, None, ElementPatch::default())
        .unwrap();
    model.select(None);

    let config = EditorConfig::default();
    let mut tool = SelectionTool::new();
    let command = {
        let ctx = CanvasContext {
            page: model.album().page(page).unwrap(),
            editable: true,
            config: &config,
        };
        tool.on_double_click(pos2(150.0, 150.0), &ctx)
    };
    assert_eq!(
        command,
        Some(Command::RequestImageReplace {
            page_id: page,
            element_id: image
        })
    );

    model.execute(command.unwrap());
    assert_eq!(model.replace_target(), Some((page, image)));
    assert_eq!(model.selection(), Some(image));
}
