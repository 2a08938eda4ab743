use egui::{Color32, Id, Pos2, Rect, Sense, Stroke, Ui, Vec2};
use log::debug;

use crate::command::Command;
use crate::config::EditorConfig;
use crate::element::{ElementKind, ElementPatch, MIN_ELEMENT_SIZE};
use crate::id_generator::PageId;
use crate::page::AlbumPage;
use crate::renderer::{PageView, Renderer};
use crate::spread::{spread_labels, spread_title};
use crate::state::EditorModel;
use crate::tools::{CanvasContext, SelectionTool, Tool};

const SPREAD_MARGIN: f32 = 32.0;
const LABEL_HEIGHT: f32 = 20.0;
const CANVAS_BACKGROUND: Color32 = Color32::from_rgb(0xF3, 0xF4, 0xF6);
/// Text boxes whose stored height is further than this from their laid-out
/// height are refitted.
const TEXT_FIT_TOLERANCE: f32 = 0.5;

/// Interaction state of the two page surfaces of the spread on screen.
#[derive(Debug, Default)]
pub struct CanvasState {
    /// One tool per side, `[left, right]`.
    tools: [SelectionTool; 2],
    /// Side that received the current press.
    pressed: Option<usize>,
}

impl CanvasState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self, side: usize) -> Option<&SelectionTool> {
        self.tools.get(side)
    }

    /// Makes each side's tool reflect the model's selection.
    pub fn sync(&mut self, model: &EditorModel) {
        let selected = model.selection().and_then(|id| {
            let (page_id, spread) = model.locate_element(id)?;
            (spread == model.current_spread()).then_some((page_id, id))
        });
        let sides = model.spread_pages().map(|page| page.map(|p| p.id));
        for (tool, side_page) in self.tools.iter_mut().zip(sides) {
            let own = selected.filter(|(page_id, _)| Some(*page_id) == side_page);
            tool.sync_selection(own);
        }
    }

    /// Abandons any drag or transform in progress.
    pub fn cancel(&mut self) {
        for tool in &mut self.tools {
            tool.cancel();
        }
        self.pressed = None;
    }
}

/// The spread being edited, or previewed when `preview` is set.
pub fn central_panel(
    ctx: &egui::Context,
    model: &EditorModel,
    canvas: &mut CanvasState,
    renderer: &mut Renderer,
    config: &EditorConfig,
    preview: bool,
) -> Vec<Command> {
    let mut commands = Vec::new();
    let frame = egui::Frame::central_panel(&ctx.style()).fill(CANVAS_BACKGROUND);

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        egui::ScrollArea::both().show(ui, |ui| {
            let page_size = config.page_size;
            let spread_size = Vec2::new(page_size.x * 2.0, page_size.y) * config.zoom;
            let desired = spread_size + Vec2::new(SPREAD_MARGIN * 2.0, SPREAD_MARGIN * 2.0 + LABEL_HEIGHT);
            let (area, _) = ui.allocate_exact_size(desired.max(ui.available_size()), Sense::hover());
            let spread_rect = Rect::from_center_size(area.center(), spread_size);

            let index = model.current_spread();
            let labels = spread_labels(index);
            for (side, page) in model.spread_pages().into_iter().enumerate() {
                let Some(page) = page else {
                    continue;
                };
                let view = PageView {
                    origin: spread_rect.min + Vec2::new(page_size.x * config.zoom * side as f32, 0.0),
                    zoom: config.zoom,
                };
                let page_rect = view.screen_rect(page_size);
                let editable = model.album().is_editable(Some(page.id));
                let surface = CanvasContext {
                    page,
                    editable,
                    config,
                };

                let response = ui.interact(page_rect, Id::new(("page_surface", side)), Sense::click_and_drag());
                if !preview {
                    handle_pointer(ui, &response, side, view, &surface, canvas, &mut commands);
                    handle_dnd(&response, view, &surface, &mut commands);
                }

                let painter = ui.painter();
                let tool = &canvas.tools[side];
                renderer.paint_page(painter, page, view, page_size, |e| tool.preview_geometry(e.id));
                if !preview {
                    paint_overlays(ui, renderer, model, page, tool, view, &surface, &response);
                }

                let caption = if preview {
                    spread_title(index, model.album().page_count())
                } else {
                    labels[side].clone()
                };
                if !preview || side == 1 {
                    ui.painter().text(
                        Pos2::new(page_rect.center().x, page_rect.bottom() + LABEL_HEIGHT / 2.0 + 4.0),
                        egui::Align2::CENTER_CENTER,
                        caption,
                        egui::FontId::proportional(12.0),
                        Color32::GRAY,
                    );
                }
            }

            // Spine
            ui.painter().vline(
                spread_rect.center().x,
                spread_rect.y_range(),
                Stroke::new(1.0, Color32::from_black_alpha(40)),
            );
        });
    });
    if !preview {
        commands.extend(text_fit_commands(model, renderer));
    }
    commands
}

/// Height updates for text boxes on the shown spread whose content no longer
/// fits their stored height, so picking and guides match what is drawn.
pub fn text_fit_commands(model: &EditorModel, renderer: &Renderer) -> Vec<Command> {
    let mut commands = Vec::new();
    for page in model.spread_pages().into_iter().flatten() {
        for element in page.elements() {
            let ElementKind::Text {
                text, font_size, ..
            } = &element.kind
            else {
                continue;
            };
            let height = renderer
                .text_height(text, *font_size, element.geometry.size.x)
                .max(MIN_ELEMENT_SIZE);
            if (height - element.geometry.size.y).abs() > TEXT_FIT_TOLERANCE {
                commands.push(Command::UpdateElement {
                    page_id: page.id,
                    element_id: element.id,
                    patch: ElementPatch {
                        height: Some(height),
                        ..Default::default()
                    },
                });
            }
        }
    }
    commands
}

fn handle_pointer(
    ui: &Ui,
    response: &egui::Response,
    side: usize,
    view: PageView,
    surface: &CanvasContext<'_>,
    canvas: &mut CanvasState,
    commands: &mut Vec<Command>,
) {
    let tool = &mut canvas.tools[side];
    let (pressed, released, pointer) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.interact_pos(),
        )
    });
    let Some(pointer) = pointer else {
        return;
    };
    let pos = view.to_page(pointer);

    if response.hovered() || canvas.pressed == Some(side) {
        if let Some(handle) = tool.hovered_handle(pos, surface) {
            ui.ctx().set_cursor_icon(handle.cursor_icon());
        }
    }

    if pressed && response.hovered() {
        if surface.editable {
            commands.push(Command::SetActivePage(surface.page.id));
        }
        commands.extend(tool.on_pointer_down(pos, surface));
        canvas.pressed = Some(side);
        debug!("{} tool now {}", tool.name(), tool.current_state_name());
    } else if canvas.pressed == Some(side) {
        if released {
            commands.extend(tool.on_pointer_up(pos, surface));
            canvas.pressed = None;
            debug!("{} tool now {}", tool.name(), tool.current_state_name());
        } else if response.dragged() {
            commands.extend(tool.on_pointer_move(pos, surface));
        }
    }

    if response.double_clicked() {
        commands.extend(tool.on_double_click(pos, surface));
    }
}

fn handle_dnd(
    response: &egui::Response,
    view: PageView,
    surface: &CanvasContext<'_>,
    commands: &mut Vec<Command>,
) {
    if !surface.editable {
        return;
    }
    let Some(payload) = response.dnd_release_payload::<String>() else {
        return;
    };
    let Some(pointer) = response.hover_pos() else {
        return;
    };
    commands.push(Command::SetActivePage(surface.page.id));
    commands.push(Command::Drop {
        page_id: surface.page.id,
        payload: payload.as_str().to_owned(),
        position: view.to_page(pointer),
    });
}

#[allow(clippy::too_many_arguments)]
fn paint_overlays(
    ui: &Ui,
    renderer: &Renderer,
    model: &EditorModel,
    page: &AlbumPage,
    tool: &SelectionTool,
    view: PageView,
    surface: &CanvasContext<'_>,
    response: &egui::Response,
) {
    let painter = ui.painter();
    let config = surface.config;
    let page_rect = view.screen_rect(config.page_size);

    if !surface.editable {
        renderer.paint_end_paper_overlay(painter, page_rect);
        return;
    }
    if is_active(model, page.id) {
        renderer.paint_active_ring(painter, page_rect);
    }
    if response.dnd_hover_payload::<String>().is_some() {
        painter.rect_filled(page_rect, 0.0, Color32::from_rgba_unmultiplied(0x45, 0x7B, 0x9D, 40));
    }

    if let Some((page_id, element_id)) = tool.selected() {
        if let Some(element) = page.find_element(element_id).filter(|_| page_id == page.id) {
            let geometry = tool.preview_geometry(element_id).unwrap_or(element.geometry);
            renderer.paint_selection(
                painter,
                &geometry,
                element.is_text(),
                view,
                config.handle_radius * view.zoom.max(0.5),
                config.rotate_handle_offset,
            );
        }
    }
    renderer.paint_guides(painter, tool.guides(), view, config.page_size);
}

fn is_active(model: &EditorModel, page_id: PageId) -> bool {
    model.active_page() == Some(page_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementType;

    #[test]
    fn test_sync_places_selection_on_its_side() {
        let mut model = EditorModel::default();
        let mut canvas = CanvasState::new();
        let [back, front] = model.spread_pages().map(|p| p.map(|p| p.id));
        let front = front.unwrap();

        let id = model
            .add_element(front, ElementType::Shape, None, None, Default::default())
            .unwrap();
        canvas.sync(&model);
        assert_eq!(canvas.tool(1).and_then(|t| t.selected()), Some((front, id)));
        assert_eq!(canvas.tool(0).and_then(|t| t.selected()), None);
        assert!(back.is_some());

        model.select(None);
        canvas.sync(&model);
        assert_eq!(canvas.tool(1).and_then(|t| t.selected()), None);
    }

    #[test]
    fn test_text_height_follows_layout() {
        let mut model = EditorModel::default();
        let page = model.active_page().unwrap();
        let long = "a long caption that wraps ".repeat(12);
        let text = model
            .add_element(page, ElementType::Text, Some(&long), None, Default::default())
            .unwrap();
        model
            .add_element(page, ElementType::Shape, None, None, Default::default())
            .unwrap();

        let ctx = egui::Context::default();
        let mut commands = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let renderer = Renderer::new(ctx, 4);
            commands = text_fit_commands(&model, &renderer);
        });

        assert_eq!(commands.len(), 1);
        let Command::UpdateElement {
            element_id, patch, ..
        } = &commands[0]
        else {
            panic!("expected a height update, got {:?}", commands[0]);
        };
        assert_eq!(*element_id, text);
        assert!(patch.height.unwrap() > 50.0);
        assert_eq!(patch.width, None);

        for command in commands {
            model.execute(command);
        }
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let renderer = Renderer::new(ctx, 4);
            assert!(text_fit_commands(&model, &renderer).is_empty());
        });
    }

    #[test]
    fn test_selection_on_other_spread_is_not_shown() {
        let mut model = EditorModel::default();
        let mut canvas = CanvasState::new();
        let front = model.spread_pages()[1].map(|p| p.id).unwrap();
        model
            .add_element(front, ElementType::Text, None, None, Default::default())
            .unwrap();
        model.add_pages().unwrap();

        canvas.sync(&model);
        assert_ne!(model.current_spread(), 0);
        assert!(canvas.tool(0).and_then(|t| t.selected()).is_none());
        assert!(canvas.tool(1).and_then(|t| t.selected()).is_none());
    }
}
