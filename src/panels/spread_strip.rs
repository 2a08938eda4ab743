use egui::{Color32, Sense, Stroke, Vec2};

use crate::album::is_end_paper_index;
use crate::command::Command;
use crate::renderer::{PageView, Renderer};
use crate::spread::{max_spread_index, spread_page_indices, spread_title};
use crate::state::EditorModel;

const THUMBNAIL_ZOOM: f32 = 0.12;

/// Miniatures of every spread along the bottom; clicking one jumps to it.
pub fn spread_strip(
    ctx: &egui::Context,
    model: &EditorModel,
    renderer: &mut Renderer,
    page_size: Vec2,
) -> Vec<Command> {
    let mut commands = Vec::new();
    let pages = model.album().pages();
    let page_count = pages.len();
    let page_thumb = page_size * THUMBNAIL_ZOOM;

    egui::TopBottomPanel::bottom("spread_strip")
        .resizable(false)
        .show(ctx, |ui| {
            egui::ScrollArea::horizontal().show(ui, |ui| {
                ui.horizontal(|ui| {
                    for index in 0..=max_spread_index(page_count) {
                        ui.vertical(|ui| {
                            let (rect, response) = ui.allocate_exact_size(
                                Vec2::new(page_thumb.x * 2.0, page_thumb.y),
                                Sense::click(),
                            );
                            let painter = ui.painter_at(rect);
                            for (slot, page_index) in
                                spread_page_indices(index, page_count).into_iter().enumerate()
                            {
                                let Some(page) = page_index.and_then(|i| pages.get(i)) else {
                                    continue;
                                };
                                let view = PageView {
                                    origin: rect.min + Vec2::new(page_thumb.x * slot as f32, 0.0),
                                    zoom: THUMBNAIL_ZOOM,
                                };
                                renderer.paint_page(&painter, page, view, page_size, |_| None);
                                if page_index.is_some_and(|i| is_end_paper_index(i, page_count)) {
                                    painter.rect_filled(
                                        view.screen_rect(page_size),
                                        0.0,
                                        Color32::from_black_alpha(60),
                                    );
                                }
                            }

                            let current = index == model.current_spread();
                            let stroke = if current {
                                Stroke::new(2.0, Color32::from_rgb(0x1D, 0x35, 0x57))
                            } else if response.hovered() {
                                Stroke::new(1.0, Color32::GRAY)
                            } else {
                                Stroke::new(1.0, Color32::from_gray(210))
                            };
                            ui.painter().rect_stroke(rect, 2.0, stroke);
                            ui.small(spread_title(index, page_count));

                            if response.clicked() && !current {
                                commands.push(Command::GoToSpread(index));
                            }
                        });
                    }
                });
            });
        });
    commands
}
