use egui::{Color32, Id, Sense, Shape, Stroke, Ui, Vec2};
use serde::{Deserialize, Serialize};

use crate::catalog::{
    BACKGROUND_PALETTE, SIDEBAR_DROP_POSITION, STICKER_CATEGORIES, STICKER_SIDEBAR_FILL,
    cover_templates, layouts, stickers_in, templates,
};
use crate::command::Command;
use crate::drop_payload::{DragKind, DragPayload};
use crate::element::{ElementPatch, ElementType, color_to_hex};
use crate::geometry::ShapeKind;
use crate::geometry::path::flatten_path;
use crate::id_generator::PageId;
use crate::state::EditorModel;

const SAMPLE_PHOTOS: usize = 10;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SidebarTab {
    Photos,
    #[default]
    Templates,
    Layouts,
    Tools,
    Backgrounds,
    Stickers,
}

impl SidebarTab {
    const ALL: [SidebarTab; 6] = [
        SidebarTab::Photos,
        SidebarTab::Templates,
        SidebarTab::Layouts,
        SidebarTab::Tools,
        SidebarTab::Backgrounds,
        SidebarTab::Stickers,
    ];

    fn label(&self) -> &'static str {
        match self {
            SidebarTab::Photos => "Photos",
            SidebarTab::Templates => "Templates",
            SidebarTab::Layouts => "Layouts",
            SidebarTab::Tools => "Tools",
            SidebarTab::Backgrounds => "Background",
            SidebarTab::Stickers => "Stickers",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateTab {
    #[default]
    Albums,
    Covers,
}

/// Sidebar UI state, persisted between sessions.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarState {
    pub tab: SidebarTab,
    pub template_tab: TemplateTab,
    pub sticker_category: usize,
}

/// Makes `add_contents` draggable with `payload`. Returns whether it was clicked.
fn drag_source(
    ui: &mut Ui,
    id: Id,
    payload: &DragPayload,
    add_contents: impl FnOnce(&mut Ui) -> egui::Response,
) -> bool {
    match payload.to_json() {
        Ok(json) => ui.dnd_drag_source(id, json, add_contents).inner.clicked(),
        Err(e) => {
            log::error!("Could not encode drag payload: {e}");
            add_contents(ui).clicked()
        }
    }
}

fn add_on(
    page: Option<PageId>,
    element_type: ElementType,
    content: Option<String>,
    at_drop_position: bool,
    extra: ElementPatch,
) -> Option<Command> {
    let (x, y) = SIDEBAR_DROP_POSITION;
    Some(Command::AddElement {
        page_id: page?,
        element_type,
        content,
        position: at_drop_position.then_some(egui::pos2(x, y)),
        extra,
    })
}

pub fn sidebar(ctx: &egui::Context, state: &mut SidebarState, model: &EditorModel) -> Vec<Command> {
    let mut commands = Vec::new();
    let page = model.active_page();

    egui::SidePanel::left("sidebar")
        .resizable(true)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                for tab in SidebarTab::ALL {
                    ui.selectable_value(&mut state.tab, tab, tab.label());
                }
            });
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| match state.tab {
                SidebarTab::Photos => photos_tab(ui, page, &mut commands),
                SidebarTab::Templates => templates_tab(ui, state, &mut commands),
                SidebarTab::Layouts => layouts_tab(ui, page, &mut commands),
                SidebarTab::Tools => tools_tab(ui, page, &mut commands),
                SidebarTab::Backgrounds => backgrounds_tab(ui, page, model, &mut commands),
                SidebarTab::Stickers => stickers_tab(ui, state, page, &mut commands),
            });
        });

    commands
}

fn photos_tab(ui: &mut Ui, page: Option<PageId>, commands: &mut Vec<Command>) {
    ui.heading("Add photos");
    if ui
        .button("Computer")
        .on_hover_text("Choose photos to add to the active page")
        .clicked()
    {
        commands.push(Command::RequestImageUpload);
    }
    ui.label("Image files dropped anywhere on the window are added too.");
    ui.add_space(8.0);

    if ui.button("Add photo placeholder").clicked() {
        commands.extend(add_on(page, ElementType::Image, None, false, ElementPatch::default()));
    }
    if ui.button("Add text box").clicked() {
        commands.extend(add_on(page, ElementType::Text, None, false, ElementPatch::default()));
    }

    ui.add_space(8.0);
    ui.label("Samples");
    ui.horizontal_wrapped(|ui| {
        for i in 1..=SAMPLE_PHOTOS {
            let url = format!("https://picsum.photos/seed/img{i}/800/800");
            let payload = DragPayload::new(DragKind::Image, url.clone());
            let clicked = drag_source(ui, Id::new(("sample_photo", i)), &payload, |ui| {
                ui.add(egui::Button::new(format!("Photo {i}")).min_size(Vec2::splat(56.0)))
            });
            if clicked {
                commands.extend(add_on(page, ElementType::Image, Some(url), true, ElementPatch::default()));
            }
        }
    });
}

fn templates_tab(ui: &mut Ui, state: &mut SidebarState, commands: &mut Vec<Command>) {
    ui.horizontal(|ui| {
        ui.selectable_value(&mut state.template_tab, TemplateTab::Albums, "Full albums");
        ui.selectable_value(&mut state.template_tab, TemplateTab::Covers, "Custom covers");
    });
    ui.separator();

    match state.template_tab {
        TemplateTab::Albums => {
            for template in templates() {
                ui.group(|ui| {
                    ui.strong(&template.name);
                    ui.small(format!("{} pages", template.pages.len()));
                    if ui.button("Use this album").clicked() {
                        commands.push(Command::ApplyTemplate(template.clone()));
                    }
                });
            }
        }
        TemplateTab::Covers => {
            for cover in cover_templates() {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        let (rect, _) = ui.allocate_exact_size(Vec2::new(24.0, 32.0), Sense::hover());
                        ui.painter().rect_filled(rect, 2.0, cover.background);
                        ui.vertical(|ui| {
                            ui.strong(&cover.name);
                            ui.small(&cover.location);
                        });
                    });
                    if ui.button("Apply cover").clicked() {
                        commands.push(Command::ApplyCoverTemplate(cover.clone()));
                    }
                });
            }
        }
    }
}

fn layouts_tab(ui: &mut Ui, page: Option<PageId>, commands: &mut Vec<Command>) {
    ui.heading("Layouts");
    ui.label("Replaces everything on the active page.");
    for layout in layouts() {
        if ui.button(&layout.name).clicked() {
            if let Some(page_id) = page {
                commands.push(Command::ApplyLayout { page_id, layout });
            }
        }
    }
}

fn tools_tab(ui: &mut Ui, page: Option<PageId>, commands: &mut Vec<Command>) {
    ui.heading("Elements");

    let text = DragPayload::new(DragKind::Text, "New Text");
    if drag_source(ui, Id::new("tool_text"), &text, |ui| ui.button("Text")) {
        commands.extend(add_on(page, ElementType::Text, None, false, ElementPatch::default()));
    }

    let photo = DragPayload::new(DragKind::Image, "https://picsum.photos/seed/new/800/600");
    if drag_source(ui, Id::new("tool_image"), &photo, |ui| ui.button("Photo frame")) {
        commands.extend(add_on(page, ElementType::Image, None, false, ElementPatch::default()));
    }

    ui.separator();
    ui.label("Shapes");
    for shape in ShapeKind::ALL {
        let preset = ElementPatch {
            shape_type: Some(shape),
            ..Default::default()
        };
        let data = serde_json::to_string(&preset).unwrap_or_default();
        let payload = DragPayload::new(DragKind::Shape, data);
        let clicked = drag_source(ui, Id::new(("tool_shape", shape.name())), &payload, |ui| {
            ui.button(shape.name())
        });
        if clicked {
            commands.extend(add_on(page, ElementType::Shape, None, true, preset));
        }
    }

    ui.add_space(12.0);
    ui.small("Tip: drag items onto a page to place them exactly.");
}

fn backgrounds_tab(
    ui: &mut Ui,
    page: Option<PageId>,
    model: &EditorModel,
    commands: &mut Vec<Command>,
) {
    ui.heading("Background");
    ui.horizontal_wrapped(|ui| {
        for (i, color) in BACKGROUND_PALETTE.iter().enumerate() {
            let payload = DragPayload::new(DragKind::Color, color_to_hex(*color));
            let clicked = drag_source(ui, Id::new(("swatch", i)), &payload, |ui| {
                let (rect, response) = ui.allocate_exact_size(Vec2::splat(36.0), Sense::click());
                ui.painter().rect_filled(rect, 4.0, *color);
                ui.painter()
                    .rect_stroke(rect, 4.0, Stroke::new(1.0, Color32::from_gray(200)));
                response.on_hover_text(color_to_hex(*color))
            });
            if clicked {
                if let Some(page_id) = page {
                    commands.push(Command::SetBackground {
                        page_id,
                        color: *color,
                    });
                }
            }
        }
    });

    let Some(page_id) = page else {
        return;
    };
    let mut custom = model
        .album()
        .page(page_id)
        .and_then(|p| p.background)
        .unwrap_or(Color32::WHITE);
    ui.horizontal(|ui| {
        ui.label("Custom");
        if egui::color_picker::color_edit_button_srgba(
            ui,
            &mut custom,
            egui::color_picker::Alpha::Opaque,
        )
        .changed()
        {
            commands.push(Command::SetBackground {
                page_id,
                color: custom,
            });
        }
    });
}

fn stickers_tab(
    ui: &mut Ui,
    state: &mut SidebarState,
    page: Option<PageId>,
    commands: &mut Vec<Command>,
) {
    ui.heading("Stickers");
    ui.horizontal_wrapped(|ui| {
        for (i, category) in STICKER_CATEGORIES.iter().enumerate() {
            ui.selectable_value(&mut state.sticker_category, i, *category);
        }
    });
    ui.separator();

    let category = STICKER_CATEGORIES
        .get(state.sticker_category)
        .copied()
        .unwrap_or(STICKER_CATEGORIES[0]);
    ui.horizontal_wrapped(|ui| {
        for sticker in stickers_in(category) {
            let payload = DragPayload::new(DragKind::Sticker, sticker.path);
            let clicked = drag_source(ui, Id::new(("sticker", sticker.id)), &payload, |ui| {
                sticker_preview(ui, sticker.path).on_hover_text(sticker.name)
            });
            if clicked {
                let extra = ElementPatch {
                    fill: Some(STICKER_SIDEBAR_FILL),
                    ..Default::default()
                };
                commands.extend(add_on(
                    page,
                    ElementType::Sticker,
                    Some(sticker.path.to_owned()),
                    true,
                    extra,
                ));
            }
        }
    });
}

/// Outline of sticker artwork in a small clickable tile.
fn sticker_preview(ui: &mut Ui, path: &str) -> egui::Response {
    let size = 56.0;
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), Sense::click());
    let painter = ui.painter_at(rect);
    let fill = if response.hovered() {
        Color32::from_gray(235)
    } else {
        Color32::from_gray(248)
    };
    painter.rect_filled(rect, 6.0, fill);

    let inset = rect.shrink(6.0);
    let scale = inset.width() / 100.0;
    let stroke = Stroke::new(1.5, STICKER_SIDEBAR_FILL);
    for subpath in flatten_path(path).unwrap_or_default() {
        let points: Vec<_> = subpath
            .points
            .iter()
            .map(|p| inset.min + p.to_vec2() * scale)
            .collect();
        if subpath.closed {
            painter.add(Shape::closed_line(points, stroke));
        } else {
            painter.add(Shape::line(points, stroke));
        }
    }
    response
}
