use egui::{Color32, Ui};

use crate::catalog::FONT_FAMILIES;
use crate::command::Command;
use crate::element::{AlbumElement, ElementKind, ElementPatch, TEXT_FILL};
use crate::geometry::ShapeKind;
use crate::id_generator::PageId;
use crate::state::EditorModel;

fn font_label(family: &str) -> &str {
    match family {
        "Inter" => "Inter Sans",
        "Playfair Display" => "Playfair Serif",
        "Cormorant Garamond" => "Cormorant Editorial",
        other => other,
    }
}

/// Toolbar for the selected element. Hidden when nothing is selected.
pub fn element_toolbar(ctx: &egui::Context, model: &EditorModel) -> Vec<Command> {
    let mut commands = Vec::new();
    let Some((page_id, element)) = model
        .selection()
        .and_then(|id| model.album().find_element(id))
    else {
        return commands;
    };

    egui::TopBottomPanel::top("element_toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let mut update = |patch: ElementPatch| {
                commands.push(Command::UpdateElement {
                    page_id,
                    element_id: element.id,
                    patch,
                })
            };
            match &element.kind {
                ElementKind::Text {
                    text,
                    font_size,
                    font_family,
                } => text_controls(ui, element, text, *font_size, font_family, &mut update),
                ElementKind::Image {
                    frame,
                    corner_radius,
                    ..
                } => {
                    image_controls(ui, *frame, *corner_radius, &mut update);
                }
                ElementKind::Shape { .. } | ElementKind::Sticker { .. } => {
                    style_controls(ui, element, &mut update);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Close").clicked() {
                    commands.push(Command::SelectElement(None));
                }
                if ui.button("Delete").clicked() {
                    commands.push(Command::DeleteElement(element.id));
                }
                if matches!(element.kind, ElementKind::Image { .. })
                    && ui.button("Replace").on_hover_text("Choose a new photo").clicked()
                {
                    commands.push(replace_request(page_id, element));
                }
            });
        });
    });
    commands
}

fn replace_request(page_id: PageId, element: &AlbumElement) -> Command {
    Command::RequestImageReplace {
        page_id,
        element_id: element.id,
    }
}

fn text_controls(
    ui: &mut Ui,
    element: &AlbumElement,
    text: &str,
    font_size: f32,
    font_family: &str,
    update: &mut impl FnMut(ElementPatch),
) {
    let mut content = text.to_owned();
    if ui
        .add(egui::TextEdit::singleline(&mut content).desired_width(180.0))
        .changed()
    {
        update(ElementPatch {
            content: Some(content),
            ..Default::default()
        });
    }

    let mut family = font_family.to_owned();
    egui::ComboBox::from_id_salt("font_family")
        .selected_text(font_label(&family).to_owned())
        .show_ui(ui, |ui| {
            for option in FONT_FAMILIES {
                ui.selectable_value(&mut family, option.to_owned(), font_label(option));
            }
        });
    if family != font_family {
        update(ElementPatch {
            font_family: Some(family),
            ..Default::default()
        });
    }

    let mut size = font_size;
    if ui
        .add(egui::DragValue::new(&mut size).range(6.0..=200.0).suffix(" pt"))
        .changed()
    {
        update(ElementPatch {
            font_size: Some(size),
            ..Default::default()
        });
    }

    color_control(ui, element.style.fill.unwrap_or(TEXT_FILL), update);
}

fn image_controls(
    ui: &mut Ui,
    frame: ShapeKind,
    corner_radius: f32,
    update: &mut impl FnMut(ElementPatch),
) {
    ui.label("Frame");
    for shape in ShapeKind::ALL {
        if ui.selectable_label(frame == shape, shape.name()).clicked() && frame != shape {
            update(ElementPatch {
                shape_type: Some(shape),
                ..Default::default()
            });
        }
    }

    ui.separator();
    let mut radius = corner_radius;
    let slider = egui::Slider::new(&mut radius, 0.0..=100.0).text("Corners");
    if ui.add_enabled(frame == ShapeKind::Rectangle, slider).changed() {
        update(ElementPatch {
            border_radius: Some(radius),
            ..Default::default()
        });
    }
}

fn style_controls(ui: &mut Ui, element: &AlbumElement, update: &mut impl FnMut(ElementPatch)) {
    color_control(ui, element.style.fill.unwrap_or(Color32::BLACK), update);

    let mut opacity = element.style.opacity;
    let slider = egui::Slider::new(&mut opacity, 0.0..=1.0)
        .step_by(0.1)
        .text("Opacity");
    if ui.add(slider).changed() {
        update(ElementPatch {
            opacity: Some(opacity),
            ..Default::default()
        });
    }
}

fn color_control(ui: &mut Ui, current: Color32, update: &mut impl FnMut(ElementPatch)) {
    let mut color = current;
    ui.label("Color");
    if egui::color_picker::color_edit_button_srgba(
        ui,
        &mut color,
        egui::color_picker::Alpha::Opaque,
    )
    .changed()
    {
        update(ElementPatch {
            fill: Some(color),
            ..Default::default()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_labels_cover_catalog() {
        for family in FONT_FAMILIES {
            assert_ne!(font_label(family), family);
        }
        assert_eq!(font_label("Comic"), "Comic");
    }
}
