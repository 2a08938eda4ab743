use crate::command::Command;
use crate::config::{EditorConfig, MAX_ZOOM, MIN_ZOOM};
use crate::spread::{max_spread_index, spread_title};
use crate::state::EditorModel;

/// Title, spread navigation, page management and view settings.
pub fn top_bar(
    ctx: &egui::Context,
    model: &EditorModel,
    config: &mut EditorConfig,
    preview: &mut bool,
) -> Vec<Command> {
    let mut commands = Vec::new();
    let album = model.album();
    let page_count = album.page_count();
    let current = model.current_spread();
    let navigator = model.navigator();

    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            let mut title = album.title.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut title).desired_width(200.0))
                .changed()
            {
                commands.push(Command::SetTitle(title));
            }
            ui.separator();

            if ui
                .add_enabled(!navigator.is_first(), egui::Button::new("◀"))
                .clicked()
            {
                commands.push(Command::GoToSpread(current.saturating_sub(1)));
            }
            ui.label(format!(
                "{}  ({}/{})",
                spread_title(current, page_count),
                current + 1,
                max_spread_index(page_count) + 1
            ));
            if ui
                .add_enabled(!navigator.is_last(page_count), egui::Button::new("▶"))
                .clicked()
            {
                commands.push(Command::GoToSpread(current + 1));
            }
            ui.separator();

            if ui
                .button("Add pages")
                .on_hover_text("Insert two blank pages before the closing end paper")
                .clicked()
            {
                commands.push(Command::AddPages);
            }
            // Covers and end papers are never copied or removed.
            let content_spread = is_content_spread(current, page_count);
            if ui
                .add_enabled(content_spread, egui::Button::new("Duplicate spread"))
                .clicked()
            {
                commands.push(Command::DuplicateSpread(current));
            }
            if ui
                .add_enabled(content_spread, egui::Button::new("Remove spread"))
                .clicked()
            {
                commands.push(Command::RemoveSpread(current));
            }
            let active = model.active_page().filter(|id| album.is_editable(Some(*id)));
            if ui
                .add_enabled(active.is_some(), egui::Button::new("Clear page"))
                .clicked()
            {
                commands.extend(active.map(Command::ClearPage));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.toggle_value(preview, "Preview");
                let mut zoom = config.zoom;
                if ui
                    .add(
                        egui::Slider::new(&mut zoom, MIN_ZOOM..=MAX_ZOOM)
                            .text("Zoom")
                            .custom_formatter(|z, _| format!("{:.0}%", z * 100.0)),
                    )
                    .changed()
                {
                    config.set_zoom(zoom);
                }
            });
        });
    });
    commands
}

/// Spreads other than the cover and the two spreads holding an end paper.
fn is_content_spread(index: usize, page_count: usize) -> bool {
    index > 1 && index < max_spread_index(page_count)
}
