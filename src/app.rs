use egui::{Align2, Color32, Key};
use log::{debug, error, info};

use crate::catalog::templates;
use crate::command::Command;
use crate::config::EditorConfig;
use crate::file_handler::{FileHandler, LoadTarget};
use crate::panels::{CanvasState, SidebarState, central_panel, element_toolbar, sidebar, spread_strip, top_bar};
use crate::renderer::Renderer;
use crate::state::{DEFAULT_TITLE, EditorModel};

const TOAST_SECONDS: f64 = 4.0;

struct Toast {
    text: String,
    expires_at: f64,
}

/// We derive Deserialize/Serialize so we can persist editor settings on shutdown.
/// The album itself is not persisted.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct AlbumApp {
    config: EditorConfig,
    sidebar: SidebarState,

    #[serde(skip)]
    model: EditorModel,
    // Holds GPU textures
    #[serde(skip)]
    renderer: Option<Renderer>,
    #[serde(skip)]
    canvas: CanvasState,
    #[serde(skip)]
    file_handler: FileHandler,
    #[serde(skip)]
    toasts: Vec<Toast>,
    #[serde(skip)]
    preview: bool,
}

impl Default for AlbumApp {
    fn default() -> Self {
        Self {
            config: EditorConfig::default(),
            sidebar: SidebarState::default(),
            model: EditorModel::default(),
            renderer: None,
            canvas: CanvasState::new(),
            file_handler: FileHandler::new(),
            toasts: Vec::new(),
            preview: false,
        }
    }
}

/// The album the editor opens with: the first catalog template, or a blank
/// album if it cannot be built.
fn initial_model() -> EditorModel {
    let Some(template) = templates().into_iter().next() else {
        return EditorModel::default();
    };
    match EditorModel::from_template(DEFAULT_TITLE, &template) {
        Ok(model) => {
            info!("Opened album from template {:?}", template.name);
            model
        }
        Err(e) => {
            error!("Template {:?} is unusable, starting blank: {e}", template.name);
            EditorModel::default()
        }
    }
}

impl AlbumApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        app.model = initial_model();
        app.renderer = Some(Renderer::new(&cc.egui_ctx, app.config.texture_cache_size));
        app
    }

    pub fn model(&self) -> &EditorModel {
        &self.model
    }

    fn take_files(&mut self, ctx: &egui::Context) {
        let files = self.file_handler.take_dropped_files(ctx);
        if files.is_empty() {
            return;
        }
        let replace = self
            .model
            .replace_target()
            .map(|(page_id, element_id)| LoadTarget::Replace {
                page_id,
                element_id,
            });
        self.file_handler
            .load_files(ctx, files, replace, self.model.file_drop_target());
        self.model.clear_replace_target();
    }

    fn keyboard_commands(&mut self, ctx: &egui::Context) -> Vec<Command> {
        let mut commands = Vec::new();
        if ctx.wants_keyboard_input() {
            return commands;
        }
        let (delete, escape) = ctx.input(|i| {
            (
                i.key_pressed(Key::Delete) || i.key_pressed(Key::Backspace),
                i.key_pressed(Key::Escape),
            )
        });
        if delete && !self.preview {
            commands.push(Command::DeleteSelected);
        }
        if escape {
            if self.preview {
                self.preview = false;
            } else {
                self.canvas.cancel();
                self.model.clear_replace_target();
                commands.push(Command::SelectElement(None));
            }
        }
        commands
    }

    fn show_toasts(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        self.toasts.extend(self.model.take_notices().into_iter().map(|text| Toast {
            text,
            expires_at: now + TOAST_SECONDS,
        }));
        self.toasts.retain(|t| t.expires_at > now);

        let hint = self
            .model
            .replace_target()
            .map(|_| "Choose a photo or drop a file to replace the selected image");
        if self.toasts.is_empty() && hint.is_none() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -96.0))
            .interactable(false)
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    egui::Frame::popup(ui.style())
                        .fill(Color32::from_rgb(0x1D, 0x35, 0x57))
                        .show(ui, |ui| ui.colored_label(Color32::WHITE, &toast.text));
                }
                if let Some(hint) = hint {
                    egui::Frame::popup(ui.style()).show(ui, |ui| ui.label(hint));
                }
            });
        if let Some(next) = self.toasts.iter().map(|t| t.expires_at).reduce(f64::min) {
            ctx.request_repaint_after(std::time::Duration::from_secs_f64((next - now).max(0.0)));
        }
    }
}

impl eframe::App for AlbumApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let renderer = self
            .renderer
            .get_or_insert_with(|| Renderer::new(ctx, self.config.texture_cache_size));
        renderer.begin_frame();

        if !self.preview {
            self.take_files(ctx);
        }
        let mut commands = self.file_handler.poll_completed();

        // Side and top panels must be added before the central panel.
        commands.extend(top_bar(ctx, &self.model, &mut self.config, &mut self.preview));
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        if !self.preview {
            commands.extend(element_toolbar(ctx, &self.model));
            commands.extend(sidebar(ctx, &mut self.sidebar, &self.model));
        }
        commands.extend(spread_strip(ctx, &self.model, renderer, self.config.page_size));
        commands.extend(central_panel(
            ctx,
            &self.model,
            &mut self.canvas,
            renderer,
            &self.config,
            self.preview,
        ));
        commands.extend(self.keyboard_commands(ctx));

        if !self.preview {
            self.file_handler.preview_files_being_dropped(ctx);
        }

        for command in commands {
            debug!("Executing {}", command.name());
            self.model.execute(command);
        }
        if let Some(target) = self.model.take_file_request() {
            self.file_handler.pick_images(ctx, target);
        }
        self.canvas.sync(&self.model);
        self.show_toasts(ctx);
    }
}
