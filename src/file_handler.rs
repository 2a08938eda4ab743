use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use eframe::egui;
use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use thiserror::Error;

use crate::command::Command;
use crate::element::{ElementPatch, ElementType};
use crate::id_generator::{ElementId, PageId};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("`{0}` is not a supported image file")]
    Unsupported(String),
    #[error("dropped file `{0}` carries no data")]
    NoData(String),
    #[error("failed to read `{name}`: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("unrecognised image data: {0}")]
    Format(#[from] image::ImageError),
}

/// Extensions offered by the photo picker and accepted from drops without a MIME type.
const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Wraps raw image bytes into a `data:<mime>;base64,...` URI.
pub fn encode_data_uri(bytes: &[u8]) -> Result<String, LoadError> {
    let format = image::guess_format(bytes)?;
    Ok(format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        STANDARD.encode(bytes)
    ))
}

/// Where the content of a file should go once it has been read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTarget {
    /// A new image element at the default position.
    NewImage { page_id: PageId },
    /// New content for an existing image.
    Replace {
        page_id: PageId,
        element_id: ElementId,
    },
}

impl LoadTarget {
    /// The command applying `data_uri`. It is a no-op if the target is gone
    /// by the time it executes.
    pub fn into_command(self, data_uri: String) -> Command {
        match self {
            LoadTarget::NewImage { page_id } => Command::AddElement {
                page_id,
                element_type: ElementType::Image,
                content: Some(data_uri),
                position: None,
                extra: ElementPatch::default(),
            },
            LoadTarget::Replace {
                page_id,
                element_id,
            } => Command::ReplaceImageContent {
                page_id,
                element_id,
                data_uri,
            },
        }
    }
}

/// Sends the command for a finished read, or logs why there is none.
fn deliver(
    sender: &UnboundedSender<Command>,
    ctx: &egui::Context,
    name: &str,
    target: LoadTarget,
    result: Result<String, LoadError>,
) {
    match result {
        Ok(data_uri) => {
            log::info!("Loaded {name} ({} bytes encoded)", data_uri.len());
            if sender.unbounded_send(target.into_command(data_uri)).is_err() {
                log::debug!("File handler dropped before {name} finished");
            }
            ctx.request_repaint();
        }
        Err(e) => log::error!("Could not load {name}: {e}"),
    }
}

/// Shows the photo picker and reads what the user chose. A replacement takes
/// a single file, new images may be several.
async fn pick_and_read(sender: UnboundedSender<Command>, ctx: egui::Context, target: LoadTarget) {
    let dialog = rfd::AsyncFileDialog::new()
        .set_title("Choose photos")
        .add_filter("Images", &IMAGE_EXTENSIONS);
    let handles: Vec<rfd::FileHandle> = match target {
        LoadTarget::Replace { .. } => dialog.pick_file().await.into_iter().collect(),
        LoadTarget::NewImage { .. } => dialog.pick_files().await.unwrap_or_default(),
    };
    if handles.is_empty() {
        log::debug!("Photo picker closed without a choice");
    }
    for handle in handles {
        let name = handle.file_name();
        let bytes = handle.read().await;
        deliver(&sender, &ctx, &name, target, encode_data_uri(&bytes));
    }
}

/// Turns picked files and files dropped on the window into image commands.
///
/// Reads finish out of band and their commands are collected with
/// [`Self::poll_completed`], so the album may have changed in between.
pub struct FileHandler {
    sender: UnboundedSender<Command>,
    receiver: UnboundedReceiver<Command>,
}

impl Default for FileHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl FileHandler {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Takes the files dropped this frame, if any.
    pub fn take_dropped_files(&self, ctx: &egui::Context) -> Vec<egui::DroppedFile> {
        ctx.input_mut(|i| std::mem::take(&mut i.raw.dropped_files))
    }

    /// Starts reading every image in `files`. The first one goes to
    /// `replace` when it is set, the rest become new images on `page`.
    pub fn load_files(
        &self,
        ctx: &egui::Context,
        files: Vec<egui::DroppedFile>,
        mut replace: Option<LoadTarget>,
        page: Option<PageId>,
    ) {
        for file in files {
            let name = display_name(&file);
            if !is_image_file(&file) {
                log::warn!("{}", LoadError::Unsupported(name));
                continue;
            }
            let target = match replace.take() {
                Some(target) => target,
                None => match page {
                    Some(page_id) => LoadTarget::NewImage { page_id },
                    None => {
                        log::debug!("No editable page for {name}");
                        continue;
                    }
                },
            };
            self.start_read(ctx.clone(), file, name, target);
        }
    }

    fn start_read(
        &self,
        ctx: egui::Context,
        file: egui::DroppedFile,
        name: String,
        target: LoadTarget,
    ) {
        let sender = self.sender.clone();
        let finish = move |result: Result<String, LoadError>| {
            deliver(&sender, &ctx, &name, target, result);
        };

        if let Some(bytes) = file.bytes {
            finish(encode_data_uri(&bytes));
            return;
        }

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(path) = file.path {
            std::thread::spawn(move || {
                let result = std::fs::read(&path)
                    .map_err(|source| LoadError::Io {
                        name: path.display().to_string(),
                        source,
                    })
                    .and_then(|bytes| encode_data_uri(&bytes));
                finish(result);
            });
            return;
        }

        finish(Err(LoadError::NoData(file.name)));
    }

    /// Opens the photo picker for `target` without blocking the frame.
    pub fn pick_images(&self, ctx: &egui::Context, target: LoadTarget) {
        let sender = self.sender.clone();
        let ctx = ctx.clone();

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            futures::executor::block_on(pick_and_read(sender, ctx, target));
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(pick_and_read(sender, ctx, target));
    }

    /// Commands for reads that completed since the last call.
    pub fn poll_completed(&mut self) -> Vec<Command> {
        let mut commands = Vec::new();
        while let Ok(Some(command)) = self.receiver.try_next() {
            commands.push(command);
        }
        commands
    }

    /// Darkens the window while files hover over it.
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, FontId, Id, LayerId, Order};

        let hovered = ctx.input(|i| i.raw.hovered_files.len());
        if hovered == 0 {
            return;
        }
        let text = if hovered == 1 {
            "Drop the photo to add it".to_owned()
        } else {
            format!("Drop {hovered} photos to add them")
        };

        let painter =
            ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(24.0),
            Color32::WHITE,
        );
    }
}

fn display_name(file: &egui::DroppedFile) -> String {
    if let Some(path) = &file.path {
        path.display().to_string()
    } else if !file.name.is_empty() {
        file.name.clone()
    } else {
        "unknown".to_owned()
    }
}

/// Checks the MIME type, or the extension when there is none.
fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        return file.mime.starts_with("image/");
    }
    let name = match &file.path {
        Some(path) => path.to_string_lossy().into_owned(),
        None => file.name.clone(),
    };
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}
