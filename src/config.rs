use egui::Vec2;
use serde::{Deserialize, Serialize};

/// Editor settings that survive restarts (the album itself never does).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Size of a single page in page-local units.
    pub page_size: Vec2,
    /// Proximity under which an alignment guide is shown while dragging.
    pub guide_threshold: f32,
    /// Hit radius of the transform handles.
    pub handle_radius: f32,
    /// Distance of the rotate handle above the element's top edge.
    pub rotate_handle_offset: f32,
    /// Canvas zoom factor, 1.0 = 100%.
    pub zoom: f32,
    /// Maximum number of decoded image textures kept alive.
    pub texture_cache_size: usize,
}

pub const MIN_ZOOM: f32 = 0.2;
pub const MAX_ZOOM: f32 = 2.0;

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            page_size: Vec2::new(400.0, 550.0),
            guide_threshold: 5.0,
            handle_radius: 8.0,
            rotate_handle_offset: 30.0,
            zoom: 0.75,
            texture_cache_size: 64,
        }
    }
}

impl EditorConfig {
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }
}
