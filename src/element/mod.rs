use egui::{Color32, Pos2, Vec2};
use serde::{Deserialize, Serialize};

mod common;
pub mod factory;
mod patch;

pub use common::{
    MIN_ELEMENT_SIZE, MIN_TEXT_WIDTH, SHAPE_FILL, STICKER_BASE_SIZE, STICKER_FILL, TEXT_FILL,
    color_to_hex, parse_hex_color,
};
pub(crate) use common::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_IMAGE_SOURCE, DEFAULT_POSITION, DEFAULT_TEXT,
};
pub use factory::create_element;
pub use patch::ElementPatch;

use crate::geometry::{ElementGeometry, ShapeKind};
use crate::id_generator::ElementId;

/// The variant tag of an element, as carried by drag payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Image,
    Text,
    Shape,
    Sticker,
}

impl ElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Image => "image",
            ElementType::Text => "text",
            ElementType::Shape => "shape",
            ElementType::Sticker => "sticker",
        }
    }

    /// Size given to freshly created elements of this type.
    pub fn default_size(&self) -> Vec2 {
        match self {
            ElementType::Image => Vec2::new(200.0, 150.0),
            ElementType::Text => Vec2::new(250.0, 50.0),
            ElementType::Shape | ElementType::Sticker => Vec2::new(100.0, 100.0),
        }
    }
}

/// Variant-specific attributes of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementKind {
    /// `source` is a URL or a `data:` URI; `frame` masks the picture.
    Image {
        source: String,
        frame: ShapeKind,
        corner_radius: f32,
    },
    Text {
        text: String,
        font_size: f32,
        font_family: String,
    },
    Shape {
        shape: ShapeKind,
        corner_radius: f32,
    },
    /// SVG path data in a 100x100 box.
    Sticker { path: String },
}

impl ElementKind {
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementKind::Image { .. } => ElementType::Image,
            ElementKind::Text { .. } => ElementType::Text,
            ElementKind::Shape { .. } => ElementType::Shape,
            ElementKind::Sticker { .. } => ElementType::Sticker,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementStyle {
    pub fill: Option<Color32>,
    pub stroke: Option<Color32>,
    pub stroke_width: f32,
    /// 0.0 (invisible) to 1.0 (opaque).
    pub opacity: f32,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: None,
            stroke_width: 0.0,
            opacity: 1.0,
        }
    }
}

impl ElementStyle {
    pub fn filled(fill: Color32) -> Self {
        Self {
            fill: Some(fill),
            ..Default::default()
        }
    }
}

/// An image, text box, shape or sticker placed on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumElement {
    pub id: ElementId,
    pub geometry: ElementGeometry,
    pub style: ElementStyle,
    pub kind: ElementKind,
}

impl AlbumElement {
    pub fn new(geometry: ElementGeometry, style: ElementStyle, kind: ElementKind) -> Self {
        Self {
            id: ElementId::generate(),
            geometry,
            style,
            kind,
        }
    }

    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, ElementKind::Text { .. })
    }

    pub fn position(&self) -> Pos2 {
        self.geometry.position
    }

    pub fn size(&self) -> Vec2 {
        self.geometry.size
    }

    /// Content string of the element: image source, text or sticker path.
    /// Shapes carry none.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Image { source, .. } => Some(source),
            ElementKind::Text { text, .. } => Some(text),
            ElementKind::Sticker { path } => Some(path),
            ElementKind::Shape { .. } => None,
        }
    }

    /// Outline used to draw a shape or to mask an image; `None` for text and stickers.
    pub fn clip_shape(&self) -> Option<ShapeKind> {
        match &self.kind {
            ElementKind::Image { frame, .. } => Some(*frame),
            ElementKind::Shape { shape, .. } => Some(*shape),
            _ => None,
        }
    }

    /// Smallest width/height an interactive transform may produce.
    pub fn min_size(&self) -> Vec2 {
        if self.is_text() {
            Vec2::new(MIN_TEXT_WIDTH, MIN_ELEMENT_SIZE)
        } else {
            Vec2::splat(MIN_ELEMENT_SIZE)
        }
    }

    /// Scale factors applied to sticker path data.
    pub fn sticker_scale(&self) -> Vec2 {
        self.geometry.size / STICKER_BASE_SIZE
    }

    /// Deep copy with a new id.
    pub fn duplicate(&self) -> Self {
        Self {
            id: ElementId::generate(),
            ..self.clone()
        }
    }
}
