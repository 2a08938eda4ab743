use egui::{Color32, Pos2, Vec2, pos2, vec2};

use crate::album::validate_page_count;
use crate::element::{AlbumElement, ElementKind, ElementStyle, SHAPE_FILL, TEXT_FILL};
use crate::error::EditResult;
use crate::geometry::{ElementGeometry, ShapeKind};
use crate::page::AlbumPage;

/// An element description without identity. Every [`Self::instantiate`] call
/// produces an element with a new id.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementTemplate {
    pub geometry: ElementGeometry,
    pub style: ElementStyle,
    pub kind: ElementKind,
}

impl ElementTemplate {
    fn at(position: Pos2, size: Vec2, style: ElementStyle, kind: ElementKind) -> Self {
        Self {
            geometry: ElementGeometry::new(position, size),
            style,
            kind,
        }
    }

    pub fn image(x: f32, y: f32, width: f32, height: f32, source: &str) -> Self {
        Self::at(
            pos2(x, y),
            vec2(width, height),
            ElementStyle::default(),
            ElementKind::Image {
                source: source.to_owned(),
                frame: ShapeKind::Rectangle,
                corner_radius: 0.0,
            },
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn text(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        text: &str,
        font_size: f32,
        font_family: &str,
    ) -> Self {
        Self::at(
            pos2(x, y),
            vec2(width, height),
            ElementStyle::filled(TEXT_FILL),
            ElementKind::Text {
                text: text.to_owned(),
                font_size,
                font_family: font_family.to_owned(),
            },
        )
    }

    pub fn shape(x: f32, y: f32, width: f32, height: f32, shape: ShapeKind) -> Self {
        Self::at(
            pos2(x, y),
            vec2(width, height),
            ElementStyle::filled(SHAPE_FILL),
            ElementKind::Shape {
                shape,
                corner_radius: 0.0,
            },
        )
    }

    pub fn sticker(x: f32, y: f32, width: f32, height: f32, path: &str) -> Self {
        Self::at(
            pos2(x, y),
            vec2(width, height),
            ElementStyle::default(),
            ElementKind::Sticker {
                path: path.to_owned(),
            },
        )
    }

    pub fn with_fill(mut self, fill: Color32) -> Self {
        self.style.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: Color32, width: f32) -> Self {
        self.style.stroke = Some(stroke);
        self.style.stroke_width = width;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.style.opacity = opacity;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.geometry.rotation = rotation;
        self
    }

    /// Rounds the corners of images and shapes; ignored for other kinds.
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        match &mut self.kind {
            ElementKind::Image { corner_radius, .. } | ElementKind::Shape { corner_radius, .. } => {
                *corner_radius = radius;
            }
            _ => {}
        }
        self
    }

    /// Masks an image with `frame`; ignored for other kinds.
    pub fn with_frame(mut self, frame: ShapeKind) -> Self {
        if let ElementKind::Image { frame: f, .. } = &mut self.kind {
            *f = frame;
        }
        self
    }

    pub fn instantiate(&self) -> AlbumElement {
        AlbumElement::new(self.geometry, self.style.clone(), self.kind.clone())
    }
}

fn instantiate_all(elements: &[ElementTemplate]) -> Vec<AlbumElement> {
    elements.iter().map(ElementTemplate::instantiate).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageTemplate {
    pub background: Option<Color32>,
    pub elements: Vec<ElementTemplate>,
}

impl PageTemplate {
    pub fn new(background: Color32, elements: Vec<ElementTemplate>) -> Self {
        Self {
            background: Some(background),
            elements,
        }
    }

    pub fn instantiate(&self) -> AlbumPage {
        AlbumPage::new(self.background, instantiate_all(&self.elements))
    }
}

/// A complete album: covers, end papers and content pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub preview: String,
    pub pages: Vec<PageTemplate>,
}

impl Template {
    /// Builds the page sequence with fresh page and element ids. Fails when
    /// the template does not have a valid album shape.
    pub fn expand(&self) -> EditResult<Vec<AlbumPage>> {
        validate_page_count(self.pages.len())?;
        Ok(self.pages.iter().map(PageTemplate::instantiate).collect())
    }
}

/// A reusable arrangement of elements for a single page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub id: String,
    pub name: String,
    pub elements: Vec<ElementTemplate>,
}

impl PageLayout {
    pub fn instantiate(&self) -> Vec<AlbumElement> {
        instantiate_all(&self.elements)
    }
}

/// A design for the front cover only.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverTemplate {
    pub id: String,
    pub name: String,
    pub location: String,
    pub preview: String,
    pub background: Color32,
    pub elements: Vec<ElementTemplate>,
}

impl CoverTemplate {
    pub fn instantiate(&self) -> Vec<AlbumElement> {
        instantiate_all(&self.elements)
    }
}
