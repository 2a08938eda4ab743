use egui::Color32;
use serde::{Deserialize, Serialize};

use super::common::hex_color;
use super::{AlbumElement, ElementKind};
use crate::geometry::ShapeKind;

/// A partial set of element attributes.
///
/// Field names follow the camelCase keys used by drag payloads and shape
/// presets, e.g. `{"shapeType":"circle","fill":"#FFD700"}`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(with = "hex_color", skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color32>,
    #[serde(with = "hex_color", skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Color32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_type: Option<ShapeKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
}

impl ElementPatch {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn position(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    /// Combines two patches; fields set in `over` win.
    pub fn merged(self, over: ElementPatch) -> Self {
        Self {
            x: over.x.or(self.x),
            y: over.y.or(self.y),
            width: over.width.or(self.width),
            height: over.height.or(self.height),
            rotation: over.rotation.or(self.rotation),
            content: over.content.or(self.content),
            font_size: over.font_size.or(self.font_size),
            font_family: over.font_family.or(self.font_family),
            fill: over.fill.or(self.fill),
            stroke: over.stroke.or(self.stroke),
            stroke_width: over.stroke_width.or(self.stroke_width),
            opacity: over.opacity.or(self.opacity),
            shape_type: over.shape_type.or(self.shape_type),
            border_radius: over.border_radius.or(self.border_radius),
        }
    }

    /// Writes every set field into `element`. Fields that have no meaning for
    /// the element's variant are skipped. No size limits are enforced here.
    pub fn apply(&self, element: &mut AlbumElement) {
        let geometry = &mut element.geometry;
        if let Some(x) = self.x {
            geometry.position.x = x;
        }
        if let Some(y) = self.y {
            geometry.position.y = y;
        }
        if let Some(width) = self.width {
            geometry.size.x = width;
        }
        if let Some(height) = self.height {
            geometry.size.y = height;
        }
        if let Some(rotation) = self.rotation {
            geometry.rotation = rotation;
        }

        let style = &mut element.style;
        if self.fill.is_some() {
            style.fill = self.fill;
        }
        if self.stroke.is_some() {
            style.stroke = self.stroke;
        }
        if let Some(stroke_width) = self.stroke_width {
            style.stroke_width = stroke_width;
        }
        if let Some(opacity) = self.opacity {
            style.opacity = opacity;
        }

        match &mut element.kind {
            ElementKind::Image {
                source,
                frame,
                corner_radius,
            } => {
                if let Some(content) = &self.content {
                    source.clone_from(content);
                }
                if let Some(shape) = self.shape_type {
                    *frame = shape;
                }
                if let Some(radius) = self.border_radius {
                    *corner_radius = radius;
                }
            }
            ElementKind::Text {
                text,
                font_size,
                font_family,
            } => {
                if let Some(content) = &self.content {
                    text.clone_from(content);
                }
                if let Some(size) = self.font_size {
                    *font_size = size;
                }
                if let Some(family) = &self.font_family {
                    font_family.clone_from(family);
                }
            }
            ElementKind::Shape {
                shape,
                corner_radius,
            } => {
                if let Some(kind) = self.shape_type {
                    *shape = kind;
                }
                if let Some(radius) = self.border_radius {
                    *corner_radius = radius;
                }
            }
            ElementKind::Sticker { path } => {
                if let Some(content) = &self.content {
                    path.clone_from(content);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_keys() {
        let patch = ElementPatch::from_json(
            r##"{"shapeType":"star","fill":"#FFD700","borderRadius":4,"fontSize":32}"##,
        )
        .unwrap();
        assert_eq!(patch.shape_type, Some(ShapeKind::Star));
        assert_eq!(patch.fill, Some(Color32::from_rgb(0xFF, 0xD7, 0x00)));
        assert_eq!(patch.border_radius, Some(4.0));
        assert_eq!(patch.font_size, Some(32.0));
    }

    #[test]
    fn test_bad_color_is_an_error() {
        assert!(ElementPatch::from_json(r#"{"fill":"not a color"}"#).is_err());
    }

    #[test]
    fn test_merge_prefers_over() {
        let base = ElementPatch {
            width: Some(10.0),
            height: Some(20.0),
            ..Default::default()
        };
        let over = ElementPatch {
            width: Some(30.0),
            ..Default::default()
        };
        let merged = base.merged(over);
        assert_eq!(merged.width, Some(30.0));
        assert_eq!(merged.height, Some(20.0));
    }
}
