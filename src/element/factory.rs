use egui::{Pos2, pos2};
use log::{debug, error};

use super::{
    AlbumElement, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_IMAGE_SOURCE, DEFAULT_POSITION,
    DEFAULT_TEXT, ElementKind, ElementPatch, ElementStyle, ElementType, SHAPE_FILL, TEXT_FILL,
};
use crate::geometry::{ElementGeometry, ShapeKind};

/// Builds a new element with a fresh id and the per-type defaults.
///
/// `extra` overrides the defaults. For shapes, `content` that looks like a
/// JSON object is read as a further [`ElementPatch`] that overrides `extra`;
/// shapes never keep their content. A malformed preset is logged and ignored.
pub fn create_element(
    element_type: ElementType,
    content: Option<&str>,
    position: Option<Pos2>,
    extra: ElementPatch,
) -> AlbumElement {
    // Empty content counts as none.
    let content = content.filter(|c| !c.is_empty());
    let position = position.unwrap_or(pos2(DEFAULT_POSITION, DEFAULT_POSITION));
    let geometry = ElementGeometry::new(position, element_type.default_size());

    let (kind, style) = match element_type {
        ElementType::Image => (
            ElementKind::Image {
                source: content.unwrap_or(DEFAULT_IMAGE_SOURCE).to_owned(),
                frame: ShapeKind::Rectangle,
                corner_radius: 0.0,
            },
            ElementStyle::default(),
        ),
        ElementType::Text => (
            ElementKind::Text {
                text: content.unwrap_or(DEFAULT_TEXT).to_owned(),
                font_size: DEFAULT_FONT_SIZE,
                font_family: DEFAULT_FONT_FAMILY.to_owned(),
            },
            ElementStyle::filled(TEXT_FILL),
        ),
        ElementType::Shape => (
            ElementKind::Shape {
                shape: ShapeKind::Rectangle,
                corner_radius: 0.0,
            },
            ElementStyle::filled(SHAPE_FILL),
        ),
        ElementType::Sticker => (
            ElementKind::Sticker {
                path: content.unwrap_or_default().to_owned(),
            },
            ElementStyle::default(),
        ),
    };

    let mut patch = extra;
    if element_type == ElementType::Shape {
        if let Some(preset) = content.filter(|c| c.trim_start().starts_with('{')) {
            match ElementPatch::from_json(preset) {
                Ok(parsed) => patch = patch.merged(parsed),
                Err(e) => error!("Ignoring malformed shape preset {preset:?}: {e}"),
            }
        }
    }

    let mut element = AlbumElement::new(geometry, style, kind);
    patch.apply(&mut element);
    debug!(
        "Created {} element {} at {:?}",
        element_type.as_str(),
        element.id,
        element.geometry.position
    );
    element
}
