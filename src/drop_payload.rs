use egui::{Color32, Pos2};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::element::{ElementType, parse_hex_color};
use crate::error::{EditError, EditResult};

/// What a sidebar item carries when dragged onto a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragKind {
    Image,
    Text,
    Shape,
    Sticker,
    Color,
}

impl DragKind {
    pub fn element_type(&self) -> Option<ElementType> {
        match self {
            DragKind::Image => Some(ElementType::Image),
            DragKind::Text => Some(ElementType::Text),
            DragKind::Shape => Some(ElementType::Shape),
            DragKind::Sticker => Some(ElementType::Sticker),
            DragKind::Color => None,
        }
    }
}

/// Wire format of a drag: `{"type": "...", "data": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragPayload {
    #[serde(rename = "type", alias = "kind")]
    pub kind: DragKind,
    pub data: String,
}

impl DragPayload {
    pub fn new(kind: DragKind, data: impl Into<String>) -> Self {
        Self {
            kind,
            data: data.into(),
        }
    }

    pub fn to_json(&self) -> EditResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> EditResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// What a drop on a page should do.
#[derive(Debug, Clone, PartialEq)]
pub enum DropAction {
    AddElement {
        element_type: ElementType,
        content: String,
    },
    SetBackground(Color32),
}

/// Interprets dropped text. Structured payloads are honoured; anything else
/// that is not blank is taken as an image URI.
pub fn resolve_drop(raw: &str) -> EditResult<DropAction> {
    match DragPayload::from_json(raw) {
        Ok(payload) => payload_action(payload),
        Err(e) => {
            let uri = raw.trim();
            // A JSON object that is not a payload is rejected, not taken as a URI.
            let json_object = serde_json::from_str::<serde_json::Value>(uri)
                .is_ok_and(|value| value.is_object());
            if uri.is_empty() || json_object {
                return Err(e);
            }
            Ok(DropAction::AddElement {
                element_type: ElementType::Image,
                content: uri.to_owned(),
            })
        }
    }
}

fn payload_action(payload: DragPayload) -> EditResult<DropAction> {
    match payload.kind.element_type() {
        Some(element_type) => Ok(DropAction::AddElement {
            element_type,
            content: payload.data,
        }),
        None => parse_hex_color(&payload.data)
            .map(DropAction::SetBackground)
            .ok_or_else(|| {
                warn!("Dropped color {:?} is not a hex color", payload.data);
                EditError::MalformedPayload(format!("invalid color `{}`", payload.data))
            }),
    }
}

/// Converts a pointer position on the zoomed canvas into page-local units.
pub fn stage_to_page(stage_pos: Pos2, page_origin: Pos2, zoom: f32) -> Pos2 {
    let zoom = if zoom > 0.0 { zoom } else { 1.0 };
    Pos2::ZERO + (stage_pos - page_origin) / zoom
}

/// Inverse of [`stage_to_page`].
pub fn page_to_stage(page_pos: Pos2, page_origin: Pos2, zoom: f32) -> Pos2 {
    page_origin + page_pos.to_vec2() * zoom
}
