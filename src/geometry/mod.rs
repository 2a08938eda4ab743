pub mod clip;
pub mod hit_testing;
pub mod path;

use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

pub use clip::{ClipOutline, ShapeKind, clip_outline, rounded_rect_polygon};

/// Placement of an element on its page.
///
/// `position` is the top-left corner in page-local units and also the pivot of
/// `rotation`, which is stored in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementGeometry {
    pub position: Pos2,
    pub size: Vec2,
    pub rotation: f32,
}

impl ElementGeometry {
    pub fn new(position: Pos2, size: Vec2) -> Self {
        Self {
            position,
            size,
            rotation: 0.0,
        }
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Unrotated box, as used for alignment guides.
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position, self.size)
    }

    /// Unit vectors of the element's local x and y axes in page space.
    pub fn axes(&self) -> (Vec2, Vec2) {
        axes_for(self.rotation)
    }

    /// Maps a point in the element's local frame to page space.
    pub fn to_page(&self, local: Vec2) -> Pos2 {
        let (u, v) = self.axes();
        self.position + u * local.x + v * local.y
    }

    /// Maps a page-space point into the element's local frame.
    pub fn to_local(&self, pos: Pos2) -> Vec2 {
        let (u, v) = self.axes();
        let d = pos - self.position;
        Vec2::new(d.dot(u), d.dot(v))
    }

    pub fn center(&self) -> Pos2 {
        self.to_page(self.size / 2.0)
    }

    /// Corners in page space, clockwise from the top-left.
    pub fn corners(&self) -> [Pos2; 4] {
        let (w, h) = (self.size.x, self.size.y);
        [
            self.to_page(Vec2::ZERO),
            self.to_page(Vec2::new(w, 0.0)),
            self.to_page(Vec2::new(w, h)),
            self.to_page(Vec2::new(0.0, h)),
        ]
    }

    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            position: self.position + delta,
            ..*self
        }
    }
}

pub(crate) fn axes_for(rotation_degrees: f32) -> (Vec2, Vec2) {
    let (sin, cos) = rotation_degrees.to_radians().sin_cos();
    (Vec2::new(cos, sin), Vec2::new(-sin, cos))
}
