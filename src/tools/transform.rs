//! Pure transform math for drag, resize and rotate gestures.
//!
//! While a gesture is live the element is previewed through a
//! [`NodeTransform`]: the original size scaled by a factor. On release the
//! factor is folded back into an explicit width and height.

use egui::{Pos2, Vec2};

use crate::geometry::{ElementGeometry, axes_for};
use crate::widgets::Handle;

/// Intermediate placement of an element during a resize or rotate gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTransform {
    pub position: Pos2,
    pub scale: Vec2,
    pub rotation: f32,
}

impl NodeTransform {
    pub fn identity(geometry: &ElementGeometry) -> Self {
        Self {
            position: geometry.position,
            scale: Vec2::splat(1.0),
            rotation: geometry.rotation,
        }
    }

    /// Geometry to draw while the gesture is live.
    pub fn preview(&self, base_size: Vec2) -> ElementGeometry {
        ElementGeometry {
            position: self.position,
            size: base_size * self.scale,
            rotation: self.rotation,
        }
    }

    /// Final geometry: the scale becomes explicit size, clamped to `min_size`.
    pub fn fold_scale(&self, base_size: Vec2, min_size: Vec2) -> ElementGeometry {
        let size = base_size * self.scale;
        ElementGeometry {
            position: self.position,
            size: Vec2::new(size.x.max(min_size.x), size.y.max(min_size.y)),
            rotation: self.rotation,
        }
    }
}

fn ratio(new: f32, old: f32) -> f32 {
    if old.abs() <= f32::EPSILON { 1.0 } else { new / old }
}

/// Resizes `initial` by dragging `handle` by `delta` (page space).
///
/// The edges opposite the handle stay fixed in the element's rotated frame.
/// The new size never drops below `min_size`.
pub fn resize(initial: &ElementGeometry, handle: Handle, delta: Vec2, min_size: Vec2) -> NodeTransform {
    let (u, v) = initial.axes();
    let local = Vec2::new(delta.dot(u), delta.dot(v));
    let (sx, sy) = (handle.horizontal_sign(), handle.vertical_sign());
    let size = initial.size;

    let width = if sx == 0.0 {
        size.x
    } else {
        (size.x + sx * local.x).max(min_size.x)
    };
    let height = if sy == 0.0 {
        size.y
    } else {
        (size.y + sy * local.y).max(min_size.y)
    };

    // Dragging the left or top edge moves the origin by what the size lost.
    let offset = Vec2::new(
        if sx < 0.0 { size.x - width } else { 0.0 },
        if sy < 0.0 { size.y - height } else { 0.0 },
    );

    NodeTransform {
        position: initial.to_page(offset),
        scale: Vec2::new(ratio(width, size.x), ratio(height, size.y)),
        rotation: initial.rotation,
    }
}

/// Rotates `initial` about its center by the angle the pointer swept around
/// that center, from `start` to `current`.
pub fn rotate(initial: &ElementGeometry, start: Pos2, current: Pos2) -> NodeTransform {
    let center = initial.center();
    let from = start - center;
    let to = current - center;
    if from.length_sq() <= f32::EPSILON || to.length_sq() <= f32::EPSILON {
        return NodeTransform::identity(initial);
    }

    let mut swept = (to.angle() - from.angle()).to_degrees();
    if swept > 180.0 {
        swept -= 360.0;
    } else if swept <= -180.0 {
        swept += 360.0;
    }
    let rotation = initial.rotation + swept;
    let (u, v) = axes_for(rotation);
    let half = initial.size / 2.0;

    NodeTransform {
        position: center - u * half.x - v * half.y,
        scale: Vec2::splat(1.0),
        rotation,
    }
}

/// Moves `initial` by `delta`.
pub fn translate(initial: &ElementGeometry, delta: Vec2) -> ElementGeometry {
    initial.translated(delta)
}
