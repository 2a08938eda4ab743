use std::f32::consts::{FRAC_PI_2, PI, TAU};

use egui::{Pos2, Rect, Vec2, pos2};
use serde::{Deserialize, Serialize};

/// Outline of a shape element, or the frame an image is masked into.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Circle,
    Triangle,
    Star,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Star,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Star => "Star",
        }
    }
}

const STAR_SPIKES: usize = 5;
const STAR_INNER_RATIO: f32 = 2.5;

/// A closed outline in box-local coordinates (origin at the box's top-left).
#[derive(Debug, Clone, PartialEq)]
pub enum ClipOutline {
    Rect(Rect),
    Circle { center: Pos2, radius: f32 },
    Polygon(Vec<Pos2>),
}

/// Computes the clip outline of `shape` inside a `size` box.
///
/// `None` behaves like [`ShapeKind::Rectangle`].
pub fn clip_outline(shape: Option<ShapeKind>, size: Vec2) -> ClipOutline {
    let (width, height) = (size.x, size.y);
    match shape.unwrap_or_default() {
        ShapeKind::Rectangle => ClipOutline::Rect(Rect::from_min_size(Pos2::ZERO, size)),
        ShapeKind::Circle => ClipOutline::Circle {
            center: pos2(width / 2.0, height / 2.0),
            radius: width.min(height) / 2.0,
        },
        ShapeKind::Triangle => ClipOutline::Polygon(vec![
            pos2(width / 2.0, 0.0),
            pos2(width, height),
            pos2(0.0, height),
        ]),
        ShapeKind::Star => ClipOutline::Polygon(star_points(size)),
    }
}

fn star_points(size: Vec2) -> Vec<Pos2> {
    let center = pos2(size.x / 2.0, size.y / 2.0);
    let outer = size.x.min(size.y) / 2.0;
    let inner = outer / STAR_INNER_RATIO;
    let step = PI / STAR_SPIKES as f32;

    let mut rotation = -PI / 2.0;
    let mut points = Vec::with_capacity(STAR_SPIKES * 2);
    for _ in 0..STAR_SPIKES {
        points.push(center + Vec2::angled(rotation) * outer);
        rotation += step;
        points.push(center + Vec2::angled(rotation) * inner);
        rotation += step;
    }
    points
}

/// Outline of a `size` box with rounded corners, clockwise from the top edge.
/// `radius` is clamped to half the shorter side.
pub fn rounded_rect_polygon(size: Vec2, radius: f32, corner_segments: usize) -> Vec<Pos2> {
    let r = radius.clamp(0.0, size.x.min(size.y) / 2.0);
    if r <= 0.0 {
        return clip_outline(None, size).to_polygon(4);
    }
    let n = corner_segments.max(1);
    let corners = [
        (pos2(size.x - r, r), -FRAC_PI_2),
        (pos2(size.x - r, size.y - r), 0.0),
        (pos2(r, size.y - r), FRAC_PI_2),
        (pos2(r, r), PI),
    ];
    corners
        .into_iter()
        .flat_map(|(center, start)| {
            (0..=n).map(move |i| center + Vec2::angled(start + FRAC_PI_2 * i as f32 / n as f32) * r)
        })
        .collect()
}

impl ClipOutline {
    /// Flattens the outline into a closed polygon. Circles use
    /// `circle_segments` vertices.
    pub fn to_polygon(&self, circle_segments: usize) -> Vec<Pos2> {
        match self {
            ClipOutline::Rect(rect) => vec![
                rect.left_top(),
                rect.right_top(),
                rect.right_bottom(),
                rect.left_bottom(),
            ],
            ClipOutline::Circle { center, radius } => {
                let segments = circle_segments.max(3);
                (0..segments)
                    .map(|i| {
                        let angle = TAU * i as f32 / segments as f32;
                        *center + Vec2::angled(angle) * *radius
                    })
                    .collect()
            }
            ClipOutline::Polygon(points) => points.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_is_full_box() {
        let outline = clip_outline(Some(ShapeKind::Rectangle), Vec2::new(120.0, 80.0));
        assert_eq!(
            outline,
            ClipOutline::Rect(Rect::from_min_size(Pos2::ZERO, Vec2::new(120.0, 80.0)))
        );
        assert_eq!(clip_outline(None, Vec2::new(120.0, 80.0)), outline);
    }

    #[test]
    fn test_circle_uses_smaller_side() {
        match clip_outline(Some(ShapeKind::Circle), Vec2::new(200.0, 100.0)) {
            ClipOutline::Circle { center, radius } => {
                assert_eq!(center, pos2(100.0, 50.0));
                assert_eq!(radius, 50.0);
            }
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn test_triangle_apex_and_base() {
        let outline = clip_outline(Some(ShapeKind::Triangle), Vec2::new(100.0, 60.0));
        assert_eq!(
            outline.to_polygon(0),
            vec![pos2(50.0, 0.0), pos2(100.0, 60.0), pos2(0.0, 60.0)]
        );
    }

    #[test]
    fn test_star_alternates_radii_from_top() {
        let points = clip_outline(Some(ShapeKind::Star), Vec2::new(100.0, 100.0)).to_polygon(0);
        assert_eq!(points.len(), 10);

        let center = pos2(50.0, 50.0);
        assert!((points[0].x - 50.0).abs() < 1e-4);
        assert!((points[0].y - 0.0).abs() < 1e-4);
        for (i, point) in points.iter().enumerate() {
            let expected = if i % 2 == 0 { 50.0 } else { 20.0 };
            assert!((point.distance(center) - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn test_circle_polygon_stays_on_radius() {
        let outline = clip_outline(Some(ShapeKind::Circle), Vec2::new(80.0, 80.0));
        let polygon = outline.to_polygon(32);
        assert_eq!(polygon.len(), 32);
        assert!(polygon.iter().all(|p| (p.distance(pos2(40.0, 40.0)) - 40.0).abs() < 1e-3));
    }

    #[test]
    fn test_rounded_rect_stays_inside_box() {
        let size = Vec2::new(120.0, 60.0);
        let points = rounded_rect_polygon(size, 100.0, 6);
        assert_eq!(points.len(), 4 * 7);
        let bounds = Rect::from_min_size(Pos2::ZERO, size).expand(1e-3);
        assert!(points.iter().all(|p| bounds.contains(*p)));
        assert!((points[0].y - 0.0).abs() < 1e-3);
    }
}
