use egui::{Pos2, Vec2};

use crate::geometry::ElementGeometry;

/// An alignment line in page space, shown while an element is dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Guide {
    /// Vertical line at this x.
    Vertical(f32),
    /// Horizontal line at this y.
    Horizontal(f32),
}

/// Collects the guides for `moving` at its current position.
///
/// The element's center is compared with the page center, and its left, top,
/// right and bottom edges with the same edges of every element in `others`.
/// A match is anything strictly closer than `threshold`. Every match is
/// reported, duplicates included; nothing is snapped.
pub fn compute_guides<'a>(
    moving: &ElementGeometry,
    others: impl IntoIterator<Item = &'a ElementGeometry>,
    page_size: Vec2,
    threshold: f32,
) -> Vec<Guide> {
    let near = |a: f32, b: f32| (a - b).abs() < threshold;
    let rect = moving.rect();
    let page_center = Pos2::new(page_size.x / 2.0, page_size.y / 2.0);
    let mut guides = Vec::new();

    if near(rect.center().x, page_center.x) {
        guides.push(Guide::Vertical(page_center.x));
    }
    if near(rect.center().y, page_center.y) {
        guides.push(Guide::Horizontal(page_center.y));
    }

    for other in others {
        let target = other.rect();
        if near(rect.left(), target.left()) {
            guides.push(Guide::Vertical(target.left()));
        }
        if near(rect.top(), target.top()) {
            guides.push(Guide::Horizontal(target.top()));
        }
        if near(rect.right(), target.right()) {
            guides.push(Guide::Vertical(target.right()));
        }
        if near(rect.bottom(), target.bottom()) {
            guides.push(Guide::Horizontal(target.bottom()));
        }
    }

    guides
}
