use egui::Pos2;

use super::ElementGeometry;
use crate::widgets::Handle;

/// Extra slack around an element's box when picking it.
pub const PICK_PADDING: f32 = 2.0;

/// Whether `pos` (page space) falls inside the rotated box of `geometry`.
pub fn element_contains(geometry: &ElementGeometry, pos: Pos2) -> bool {
    let local = geometry.to_local(pos);
    local.x >= -PICK_PADDING
        && local.y >= -PICK_PADDING
        && local.x <= geometry.size.x + PICK_PADDING
        && local.y <= geometry.size.y + PICK_PADDING
}

/// Page-space position of `handle` on the rotated box.
pub fn handle_position(geometry: &ElementGeometry, handle: Handle, rotate_offset: f32) -> Pos2 {
    geometry.to_page(handle.local_position(geometry.size, rotate_offset))
}

/// Returns the nearest of `handles` within `radius` of `pos`.
pub fn handle_at(
    geometry: &ElementGeometry,
    handles: &[Handle],
    pos: Pos2,
    radius: f32,
    rotate_offset: f32,
) -> Option<Handle> {
    handles
        .iter()
        .map(|h| (*h, handle_position(geometry, *h, rotate_offset).distance(pos)))
        .filter(|(_, distance)| *distance <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(h, _)| h)
}
