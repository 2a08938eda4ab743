use egui::{Color32, CursorIcon, Painter, Pos2, Stroke, Vec2};

/// A transform handle on the selection box of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    Rotate,
}

impl Handle {
    /// Handles shown for images, shapes and stickers.
    pub const ALL: [Handle; 9] = [
        Handle::TopLeft,
        Handle::Top,
        Handle::TopRight,
        Handle::Right,
        Handle::BottomRight,
        Handle::Bottom,
        Handle::BottomLeft,
        Handle::Left,
        Handle::Rotate,
    ];

    /// Text boxes only resize horizontally; their height follows the content.
    pub const TEXT: [Handle; 3] = [Handle::Left, Handle::Right, Handle::Rotate];

    pub fn for_text(is_text: bool) -> &'static [Handle] {
        if is_text { &Self::TEXT } else { &Self::ALL }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Handle::TopLeft => "top_left",
            Handle::Top => "top",
            Handle::TopRight => "top_right",
            Handle::Right => "right",
            Handle::BottomRight => "bottom_right",
            Handle::Bottom => "bottom",
            Handle::BottomLeft => "bottom_left",
            Handle::Left => "left",
            Handle::Rotate => "rotate",
        }
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            Handle::TopLeft | Handle::BottomRight => CursorIcon::ResizeNwSe,
            Handle::TopRight | Handle::BottomLeft => CursorIcon::ResizeNeSw,
            Handle::Top | Handle::Bottom => CursorIcon::ResizeVertical,
            Handle::Left | Handle::Right => CursorIcon::ResizeHorizontal,
            Handle::Rotate => CursorIcon::Alias,
        }
    }

    /// -1 when the handle drags the left edge, 1 for the right edge, 0 otherwise.
    pub fn horizontal_sign(&self) -> f32 {
        match self {
            Handle::TopLeft | Handle::Left | Handle::BottomLeft => -1.0,
            Handle::TopRight | Handle::Right | Handle::BottomRight => 1.0,
            _ => 0.0,
        }
    }

    /// -1 when the handle drags the top edge, 1 for the bottom edge, 0 otherwise.
    pub fn vertical_sign(&self) -> f32 {
        match self {
            Handle::TopLeft | Handle::Top | Handle::TopRight => -1.0,
            Handle::BottomLeft | Handle::Bottom | Handle::BottomRight => 1.0,
            _ => 0.0,
        }
    }

    /// Position in the element's unrotated local frame.
    pub fn local_position(&self, size: Vec2, rotate_offset: f32) -> Vec2 {
        if *self == Handle::Rotate {
            return Vec2::new(size.x / 2.0, -rotate_offset);
        }
        Vec2::new(
            size.x * (self.horizontal_sign() + 1.0) / 2.0,
            size.y * (self.vertical_sign() + 1.0) / 2.0,
        )
    }
}

const HANDLE_FILL: Color32 = Color32::from_rgb(0x1D, 0x35, 0x57);
const HANDLE_STROKE: Color32 = Color32::WHITE;

/// Draws a single handle at `position` (screen space).
pub fn paint_handle(painter: &Painter, handle: Handle, position: Pos2, radius: f32) {
    let stroke = Stroke::new(1.0, HANDLE_STROKE);
    if handle == Handle::Rotate {
        painter.circle_filled(position, radius * 0.6, HANDLE_FILL);
        painter.circle_stroke(position, radius * 0.6, stroke);
    } else {
        let rect = egui::Rect::from_center_size(position, Vec2::splat(radius));
        painter.rect_filled(rect, 1.0, HANDLE_FILL);
        painter.rect_stroke(rect, 1.0, stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_positions() {
        let size = Vec2::new(100.0, 50.0);
        assert_eq!(Handle::TopLeft.local_position(size, 30.0), Vec2::ZERO);
        assert_eq!(Handle::Right.local_position(size, 30.0), Vec2::new(100.0, 25.0));
        assert_eq!(Handle::Bottom.local_position(size, 30.0), Vec2::new(50.0, 50.0));
        assert_eq!(Handle::Rotate.local_position(size, 30.0), Vec2::new(50.0, -30.0));
    }

    #[test]
    fn test_text_handles_are_horizontal() {
        assert!(Handle::for_text(true).iter().all(|h| h.vertical_sign() == 0.0));
        assert_eq!(Handle::for_text(false).len(), 9);
    }
}
