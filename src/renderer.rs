use std::collections::HashMap;

use egui::{Align2, Color32, FontId, Mesh, Painter, Pos2, Rect, Shape, Stroke, TextureId, Vec2};
use egui::epaint::{TextShape, Vertex, WHITE_UV};

use crate::drop_payload::{page_to_stage, stage_to_page};
use crate::element::{AlbumElement, ElementKind, STICKER_FILL, TEXT_FILL};
use crate::geometry::path::{Subpath, flatten_path};
use crate::geometry::{ElementGeometry, ShapeKind, clip_outline, rounded_rect_polygon};
use crate::page::AlbumPage;
use crate::texture_manager::TextureManager;
use crate::tools::Guide;
use crate::widgets::{Handle, paint_handle};

const CIRCLE_SEGMENTS: usize = 64;
const CORNER_SEGMENTS: usize = 8;
const PLACEHOLDER_FILL: Color32 = Color32::from_rgb(0xE5, 0xE7, 0xEB);
const SELECTION_STROKE: Color32 = Color32::from_rgb(0x1D, 0x35, 0x57);
const GUIDE_COLOR: Color32 = Color32::from_rgb(0xFF, 0x44, 0x44);
const ACTIVE_RING: Color32 = Color32::from_rgb(0x1D, 0x35, 0x57);

/// Placement of one page on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageView {
    /// Screen position of the page's top-left corner.
    pub origin: Pos2,
    pub zoom: f32,
}

impl PageView {
    pub fn to_screen(&self, page_pos: Pos2) -> Pos2 {
        page_to_stage(page_pos, self.origin, self.zoom)
    }

    pub fn to_page(&self, screen_pos: Pos2) -> Pos2 {
        stage_to_page(screen_pos, self.origin, self.zoom)
    }

    pub fn screen_rect(&self, page_size: Vec2) -> Rect {
        Rect::from_min_size(self.origin, page_size * self.zoom)
    }
}

/// Draws pages, their elements and the editing overlays.
pub struct Renderer {
    textures: TextureManager,
    sticker_paths: HashMap<String, Vec<Subpath>>,
    ctx: egui::Context,
}

impl Renderer {
    pub fn new(ctx: &egui::Context, texture_cache_size: usize) -> Self {
        Self {
            textures: TextureManager::new(texture_cache_size),
            sticker_paths: HashMap::new(),
            ctx: ctx.clone(),
        }
    }

    pub fn begin_frame(&mut self) {
        self.textures.begin_frame();
    }

    /// Height of `text` laid out at page scale and wrapped to `width`, as it
    /// is drawn at zoom 1.
    pub fn text_height(&self, text: &str, font_size: f32, width: f32) -> f32 {
        self.ctx.fonts(|fonts| {
            fonts
                .layout(
                    text.to_owned(),
                    FontId::proportional(font_size),
                    TEXT_FILL,
                    width.max(1.0),
                )
                .size()
                .y
        })
    }

    /// Paints a page's background and elements, clipped to the page.
    ///
    /// `preview` may substitute the geometry of an element being transformed.
    pub fn paint_page(
        &mut self,
        painter: &Painter,
        page: &AlbumPage,
        view: PageView,
        page_size: Vec2,
        preview: impl Fn(&AlbumElement) -> Option<ElementGeometry>,
    ) {
        let rect = view.screen_rect(page_size);
        let painter = painter.with_clip_rect(rect.intersect(painter.clip_rect()));
        painter.rect_filled(rect, 0.0, page.background.unwrap_or(Color32::WHITE));

        for element in page.elements() {
            let geometry = preview(element).unwrap_or(element.geometry);
            self.paint_element(&painter, element, &geometry, view);
        }
    }

    fn paint_element(
        &mut self,
        painter: &Painter,
        element: &AlbumElement,
        geometry: &ElementGeometry,
        view: PageView,
    ) {
        let opacity = element.style.opacity.clamp(0.0, 1.0);
        let to_screen = |local: Pos2| view.to_screen(geometry.to_page(local.to_vec2()));

        match &element.kind {
            ElementKind::Image {
                source,
                frame,
                corner_radius,
            } => {
                let outline = frame_polygon(*frame, geometry.size, *corner_radius);
                let texture = self.textures.texture_for(source, &self.ctx);
                let tint = Color32::WHITE.gamma_multiply(opacity);
                let mesh = match texture {
                    Some(id) => fan_mesh(&outline, geometry.size, to_screen, tint, Some(id)),
                    None => fan_mesh(
                        &outline,
                        geometry.size,
                        to_screen,
                        PLACEHOLDER_FILL.gamma_multiply(opacity),
                        None,
                    ),
                };
                painter.add(mesh);
                if texture.is_none() {
                    painter.text(
                        view.to_screen(geometry.center()),
                        Align2::CENTER_CENTER,
                        "Photo",
                        FontId::proportional(14.0 * view.zoom),
                        Color32::GRAY,
                    );
                }
                self.paint_outline_stroke(painter, element, &outline, to_screen, view);
            }
            ElementKind::Shape {
                shape,
                corner_radius,
            } => {
                let outline = frame_polygon(*shape, geometry.size, *corner_radius);
                let fill = element.style.fill.unwrap_or(PLACEHOLDER_FILL);
                painter.add(fan_mesh(
                    &outline,
                    geometry.size,
                    to_screen,
                    fill.gamma_multiply(opacity),
                    None,
                ));
                self.paint_outline_stroke(painter, element, &outline, to_screen, view);
            }
            ElementKind::Text {
                text,
                font_size,
                ..
            } => {
                let color = element.style.fill.unwrap_or(TEXT_FILL).gamma_multiply(opacity);
                let galley = painter.layout(
                    text.clone(),
                    FontId::proportional(font_size * view.zoom),
                    color,
                    (geometry.size.x * view.zoom).max(1.0),
                );
                let shape = TextShape::new(view.to_screen(geometry.position), galley, color)
                    .with_angle(geometry.rotation.to_radians());
                painter.add(Shape::Text(shape));
            }
            ElementKind::Sticker { path } => {
                let Some(subpaths) = self.sticker_subpaths(path) else {
                    return;
                };
                let scale = element.sticker_scale();
                let fill = element.style.fill.unwrap_or(STICKER_FILL).gamma_multiply(opacity);
                for subpath in subpaths {
                    let local = subpath.map(|p| Pos2::new(p.x * scale.x, p.y * scale.y));
                    let screen: Vec<Pos2> = local.points.iter().map(|p| to_screen(*p)).collect();
                    if local.closed && screen.len() >= 3 {
                        painter.add(polygon_fan(&screen, fill));
                    } else if screen.len() >= 2 {
                        painter.add(Shape::line(screen, Stroke::new(2.0 * view.zoom, fill)));
                    }
                }
            }
        }
    }

    fn paint_outline_stroke(
        &self,
        painter: &Painter,
        element: &AlbumElement,
        outline: &[Pos2],
        to_screen: impl Fn(Pos2) -> Pos2,
        view: PageView,
    ) {
        let width = element.style.stroke_width;
        let Some(color) = element.style.stroke.filter(|_| width > 0.0) else {
            return;
        };
        let points = outline.iter().map(|p| to_screen(*p)).collect();
        painter.add(Shape::closed_line(
            points,
            Stroke::new(width * view.zoom, color.gamma_multiply(element.style.opacity)),
        ));
    }

    fn sticker_subpaths(&mut self, path: &str) -> Option<Vec<Subpath>> {
        if let Some(cached) = self.sticker_paths.get(path) {
            return Some(cached.clone());
        }
        match flatten_path(path) {
            Ok(subpaths) => {
                self.sticker_paths.insert(path.to_owned(), subpaths.clone());
                Some(subpaths)
            }
            Err(e) => {
                log::warn!("Sticker path cannot be drawn: {e}");
                self.sticker_paths.insert(path.to_owned(), Vec::new());
                None
            }
        }
    }

    /// Selection box, resize handles and the rotate handle's stem.
    pub fn paint_selection(
        &self,
        painter: &Painter,
        geometry: &ElementGeometry,
        is_text: bool,
        view: PageView,
        handle_radius: f32,
        rotate_offset: f32,
    ) {
        let corners: Vec<Pos2> = geometry.corners().iter().map(|p| view.to_screen(*p)).collect();
        painter.add(Shape::closed_line(corners, Stroke::new(1.0, SELECTION_STROKE)));

        let top_center = view.to_screen(geometry.to_page(Vec2::new(geometry.size.x / 2.0, 0.0)));
        let rotate_at = |h: Handle| {
            view.to_screen(geometry.to_page(h.local_position(geometry.size, rotate_offset)))
        };
        painter.line_segment(
            [top_center, rotate_at(Handle::Rotate)],
            Stroke::new(1.0, SELECTION_STROKE),
        );
        for handle in Handle::for_text(is_text) {
            paint_handle(painter, *handle, rotate_at(*handle), handle_radius);
        }
    }

    /// Dashed alignment lines spanning the page.
    pub fn paint_guides(&self, painter: &Painter, guides: &[Guide], view: PageView, page_size: Vec2) {
        let stroke = Stroke::new(1.0, GUIDE_COLOR);
        for guide in guides {
            let (a, b) = match *guide {
                Guide::Vertical(x) => (Pos2::new(x, 0.0), Pos2::new(x, page_size.y)),
                Guide::Horizontal(y) => (Pos2::new(0.0, y), Pos2::new(page_size.x, y)),
            };
            painter.extend(Shape::dashed_line(
                &[view.to_screen(a), view.to_screen(b)],
                stroke,
                4.0,
                4.0,
            ));
        }
    }

    /// Dims an end paper and says why it cannot be edited.
    pub fn paint_end_paper_overlay(&self, painter: &Painter, rect: Rect) {
        painter.rect_filled(rect, 0.0, Color32::from_black_alpha(102));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "END PAPER · NOT EDITABLE",
            FontId::proportional(11.0),
            Color32::from_white_alpha(160),
        );
    }

    pub fn paint_active_ring(&self, painter: &Painter, rect: Rect) {
        painter.rect_stroke(rect.expand(3.0), 0.0, Stroke::new(3.0, ACTIVE_RING));
    }
}

/// Outline of an image frame or shape in the element's local frame.
fn frame_polygon(shape: ShapeKind, size: Vec2, corner_radius: f32) -> Vec<Pos2> {
    match shape {
        ShapeKind::Rectangle => rounded_rect_polygon(size, corner_radius, CORNER_SEGMENTS),
        other => clip_outline(Some(other), size).to_polygon(CIRCLE_SEGMENTS),
    }
}

/// Triangle fan over `outline` (local units) from the box center. Every
/// outline used here is star-shaped around that center.
fn fan_mesh(
    outline: &[Pos2],
    size: Vec2,
    to_screen: impl Fn(Pos2) -> Pos2,
    color: Color32,
    texture: Option<TextureId>,
) -> Mesh {
    let uv = |local: Pos2| match texture {
        Some(_) if size.x > 0.0 && size.y > 0.0 => Pos2::new(local.x / size.x, local.y / size.y),
        _ => WHITE_UV,
    };
    let mut mesh = match texture {
        Some(id) => Mesh::with_texture(id),
        None => Mesh::default(),
    };
    if outline.len() < 3 {
        return mesh;
    }

    let center = (size / 2.0).to_pos2();
    mesh.vertices.push(Vertex {
        pos: to_screen(center),
        uv: uv(center),
        color,
    });
    for point in outline {
        mesh.vertices.push(Vertex {
            pos: to_screen(*point),
            uv: uv(*point),
            color,
        });
    }
    let ring = outline.len() as u32;
    for i in 0..ring {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % ring);
    }
    mesh
}

/// Fills a closed screen-space polyline with a fan from its vertex centroid.
fn polygon_fan(points: &[Pos2], color: Color32) -> Mesh {
    let sum = points.iter().fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    let centroid = (sum / points.len() as f32).to_pos2();
    let mut mesh = Mesh::default();
    mesh.colored_vertex(centroid, color);
    for point in points {
        mesh.colored_vertex(*point, color);
    }
    let ring = points.len() as u32;
    for i in 0..ring {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % ring);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_page_view_round_trip() {
        let view = PageView {
            origin: pos2(100.0, 40.0),
            zoom: 0.5,
        };
        let page = pos2(200.0, 300.0);
        assert_eq!(view.to_screen(page), pos2(200.0, 190.0));
        assert_eq!(view.to_page(view.to_screen(page)), page);
        assert_eq!(
            view.screen_rect(Vec2::new(400.0, 550.0)),
            Rect::from_min_size(pos2(100.0, 40.0), Vec2::new(200.0, 275.0))
        );
    }

    #[test]
    fn test_fan_mesh_covers_every_edge() {
        let outline = frame_polygon(ShapeKind::Star, Vec2::splat(100.0), 0.0);
        let mesh = fan_mesh(&outline, Vec2::splat(100.0), |p| p, Color32::RED, None);
        assert_eq!(mesh.vertices.len(), outline.len() + 1);
        assert_eq!(mesh.indices.len(), outline.len() * 3);
        assert!(mesh.vertices.iter().all(|v| v.uv == WHITE_UV));
    }

    #[test]
    fn test_textured_fan_maps_box_to_unit_uv() {
        let outline = frame_polygon(ShapeKind::Rectangle, Vec2::new(200.0, 100.0), 0.0);
        let mesh = fan_mesh(
            &outline,
            Vec2::new(200.0, 100.0),
            |p| p,
            Color32::WHITE,
            Some(TextureId::Managed(7)),
        );
        assert_eq!(mesh.texture_id, TextureId::Managed(7));
        assert_eq!(mesh.vertices[0].uv, pos2(0.5, 0.5));
        assert_eq!(mesh.vertices[3].uv, pos2(1.0, 1.0));
    }
}
