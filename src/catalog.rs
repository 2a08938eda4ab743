//! Built-in album templates, page layouts, cover designs, stickers and the
//! background palette.

use egui::Color32;

use crate::album::END_PAPER_COLOR;
use crate::element::ElementKind;
use crate::geometry::ShapeKind;
use crate::template::{CoverTemplate, ElementTemplate, PageLayout, PageTemplate, Template};

const fn rgb(hex: u32) -> Color32 {
    Color32::from_rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

const INK: Color32 = rgb(0x1D3557);
const STEEL: Color32 = rgb(0x457B9D);
const CREAM: Color32 = rgb(0xFDFCF0);

pub const FONT_FAMILIES: [&str; 3] = ["Inter", "Playfair Display", "Cormorant Garamond"];

/// Where sidebar clicks drop new elements.
pub const SIDEBAR_DROP_POSITION: (f32, f32) = (150.0, 225.0);

/// Fill given to stickers added from the sidebar.
pub const STICKER_SIDEBAR_FILL: Color32 = INK;

pub const BACKGROUND_PALETTE: [Color32; 20] = [
    rgb(0xFFFFFF),
    rgb(0xF8F9FA),
    rgb(0xE9ECEF),
    rgb(0xDEE2E6),
    rgb(0xCED4DA),
    rgb(0xADB5BD),
    rgb(0xFAD0C4),
    rgb(0xFFD1FF),
    rgb(0xD4FC79),
    rgb(0x96E6A1),
    rgb(0x84FAB0),
    rgb(0x8FD3F4),
    rgb(0xA1C4FD),
    rgb(0xC2E9FB),
    rgb(0xFBC2EB),
    rgb(0xA6C1EE),
    rgb(0xF6D365),
    rgb(0xFDA085),
    rgb(0xFF9A9E),
    rgb(0xA18CD1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sticker {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub path: &'static str,
}

const fn sticker(
    id: &'static str,
    name: &'static str,
    category: &'static str,
    path: &'static str,
) -> Sticker {
    Sticker {
        id,
        name,
        category,
        path,
    }
}

pub const STICKER_CATEGORIES: [&str; 6] =
    ["animals", "travel", "nature", "beaches", "emojis", "aesthetic"];

pub const STICKERS: &[Sticker] = &[
    sticker("a1", "Cat", "animals", "M 50 20 C 40 20 35 30 35 40 C 35 50 45 60 50 60 C 55 60 65 50 65 40 C 65 30 60 20 50 20 Z M 30 30 L 20 10 L 40 25 Z M 70 30 L 80 10 L 60 25 Z"),
    sticker("a2", "Bird", "animals", "M 20 50 Q 50 20 80 50 Q 50 80 20 50 M 80 50 L 90 45 L 85 55 Z"),
    sticker("a3", "Butterfly", "animals", "M 50 50 L 30 20 Q 10 20 10 40 Q 10 60 30 60 L 50 50 L 70 60 Q 90 60 90 40 Q 90 20 70 20 Z"),
    sticker("a4", "Fish", "animals", "M 10 50 Q 40 20 70 50 Q 40 80 10 50 M 70 50 L 90 30 L 90 70 Z"),
    sticker("t1", "Mountain", "travel", "M 10 90 L 50 20 L 90 90 Z M 40 40 L 50 55 L 60 40"),
    sticker("t2", "Sun", "travel", "M 50 20 A 30 30 0 1 1 50 80 A 30 30 0 1 1 50 20 M 50 10 L 50 0 M 50 90 L 50 100 M 10 50 L 0 50 M 90 50 L 100 50"),
    sticker("t3", "Plane", "travel", "M 10 50 L 40 50 L 50 20 L 60 50 L 90 50 L 60 60 L 50 90 L 40 60 Z"),
    sticker("t4", "Compass", "travel", "M 50 10 L 60 40 L 90 50 L 60 60 L 50 90 L 40 60 L 10 50 L 40 40 Z"),
    sticker("n1", "Leaf", "nature", "M 50 90 Q 20 50 50 10 Q 80 50 50 90 M 50 90 L 50 100"),
    sticker("n2", "Cloud", "nature", "M 25 70 A 15 15 0 0 1 25 40 A 20 20 0 0 1 60 30 A 20 20 0 0 1 85 50 A 15 15 0 0 1 75 80 Z"),
    sticker("n3", "Flower", "nature", "M 50 50 M 50 30 A 10 10 0 1 1 50 10 A 10 10 0 1 1 50 30 M 70 50 A 10 10 0 1 1 90 50 A 10 10 0 1 1 70 50 M 50 70 A 10 10 0 1 1 50 90 A 10 10 0 1 1 50 70 M 30 50 A 10 10 0 1 1 10 50 A 10 10 0 1 1 30 50"),
    sticker("n4", "Tree", "nature", "M 50 10 L 20 60 L 80 60 Z M 40 60 L 40 90 L 60 90 L 60 60"),
    sticker("b1", "Shell", "beaches", "M 50 90 Q 10 70 20 30 Q 50 10 80 30 Q 90 70 50 90"),
    sticker("b2", "Wave", "beaches", "M 0 70 Q 25 50 50 70 Q 75 90 100 70"),
    sticker("b3", "Palm", "beaches", "M 50 90 L 50 40 M 50 40 Q 20 20 10 50 M 50 40 Q 80 20 90 50 M 50 40 Q 50 10 50 0"),
    sticker("b4", "Anchor", "beaches", "M 50 10 L 50 80 M 20 60 Q 50 90 80 60"),
    sticker("e1", "Heart", "emojis", "M 50 30 C 30 10 10 30 10 50 C 10 70 50 90 50 90 C 50 90 90 70 90 50 C 90 30 70 10 50 30 Z"),
    sticker("e2", "Star", "emojis", "M 50 10 L 61 38 L 91 38 L 67 56 L 76 84 L 50 67 L 24 84 L 33 56 L 9 38 L 39 38 Z"),
    sticker("e3", "Smile", "emojis", "M 50 10 A 40 40 0 1 1 50 90 A 40 40 0 1 1 50 10 M 35 40 A 5 5 0 1 1 35 30 A 5 5 0 1 1 35 40 M 65 40 A 5 5 0 1 1 65 30 A 5 5 0 1 1 65 40 M 30 65 Q 50 85 70 65"),
    sticker("e4", "Sparkle", "emojis", "M 50 10 L 55 45 L 90 50 L 55 55 L 50 90 L 45 55 L 10 50 L 45 45 Z"),
    sticker("d1", "Brush 1", "aesthetic", "M 10 50 Q 30 40 50 50 T 90 50 L 90 60 Q 70 70 50 60 T 10 60 Z"),
    sticker("d2", "Tape", "aesthetic", "M 20 40 L 80 40 L 80 60 L 20 60 Z M 25 45 L 75 45 L 75 55 L 25 55 Z"),
    sticker("d3", "Corner", "aesthetic", "M 10 10 L 40 10 L 40 20 L 20 20 L 20 40 L 10 40 Z"),
    sticker("d4", "Circle Frame", "aesthetic", "M 50 10 A 40 40 0 1 1 50 90 A 40 40 0 1 1 50 10 M 50 20 A 30 30 0 1 0 50 80 A 30 30 0 1 0 50 20"),
    sticker("d5", "Washi Tape", "aesthetic", "M 10 40 L 90 40 L 90 60 L 10 60 Z M 15 45 L 85 45 L 85 55 L 15 55 Z"),
    sticker("d6", "Star Burst", "aesthetic", "M 50 0 L 55 45 L 100 50 L 55 55 L 50 100 L 45 55 L 0 50 L 45 45 Z"),
    sticker("d7", "Leaf Branch", "aesthetic", "M 50 100 Q 50 50 50 0 M 50 80 Q 30 70 20 80 M 50 60 Q 70 50 80 60 M 50 40 Q 30 30 20 40 M 50 20 Q 70 10 80 20"),
    sticker("d8", "Double Circle", "aesthetic", "M 50 10 A 40 40 0 1 1 50 90 A 40 40 0 1 1 50 10 M 50 15 A 35 35 0 1 1 50 85 A 35 35 0 1 1 50 15"),
    sticker("d9", "Squiggle", "aesthetic", "M 10 50 Q 20 20 30 50 T 50 50 T 70 50 T 90 50"),
    sticker("d10", "Diamond", "aesthetic", "M 50 10 L 90 50 L 50 90 L 10 50 Z"),
    sticker("d11", "Dashed Line", "aesthetic", "M 10 50 L 25 50 M 35 50 L 50 50 M 60 50 L 75 50 M 85 50 L 100 50"),
    sticker("d12", "Arrow Thin", "aesthetic", "M 10 50 L 90 50 M 70 30 L 90 50 L 70 70"),
];

pub fn stickers_in(category: &str) -> impl Iterator<Item = &'static Sticker> + '_ {
    STICKERS.iter().filter(move |s| s.category == category)
}

const SHELL_PATH: &str = "M 50 90 Q 10 70 20 30 Q 50 10 80 30 Q 90 70 50 90";
const SUN_PATH: &str = "M 50 20 A 30 30 0 1 1 50 80 A 30 30 0 1 1 50 20";
const LEAF_PATH: &str = "M 50 90 Q 20 50 50 10 Q 80 50 50 90 M 50 90 L 50 100";

fn picsum(seed: &str) -> String {
    format!("https://picsum.photos/seed/{seed}")
}

fn image(x: f32, y: f32, w: f32, h: f32, seed: &str) -> ElementTemplate {
    ElementTemplate::image(x, y, w, h, &picsum(seed))
}

#[allow(clippy::too_many_arguments)]
fn text(x: f32, y: f32, w: f32, h: f32, content: &str, size: f32, font: &str) -> ElementTemplate {
    ElementTemplate::text(x, y, w, h, content, size, font)
}

fn layout(id: &str, name: &str, elements: Vec<ElementTemplate>) -> PageLayout {
    PageLayout {
        id: id.to_owned(),
        name: name.to_owned(),
        elements,
    }
}

pub fn layouts() -> Vec<PageLayout> {
    let white = Color32::WHITE;
    vec![
        layout("layout-1-full", "Single Image", vec![
            image(20.0, 20.0, 360.0, 440.0, "layout1/800/1000"),
            text(20.0, 480.0, 360.0, 50.0, "A beautiful memory", 24.0, "Playfair Display"),
        ]),
        layout("layout-2-two-vertical", "Two Vertical", vec![
            image(20.0, 20.0, 360.0, 245.0, "layout2a/800/600"),
            image(20.0, 285.0, 360.0, 245.0, "layout2b/800/600"),
        ]),
        layout("layout-3-collage", "3 Image Collage", vec![
            image(20.0, 20.0, 360.0, 260.0, "layout3a/800/600"),
            image(20.0, 300.0, 170.0, 230.0, "layout3b/400/600"),
            image(210.0, 300.0, 170.0, 230.0, "layout3c/400/600"),
        ]),
        layout("layout-4-polaroid", "Polaroid Style", vec![
            image(30.0, 30.0, 340.0, 340.0, "layout4/800/800"),
            text(30.0, 400.0, 340.0, 80.0, "Captured Moments", 28.0, "Cormorant Garamond"),
        ]),
        layout("layout-5-three-vertical", "3 Vertical Strip", vec![
            image(15.0, 15.0, 110.0, 520.0, "l5a/400/1200"),
            image(145.0, 15.0, 110.0, 520.0, "l5b/400/1200"),
            image(275.0, 15.0, 110.0, 520.0, "l5c/400/1200"),
        ]),
        layout("layout-6-modern-text", "Modern Text Focus", vec![
            text(20.0, 40.0, 360.0, 80.0, "THE JOURNEY", 48.0, "Playfair Display"),
            image(20.0, 140.0, 360.0, 280.0, "l6/800/600"),
            text(20.0, 440.0, 360.0, 80.0, "Every step taken was a memory made. This is where the story begins.", 16.0, "Inter")
                .with_fill(STEEL),
        ]),
        layout("layout-7-four-grid", "4 Image Square", vec![
            image(15.0, 15.0, 175.0, 250.0, "l7a/400/600"),
            image(210.0, 15.0, 175.0, 250.0, "l7b/400/600"),
            image(15.0, 285.0, 175.0, 250.0, "l7c/400/600"),
            image(210.0, 285.0, 175.0, 250.0, "l7d/400/600"),
        ]),
        layout("layout-8-cinematic", "Cinematic Wide", vec![
            image(0.0, 80.0, 400.0, 300.0, "l8/1200/600"),
            text(20.0, 400.0, 360.0, 50.0, "A MOMENT IN TIME", 32.0, "Playfair Display"),
            text(20.0, 460.0, 360.0, 30.0, "SEPTEMBER 2023", 14.0, "Inter").with_fill(STEEL),
        ]),
        layout("layout-9-nine-grid", "3x3 Mini Grid", {
            let mut cells = Vec::with_capacity(9);
            for (row, y) in [15.0, 195.0, 375.0].into_iter().enumerate() {
                for (col, x) in [15.0, 145.0, 275.0].into_iter().enumerate() {
                    let letter = char::from(b'a' + (row * 3 + col) as u8);
                    cells.push(image(x, y, 110.0, 160.0, &format!("l9{letter}/400/600")));
                }
            }
            cells
        }),
        layout("layout-11-triptych", "Triptych Focus", vec![
            image(10.0, 10.0, 120.0, 530.0, "l11a/400/1200"),
            image(140.0, 10.0, 250.0, 530.0, "l11b/800/1200"),
            text(150.0, 450.0, 230.0, 60.0, "THE CENTERPIECE", 24.0, "Playfair Display").with_fill(white),
        ]),
        layout("layout-12-magazine", "Magazine Spread", vec![
            image(0.0, 0.0, 400.0, 350.0, "l12/1200/800"),
            text(20.0, 370.0, 360.0, 40.0, "EDITORIAL", 12.0, "Inter").with_fill(STEEL),
            text(20.0, 400.0, 360.0, 60.0, "A Story Worth Telling", 36.0, "Playfair Display"),
            text(20.0, 470.0, 360.0, 60.0, "LOREM IPSUM DOLOR SIT AMET CONSECTETUR ADIPISCING ELIT.", 10.0, "Inter"),
        ]),
        layout("layout-14-asymmetric", "Asymmetric Pair", vec![
            image(20.0, 20.0, 240.0, 320.0, "l14a/600/800"),
            image(140.0, 200.0, 240.0, 320.0, "l14b/600/800"),
            text(20.0, 480.0, 360.0, 40.0, "CONTRAST", 24.0, "Playfair Display"),
        ]),
        layout("layout-15-panorama", "Panorama Focus", vec![
            image(0.0, 150.0, 400.0, 250.0, "l15/1200/600"),
            text(20.0, 420.0, 360.0, 60.0, "The horizon calls...", 18.0, "Cormorant Garamond").with_fill(STEEL),
        ]),
        layout("layout-16-grid-six", "6-Image Grid", {
            let mut cells = Vec::with_capacity(6);
            for (row, y) in [20.0, 195.0, 370.0].into_iter().enumerate() {
                for (col, x) in [20.0, 210.0].into_iter().enumerate() {
                    let letter = char::from(b'a' + (row * 2 + col) as u8);
                    cells.push(image(x, y, 170.0, 160.0, &format!("l16{letter}/400/400")));
                }
            }
            cells
        }),
        layout("layout-17-overlap", "Overlapping Trio", vec![
            image(20.0, 20.0, 250.0, 350.0, "l17a/600/800").with_rotation(-5.0),
            image(130.0, 100.0, 250.0, 350.0, "l17b/600/800").with_rotation(5.0),
            text(50.0, 480.0, 300.0, 40.0, "LAYERS OF LIFE", 20.0, "Playfair Display"),
        ]),
        layout("layout-18-vertical-split", "Vertical Split", vec![
            image(0.0, 0.0, 200.0, 550.0, "l18a/400/1200"),
            text(220.0, 100.0, 160.0, 100.0, "SIDE BY SIDE", 30.0, "Playfair Display"),
            image(220.0, 220.0, 160.0, 310.0, "l18b/400/800"),
        ]),
        layout("layout-19-circle-focus", "Circle Trio", vec![
            image(50.0, 50.0, 140.0, 140.0, "l19a/400/400").with_frame(ShapeKind::Circle),
            image(210.0, 120.0, 140.0, 140.0, "l19b/400/400").with_frame(ShapeKind::Circle),
            image(80.0, 250.0, 240.0, 240.0, "l19c/600/600").with_frame(ShapeKind::Circle),
        ]),
        layout("layout-20-geometric", "Geometric Mix", vec![
            image(20.0, 20.0, 360.0, 250.0, "l20a/800/600").with_frame(ShapeKind::Triangle),
            image(20.0, 280.0, 175.0, 250.0, "l20b/400/600").with_frame(ShapeKind::Star),
            image(205.0, 280.0, 175.0, 250.0, "l20c/400/600").with_frame(ShapeKind::Circle),
        ]),
        layout("layout-21-editorial-large", "Editorial Large", vec![
            image(20.0, 20.0, 360.0, 400.0, "l21/800/800"),
            text(20.0, 440.0, 360.0, 80.0, "THE ART OF TRAVEL", 36.0, "Playfair Display"),
        ]),
        layout("layout-22-scattered", "Scattered Polaroids", vec![
            image(30.0, 30.0, 160.0, 200.0, "l22a/400/500").with_rotation(-5.0).with_stroke(white, 10.0),
            image(210.0, 50.0, 160.0, 200.0, "l22b/400/500").with_rotation(8.0).with_stroke(white, 10.0),
            image(120.0, 250.0, 160.0, 200.0, "l22c/400/500").with_rotation(-2.0).with_stroke(white, 10.0),
        ]),
        layout("layout-24-collage-four", "Dynamic Collage", vec![
            image(20.0, 20.0, 175.0, 250.0, "l24a/400/600").with_rotation(-2.0).with_corner_radius(10.0),
            image(205.0, 40.0, 175.0, 250.0, "l24b/400/600").with_rotation(3.0).with_corner_radius(10.0),
            image(30.0, 280.0, 175.0, 250.0, "l24c/400/600").with_rotation(1.0).with_corner_radius(10.0),
            image(200.0, 300.0, 175.0, 230.0, "l24d/400/600").with_rotation(-4.0).with_corner_radius(10.0),
        ]),
        layout("layout-25-triptych-vertical", "Vertical Triptych", vec![
            image(10.0, 10.0, 120.0, 530.0, "l25a/400/1200"),
            image(140.0, 10.0, 120.0, 530.0, "l25b/400/1200"),
            image(270.0, 10.0, 120.0, 530.0, "l25c/400/1200"),
        ]),
        layout("layout-26-hero-text", "Hero Text Overlay", vec![
            image(0.0, 0.0, 400.0, 550.0, "l26/1200/1600"),
            text(20.0, 200.0, 360.0, 150.0, "ADVENTURE", 48.0, "Playfair Display")
                .with_fill(white)
                .with_stroke(Color32::BLACK, 1.0),
        ]),
    ]
}

fn cover(
    id: &str,
    location: &str,
    name: &str,
    background: Color32,
    elements: Vec<ElementTemplate>,
) -> CoverTemplate {
    CoverTemplate {
        id: id.to_owned(),
        name: name.to_owned(),
        location: location.to_owned(),
        preview: picsum(&format!("{}-cover/400/300", location.to_lowercase())),
        background,
        elements,
    }
}

pub fn cover_templates() -> Vec<CoverTemplate> {
    vec![
        cover("cover-goa", "Goa", "Goa Vibes", rgb(0xFFF9F0), vec![
            image(0.0, 0.0, 400.0, 400.0, "goa-main/800/800"),
            ElementTemplate::sticker(300.0, 320.0, 80.0, 80.0, SHELL_PATH)
                .with_rotation(15.0)
                .with_fill(rgb(0xF4A261)),
            text(20.0, 420.0, 360.0, 60.0, "GOA", 72.0, "Cormorant Garamond").with_fill(rgb(0x264653)),
            text(25.0, 500.0, 350.0, 30.0, "SUNSET & SERENITY", 14.0, "Inter").with_fill(rgb(0x2A9D8F)),
        ]),
        cover("cover-tokyo", "Tokyo", "Tokyo Neon", rgb(0x0A0A0A), vec![
            image(20.0, 20.0, 360.0, 360.0, "tokyo-main/800/800").with_stroke(rgb(0xFF0055), 2.0),
            text(20.0, 400.0, 360.0, 80.0, "TOKYO", 80.0, "Inter").with_fill(rgb(0xFF0055)),
            text(20.0, 490.0, 360.0, 30.0, "CITY OF LIGHTS", 16.0, "Inter").with_fill(rgb(0x00F2FF)),
            ElementTemplate::sticker(320.0, 20.0, 60.0, 60.0, SUN_PATH).with_fill(rgb(0xFF0055)),
        ]),
        cover("cover-dubai", "Dubai", "Dubai Luxury", CREAM, vec![
            image(50.0, 50.0, 300.0, 300.0, "dubai-main/600/600")
                .with_frame(ShapeKind::Circle)
                .with_stroke(rgb(0xD4AF37), 4.0),
            text(20.0, 380.0, 360.0, 60.0, "DUBAI", 64.0, "Cormorant Garamond").with_fill(rgb(0xD4AF37)),
            text(20.0, 460.0, 360.0, 30.0, "THE GOLDEN CITY", 14.0, "Inter"),
        ]),
        cover("cover-japan", "Japan", "Japan Zen", Color32::WHITE, vec![
            image(0.0, 0.0, 400.0, 550.0, "japan-main/1200/1600").with_opacity(0.8),
            ElementTemplate::sticker(150.0, 150.0, 100.0, 100.0, SUN_PATH).with_fill(rgb(0xBC002D)),
            text(20.0, 350.0, 360.0, 100.0, "JAPAN", 90.0, "Cormorant Garamond").with_fill(Color32::BLACK),
            text(25.0, 450.0, 350.0, 40.0, "TRADITION & MODERNITY", 12.0, "Inter").with_fill(Color32::BLACK),
        ]),
        cover("cover-paris", "Paris", "Paris Romance", rgb(0xFFF5F5), vec![
            image(20.0, 20.0, 360.0, 360.0, "paris-main/800/800").with_corner_radius(20.0),
            text(20.0, 400.0, 360.0, 60.0, "PARIS", 64.0, "Cormorant Garamond").with_fill(rgb(0x8E5D5D)),
            text(20.0, 470.0, 360.0, 30.0, "CITY OF LOVE", 14.0, "Inter").with_fill(rgb(0xA68B8B)),
            ElementTemplate::sticker(300.0, 380.0, 60.0, 60.0, SHELL_PATH)
                .with_rotation(-10.0)
                .with_fill(rgb(0xFFB7B7)),
        ]),
        cover("cover-london", "London", "London Fog", rgb(0xE5E5E5), vec![
            image(20.0, 20.0, 360.0, 400.0, "london-main/800/1000").with_corner_radius(10.0),
            text(20.0, 440.0, 360.0, 60.0, "LONDON", 64.0, "Cormorant Garamond").with_fill(rgb(0x2B2D42)),
            text(20.0, 510.0, 360.0, 20.0, "STREETS & STORIES", 12.0, "Inter").with_fill(rgb(0x8D99AE)),
        ]),
        cover("cover-bali", "Bali", "Bali Tropical", rgb(0xF0F4F0), vec![
            image(0.0, 0.0, 400.0, 350.0, "bali-main/800/600"),
            text(20.0, 380.0, 360.0, 80.0, "BALI", 80.0, "Cormorant Garamond").with_fill(rgb(0x2D6A4F)),
            ElementTemplate::sticker(300.0, 350.0, 80.0, 80.0, LEAF_PATH)
                .with_rotation(-20.0)
                .with_fill(rgb(0x40916C)),
        ]),
    ]
}

fn end_paper(color: Color32) -> PageTemplate {
    PageTemplate::new(color, Vec::new())
}

/// Pages of a "Pastel Dream" album: a chapter heading, a photo and a caption
/// on every page.
pub fn standard_pages(content_pages: usize) -> Vec<PageTemplate> {
    let total = content_pages + 4;
    (0..total)
        .map(|i| {
            let front = i == 0;
            let back = i == total - 1;
            if i == 1 || i == total - 2 {
                return end_paper(END_PAPER_COLOR);
            }
            let cover = front || back;
            let heading = if front {
                "THE ART OF TRAVEL".to_owned()
            } else if back {
                "THE END".to_owned()
            } else {
                format!("CHAPTER {}", i - 1)
            };
            let caption = if front {
                "A COLLECTION OF MOMENTS"
            } else if back {
                "PASTELPIX EDITIONS"
            } else {
                "Click to add your story here..."
            };
            PageTemplate::new(CREAM, vec![
                text(
                    if cover { 40.0 } else { 30.0 },
                    if cover { 60.0 } else { 40.0 },
                    340.0,
                    if cover { 100.0 } else { 40.0 },
                    &heading,
                    if cover { 56.0 } else { 18.0 },
                    "Cormorant Garamond",
                )
                .with_fill(if cover { INK } else { STEEL }),
                image(
                    20.0,
                    if cover { 180.0 } else { 100.0 },
                    360.0,
                    if cover { 300.0 } else { 380.0 },
                    &format!("album-{i}/1200/1600"),
                )
                .with_corner_radius(8.0),
                text(30.0, 500.0, 340.0, 30.0, caption, if front { 14.0 } else { 10.0 }, "Inter"),
            ])
        })
        .collect()
}

/// Pages of a blank album: a title on the front, a closing line on the back.
pub fn empty_pages(content_pages: usize) -> Vec<PageTemplate> {
    let total = content_pages + 4;
    (0..total)
        .map(|i| {
            if i == 1 || i == total - 2 {
                return end_paper(rgb(0x2B2D42));
            }
            let elements = if i == 0 {
                vec![
                    text(40.0, 200.0, 320.0, 100.0, "MY PHOTO BOOK", 40.0, "Cormorant Garamond"),
                    text(40.0, 280.0, 320.0, 30.0, "CREATED WITH PASTELPIX", 12.0, "Inter").with_fill(STEEL),
                ]
            } else if i == total - 1 {
                vec![text(40.0, 480.0, 320.0, 40.0, "MADE WITH LOVE", 14.0, "Cormorant Garamond")]
            } else {
                Vec::new()
            };
            PageTemplate::new(Color32::WHITE, elements)
        })
        .collect()
}

const TRAVEL_TITLES: [&str; 12] = [
    "MORNING GLOW",
    "CITY LIGHTS",
    "HIDDEN GEMS",
    "OCEAN BREEZE",
    "MOUNTAIN PEAKS",
    "STREET FOOD",
    "LOCAL CULTURE",
    "SUNSET VIBES",
    "ARCHITECTURE",
    "WILDLIFE",
    "ROAD TRIP",
    "MEMORIES",
];

const TRAVEL_BACKGROUNDS: [Color32; 6] = [
    rgb(0xFDFCF0),
    rgb(0xF5F5F0),
    rgb(0xF0F4F8),
    rgb(0xF8F0F4),
    rgb(0xF0F8F0),
    rgb(0xFFF9F0),
];

/// Layouts used for the first content pages of the travel album, in order.
const TRAVEL_OPENING_LAYOUTS: [&str; 6] = [
    "layout-21-editorial-large",
    "layout-26-hero-text",
    "layout-24-collage-four",
    "layout-25-triptych-vertical",
    "layout-19-circle-focus",
    "layout-22-scattered",
];

fn travel_content_page(i: usize, layouts: &[PageLayout]) -> PageTemplate {
    let n = i - 2;
    let layout = TRAVEL_OPENING_LAYOUTS
        .get(n)
        .and_then(|id| layouts.iter().find(|l| l.id == *id))
        .or_else(|| layouts.get(n % layouts.len()));
    let Some(layout) = layout else {
        return PageTemplate::new(TRAVEL_BACKGROUNDS[n % TRAVEL_BACKGROUNDS.len()], Vec::new());
    };

    let title = TRAVEL_TITLES[n % TRAVEL_TITLES.len()];
    let elements = layout
        .elements
        .iter()
        .enumerate()
        .map(|(idx, template)| {
            let mut template = template.clone();
            match &mut template.kind {
                ElementKind::Text {
                    text,
                    font_size,
                    font_family,
                } if idx == 0 => {
                    *text = title.to_owned();
                    *font_family = "Cormorant Garamond".to_owned();
                    *font_size *= 1.2;
                }
                ElementKind::Image {
                    source,
                    frame,
                    corner_radius,
                } => {
                    *source = picsum(&format!("travel-{i}-{idx}/800/800"));
                    if *frame == ShapeKind::Rectangle && (i + idx) % 7 == 0 {
                        *frame = ShapeKind::Circle;
                    }
                    *corner_radius = if *frame == ShapeKind::Rectangle && (i + idx) % 5 == 0 {
                        20.0
                    } else {
                        0.0
                    };
                }
                _ => {}
            }
            template
        })
        .collect();

    PageTemplate::new(TRAVEL_BACKGROUNDS[n % TRAVEL_BACKGROUNDS.len()], elements)
}

/// Pages of the ready-made travel album, built from the layout catalog.
pub fn travel_pages(content_pages: usize) -> Vec<PageTemplate> {
    let total = content_pages + 4;
    let layouts = layouts();
    (0..total)
        .map(|i| {
            if i == 1 || i == total - 2 {
                end_paper(rgb(0x1A1A1A))
            } else if i == 0 {
                PageTemplate::new(Color32::BLACK, vec![
                    image(0.0, 0.0, 400.0, 550.0, "travel-cover-main/1200/1600"),
                    text(20.0, 350.0, 360.0, 150.0, "WANDERLUST", 64.0, "Playfair Display")
                        .with_fill(Color32::WHITE),
                    text(25.0, 440.0, 350.0, 40.0, "A JOURNEY THROUGH THE UNKNOWN", 14.0, "Inter")
                        .with_fill(Color32::WHITE),
                ])
            } else if i == total - 1 {
                PageTemplate::new(Color32::WHITE, vec![
                    image(100.0, 150.0, 200.0, 200.0, "travel-back/400/400").with_frame(ShapeKind::Circle),
                    text(20.0, 380.0, 360.0, 40.0, "UNTIL NEXT TIME", 24.0, "Playfair Display"),
                ])
            } else {
                travel_content_page(i, &layouts)
            }
        })
        .collect()
}

pub fn templates() -> Vec<Template> {
    let template = |id: &str, name: &str, preview: &str, pages| Template {
        id: id.to_owned(),
        name: name.to_owned(),
        preview: picsum(preview),
        pages,
    };
    vec![
        template("start-from-scratch", "Start from Scratch", "scratch/400/300", empty_pages(12)),
        template("ready-made-travel", "Ready-made Travel", "travel-ready/400/300", travel_pages(12)),
        template("pastel-dream", "Pastel Dream (12 Pages)", "pastel-preview/400/300", standard_pages(12)),
    ]
}
