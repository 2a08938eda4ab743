use egui::Color32;

// Size limits enforced by interactive transforms
pub const MIN_ELEMENT_SIZE: f32 = 5.0;
pub const MIN_TEXT_WIDTH: f32 = 30.0;

/// Sticker paths are authored in a box of this size.
pub const STICKER_BASE_SIZE: f32 = 100.0;

pub const DEFAULT_POSITION: f32 = 100.0;
pub const DEFAULT_TEXT: &str = "New Text";
pub const DEFAULT_FONT_SIZE: f32 = 20.0;
pub const DEFAULT_FONT_FAMILY: &str = "Playfair Display";
pub const DEFAULT_IMAGE_SOURCE: &str = "https://picsum.photos/seed/new/400/300";

pub const TEXT_FILL: Color32 = Color32::from_rgb(0x1D, 0x35, 0x57);
pub const SHAPE_FILL: Color32 = Color32::from_rgb(0xE5, 0xE7, 0xEB);
pub const STICKER_FILL: Color32 = Color32::BLACK;

/// Parses `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
pub fn parse_hex_color(text: &str) -> Option<Color32> {
    Color32::from_hex(text.trim()).ok()
}

/// Formats as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
pub fn color_to_hex(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == u8::MAX {
        format!("#{r:02X}{g:02X}{b:02X}")
    } else {
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }
}

/// Serde adapter for optional colors carried as hex strings.
pub(crate) mod hex_color {
    use egui::Color32;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(color: &Option<Color32>, s: S) -> Result<S::Ok, S::Error> {
        match color {
            Some(c) => s.serialize_str(&super::color_to_hex(*c)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Color32>, D::Error> {
        let text: Option<String> = Option::deserialize(d)?;
        match text {
            None => Ok(None),
            Some(text) => super::parse_hex_color(&text)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid color `{text}`"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_hex_color("#1D3557"), Some(TEXT_FILL));
        assert_eq!(parse_hex_color("#fff"), Some(Color32::WHITE));
        assert_eq!(parse_hex_color("blue"), None);
        assert_eq!(color_to_hex(SHAPE_FILL), "#E5E7EB");
    }
}
