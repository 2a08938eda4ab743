use std::collections::HashMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};
use thiserror::Error;

/// Errors that can occur while turning an image source into a texture
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("only data URIs can be decoded locally")]
    NotDataUri,
    #[error("data URI is not base64 encoded")]
    NotBase64,
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decodes a `data:<mime>;base64,<payload>` URI into pixels.
pub fn decode_data_uri(uri: &str) -> Result<ColorImage, TextureError> {
    let rest = uri.strip_prefix("data:").ok_or(TextureError::NotDataUri)?;
    let (header, payload) = rest.split_once(',').ok_or(TextureError::NotDataUri)?;
    if !header.ends_with(";base64") {
        return Err(TextureError::NotBase64);
    }
    let bytes = STANDARD.decode(payload.trim())?;
    let rgba = image::load_from_memory(&bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

enum CacheEntry {
    Ready(TextureHandle),
    /// Remembered so a bad source is not decoded again every frame.
    Failed,
}

/// Caches image textures by source, evicting the least recently used.
pub struct TextureManager {
    texture_cache: HashMap<String, CacheEntry>,
    last_used: HashMap<String, u64>,
    current_frame: u64,
    max_cache_size: usize,
}

impl TextureManager {
    pub fn new(max_cache_size: usize) -> Self {
        Self {
            texture_cache: HashMap::new(),
            last_used: HashMap::new(),
            current_frame: 0,
            max_cache_size: max_cache_size.max(1),
        }
    }

    /// Should be called at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.current_frame += 1;
    }

    /// Texture for an image element's `source`. `None` means the source cannot
    /// be shown (remote URL or undecodable data) and a placeholder is drawn.
    pub fn texture_for(&mut self, source: &str, ctx: &Context) -> Option<TextureId> {
        match self.get_or_create_texture(source, || decode_data_uri(source), ctx) {
            Ok(id) => id,
            Err(e) => {
                log::warn!("Image source cannot be shown: {e}");
                None
            }
        }
    }

    /// Gets or creates the texture cached under `key`. A failed generation is
    /// reported once; later lookups of the same key return `Ok(None)`.
    pub fn get_or_create_texture<F>(
        &mut self,
        key: &str,
        generator: F,
        ctx: &Context,
    ) -> Result<Option<TextureId>, TextureError>
    where
        F: FnOnce() -> Result<ColorImage, TextureError>,
    {
        if let Some(entry) = self.texture_cache.get(key) {
            self.last_used.insert(key.to_owned(), self.current_frame);
            return Ok(match entry {
                CacheEntry::Ready(handle) => Some(handle.id()),
                CacheEntry::Failed => None,
            });
        }

        self.make_room();
        self.last_used.insert(key.to_owned(), self.current_frame);

        match generator() {
            Ok(image) => {
                let name = format!("album_image_{}", self.texture_cache.len());
                let handle = ctx.load_texture(name, image, TextureOptions::LINEAR);
                let id = handle.id();
                self.texture_cache
                    .insert(key.to_owned(), CacheEntry::Ready(handle));
                Ok(Some(id))
            }
            Err(e) => {
                self.texture_cache.insert(key.to_owned(), CacheEntry::Failed);
                Err(e)
            }
        }
    }

    /// Evicts the oldest entries until one more fits.
    fn make_room(&mut self) {
        while self.texture_cache.len() >= self.max_cache_size {
            let Some(oldest) = self
                .last_used
                .iter()
                .min_by_key(|(_, frame)| **frame)
                .map(|(key, _)| key.clone())
            else {
                break;
            };
            self.texture_cache.remove(&oldest);
            self.last_used.remove(&oldest);
        }
    }

    pub fn cache_size(&self) -> usize {
        self.texture_cache.len()
    }

    #[cfg(test)]
    fn is_cached(&self, key: &str) -> bool {
        self.texture_cache.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_texture_generator() -> Result<ColorImage, TextureError> {
        Ok(ColorImage::new([10, 10], egui::Color32::WHITE))
    }

    fn png_data_uri() -> String {
        let mut bytes = Vec::new();
        image::RgbaImage::from_pixel(2, 3, image::Rgba([255, 0, 0, 255]))
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        format!("data:image/png;base64,{}", STANDARD.encode(&bytes))
    }

    #[test]
    fn test_decode_data_uri() {
        let image = decode_data_uri(&png_data_uri()).unwrap();
        assert_eq!(image.size, [2, 3]);
        assert_eq!(image.pixels[0], egui::Color32::RED);
    }

    #[test]
    fn test_remote_sources_are_not_decoded() {
        assert!(matches!(
            decode_data_uri("https://picsum.photos/seed/new/400/300"),
            Err(TextureError::NotDataUri)
        ));
        assert!(matches!(
            decode_data_uri("data:image/png,raw"),
            Err(TextureError::NotBase64)
        ));
    }

    #[test]
    fn test_cache_hit() {
        let ctx = Context::default();
        let mut manager = TextureManager::new(10);

        let first = manager
            .get_or_create_texture("a", mock_texture_generator, &ctx)
            .unwrap();
        let second = manager
            .get_or_create_texture("a", || panic!("should hit the cache"), &ctx)
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(manager.cache_size(), 1);
    }

    #[test]
    fn test_failure_is_remembered() {
        let ctx = Context::default();
        let mut manager = TextureManager::new(10);

        assert!(manager.texture_for("https://example.com/a.jpg", &ctx).is_none());
        let again = manager
            .get_or_create_texture("https://example.com/a.jpg", || panic!("decoded twice"), &ctx)
            .unwrap();
        assert!(again.is_none());
    }

    #[test]
    fn test_lru_eviction() {
        let ctx = Context::default();
        let mut manager = TextureManager::new(2);

        manager.get_or_create_texture("1", mock_texture_generator, &ctx).unwrap();
        manager.begin_frame();
        manager.get_or_create_texture("2", mock_texture_generator, &ctx).unwrap();
        manager.begin_frame();
        manager.get_or_create_texture("3", mock_texture_generator, &ctx).unwrap();

        assert_eq!(manager.cache_size(), 2);
        assert!(!manager.is_cached("1"));
        assert!(manager.is_cached("2"));
        assert!(manager.is_cached("3"));
    }
}
