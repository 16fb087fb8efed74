//! PNG encoding and decoding for pixmaps.

use std::io::Cursor;

use image::ImageFormat;

use crate::error::Result;
use crate::pixmap::Pixmap;

impl Pixmap {
    /// Encodes the pixmap as PNG data.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(self.to_rgba_image())
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Decodes a pixmap from PNG data.
    pub fn decode_png(bytes: &[u8]) -> Result<Pixmap> {
        let decoded = image::load_from_memory_with_format(bytes, ImageFormat::Png)?;
        Ok(Self::from_rgba_image(decoded.to_rgba8()))
    }

    /// Returns a copy round-tripped through the PNG codec, guaranteeing a
    /// straight-alpha RGBA representation.
    pub fn transparent_copy(&self) -> Result<Pixmap> {
        Self::decode_png(&self.encode_png()?)
    }
}

/// Returns the media type for an image file extension, defaulting to a
/// generic byte stream.
pub fn media_type_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_core::color::Color;

    #[test]
    fn test_png_round_trip_preserves_pixels() {
        let source = Pixmap::from_fn(5, 3, |x, y| {
            Color::from_rgba_u8((x * 50) as u8, (y * 80) as u8, 7, 255)
        });

        let encoded = source.encode_png().unwrap();
        let decoded = Pixmap::decode_png(&encoded).unwrap();

        assert_eq!(decoded, source);
    }

    #[test]
    fn test_transparent_copy_preserves_alpha() {
        let source = Pixmap::filled(2, 2, Color::rgba(1.0, 0.0, 0.0, 0.5));
        let copy = source.transparent_copy().unwrap();
        assert_eq!(copy, source);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(Pixmap::decode_png(b"definitely not a png").is_err());
    }

    #[test]
    fn test_media_types() {
        assert_eq!(media_type_for_extension("png"), "image/png");
        assert_eq!(media_type_for_extension("JPEG"), "image/jpeg");
        assert_eq!(media_type_for_extension("bin"), "application/octet-stream");
    }
}
