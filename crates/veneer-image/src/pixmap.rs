//! Owned RGBA pixel buffer.

use veneer_core::color::Color;
use veneer_core::geometry::{Point, Size};

/// Bytes per RGBA pixel.
pub(crate) const BYTES_PER_PIXEL: usize = 4;

/// An owned bitmap of RGBA8 pixels in row-major order.
///
/// # Coordinate System
///
/// - (0, 0) is the top-left pixel
/// - X increases to the right (columns)
/// - Y increases downward (rows)
///
/// # Examples
///
/// ```
/// use veneer_core::color::Color;
/// use veneer_image::Pixmap;
///
/// let mut pixmap = Pixmap::filled(4, 4, Color::WHITE);
/// pixmap.set_pixel(1, 1, Color::rgb(1.0, 0.0, 0.0));
///
/// assert_eq!(pixmap.pixel(1, 1), Some(Color::rgb(1.0, 0.0, 0.0)));
/// assert_eq!(pixmap.pixel(9, 9), None);
/// ```
#[derive(Clone, PartialEq)]
pub struct Pixmap {
    /// Pixel storage, `width * height * 4` bytes.
    data: Vec<u8>,

    /// Width in pixels.
    width: u32,

    /// Height in pixels.
    height: u32,
}

impl std::fmt::Debug for Pixmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pixmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Pixmap {
    /// Creates a fully transparent pixmap with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
            width,
            height,
        }
    }

    /// Creates a pixmap filled with a single color.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let mut pixmap = Self::new(width, height);
        let rgba = color.to_rgba_u8();
        for chunk in pixmap.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&rgba);
        }
        pixmap
    }

    /// Creates a pixmap by evaluating `pixel_at` for every coordinate.
    pub fn from_fn(width: u32, height: u32, pixel_at: impl Fn(u32, u32) -> Color) -> Self {
        let mut pixmap = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                pixmap.set_pixel(x, y, pixel_at(x, y));
            }
        }
        pixmap
    }

    /// Creates a pixmap from raw RGBA bytes.
    ///
    /// Returns `None` when the byte count does not match the dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize * BYTES_PER_PIXEL {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the width in pixels.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions as `(width, height)`.
    #[inline]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the dimensions as a geometric size.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// Returns the number of bytes in one pixel row.
    #[inline]
    pub const fn bytes_per_row(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Returns the total number of pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns whether width and height are equal.
    #[inline]
    pub const fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Returns whether either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the raw RGBA bytes mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the pixmap, returning the raw RGBA bytes.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Converts (x, y) coordinates to a byte offset.
    #[inline]
    pub(crate) fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
        } else {
            None
        }
    }

    /// Returns the color of the pixel at (x, y), or `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let offset = self.offset(x, y)?;
        let bytes = &self.data[offset..offset + BYTES_PER_PIXEL];
        Some(Color::from_rgba_u8(bytes[0], bytes[1], bytes[2], bytes[3]))
    }

    /// Sets the pixel at (x, y); out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(offset) = self.offset(x, y) {
            self.data[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&color.to_rgba_u8());
        }
    }

    /// Returns the color at a geometric point, or `None` when the point lies
    /// outside the pixmap.
    pub fn color_at(&self, point: Point) -> Option<Color> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        self.pixel(point.x.floor() as u32, point.y.floor() as u32)
    }

    /// Returns whether the pixmap, rendered at the given display scale, is
    /// large enough for an Instagram upload.
    pub fn is_large_enough_for_instagram(&self, scale: f32) -> bool {
        let min = Size::MIN_INSTAGRAM_PIXELS;
        self.width as f32 * scale >= min.width && self.height as f32 * scale >= min.height
    }

    /// Bridges to an `image` crate buffer, copying the pixels.
    pub(crate) fn to_rgba_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .expect("pixmap dimensions always match its storage")
    }

    /// Bridges from an `image` crate buffer.
    pub(crate) fn from_rgba_image(image: image::RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            data: image.into_raw(),
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_is_transparent() {
        let pixmap = Pixmap::new(2, 2);
        assert_eq!(pixmap.pixel(0, 0), Some(Color::CLEAR));
        assert_eq!(pixmap.area(), 4);
    }

    #[test]
    fn test_filled() {
        let pixmap = Pixmap::filled(3, 2, Color::rgb(1.0, 0.0, 0.0));
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(pixmap.pixel(x, y), Some(Color::rgb(1.0, 0.0, 0.0)));
            }
        }
    }

    #[test]
    fn test_pixel_round_trip() {
        let mut pixmap = Pixmap::new(4, 4);
        let color = Color::from_rgba_u8(12, 34, 56, 78);
        pixmap.set_pixel(2, 3, color);
        assert_eq!(pixmap.pixel(2, 3), Some(color));
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut pixmap = Pixmap::new(2, 2);
        assert_eq!(pixmap.pixel(2, 0), None);
        assert_eq!(pixmap.pixel(0, 2), None);
        // Ignored rather than panicking.
        pixmap.set_pixel(5, 5, Color::WHITE);
    }

    #[test]
    fn test_color_at() {
        let pixmap = Pixmap::filled(2, 2, Color::WHITE);
        assert_eq!(pixmap.color_at(Point::new(1.9, 0.2)), Some(Color::WHITE));
        assert_eq!(pixmap.color_at(Point::new(-0.1, 0.0)), None);
        assert_eq!(pixmap.color_at(Point::new(0.0, 2.0)), None);
    }

    #[test]
    fn test_from_raw_validates_length() {
        assert!(Pixmap::from_raw(2, 2, vec![0; 16]).is_some());
        assert!(Pixmap::from_raw(2, 2, vec![0; 15]).is_none());
    }

    #[test]
    fn test_instagram_size_check() {
        let pixmap = Pixmap::new(306, 306);
        assert!(!pixmap.is_large_enough_for_instagram(1.0));
        assert!(pixmap.is_large_enough_for_instagram(2.0));
    }

    #[test]
    fn test_is_square() {
        assert!(Pixmap::new(4, 4).is_square());
        assert!(!Pixmap::new(4, 5).is_square());
    }
}
