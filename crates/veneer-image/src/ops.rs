//! Geometric and per-pixel pixmap operations.

use image::imageops::FilterType;

use veneer_core::color::Color;
use veneer_core::geometry::{Point, Rect};

use crate::pixmap::{Pixmap, BYTES_PER_PIXEL};

impl Pixmap {
    /// Returns a horizontally mirrored copy.
    pub fn mirrored(&self) -> Pixmap {
        let mut result = Pixmap::new(self.width(), self.height());
        for y in 0..self.height() {
            for x in 0..self.width() {
                if let Some(color) = self.pixel(x, y) {
                    result.set_pixel(self.width() - 1 - x, y, color);
                }
            }
        }
        result
    }

    /// Returns a copy with the RGB channels inverted and alpha preserved.
    pub fn negative(&self) -> Pixmap {
        let mut result = self.clone();
        for pixel in result.data_mut().chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[0] = 255 - pixel[0];
            pixel[1] = 255 - pixel[1];
            pixel[2] = 255 - pixel[2];
        }
        result
    }

    /// Returns a copy with the mask coverage inverted: the alpha channel is
    /// flipped while the color channels stay put.
    pub fn inverted_mask(&self) -> Pixmap {
        let mut result = self.clone();
        for pixel in result.data_mut().chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[3] = 255 - pixel[3];
        }
        result
    }

    /// Returns a copy rotated by the given angle in degrees around the
    /// center, sized to enclose the rotated image. Uncovered pixels are
    /// transparent.
    pub fn rotated(&self, degrees: f32) -> Pixmap {
        let angle = degrees.to_radians();
        let (sin, cos) = angle.sin_cos();

        let w = self.width() as f32;
        let h = self.height() as f32;

        let out_w = (w * cos.abs() + h * sin.abs()).round().max(1.0) as u32;
        let out_h = (w * sin.abs() + h * cos.abs()).round().max(1.0) as u32;

        let src_center = Point::new(0.5 * w, 0.5 * h);
        let dst_center = Point::new(0.5 * out_w as f32, 0.5 * out_h as f32);

        // Inverse-map each destination pixel into the source.
        Pixmap::from_fn(out_w, out_h, |x, y| {
            let relative = Point::new(x as f32 + 0.5, y as f32 + 0.5) - dst_center;
            let source = relative.rotated(-angle) + src_center;
            self.color_at(source).unwrap_or(Color::CLEAR)
        })
    }

    /// Returns a copy with the corners clipped to the given radius.
    ///
    /// The radius is clamped to half the smaller dimension.
    pub fn rounded(&self, corner_radius: f32) -> Pixmap {
        let radius = corner_radius.clamp(0.0, self.size().max_corner_radius());
        if radius <= 0.0 {
            return self.clone();
        }

        let w = self.width() as f32;
        let h = self.height() as f32;
        let mut result = self.clone();

        for y in 0..self.height() {
            for x in 0..self.width() {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                let cx = if px < radius {
                    radius
                } else if px > w - radius {
                    w - radius
                } else {
                    continue;
                };
                let cy = if py < radius {
                    radius
                } else if py > h - radius {
                    h - radius
                } else {
                    continue;
                };

                let distance = Point::new(px - cx, py - cy).distance_to_origin();
                if distance > radius {
                    let mut color = result.pixel(x, y).unwrap_or(Color::CLEAR);
                    color.a = 0.0;
                    result.set_pixel(x, y, color);
                }
            }
        }

        result
    }

    /// Returns a copy resampled to the given dimensions, or an unchanged
    /// copy when the dimensions already match.
    pub fn scaled_to(&self, width: u32, height: u32) -> Pixmap {
        if (width, height) == self.dimensions() {
            return self.clone();
        }

        let resized = image::imageops::resize(&self.to_rgba_image(), width, height, FilterType::Triangle);
        Pixmap::from_rgba_image(resized)
    }

    /// Returns a copy of the given region, or `None` when the region does
    /// not intersect the pixmap.
    pub fn sub_pixmap(&self, region: Rect) -> Option<Pixmap> {
        let bounds = Rect::new(0.0, 0.0, self.width() as f32, self.height() as f32);
        let clipped = region.intersection(bounds)?;

        let x0 = clipped.min_x().floor() as u32;
        let y0 = clipped.min_y().floor() as u32;
        let w = (clipped.size.width.ceil() as u32).max(1);
        let h = (clipped.size.height.ceil() as u32).max(1);

        let mut result = Pixmap::new(w, h);
        for y in 0..h {
            for x in 0..w {
                if let Some(color) = self.pixel(x0 + x, y0 + y) {
                    result.set_pixel(x, y, color);
                }
            }
        }
        Some(result)
    }

    /// Draws another pixmap over the receiver with its top-left corner at
    /// the given position, using source-over blending.
    pub fn draw_pixmap(&mut self, other: &Pixmap, at: Point) {
        let ox = at.x.floor() as i64;
        let oy = at.y.floor() as i64;

        for y in 0..other.height() {
            for x in 0..other.width() {
                let tx = ox + i64::from(x);
                let ty = oy + i64::from(y);
                if tx < 0 || ty < 0 {
                    continue;
                }

                let (tx, ty) = (tx as u32, ty as u32);
                let Some(fg) = other.pixel(x, y) else { continue };
                let Some(bg) = self.pixel(tx, ty) else { continue };
                self.set_pixel(tx, ty, fg.blend_over(bg));
            }
        }
    }

    /// Clears the given region to transparent.
    pub fn clear_region(&mut self, region: Rect) {
        let Some(clipped) =
            region.intersection(Rect::new(0.0, 0.0, self.width() as f32, self.height() as f32))
        else {
            return;
        };

        let x0 = clipped.min_x().floor() as u32;
        let y0 = clipped.min_y().floor() as u32;
        let x1 = clipped.max_x().ceil() as u32;
        let y1 = clipped.max_y().ceil() as u32;

        for y in y0..y1.min(self.height()) {
            for x in x0..x1.min(self.width()) {
                self.set_pixel(x, y, Color::CLEAR);
            }
        }
    }

    /// Combines images into one, each drawn at its own location over the
    /// background color.
    ///
    /// When `clear_locations` is set, each image's destination rect is
    /// cleared before the image is drawn, instead of blending with whatever
    /// is already there. Returns `None` for a degenerate result size.
    pub fn combined(
        placements: &[(Point, Pixmap)],
        width: u32,
        height: u32,
        background: Color,
        clear_locations: bool,
    ) -> Option<Pixmap> {
        if width == 0 || height == 0 {
            return None;
        }

        let mut result = Pixmap::filled(width, height, background);

        for (position, image) in placements {
            if clear_locations {
                result.clear_region(Rect::from_origin_size(*position, image.size()));
            }
            result.draw_pixmap(image, *position);
        }

        Some(result)
    }

    /// Combines images by stacking them vertically along a common left
    /// bound, over a transparent background.
    pub fn combined_vertically(images: &[Pixmap]) -> Option<Pixmap> {
        let mut placements = Vec::with_capacity(images.len());
        let mut offset = 0.0_f32;
        let mut max_width = 0_u32;

        for image in images {
            placements.push((Point::new(0.0, offset), image.clone()));
            offset += image.height() as f32;
            max_width = max_width.max(image.width());
        }

        Self::combined(
            &placements,
            max_width,
            offset.round() as u32,
            Color::CLEAR,
            false,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirrored() {
        let mut source = Pixmap::filled(3, 1, Color::BLACK);
        source.set_pixel(0, 0, Color::WHITE);

        let mirrored = source.mirrored();
        assert_eq!(mirrored.pixel(2, 0), Some(Color::WHITE));
        assert_eq!(mirrored.pixel(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn test_negative() {
        let source = Pixmap::filled(2, 2, Color::from_rgba_u8(255, 0, 128, 200));
        let negative = source.negative();
        assert_eq!(
            negative.pixel(0, 0).unwrap().to_rgba_u8(),
            [0, 255, 127, 200]
        );
    }

    #[test]
    fn test_inverted_mask() {
        let source = Pixmap::filled(2, 2, Color::rgba(1.0, 1.0, 1.0, 1.0));
        let inverted = source.inverted_mask();
        assert_eq!(inverted.pixel(0, 0).unwrap().to_rgba_u8(), [255, 255, 255, 0]);
    }

    #[test]
    fn test_rotation_by_90_degrees_swaps_dimensions() {
        let source = Pixmap::filled(4, 2, Color::WHITE);
        let rotated = source.rotated(90.0);
        assert_eq!(rotated.dimensions(), (2, 4));
    }

    #[test]
    fn test_rotation_by_360_degrees_preserves_content() {
        let source = Pixmap::from_fn(4, 4, |x, y| {
            if x == 1 && y == 2 {
                Color::WHITE
            } else {
                Color::BLACK
            }
        });

        let rotated = source.rotated(360.0);
        assert_eq!(rotated.dimensions(), (4, 4));
        assert_eq!(rotated.pixel(1, 2), Some(Color::WHITE));
        assert_eq!(rotated.pixel(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn test_rounded_clears_corners_keeps_center() {
        let source = Pixmap::filled(10, 10, Color::WHITE);
        let rounded = source.rounded(4.0);

        assert_eq!(rounded.pixel(0, 0).unwrap().a, 0.0);
        assert_eq!(rounded.pixel(9, 0).unwrap().a, 0.0);
        assert_eq!(rounded.pixel(9, 9).unwrap().a, 0.0);
        assert_eq!(rounded.pixel(5, 5), Some(Color::WHITE));
        // Edge midpoints stay inside the rounded outline.
        assert_eq!(rounded.pixel(5, 0), Some(Color::WHITE));
    }

    #[test]
    fn test_rounded_radius_is_clamped() {
        let source = Pixmap::filled(4, 4, Color::WHITE);
        let rounded = source.rounded(100.0);
        assert_eq!(rounded.pixel(2, 2), Some(Color::WHITE));
    }

    #[test]
    fn test_scaled_to_same_size_is_copy() {
        let source = Pixmap::filled(4, 4, Color::WHITE);
        assert_eq!(source.scaled_to(4, 4), source);
    }

    #[test]
    fn test_scaled_to_resamples() {
        let source = Pixmap::filled(4, 4, Color::rgb(0.0, 1.0, 0.0));
        let scaled = source.scaled_to(8, 2);
        assert_eq!(scaled.dimensions(), (8, 2));
        assert_eq!(scaled.pixel(4, 1), Some(Color::rgb(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_sub_pixmap() {
        let source = Pixmap::from_fn(4, 4, |x, y| {
            if x == 2 && y == 1 {
                Color::WHITE
            } else {
                Color::BLACK
            }
        });

        let sub = source.sub_pixmap(Rect::new(2.0, 1.0, 1.0, 1.0)).unwrap();
        assert_eq!(sub.dimensions(), (1, 1));
        assert_eq!(sub.pixel(0, 0), Some(Color::WHITE));

        assert!(source.sub_pixmap(Rect::new(10.0, 10.0, 2.0, 2.0)).is_none());
    }

    #[test]
    fn test_combined_vertically() {
        let top = Pixmap::filled(2, 1, Color::WHITE);
        let bottom = Pixmap::filled(4, 2, Color::BLACK);

        let combined = Pixmap::combined_vertically(&[top, bottom]).unwrap();

        assert_eq!(combined.dimensions(), (4, 3));
        assert_eq!(combined.pixel(0, 0), Some(Color::WHITE));
        // Area right of the narrow image stays transparent.
        assert_eq!(combined.pixel(3, 0), Some(Color::CLEAR));
        assert_eq!(combined.pixel(3, 2), Some(Color::BLACK));
    }

    #[test]
    fn test_combined_with_background_and_clearing() {
        let sprite = Pixmap::filled(1, 1, Color::rgba(0.0, 0.0, 0.0, 0.0));

        let combined = Pixmap::combined(
            &[(Point::new(1.0, 1.0), sprite)],
            3,
            3,
            Color::WHITE,
            true,
        )
        .unwrap();

        // The cleared location shows through as transparent.
        assert_eq!(combined.pixel(1, 1), Some(Color::CLEAR));
        assert_eq!(combined.pixel(0, 0), Some(Color::WHITE));

        assert!(Pixmap::combined(&[], 0, 3, Color::WHITE, false).is_none());
    }
}
