//! Rendering a view tree into a pixmap.

use veneer_core::color::Color;
use veneer_core::geometry::{Point, Rect};
use veneer_image::Pixmap;

use crate::view::View;

impl View {
    /// Renders the subtree into a new pixmap at the given display scale.
    ///
    /// Backgrounds, uniform and per-edge borders and subviews are drawn in
    /// hierarchy order; hidden views are skipped. Returns `None` when the
    /// scaled size is below one pixel in either dimension or the scale is
    /// not positive.
    pub fn screenshot(&self, scale: f32) -> Option<Pixmap> {
        if scale <= 0.0 {
            return None;
        }

        let size = (self.frame.size * scale).ceiled();
        if size.width < 1.0 || size.height < 1.0 {
            return None;
        }

        let mut pixmap = Pixmap::new(size.width as u32, size.height as u32);
        self.render_into(&mut pixmap, Point::ZERO, scale);

        if self.corner_radius > 0.0 {
            pixmap = pixmap.rounded(self.corner_radius * scale);
        }

        Some(pixmap)
    }

    /// Returns the rendered color at a point in local coordinates, or
    /// `None` when the point lies outside the bounds.
    pub fn color_at(&self, point: Point) -> Option<Color> {
        if !self.contains(point) {
            return None;
        }
        self.screenshot(1.0)?.color_at(point)
    }

    /// Draws the receiver and its subtree with the top-left corner at
    /// `origin` (in unscaled root coordinates).
    fn render_into(&self, pixmap: &mut Pixmap, origin: Point, scale: f32) {
        if self.hidden {
            return;
        }

        let local = Rect::from_origin_size(origin, self.frame.size);

        if let Some(background) = self.background {
            fill_rounded_rect(
                pixmap,
                local.scaled_by(scale),
                background,
                self.corner_radius * scale,
            );
        }

        if self.border_width > 0.0 {
            if let Some(color) = self.border_color {
                let width = self.frame.size.width;
                let height = self.frame.size.height;
                let thickness = self.border_width;

                let edges = [
                    Rect::new(0.0, 0.0, width, thickness),
                    Rect::new(0.0, height - thickness, width, thickness),
                    Rect::new(0.0, 0.0, thickness, height),
                    Rect::new(width - thickness, 0.0, thickness, height),
                ];
                for edge in edges {
                    fill_rounded_rect(pixmap, edge.moved_by(origin).scaled_by(scale), color, 0.0);
                }
            }
        }

        for border in self.edge_borders().iter().flatten() {
            if let Some(color) = border.color {
                fill_rounded_rect(
                    pixmap,
                    border.frame.moved_by(origin).scaled_by(scale),
                    color,
                    0.0,
                );
            }
        }

        for child in &self.subviews {
            child.render_into(pixmap, origin + child.frame.origin, scale);
        }
    }
}

/// Fills a rect (in pixmap coordinates) with a color, optionally clipping
/// the corners to the given radius.
fn fill_rounded_rect(pixmap: &mut Pixmap, rect: Rect, color: Color, corner_radius: f32) {
    let bounds = Rect::new(0.0, 0.0, pixmap.width() as f32, pixmap.height() as f32);
    let Some(clipped) = rect.intersection(bounds) else {
        return;
    };

    let radius = corner_radius.clamp(0.0, rect.size.max_corner_radius());

    let x0 = clipped.min_x().floor() as u32;
    let y0 = clipped.min_y().floor() as u32;
    let x1 = (clipped.max_x().ceil() as u32).min(pixmap.width());
    let y1 = (clipped.max_y().ceil() as u32).min(pixmap.height());

    for y in y0..y1 {
        for x in x0..x1 {
            let center = Point::new(x as f32 + 0.5, y as f32 + 0.5);
            if !rect.contains(center) {
                continue;
            }

            if radius > 0.0 && outside_rounded_corner(rect, center, radius) {
                continue;
            }

            let bg = pixmap.pixel(x, y).unwrap_or(Color::CLEAR);
            pixmap.set_pixel(x, y, color.blend_over(bg));
        }
    }
}

/// Returns whether a point inside `rect` falls outside its rounded-corner
/// outline.
fn outside_rounded_corner(rect: Rect, point: Point, radius: f32) -> bool {
    let local = point - rect.origin;
    let w = rect.size.width;
    let h = rect.size.height;

    let cx = if local.x < radius {
        radius
    } else if local.x > w - radius {
        w - radius
    } else {
        return false;
    };
    let cy = if local.y < radius {
        radius
    } else if local.y > h - radius {
        h - radius
    } else {
        return false;
    };

    (local - Point::new(cx, cy)).distance_to_origin() > radius
}
