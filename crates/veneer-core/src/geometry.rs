//! Geometry types for UI layout and positioning.
//!
//! This module provides the continuous-coordinate geometry primitives used
//! throughout veneer:
//! - [`Point`]: a 2D point with `f32` coordinates
//! - [`Size`]: a 2D size with `f32` dimensions
//! - [`Rect`]: a rectangle combining an origin point and a size
//! - [`EdgeInsets`]: per-edge insets for padding and margins
//!
//! All types are `Copy` value types. Coordinates grow rightward (x) and
//! downward (y), with (0, 0) at the top-left corner.

use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::num::lerp;

/// A 2D point with `f32` coordinates.
///
/// # Examples
///
/// ```
/// use veneer_core::geometry::Point;
///
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// assert_eq!(p1 + p2, Point::new(15.0, 25.0));
/// assert_eq!(p1 - p2, Point::new(5.0, 15.0));
/// assert_eq!(p1.dot(p2), 150.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// The x coordinate.
    pub x: f32,
    /// The y coordinate.
    pub y: f32,
}

impl Point {
    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new point at the given coordinates.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the point with both coordinates rounded up.
    #[inline]
    pub fn ceiled(self) -> Self {
        Self {
            x: self.x.ceil(),
            y: self.y.ceil(),
        }
    }

    /// Returns the point with both coordinates rounded down.
    #[inline]
    pub fn floored(self) -> Self {
        Self {
            x: self.x.floor(),
            y: self.y.floor(),
        }
    }

    /// Returns the distance from this point to the origin.
    #[inline]
    pub fn distance_to_origin(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Returns the angle between the vector (origin → self) and the positive
    /// X axis, in radians within `[0, 2π)`.
    ///
    /// # Panics
    ///
    /// Panics when called on the zero vector or on a point with a NaN
    /// coordinate; the angle is undefined there and asking for it is a
    /// programmer error.
    pub fn angle(self) -> f32 {
        assert!(
            self.x.is_finite() && self.y.is_finite() && self != Self::ZERO,
            "the angle of ({}, {}) is undefined",
            self.x,
            self.y
        );

        let angle = self.y.atan2(self.x);
        if angle < 0.0 {
            angle + 2.0 * std::f32::consts::PI
        } else {
            angle
        }
    }

    /// Returns the point rotated by the given angle (radians) around the
    /// origin.
    ///
    /// Rotating by θ1 and then θ2 is equivalent to a single rotation by
    /// θ1 + θ2 (within floating-point tolerance).
    #[inline]
    pub fn rotated(self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            x: self.x * c - self.y * s,
            y: self.y * c + self.x * s,
        }
    }

    /// Returns the sum of this point and another.
    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Returns this point minus another.
    #[inline]
    pub fn subtract(self, other: Self) -> Self {
        self.add(other.scaled(-1.0))
    }

    /// Returns the point with both coordinates multiplied by `factor`.
    #[inline]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns the dot product of two points treated as vectors.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the point reinterpreted as a size.
    #[inline]
    pub const fn to_size(self) -> Size {
        Size {
            width: self.x,
            height: self.y,
        }
    }

    /// Returns the coordinates as a two-element array.
    #[inline]
    pub const fn as_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Point::add(self, rhs)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Point {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        self.scaled(rhs)
    }
}

impl Mul<Point> for f32 {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: Point) -> Self::Output {
        rhs.scaled(self)
    }
}

impl From<(f32, f32)> for Point {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f32, f32) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// A 2D size with `f32` dimensions.
///
/// # Examples
///
/// ```
/// use veneer_core::geometry::Size;
///
/// let size = Size::new(30.0, 20.0);
/// assert_eq!(size.area(), 600.0);
/// assert!(size.fits_into(Size::new(40.0, 20.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// The width.
    pub width: f32,
    /// The height.
    pub height: f32,
}

impl Size {
    /// A zero-sized area.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Minimal image size in pixels accepted by Instagram uploads.
    pub const MIN_INSTAGRAM_PIXELS: Self = Self {
        width: 612.0,
        height: 612.0,
    };

    /// Creates a new size with the given dimensions.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a square size with equal width and height.
    #[inline]
    pub const fn square(dimension: f32) -> Self {
        Self {
            width: dimension,
            height: dimension,
        }
    }

    /// Returns the area (width × height).
    #[inline]
    pub fn area(self) -> f32 {
        self.width * self.height
    }

    /// Returns whether width and height are equal.
    #[inline]
    pub fn is_square(self) -> bool {
        self.width == self.height
    }

    /// Returns the size with both dimensions rounded up.
    #[inline]
    pub fn ceiled(self) -> Self {
        Self {
            width: self.width.ceil(),
            height: self.height.ceil(),
        }
    }

    /// Returns the size with both dimensions rounded down.
    #[inline]
    pub fn floored(self) -> Self {
        Self {
            width: self.width.floor(),
            height: self.height.floor(),
        }
    }

    /// Returns the maximal corner radius a rounded rect of this size can
    /// carry: half the smaller dimension.
    #[inline]
    pub fn max_corner_radius(self) -> f32 {
        0.5 * self.width.min(self.height)
    }

    /// Returns whether the receiver fully fits into `other`.
    #[inline]
    pub fn fits_into(self, other: Self) -> bool {
        self.width <= other.width && self.height <= other.height
    }

    /// Fits the receiver to the given bounds.
    ///
    /// When `preserve_proportions` is true the size is uniformly scaled by
    /// the smallest of the per-axis ratios (never upscaled); otherwise each
    /// dimension is clamped independently.
    pub fn fit_to(self, bounds: Self, preserve_proportions: bool) -> Self {
        if preserve_proportions {
            let scale = (bounds.width / self.width)
                .min(bounds.height / self.height)
                .min(1.0);
            scale * self
        } else {
            Self {
                width: self.width.min(bounds.width),
                height: self.height.min(bounds.height),
            }
        }
    }

    /// Linearly interpolates a size between `start` and `finish`.
    #[inline]
    pub fn lerp(start: Self, finish: Self, progress: f32) -> Self {
        Self {
            width: lerp(start.width, finish.width, progress),
            height: lerp(start.height, finish.height, progress),
        }
    }

    /// Returns the size reinterpreted as a point.
    #[inline]
    pub const fn to_point(self) -> Point {
        Point {
            x: self.width,
            y: self.height,
        }
    }

    /// Returns the dimensions as a two-element array.
    #[inline]
    pub const fn as_array(self) -> [f32; 2] {
        [self.width, self.height]
    }
}

impl Add for Size {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            width: self.width + rhs.width,
            height: self.height + rhs.height,
        }
    }
}

impl Sub for Size {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            width: self.width - rhs.width,
            height: self.height - rhs.height,
        }
    }
}

impl Mul<f32> for Size {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            width: self.width * rhs,
            height: self.height * rhs,
        }
    }
}

impl Mul<Size> for f32 {
    type Output = Size;

    #[inline]
    fn mul(self, rhs: Size) -> Self::Output {
        rhs * self
    }
}

impl From<(f32, f32)> for Size {
    #[inline]
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}

/// A rectangle defined by an origin (top-left corner) and a size.
///
/// # Examples
///
/// ```
/// use veneer_core::geometry::{Point, Rect};
///
/// let rect = Rect::new(10.0, 20.0, 80.0, 40.0);
/// assert_eq!(rect.center(), Point::new(50.0, 40.0));
/// assert!(rect.contains(Point::new(50.0, 30.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// The top-left corner.
    pub origin: Point,
    /// The extent of the rectangle.
    pub size: Size,
}

impl Rect {
    /// A zero-sized rectangle at the origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Creates a new rectangle from coordinates and dimensions.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Creates a rectangle from an origin point and a size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::ZERO,
            size,
        }
    }

    /// Returns the rect with floored origin and ceiled size.
    ///
    /// Together with [`floored`](Self::floored) this guarantees integer
    /// components that still cover the original area; both operations are
    /// idempotent on rects that already have integer components.
    #[inline]
    pub fn ceiled(self) -> Self {
        Self {
            origin: self.origin.floored(),
            size: self.size.ceiled(),
        }
    }

    /// Returns the rect with ceiled origin and floored size.
    #[inline]
    pub fn floored(self) -> Self {
        Self {
            origin: self.origin.ceiled(),
            size: self.size.floored(),
        }
    }

    /// Returns the smallest x coordinate.
    #[inline]
    pub fn min_x(self) -> f32 {
        self.origin.x
    }

    /// Returns the x coordinate of the horizontal center.
    #[inline]
    pub fn mid_x(self) -> f32 {
        self.origin.x + 0.5 * self.size.width
    }

    /// Returns the largest x coordinate.
    #[inline]
    pub fn max_x(self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Returns the smallest y coordinate.
    #[inline]
    pub fn min_y(self) -> f32 {
        self.origin.y
    }

    /// Returns the y coordinate of the vertical center.
    #[inline]
    pub fn mid_y(self) -> f32 {
        self.origin.y + 0.5 * self.size.height
    }

    /// Returns the largest y coordinate.
    #[inline]
    pub fn max_y(self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Returns the center point.
    #[inline]
    pub fn center(self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Returns the center of the top edge.
    #[inline]
    pub fn top_center(self) -> Point {
        Point::new(self.mid_x(), self.min_y())
    }

    /// Returns the center of the bottom edge.
    #[inline]
    pub fn bottom_center(self) -> Point {
        Point::new(self.mid_x(), self.max_y())
    }

    /// Returns the center of the left edge.
    #[inline]
    pub fn left_center(self) -> Point {
        Point::new(self.min_x(), self.mid_y())
    }

    /// Returns the center of the right edge.
    #[inline]
    pub fn right_center(self) -> Point {
        Point::new(self.max_x(), self.mid_y())
    }

    /// Returns the top-left corner.
    #[inline]
    pub fn top_left(self) -> Point {
        Point::new(self.min_x(), self.min_y())
    }

    /// Returns the top-right corner.
    #[inline]
    pub fn top_right(self) -> Point {
        Point::new(self.max_x(), self.min_y())
    }

    /// Returns the bottom-left corner.
    #[inline]
    pub fn bottom_left(self) -> Point {
        Point::new(self.min_x(), self.max_y())
    }

    /// Returns the bottom-right corner.
    #[inline]
    pub fn bottom_right(self) -> Point {
        Point::new(self.max_x(), self.max_y())
    }

    /// Returns a copy with every NaN component replaced by 0.0.
    pub fn without_nans(self) -> Self {
        let scrub = |v: f32| if v.is_nan() { 0.0 } else { v };
        Self::new(
            scrub(self.origin.x),
            scrub(self.origin.y),
            scrub(self.size.width),
            scrub(self.size.height),
        )
    }

    /// Returns whether the rectangle has zero (or negative) area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    /// Returns whether the rectangle contains the given point.
    ///
    /// The minimum edges are inclusive, the maximum edges exclusive.
    #[inline]
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    /// Returns whether this rectangle overlaps another with positive area.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }

    /// Returns the overlapping region of two rectangles, or `None` when they
    /// do not intersect.
    pub fn intersection(self, other: Self) -> Option<Self> {
        let x = self.min_x().max(other.min_x());
        let y = self.min_y().max(other.min_y());
        let max_x = self.max_x().min(other.max_x());
        let max_y = self.max_y().min(other.max_y());

        if x < max_x && y < max_y {
            Some(Self::new(x, y, max_x - x, max_y - y))
        } else {
            None
        }
    }

    /// Returns the receiver clipped to the given rect, or [`Rect::ZERO`]
    /// when the two do not intersect.
    #[inline]
    pub fn clipped_to(self, other: Self) -> Self {
        self.intersection(other).unwrap_or(Self::ZERO)
    }

    /// Returns a copy with the size grown by `delta` and the same origin.
    #[inline]
    pub fn resized_by(self, delta: Size) -> Self {
        Self {
            origin: self.origin,
            size: self.size + delta,
        }
    }

    /// Returns a copy with origin and size both multiplied by the factor.
    #[inline]
    pub fn scaled_by(self, factor: f32) -> Self {
        Self {
            origin: self.origin * factor,
            size: self.size * factor,
        }
    }

    /// Returns a copy moved by the given offset.
    #[inline]
    pub fn moved_by(self, offset: Point) -> Self {
        Self {
            origin: self.origin + offset,
            size: self.size,
        }
    }

    /// Returns a copy shrunk inward by the given insets.
    ///
    /// Dimensions are clamped at zero when the insets exceed the size.
    pub fn inset_by(self, insets: EdgeInsets) -> Self {
        Self::new(
            self.origin.x + insets.left,
            self.origin.y + insets.top,
            (self.size.width - insets.horizontal()).max(0.0),
            (self.size.height - insets.vertical()).max(0.0),
        )
    }
}

impl From<(f32, f32, f32, f32)> for Rect {
    #[inline]
    fn from((x, y, width, height): (f32, f32, f32, f32)) -> Self {
        Self::new(x, y, width, height)
    }
}

impl From<Size> for Rect {
    #[inline]
    fn from(size: Size) -> Self {
        Self::from_size(size)
    }
}

/// Per-edge insets for padding, margins and borders.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    /// Inset from the top edge.
    pub top: f32,
    /// Inset from the left edge.
    pub left: f32,
    /// Inset from the bottom edge.
    pub bottom: f32,
    /// Inset from the right edge.
    pub right: f32,
}

impl EdgeInsets {
    /// Zero insets on every edge.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Creates insets from the four edges.
    #[inline]
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Creates the same inset on all four edges.
    #[inline]
    pub const fn uniform(inset: f32) -> Self {
        Self {
            top: inset,
            left: inset,
            bottom: inset,
            right: inset,
        }
    }

    /// Returns the insets with left and right swapped, for mirrored layout
    /// directions.
    #[inline]
    pub const fn mirrored(self) -> Self {
        Self {
            top: self.top,
            left: self.right,
            bottom: self.bottom,
            right: self.left,
        }
    }

    /// Returns the combined horizontal inset.
    #[inline]
    pub fn horizontal(self) -> f32 {
        self.left + self.right
    }

    /// Returns the combined vertical inset.
    #[inline]
    pub fn vertical(self) -> f32 {
        self.top + self.bottom
    }
}
