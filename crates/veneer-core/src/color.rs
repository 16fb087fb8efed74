//! RGBA color representation and conversion.
//!
//! Colors carry normalized `f32` components in the range 0.0 to 1.0. The
//! module supports hex parsing (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`),
//! component-slice construction, interpolation and the tint constants used
//! by the image blur effects.
//!
//! # Examples
//!
//! ```
//! use veneer_core::color::Color;
//!
//! let red = Color::from_hex("#FF0000").unwrap();
//! assert_eq!(red, Color::rgb(1.0, 0.0, 0.0));
//!
//! // The 3-digit short form expands per component.
//! assert_eq!(Color::from_hex("F00").unwrap(), red);
//!
//! let mid = Color::lerp(Color::BLACK, Color::WHITE, 0.5);
//! assert_eq!(mid.components(), [0.5, 0.5, 0.5, 1.0]);
//! ```

use std::fmt;

use crate::error::ColorParseError;
use crate::num::lerp;

/// An RGBA color with normalized `f32` components in the range 0.0 to 1.0.
#[derive(Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0.0 - 1.0).
    pub r: f32,
    /// Green component (0.0 - 1.0).
    pub g: f32,
    /// Blue component (0.0 - 1.0).
    pub b: f32,
    /// Alpha component (0.0 = transparent, 1.0 = opaque).
    pub a: f32,
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 1.0 {
            write!(f, "Color::rgb({:.3}, {:.3}, {:.3})", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "Color::rgba({:.3}, {:.3}, {:.3}, {:.3})",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::CLEAR
    }
}

// ============================================================================
// Constants
// ============================================================================

impl Color {
    /// Fully transparent color (alpha = 0).
    pub const CLEAR: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Tint color matching the native "light" blur style.
    pub const LIGHT_BLUR_TINT: Self = Self::white(1.0, 0.3);

    /// Tint color matching the native "extra light" blur style.
    pub const EXTRA_LIGHT_BLUR_TINT: Self = Self::white(0.97, 0.82);

    /// Tint color matching the native "dark" blur style.
    pub const DARK_BLUR_TINT: Self = Self::white(0.11, 0.73);
}

// ============================================================================
// Constructors
// ============================================================================

impl Color {
    /// Creates a color from normalized RGBA components.
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from normalized RGB components.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a grayscale color with the given luminance and alpha.
    #[inline]
    pub const fn white(luminance: f32, alpha: f32) -> Self {
        Self::rgba(luminance, luminance, luminance, alpha)
    }

    /// Creates a color from u8 RGBA components (0-255).
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        const INV_255: f32 = 1.0 / 255.0;
        Self {
            r: r as f32 * INV_255,
            g: g as f32 * INV_255,
            b: b as f32 * INV_255,
            a: a as f32 * INV_255,
        }
    }

    /// Creates a color from a component slice.
    ///
    /// Accepts 2 components (luminance, alpha), 3 (RGB, opaque) or
    /// 4 (RGBA); any other count is an error.
    pub fn from_components(components: &[f32]) -> Result<Self, ColorParseError> {
        match *components {
            [luminance, alpha] => Ok(Self::white(luminance, alpha)),
            [r, g, b] => Ok(Self::rgb(r, g, b)),
            [r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
            _ => Err(ColorParseError::InvalidComponentCount(components.len())),
        }
    }
}

// ============================================================================
// Hex parsing and formatting
// ============================================================================

impl Color {
    /// Parses a color from a hex string.
    ///
    /// Supported forms, with an optional `#` prefix and in either case:
    /// - `RGB` (each digit doubled)
    /// - `RGBA`
    /// - `RRGGBB`
    /// - `RRGGBBAA`
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }

        let digits: Vec<u8> = hex
            .bytes()
            .map(|b| match b {
                b'0'..=b'9' => Ok(b - b'0'),
                b'a'..=b'f' => Ok(b - b'a' + 10),
                b'A'..=b'F' => Ok(b - b'A' + 10),
                _ => Err(ColorParseError::InvalidHexDigit(b as char)),
            })
            .collect::<Result<_, _>>()?;

        let components: Vec<u8> = match digits.len() {
            // Short forms: each digit expands to a doubled pair.
            3 | 4 => digits.iter().map(|d| d * 16 + d).collect(),
            6 | 8 => digits.chunks(2).map(|pair| pair[0] * 16 + pair[1]).collect(),
            len => return Err(ColorParseError::InvalidLength(len)),
        };

        let a = components.get(3).copied().unwrap_or(255);
        Ok(Self::from_rgba_u8(components[0], components[1], components[2], a))
    }

    /// Formats the color as `#RRGGBB`, or `#RRGGBBAA` when not opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba_u8();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

// ============================================================================
// Component access and manipulation
// ============================================================================

impl Color {
    /// Returns the components as `[r, g, b, a]`.
    #[inline]
    pub const fn components(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns the components quantized to u8, clamped to the valid range.
    #[inline]
    pub fn to_rgba_u8(&self) -> [u8; 4] {
        let quantize = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }

    /// Returns a copy with the given alpha.
    #[inline]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a: alpha,
        }
    }

    /// Returns whether the color is fully opaque.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Linearly interpolates between two colors, component-wise.
    #[inline]
    pub fn lerp(start: Self, finish: Self, progress: f32) -> Self {
        Self {
            r: lerp(start.r, finish.r, progress),
            g: lerp(start.g, finish.g, progress),
            b: lerp(start.b, finish.b, progress),
            a: lerp(start.a, finish.a, progress),
        }
    }

    /// Blends this color over a background using standard source-over alpha
    /// compositing.
    pub fn blend_over(self, background: Self) -> Self {
        if self.a >= 1.0 {
            return self;
        }
        if self.a <= 0.0 {
            return background;
        }

        let out_a = self.a + background.a * (1.0 - self.a);
        if out_a <= 0.0 {
            return Self::CLEAR;
        }

        Self {
            r: (self.r * self.a + background.r * background.a * (1.0 - self.a)) / out_a,
            g: (self.g * self.a + background.g * background.a * (1.0 - self.a)) / out_a,
            b: (self.b * self.a + background.b * background.a * (1.0 - self.a)) / out_a,
            a: out_a,
        }
    }
}

impl From<(f32, f32, f32)> for Color {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(f32, f32, f32, f32)> for Color {
    fn from((r, g, b, a): (f32, f32, f32, f32)) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::from_rgba_u8(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod hex_tests {
        use super::*;

        #[test]
        fn test_from_hex_6digit() {
            let c = Color::from_hex("#FF0000").unwrap();
            assert_eq!(c.components(), [1.0, 0.0, 0.0, 1.0]);
        }

        #[test]
        fn test_from_hex_short_form_matches_long_form() {
            assert_eq!(
                Color::from_hex("F00").unwrap(),
                Color::from_hex("#FF0000").unwrap()
            );
            assert_eq!(
                Color::from_hex("#1a2").unwrap(),
                Color::from_hex("11AA22").unwrap()
            );
        }

        #[test]
        fn test_from_hex_with_alpha() {
            let c = Color::from_hex("#FF000080").unwrap();
            assert_eq!(c.to_rgba_u8(), [255, 0, 0, 128]);

            let short = Color::from_hex("F008").unwrap();
            assert_eq!(short.to_rgba_u8(), [255, 0, 0, 136]);
        }

        #[test]
        fn test_from_hex_lowercase_and_no_prefix() {
            assert_eq!(
                Color::from_hex("ff8000").unwrap().to_rgba_u8(),
                [255, 128, 0, 255]
            );
        }

        #[test]
        fn test_from_hex_rejects_bad_length() {
            assert!(matches!(
                Color::from_hex("#12345"),
                Err(ColorParseError::InvalidLength(5))
            ));
            assert!(matches!(
                Color::from_hex(""),
                Err(ColorParseError::EmptyInput)
            ));
        }

        #[test]
        fn test_from_hex_rejects_bad_digit() {
            assert!(matches!(
                Color::from_hex("#GG0000"),
                Err(ColorParseError::InvalidHexDigit('G'))
            ));
        }

        #[test]
        fn test_to_hex_round_trip() {
            assert_eq!(Color::rgb(1.0, 0.0, 0.0).to_hex(), "#FF0000");
            assert_eq!(Color::from_rgba_u8(255, 0, 0, 128).to_hex(), "#FF000080");

            let original = Color::from_hex("#12345678").unwrap();
            assert_eq!(Color::from_hex(&original.to_hex()).unwrap(), original);
        }
    }

    mod component_tests {
        use super::*;

        #[test]
        fn test_from_components() {
            assert_eq!(
                Color::from_components(&[0.5, 0.8]).unwrap(),
                Color::white(0.5, 0.8)
            );
            assert_eq!(
                Color::from_components(&[0.1, 0.2, 0.3]).unwrap(),
                Color::rgb(0.1, 0.2, 0.3)
            );
            assert_eq!(
                Color::from_components(&[0.1, 0.2, 0.3, 0.4]).unwrap(),
                Color::rgba(0.1, 0.2, 0.3, 0.4)
            );
            assert!(matches!(
                Color::from_components(&[0.1]),
                Err(ColorParseError::InvalidComponentCount(1))
            ));
        }

        #[test]
        fn test_quantization_clamps() {
            let c = Color::rgba(1.5, -0.2, 0.5, 2.0);
            assert_eq!(c.to_rgba_u8(), [255, 0, 128, 255]);
        }

        #[test]
        fn test_with_alpha() {
            let c = Color::BLACK.with_alpha(0.25);
            assert_eq!(c.a, 0.25);
            assert!(!c.is_opaque());
            assert!(Color::BLACK.is_opaque());
        }
    }

    mod lerp_tests {
        use super::*;

        #[test]
        fn test_lerp_midpoint() {
            let mid = Color::lerp(Color::BLACK, Color::WHITE, 0.5);
            assert_eq!(mid.components(), [0.5, 0.5, 0.5, 1.0]);
        }

        #[test]
        fn test_lerp_endpoints() {
            let start = Color::rgba(0.1, 0.2, 0.3, 0.4);
            let finish = Color::rgba(0.9, 0.8, 0.7, 0.6);
            assert_eq!(Color::lerp(start, finish, 0.0), start);
            assert_eq!(Color::lerp(start, finish, 1.0), finish);
        }
    }

    mod blend_tests {
        use super::*;

        #[test]
        fn test_blend_over_opaque_foreground() {
            let red = Color::rgb(1.0, 0.0, 0.0);
            assert_eq!(red.blend_over(Color::WHITE), red);
        }

        #[test]
        fn test_blend_over_transparent_foreground() {
            assert_eq!(Color::CLEAR.blend_over(Color::WHITE), Color::WHITE);
        }

        #[test]
        fn test_blend_over_half_alpha() {
            let overlay = Color::rgba(1.0, 0.0, 0.0, 0.5);
            let blended = overlay.blend_over(Color::WHITE);
            assert!((blended.r - 1.0).abs() < 1e-5);
            assert!((blended.g - 0.5).abs() < 1e-5);
            assert!((blended.b - 0.5).abs() < 1e-5);
            assert!((blended.a - 1.0).abs() < 1e-5);
        }
    }
}
