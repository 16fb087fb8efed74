//! Blur and tint effects.
//!
//! The pipeline approximates a Gaussian blur with three box-convolution
//! passes, optionally adjusts saturation with a 4×4 color matrix, and
//! composites the effect image back over the original through an optional
//! mask and tint. It is a single synchronous pass over the pixels; cost is
//! proportional to pixel count × the fixed number of convolution passes.

use tracing::warn;

use veneer_core::color::Color;

use crate::pixmap::{Pixmap, BYTES_PER_PIXEL};

/// Quantization divisor for the saturation matrix.
const MATRIX_DIVISOR: i32 = 256;

/// Parameters for [`Pixmap::blurred`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurParams {
    /// Blur radius in points; radii at or below machine epsilon skip the
    /// convolution entirely.
    pub radius: f32,

    /// Tint composited over the result, if any.
    pub tint: Option<Color>,

    /// Saturation delta factor; values within epsilon of 1.0 skip the
    /// color matrix pass.
    pub saturation_delta_factor: f32,

    /// Display scale converting the radius from points to pixels.
    pub scale: f32,
}

impl Default for BlurParams {
    fn default() -> Self {
        Self {
            radius: 0.0,
            tint: None,
            saturation_delta_factor: 1.0,
            scale: 1.0,
        }
    }
}

impl BlurParams {
    /// Parameters matching the native "light" blur style.
    pub fn light() -> Self {
        Self {
            radius: 20.0,
            tint: Some(Color::LIGHT_BLUR_TINT),
            saturation_delta_factor: 1.8,
            scale: 1.0,
        }
    }

    /// Parameters matching the native "extra light" blur style.
    pub fn extra_light() -> Self {
        Self {
            radius: 20.0,
            tint: Some(Color::EXTRA_LIGHT_BLUR_TINT),
            saturation_delta_factor: 1.8,
            scale: 1.0,
        }
    }

    /// Parameters matching the native "dark" blur style.
    pub fn dark() -> Self {
        Self {
            radius: 20.0,
            tint: Some(Color::DARK_BLUR_TINT),
            saturation_delta_factor: 1.8,
            scale: 1.0,
        }
    }

    /// Parameters for tinting with the given color: a short blur, full
    /// desaturation and the tint forced to 60% alpha.
    pub fn tinted(color: Color) -> Self {
        Self {
            radius: 10.0,
            tint: Some(color.with_alpha(0.6)),
            saturation_delta_factor: -1.0,
            scale: 1.0,
        }
    }

    /// Returns a copy with the given display scale.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

impl Pixmap {
    /// Returns a blurred and/or tinted derivative of the pixmap.
    ///
    /// When a mask is supplied, its alpha channel gates per pixel how much
    /// of the effect image replaces the original; the mask is sampled
    /// nearest-neighbor when its dimensions differ.
    ///
    /// Returns `None` when either dimension is below one pixel. A radius at
    /// or below epsilon together with a saturation factor within epsilon of
    /// 1.0 yields a flat copy composited with the optional tint.
    pub fn blurred(&self, params: &BlurParams, mask: Option<&Pixmap>) -> Option<Pixmap> {
        if self.width() < 1 || self.height() < 1 {
            warn!(
                width = self.width(),
                height = self.height(),
                "invalid pixmap size for blur"
            );
            return None;
        }

        let has_blur = params.radius > f32::EPSILON;
        let has_saturation_change = (params.saturation_delta_factor - 1.0).abs() > f32::EPSILON;

        let mut effect = None;
        if has_blur || has_saturation_change {
            let mut in_buffer = self.clone();
            let mut out_buffer = Pixmap::new(self.width(), self.height());

            if has_blur {
                let box_size = box_kernel_size(params.radius, params.scale);
                box_convolve(&in_buffer, &mut out_buffer, box_size);
                box_convolve(&out_buffer, &mut in_buffer, box_size);
                box_convolve(&in_buffer, &mut out_buffer, box_size);
            }

            // When both passes run, the matrix multiply reads the blurred
            // pixels from the out buffer and writes into the in buffer,
            // which avoids copying the blur result back.
            let mut buffers_swapped = false;
            if has_saturation_change {
                let matrix = saturation_matrix(params.saturation_delta_factor);
                if has_blur {
                    matrix_multiply(&out_buffer, &mut in_buffer, &matrix);
                    buffers_swapped = true;
                } else {
                    matrix_multiply(&in_buffer, &mut out_buffer, &matrix);
                }
            }

            effect = Some(if buffers_swapped { in_buffer } else { out_buffer });
        }

        let mut output = self.clone();

        // The effect image only participates when a blur ran.
        if has_blur {
            if let Some(effect) = &effect {
                output.draw_over(effect, mask);
            }
        }

        if let Some(tint) = params.tint {
            output.fill_over(tint);
        }

        Some(output)
    }

    /// Returns a copy blurred with the native "light" effect.
    pub fn light_effect(&self) -> Option<Pixmap> {
        self.blurred(&BlurParams::light(), None)
    }

    /// Returns a copy blurred with the native "extra light" effect.
    pub fn extra_light_effect(&self) -> Option<Pixmap> {
        self.blurred(&BlurParams::extra_light(), None)
    }

    /// Returns a copy blurred with the native "dark" effect.
    pub fn dark_effect(&self) -> Option<Pixmap> {
        self.blurred(&BlurParams::dark(), None)
    }

    /// Returns a desaturated copy tinted with the given color.
    pub fn tint_effect(&self, color: Color) -> Option<Pixmap> {
        self.blurred(&BlurParams::tinted(color), None)
    }

    /// Runs the box convolution a caller-chosen number of iterations and
    /// optionally composites a blend color on top.
    ///
    /// Returns an unchanged copy when the radius is non-positive or the
    /// pixmap has no area.
    pub fn box_blurred(
        &self,
        radius: f32,
        iterations: usize,
        blend_color: Option<Color>,
        scale: f32,
    ) -> Pixmap {
        if self.area() == 0 || radius <= 0.0 {
            return self.clone();
        }

        let mut box_size = (radius * scale) as u32;
        if box_size % 2 == 0 {
            box_size += 1;
        }

        let mut in_buffer = self.clone();
        let mut out_buffer = Pixmap::new(self.width(), self.height());

        for _ in 0..iterations {
            box_convolve(&in_buffer, &mut out_buffer, box_size);
            std::mem::swap(&mut in_buffer, &mut out_buffer);
        }

        if let Some(color) = blend_color {
            in_buffer.fill_over(color);
        }

        in_buffer
    }

    /// Composites `effect` over the receiver, gated by the optional mask.
    fn draw_over(&mut self, effect: &Pixmap, mask: Option<&Pixmap>) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let Some(mut fg) = effect.pixel(x, y) else {
                    continue;
                };

                if let Some(mask) = mask {
                    let coverage = mask_coverage(mask, x, y, self.dimensions());
                    if coverage <= 0.0 {
                        continue;
                    }
                    fg.a *= coverage;
                }

                let bg = self.pixel(x, y).unwrap_or(Color::CLEAR);
                self.set_pixel(x, y, fg.blend_over(bg));
            }
        }
    }

    /// Composites a solid color over every pixel.
    fn fill_over(&mut self, color: Color) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let bg = self.pixel(x, y).unwrap_or(Color::CLEAR);
                self.set_pixel(x, y, color.blend_over(bg));
            }
        }
    }
}

/// Samples the mask's alpha at the position corresponding to (x, y),
/// scaling nearest-neighbor when the dimensions differ.
fn mask_coverage(mask: &Pixmap, x: u32, y: u32, target: (u32, u32)) -> f32 {
    let (width, height) = target;
    let mx = (x as u64 * mask.width() as u64 / width.max(1) as u64) as u32;
    let my = (y as u64 * mask.height() as u64 / height.max(1) as u64) as u32;
    mask.pixel(mx, my).map_or(0.0, |c| c.a)
}

/// Derives the odd box-kernel size for a blur radius at a display scale.
///
/// A three-pass box blur of this size approximates a Gaussian with the
/// requested sigma; the kernel must be odd so the window stays centered.
fn box_kernel_size(radius: f32, scale: f32) -> u32 {
    let input_radius = f64::from(radius * scale);
    let d = input_radius * 3.0 * (2.0 * std::f64::consts::PI).sqrt() / 4.0 + 0.5;

    let mut size = d.floor() as u32;
    if size % 2 != 1 {
        size += 1;
    }
    size
}

/// One full box-convolution pass: a horizontal moving average followed by a
/// vertical one, with edge-extend addressing.
fn box_convolve(src: &Pixmap, dst: &mut Pixmap, box_size: u32) {
    debug_assert_eq!(src.dimensions(), dst.dimensions());
    debug_assert_eq!(box_size % 2, 1);

    let (width, height) = src.dimensions();
    let half = (box_size / 2) as i64;
    let window = i64::from(box_size);

    let mut intermediate = vec![0u8; src.data().len()];

    // Horizontal pass.
    for y in 0..height as i64 {
        for x in 0..width as i64 {
            let mut sums = [0i64; BYTES_PER_PIXEL];
            for dx in -half..=half {
                let sx = (x + dx).clamp(0, width as i64 - 1);
                let offset = (y as usize * width as usize + sx as usize) * BYTES_PER_PIXEL;
                for (sum, byte) in sums.iter_mut().zip(&src.data()[offset..offset + 4]) {
                    *sum += i64::from(*byte);
                }
            }
            let offset = (y as usize * width as usize + x as usize) * BYTES_PER_PIXEL;
            for (channel, sum) in sums.iter().enumerate() {
                intermediate[offset + channel] = ((sum + half) / window) as u8;
            }
        }
    }

    // Vertical pass.
    for y in 0..height as i64 {
        for x in 0..width as i64 {
            let mut sums = [0i64; BYTES_PER_PIXEL];
            for dy in -half..=half {
                let sy = (y + dy).clamp(0, height as i64 - 1);
                let offset = (sy as usize * width as usize + x as usize) * BYTES_PER_PIXEL;
                for (sum, byte) in sums.iter_mut().zip(&intermediate[offset..offset + 4]) {
                    *sum += i64::from(*byte);
                }
            }
            let offset = (y as usize * width as usize + x as usize) * BYTES_PER_PIXEL;
            for (channel, sum) in sums.iter().enumerate() {
                dst.data_mut()[offset + channel] = ((sum + half) / window) as u8;
            }
        }
    }
}

/// Builds the quantized 4×4 saturation matrix for the given delta factor.
///
/// Rows are input channels in RGBA order; the luma coefficients are the
/// Rec. 709 weights 0.2126 / 0.7152 / 0.0722.
fn saturation_matrix(delta_factor: f32) -> [i16; 16] {
    let z2126 = 0.2126_f32;
    let z7152 = 0.7152_f32;
    let z0722 = 0.0722_f32;

    let f0722 = z0722 * delta_factor;
    let f9278 = delta_factor - f0722;
    let f7152 = z7152 * delta_factor;
    let f2848 = delta_factor - f7152;
    let f2126 = z2126 * delta_factor;
    let f7873 = 0.7873 * delta_factor; // why 0.7873 instead of 0.7874 - unknown

    let r_self = z2126 + f7873;
    let r_other = z2126 - f2126;
    let g_self = z7152 + f2848;
    let g_other = z7152 - f7152;
    let b_self = z0722 + f9278;
    let b_other = z0722 - f0722;

    let floating: [f32; 16] = [
        r_self, r_other, r_other, 0.0, //
        g_other, g_self, g_other, 0.0, //
        b_other, b_other, b_self, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ];

    let mut quantized = [0i16; 16];
    for (q, f) in quantized.iter_mut().zip(floating) {
        *q = (f * MATRIX_DIVISOR as f32).round() as i16;
    }
    quantized
}

/// Multiplies every pixel (as an RGBA row vector) by the quantized matrix.
fn matrix_multiply(src: &Pixmap, dst: &mut Pixmap, matrix: &[i16; 16]) {
    debug_assert_eq!(src.dimensions(), dst.dimensions());

    let src_data = src.data();
    let dst_data = dst.data_mut();

    for (src_px, dst_px) in src_data
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst_data.chunks_exact_mut(BYTES_PER_PIXEL))
    {
        for channel in 0..BYTES_PER_PIXEL {
            let mut sum = 0i32;
            for (input, row) in src_px.iter().enumerate() {
                sum += i32::from(*row) * i32::from(matrix[input * 4 + channel]);
            }
            dst_px[channel] = ((sum + MATRIX_DIVISOR / 2) / MATRIX_DIVISOR).clamp(0, 255) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(size: u32) -> Pixmap {
        Pixmap::from_fn(size, size, |x, y| {
            if (x + y) % 2 == 0 {
                Color::WHITE
            } else {
                Color::BLACK
            }
        })
    }

    mod kernel_tests {
        use super::*;

        #[test]
        fn test_box_kernel_size_is_odd() {
            for radius in [0.5, 1.0, 3.0, 10.0, 20.0] {
                for scale in [1.0, 2.0, 3.0] {
                    assert_eq!(box_kernel_size(radius, scale) % 2, 1);
                }
            }
        }

        #[test]
        fn test_box_kernel_size_grows_with_radius() {
            assert!(box_kernel_size(20.0, 1.0) > box_kernel_size(5.0, 1.0));
            assert!(box_kernel_size(5.0, 3.0) > box_kernel_size(5.0, 1.0));
        }
    }

    mod pipeline_tests {
        use super::*;

        #[test]
        fn test_degenerate_size_yields_none() {
            let empty = Pixmap::new(0, 3);
            assert!(empty.blurred(&BlurParams::light(), None).is_none());
        }

        #[test]
        fn test_identity_params_are_pixel_identical() {
            let source = checkerboard(8);
            let params = BlurParams {
                radius: 0.0,
                tint: None,
                saturation_delta_factor: 1.0,
                scale: 1.0,
            };

            let result = source.blurred(&params, None).unwrap();
            assert_eq!(result, source);
        }

        #[test]
        fn test_identity_params_with_tint_only_tints() {
            let source = Pixmap::filled(4, 4, Color::BLACK);
            let params = BlurParams {
                radius: 0.0,
                tint: Some(Color::white(1.0, 0.5)),
                saturation_delta_factor: 1.0,
                scale: 1.0,
            };

            let result = source.blurred(&params, None).unwrap();
            let px = result.pixel(0, 0).unwrap();
            assert_eq!(px.to_rgba_u8(), [128, 128, 128, 255]);
        }

        #[test]
        fn test_blur_smooths_checkerboard() {
            let source = checkerboard(16);
            let params = BlurParams {
                radius: 4.0,
                tint: None,
                saturation_delta_factor: 1.0,
                scale: 1.0,
            };

            let result = source.blurred(&params, None).unwrap();

            // The blurred interior converges towards the checkerboard mean.
            let px = result.pixel(8, 8).unwrap().to_rgba_u8();
            assert!((100..=156).contains(&px[0]), "got {px:?}");
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
        }

        #[test]
        fn test_blur_preserves_flat_regions() {
            let source = Pixmap::filled(9, 9, Color::rgb(0.5, 0.25, 0.75));
            let params = BlurParams {
                radius: 3.0,
                tint: None,
                saturation_delta_factor: 1.0,
                scale: 1.0,
            };

            let result = source.blurred(&params, None).unwrap();
            // Edge-extend keeps a flat image flat, modulo rounding.
            let original = source.pixel(4, 4).unwrap().to_rgba_u8();
            let blurred = result.pixel(4, 4).unwrap().to_rgba_u8();
            for (o, b) in original.iter().zip(blurred) {
                assert!(o.abs_diff(b) <= 1);
            }
        }

        #[test]
        fn test_full_desaturation_grays_out_colors() {
            // Saturation 0 without blur: the matrix output is not drawn,
            // so force the path through the blurred pipeline.
            let source = Pixmap::filled(8, 8, Color::rgb(1.0, 0.0, 0.0));
            let params = BlurParams {
                radius: 2.0,
                tint: None,
                saturation_delta_factor: 0.0,
                scale: 1.0,
            };

            let result = source.blurred(&params, None).unwrap();
            let px = result.pixel(4, 4).unwrap().to_rgba_u8();

            // Red collapses to its Rec. 709 luma.
            let expected = (0.2126_f32 * 255.0).round() as u8;
            assert!(px[0].abs_diff(expected) <= 2, "got {px:?}");
            assert!(px[0].abs_diff(px[1]) <= 1);
            assert!(px[1].abs_diff(px[2]) <= 1);
        }

        #[test]
        fn test_mask_gates_the_effect() {
            let source = checkerboard(8);

            // Left half masked out, right half fully covered.
            let mask = Pixmap::from_fn(8, 8, |x, _| {
                if x < 4 {
                    Color::CLEAR
                } else {
                    Color::WHITE
                }
            });

            let params = BlurParams {
                radius: 3.0,
                tint: None,
                saturation_delta_factor: 1.0,
                scale: 1.0,
            };

            let result = source.blurred(&params, Some(&mask)).unwrap();

            // Masked-out pixels keep the original checkerboard contrast.
            assert_eq!(result.pixel(0, 0), source.pixel(0, 0));
            assert_eq!(result.pixel(1, 0), source.pixel(1, 0));

            // Covered pixels are blurred towards gray.
            let px = result.pixel(6, 4).unwrap().to_rgba_u8();
            assert!((64..=192).contains(&px[0]));
            assert_ne!(result.pixel(6, 4), source.pixel(6, 4));
        }

        #[test]
        fn test_presets_produce_output() {
            let source = checkerboard(8);
            assert!(source.light_effect().is_some());
            assert!(source.extra_light_effect().is_some());
            assert!(source.dark_effect().is_some());
            assert!(source.tint_effect(Color::rgb(0.0, 0.5, 1.0)).is_some());
        }

        #[test]
        fn test_tint_effect_forces_alpha() {
            let params = BlurParams::tinted(Color::rgb(0.2, 0.4, 0.6));
            assert_eq!(params.tint.unwrap().a, 0.6);
            assert_eq!(params.saturation_delta_factor, -1.0);
        }
    }

    mod box_blur_tests {
        use super::*;

        #[test]
        fn test_zero_radius_returns_copy() {
            let source = checkerboard(4);
            assert_eq!(source.box_blurred(0.0, 3, None, 1.0), source);
        }

        #[test]
        fn test_iterations_smooth_progressively() {
            let source = checkerboard(16);

            let once = source.box_blurred(4.0, 1, None, 1.0);
            let thrice = source.box_blurred(4.0, 3, None, 1.0);

            let contrast = |p: &Pixmap| {
                let a = p.pixel(7, 7).unwrap().to_rgba_u8()[0] as i32;
                let b = p.pixel(8, 8).unwrap().to_rgba_u8()[0] as i32;
                (a - b).abs()
            };

            assert!(contrast(&thrice) <= contrast(&once));
        }

        #[test]
        fn test_blend_color_composites() {
            let source = Pixmap::filled(4, 4, Color::BLACK);
            let blended = source.box_blurred(2.0, 1, Some(Color::white(1.0, 0.5)), 1.0);
            let px = blended.pixel(2, 2).unwrap().to_rgba_u8();
            assert_eq!(px[0], 128);
        }
    }

    mod matrix_tests {
        use super::*;

        #[test]
        fn test_identity_delta_is_identity_matrix() {
            let matrix = saturation_matrix(1.0);

            // Off-diagonal entries collapse to zero at delta 1.0.
            assert_eq!(matrix[1], 0);
            assert_eq!(matrix[4], 0);
            assert_eq!(matrix[8], 0);
            assert_eq!(matrix[15], MATRIX_DIVISOR as i16);

            // The red diagonal carries the 0.7873 constant; 0.9999 still
            // rounds up to the full divisor.
            assert_eq!(matrix[0], 256);
            assert_eq!(matrix[5], 256);
            assert_eq!(matrix[10], 256);
        }

        #[test]
        fn test_zero_delta_rows_are_luma_weights() {
            let matrix = saturation_matrix(0.0);

            // Every output channel receives the same luma mix.
            assert_eq!(matrix[0], matrix[1]);
            assert_eq!(matrix[5], matrix[4]);
            assert_eq!(matrix[10], matrix[8]);

            let luma_sum = matrix[0] + matrix[4] + matrix[8];
            assert!((luma_sum - MATRIX_DIVISOR as i16).abs() <= 2);
        }

        #[test]
        fn test_matrix_multiply_identity() {
            let mut matrix = [0i16; 16];
            for i in 0..4 {
                matrix[i * 4 + i] = MATRIX_DIVISOR as i16;
            }

            let source = checkerboard(4);
            let mut dst = Pixmap::new(4, 4);
            matrix_multiply(&source, &mut dst, &matrix);
            assert_eq!(dst, source);
        }
    }
}
