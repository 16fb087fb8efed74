//! Numeric interpolation and range helpers.

use std::ops::{Add, Mul, RangeInclusive, Sub};

use rand::Rng;

/// Linearly interpolates a value between `start` and `finish`.
///
/// `progress` is expected in `[0, 1]`; values outside extrapolate.
///
/// # Examples
///
/// ```
/// use veneer_core::num::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.25), 2.5);
/// assert_eq!(lerp(-1.0, 1.0, 0.5), 0.0);
/// ```
#[inline]
pub fn lerp<T>(start: T, finish: T, progress: T) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    start + (finish - start) * progress
}

/// Interpolates two slices element-wise.
///
/// An empty `start` returns an empty vector.
///
/// # Panics
///
/// Panics when the slices have different non-zero lengths; interpolating
/// mismatched arrays is a programmer error, not a recoverable condition.
pub fn lerp_slice<T>(start: &[T], finish: &[T], progress: T) -> Vec<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    if start.is_empty() {
        return Vec::new();
    }

    assert_eq!(
        start.len(),
        finish.len(),
        "interpolated slices must have equal lengths"
    );

    start
        .iter()
        .zip(finish)
        .map(|(&s, &f)| lerp(s, f, progress))
        .collect()
}

/// Returns a uniformly distributed random value within the inclusive range.
pub fn random_in(range: RangeInclusive<i64>) -> i64 {
    rand::rng().random_range(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_scalars() {
        assert_eq!(lerp(0.0_f32, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0_f32, 10.0, 1.0), 10.0);
        assert_eq!(lerp(0.0_f64, 10.0, 0.3), 3.0);
    }

    #[test]
    fn test_lerp_slice() {
        let start = [0.0_f32, 10.0, 100.0];
        let finish = [10.0_f32, 20.0, 0.0];
        assert_eq!(lerp_slice(&start, &finish, 0.5), vec![5.0, 15.0, 50.0]);
    }

    #[test]
    fn test_lerp_slice_empty() {
        let empty: [f32; 0] = [];
        assert!(lerp_slice(&empty, &empty, 0.5).is_empty());
    }

    #[test]
    #[should_panic(expected = "equal lengths")]
    fn test_lerp_slice_mismatched_lengths_panics() {
        let _ = lerp_slice(&[1.0_f32, 2.0], &[1.0_f32], 0.5);
    }

    #[test]
    fn test_random_in_stays_within_bounds() {
        for _ in 0..100 {
            let value = random_in(3..=7);
            assert!((3..=7).contains(&value));
        }
    }

    #[test]
    fn test_random_in_degenerate_range() {
        assert_eq!(random_in(5..=5), 5);
    }
}
