//! Hue-angle helpers on the cyclic [0, 360) domain.
//!
//! Every band and target window measures distance with [`hue_delta`], so
//! the seam at 0°/360° is handled in one place.

use std::f64::consts::PI;

/// Wraps an angle in degrees into [0, 360).
///
/// True modulo, not truncation: negative angles come back positive.
///
/// # Example
///
/// ```rust
/// use okgrade_math::wrap_degrees;
///
/// assert_eq!(wrap_degrees(450.0), 90.0);
/// assert_eq!(wrap_degrees(-30.0), 330.0);
/// assert_eq!(wrap_degrees(360.0), 0.0);
/// ```
#[inline]
pub fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Shortest signed angular distance from `from` to `to`, in [-180, 180].
///
/// # Example
///
/// ```rust
/// use okgrade_math::hue_delta;
///
/// assert_eq!(hue_delta(350.0, 10.0), 20.0);
/// assert_eq!(hue_delta(10.0, 350.0), -20.0);
/// ```
#[inline]
pub fn hue_delta(from: f64, to: f64) -> f64 {
    let d = wrap_degrees(to) - wrap_degrees(from);
    if d > 180.0 {
        d - 360.0
    } else if d < -180.0 {
        d + 360.0
    } else {
        d
    }
}

/// Raised-cosine window: 1 at `center`, 0 at `±half_width`, 0 outside.
///
/// `half_width` must be positive; callers floor it before use.
#[inline]
pub fn cosine_window(hue: f64, center: f64, half_width: f64) -> f64 {
    let norm = hue_delta(hue, center) / half_width;
    if !(-1.0..=1.0).contains(&norm) {
        return 0.0;
    }
    0.5 * (1.0 + (PI * norm).cos())
}

/// Sign-preserving cube root.
///
/// Uses [`f64::cbrt`] on the magnitude, never `powf` with a negative base.
#[inline]
pub fn signed_cbrt(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x > 0.0 {
        x.cbrt()
    } else {
        -(-x).cbrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(359.5), 359.5);
        assert_eq!(wrap_degrees(720.0), 0.0);
        assert_eq!(wrap_degrees(-360.0), 0.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        let tiny = wrap_degrees(-1e-20);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_hue_delta_bounds() {
        assert_eq!(hue_delta(0.0, 180.0), 180.0);
        assert_eq!(hue_delta(0.0, 360.0), 0.0);
        assert_eq!(hue_delta(29.0, 0.0), -29.0);
        for i in 0..72 {
            let d = hue_delta(i as f64 * 5.0, 123.0);
            assert!((-180.0..=180.0).contains(&d));
        }
    }

    #[test]
    fn test_cosine_window() {
        assert_eq!(cosine_window(85.0, 85.0, 60.0), 1.0);
        assert_abs_diff_eq!(cosine_window(115.0, 85.0, 60.0), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(cosine_window(145.0, 85.0, 60.0), 0.0, epsilon = 1e-12);
        assert_eq!(cosine_window(200.0, 85.0, 60.0), 0.0);
        // Across the seam
        assert_abs_diff_eq!(cosine_window(350.0, 10.0, 40.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_signed_cbrt() {
        assert_eq!(signed_cbrt(0.0), 0.0);
        assert_abs_diff_eq!(signed_cbrt(27.0), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(signed_cbrt(-8.0), -2.0, epsilon = 1e-12);
        assert!(signed_cbrt(-1e-30).is_finite());
    }
}
