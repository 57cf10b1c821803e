//! Luma weights for grayscale conversion (ITU-R BT.601).

/// ITU-R BT.601 coefficient for the red channel.
pub const LUMA_R: f64 = 0.299;

/// ITU-R BT.601 coefficient for the green channel.
pub const LUMA_G: f64 = 0.587;

/// ITU-R BT.601 coefficient for the blue channel.
pub const LUMA_B: f64 = 0.114;

/// Gray level of an RGB triple, rounded to the nearest integer.
///
/// Rounds half away from zero. Gray inputs (`r == g == b`) map to themselves.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let luma = LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64;
    luma.clamp(0.0, 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_sum_to_one() {
        let sum = LUMA_R + LUMA_G + LUMA_B;
        assert!((sum - 1.0).abs() < 1e-12, "Coefficients should sum to 1.0");
    }

    #[test]
    fn test_primaries() {
        // 0.299 * 255 = 76.245
        assert_eq!(luma_u8(255, 0, 0), 76);
        // 0.587 * 255 = 149.685
        assert_eq!(luma_u8(0, 255, 0), 150);
        // 0.114 * 255 = 29.07
        assert_eq!(luma_u8(0, 0, 255), 29);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(luma_u8(0, 0, 0), 0);
        assert_eq!(luma_u8(255, 255, 255), 255);
    }

    #[test]
    fn test_gray_maps_to_itself() {
        for v in 0..=255u8 {
            assert_eq!(luma_u8(v, v, v), v);
        }
    }
}
