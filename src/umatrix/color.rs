//! Grayscale intensity mapping.

/// Maps a dissimilarity value to a gray level.
///
/// Computes `round((1 - d / d_max) * 255)` clamped to `[0, 255]`, so the
/// most similar regions get the highest value. `d_max` must be positive.
#[inline]
pub fn intensity(d: f64, d_max: f64) -> u8 {
    debug_assert!(d_max > 0.0, "maximum distance must be positive");
    ((1.0 - d / d_max) * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(intensity(0.0, 2.0), 255);
        assert_eq!(intensity(2.0, 2.0), 0);
    }

    #[test]
    fn test_rounding() {
        // (1 - 1.138071 / 1.414214) * 255 = 49.79
        let d = (2.0 + std::f64::consts::SQRT_2) / 3.0;
        assert_eq!(intensity(d, std::f64::consts::SQRT_2), 50);

        // (1 - 1 / 1.414214) * 255 = 74.69
        assert_eq!(intensity(1.0, std::f64::consts::SQRT_2), 75);
    }

    #[test]
    fn test_clamped() {
        assert_eq!(intensity(3.0, 2.0), 0);
        assert_eq!(intensity(-1.0, 2.0), 255);
    }
}
