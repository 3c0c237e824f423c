//! Easing functions for positional movement.

/// Cubic ease-out: `f(t) = 1 - (1-t)^3`.
///
/// Fast start, slow landing. Exact at both ends: `f(0) = 0`, `f(1) = 1`.
///
/// ```
/// use flashtable::geom::ease_out_cubic;
///
/// assert_eq!(ease_out_cubic(0.0), 0.0);
/// assert_eq!(ease_out_cubic(1.0), 1.0);
/// assert!(ease_out_cubic(0.5) > 0.5);
/// ```
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_boundaries_exact() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn test_ease_out_shape() {
        // Ease-out covers more than half the distance by the halfway point.
        assert!(ease_out_cubic(0.5) > 0.5);
        // 1 - 0.5^3 = 0.875
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_bounded_on_unit_interval(t in 0.0f32..=1.0) {
            let v = ease_out_cubic(t);
            prop_assert!(v >= 0.0);
            prop_assert!(v <= 1.0 + f32::EPSILON);
        }

        #[test]
        fn prop_monotone_nondecreasing(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(ease_out_cubic(lo) <= ease_out_cubic(hi) + 1e-6);
        }
    }
}
