//! Linear re-mapping between value ranges.

use crate::{Float, Tolerance};

impl Tolerance {
    /// Linearly maps `value` from `in_lo..in_hi` onto `out_lo..out_hi`.
    ///
    /// If `in_lo` and `in_hi` are approximately equal, the input span is
    /// degenerate and `value` is returned unchanged.
    pub fn map_range<F: Float>(self, value: F, in_lo: F, in_hi: F, out_lo: F, out_hi: F) -> F {
        if self.approximately_equal(in_lo, in_hi) {
            return value;
        }
        let normalized = (value - in_lo) / (in_hi - in_lo);
        normalized * (out_hi - out_lo) + out_lo
    }
}

/// Returns [`Tolerance::map_range()`] using [`Tolerance::DEFAULT`].
///
/// Typically used to convert a raw ADC reading into a calibrated value.
///
/// ```
/// # use rules_float::map_range;
/// assert_eq!(map_range(5.0_f64, 0.0, 10.0, 0.0, 100.0), 50.0);
/// assert_eq!(map_range(512.0_f32, 0.0, 1024.0, -1.0, 1.0), 0.0);
/// ```
pub fn map_range<F: Float>(value: F, in_lo: F, in_hi: F, out_lo: F, out_hi: F) -> F {
    Tolerance::DEFAULT.map_range(value, in_lo, in_hi, out_lo, out_hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn test_map_range() {
        assert_eq!(map_range(5.0_f64, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(map_range(0.0_f64, 0.0, 10.0, 20.0, 30.0), 20.0);
        assert_eq!(map_range(10.0_f64, 0.0, 10.0, 20.0, 30.0), 30.0);
        // Extrapolates outside the input domain.
        assert_eq!(map_range(20.0_f64, 0.0, 10.0, 0.0, 1.0), 2.0);
        // Reversed output range.
        assert_eq!(map_range(2.5_f32, 0.0, 10.0, 100.0, 0.0), 75.0);
    }

    #[test]
    fn test_degenerate_domain_returns_input() {
        assert_eq!(map_range(42.0_f64, 3.0, 3.0, 0.0, 100.0), 42.0);
        assert_eq!(map_range(-1.0_f32, 0.0, 0.0, 0.0, 1.0), -1.0);
        // Span within the default tolerance of the endpoints.
        assert_eq!(map_range(7.0_f64, 1e6, 1e6 + 1e-9, 0.0, 1.0), 7.0);
        // A coarser tolerance treats a wider span as degenerate.
        let coarse = Tolerance::with_factor(1 << 30);
        assert_eq!(coarse.map_range(7.0_f32, 100.0, 100.01, 0.0, 1.0), 7.0);
    }

    #[proptest_macro::property_test]
    fn proptest_degenerate_domain(value: f64, c: f64, lo: f64, hi: f64) {
        let out = map_range(value, c, c, lo, hi);
        assert!(out.to_bits() == value.to_bits() || !c.is_finite());
    }

    proptest! {
        #[test]
        fn proptest_round_trip(
            v in -1000.0_f64..1000.0,
            a in -100.0_f64..100.0,
            span_in in 1.0_f64..1000.0,
            c in -100.0_f64..100.0,
            span_out in 1.0_f64..1000.0,
        ) {
            let b = a + span_in;
            let d = c + span_out;
            let back = map_range(map_range(v, a, b, c, d), c, d, a, b);
            prop_assert!(Tolerance::approximately_equal_within(back, v, 1e-6), "{v} -> {back}");
        }
    }
}
