//! Floating-point widths supported by the rules engine.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Float width used by the rules engine in this build.
///
/// This is `f64` unless the `f32` feature is enabled.
#[cfg(not(feature = "f32"))]
pub type RulesFloat = f64;

/// Float width used by the rules engine in this build.
///
/// This is `f32` because the `f32` feature is enabled.
#[cfg(feature = "f32")]
pub type RulesFloat = f32;

/// Floating-point type that can be compared with a relative epsilon.
///
/// Implemented for [`f32`] and [`f64`]. Each width carries its own tuning
/// constants so that the same generic code serves both.
pub trait Float:
    Copy
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Short type name, used in diagnostics.
    const NAME: &'static str;
    /// Machine epsilon of the type.
    const MACHINE_EPSILON: Self;
    /// Default multiplier applied to [`Float::MACHINE_EPSILON`].
    const EPSILON_FACTOR: u32;
    /// Maximum number of decimals worth displaying for small values.
    const NR_DECIMALS: u32;
    /// Zero.
    const ZERO: Self;
    /// Ten.
    const TEN: Self;

    /// Absolute value.
    fn abs(self) -> Self;
    /// Larger of two values.
    fn max(self, other: Self) -> Self;
    /// Rounds half away from zero.
    fn round(self) -> Self;
    /// Total ordering, as in [`f64::total_cmp()`].
    fn total_cmp(&self, other: &Self) -> std::cmp::Ordering;
    /// Lossy conversion from `u32`.
    fn from_u32(n: u32) -> Self;
    /// Lossless conversion to `f64`.
    fn to_f64(self) -> f64;

    /// Working tolerance for a given factor: `factor * MACHINE_EPSILON`.
    fn epsilon(factor: u32) -> Self {
        Self::from_u32(factor) * Self::MACHINE_EPSILON
    }
}

macro_rules! impl_float {
    ($ty:ident, factor = $factor:literal, decimals = $decimals:literal) => {
        impl Float for $ty {
            const NAME: &'static str = stringify!($ty);
            const MACHINE_EPSILON: Self = $ty::EPSILON;
            const EPSILON_FACTOR: u32 = $factor;
            const NR_DECIMALS: u32 = $decimals;
            const ZERO: Self = 0.0;
            const TEN: Self = 10.0;

            fn abs(self) -> Self {
                $ty::abs(self)
            }
            fn max(self, other: Self) -> Self {
                $ty::max(self, other)
            }
            fn round(self) -> Self {
                $ty::round(self)
            }
            fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
                $ty::total_cmp(self, other)
            }
            fn from_u32(n: u32) -> Self {
                n as $ty
            }
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_float!(f32, factor = 1000, decimals = 6);
impl_float!(f64, factor = 1000, decimals = 14);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsilon_scales_machine_epsilon() {
        assert_eq!(f32::epsilon(1000), 1000.0 * f32::EPSILON);
        assert_eq!(f64::epsilon(1000), 1000.0 * f64::EPSILON);
        assert_eq!(f64::epsilon(0), 0.0);
    }

    #[test]
    fn test_widths_have_separate_constants() {
        assert!(f32::NR_DECIMALS < f64::NR_DECIMALS);
        assert!(f32::epsilon(f32::EPSILON_FACTOR) as f64 > f64::epsilon(f64::EPSILON_FACTOR));
    }

    #[test]
    fn test_active_width() {
        let x: RulesFloat = 1.5;
        #[cfg(feature = "f32")]
        assert_eq!(RulesFloat::NAME, "f32");
        #[cfg(not(feature = "f32"))]
        assert_eq!(RulesFloat::NAME, "f64");
        assert_eq!(x.to_f64(), 1.5);
    }
}
