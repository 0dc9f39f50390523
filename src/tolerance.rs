//! Epsilon-based comparison of floats.

use std::cmp::Ordering;

use crate::Float;

/// Tolerance used to compare floats.
///
/// Comparisons use a _relative_ epsilon: the working tolerance for `a` and `b`
/// is `max(|a|, |b|) * factor * ε`, where _ε_ is the machine epsilon of the
/// float type. The one exception is [`Tolerance::essentially_zero()`], which
/// uses the absolute band `±factor * ε` since a relative epsilon is always zero
/// at zero.
///
/// Every method also has a `_within` variant taking an explicit tolerance for
/// callers that already know how much error to expect.
///
/// # What factor do I use?
///
/// [`Tolerance::DEFAULT`] uses [`Float::EPSILON_FACTOR`] of whichever float
/// type is compared. Use [`Tolerance::with_factor()`] with a **larger** number
/// if values that should be equal are considered distinct, and with a
/// **smaller** number if values that should be distinct are considered equal.
///
/// ```
/// # use rules_float::Tolerance;
/// const TOL: Tolerance = Tolerance::DEFAULT;
///
/// assert_ne!(0.1 + 0.2, 0.3_f64);
/// assert!(TOL.approximately_equal(0.1 + 0.2, 0.3_f64));
/// assert!(TOL.definitely_less_than(0.3_f64, 0.31));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Tolerance {
    /// `None` means the default factor of the compared float type.
    factor: Option<u32>,
}

impl Tolerance {
    /// Tolerance using [`Float::EPSILON_FACTOR`] for each float type.
    pub const DEFAULT: Self = Self { factor: None };

    /// Constructs a tolerance that multiplies the machine epsilon by `factor`
    /// for every float type.
    pub const fn with_factor(factor: u32) -> Self {
        Self {
            factor: Some(factor),
        }
    }

    /// Returns the epsilon multiplier used for `F`.
    pub fn factor<F: Float>(self) -> u32 {
        self.factor.unwrap_or(F::EPSILON_FACTOR)
    }

    /// Returns the absolute tolerance `factor * ε` for `F`.
    pub fn epsilon<F: Float>(self) -> F {
        F::epsilon(self.factor::<F>())
    }

    /// Returns the default tolerance for comparing `a` and `b`, which scales
    /// with the larger magnitude of the two.
    pub fn epsilon_for<F: Float>(self, a: F, b: F) -> F {
        a.abs().max(b.abs()) * self.epsilon::<F>()
    }

    /// Returns whether `a` and `b` are within [`Tolerance::epsilon_for()`] of
    /// each other.
    pub fn approximately_equal<F: Float>(self, a: F, b: F) -> bool {
        Self::approximately_equal_within(a, b, self.epsilon_for(a, b))
    }
    /// Returns whether `|a - b| <= epsilon`.
    pub fn approximately_equal_within<F: Float>(a: F, b: F, epsilon: F) -> bool {
        (a - b).abs() <= epsilon
    }

    /// Returns whether `a` exceeds `b` by more than
    /// [`Tolerance::epsilon_for()`].
    pub fn definitely_greater_than<F: Float>(self, a: F, b: F) -> bool {
        Self::definitely_greater_than_within(a, b, self.epsilon_for(a, b))
    }
    /// Returns whether `a - b > epsilon`.
    pub fn definitely_greater_than_within<F: Float>(a: F, b: F, epsilon: F) -> bool {
        (a - b) > epsilon
    }

    /// Returns whether `b` exceeds `a` by more than
    /// [`Tolerance::epsilon_for()`].
    pub fn definitely_less_than<F: Float>(self, a: F, b: F) -> bool {
        Self::definitely_less_than_within(a, b, self.epsilon_for(a, b))
    }
    /// Returns whether `b - a > epsilon`.
    pub fn definitely_less_than_within<F: Float>(a: F, b: F, epsilon: F) -> bool {
        (b - a) > epsilon
    }

    /// Same test as [`Tolerance::approximately_equal()`], for callers that
    /// mean "these are the same value" rather than "these are close".
    pub fn essentially_equal<F: Float>(self, a: F, b: F) -> bool {
        Self::essentially_equal_within(a, b, self.epsilon_for(a, b))
    }
    /// Same test as [`Tolerance::approximately_equal_within()`].
    pub fn essentially_equal_within<F: Float>(a: F, b: F, epsilon: F) -> bool {
        (a - b).abs() <= epsilon
    }

    /// Returns whether `a` lies in `[-factor * ε, factor * ε]`.
    pub fn essentially_zero<F: Float>(self, a: F) -> bool {
        let epsilon = self.epsilon::<F>();
        -epsilon <= a && a <= epsilon
    }

    /// Orders `a` and `b`, treating approximately equal values as equal.
    ///
    /// Values that are not approximately equal are ordered using
    /// [`Float::total_cmp()`].
    pub fn compare<F: Float>(self, a: F, b: F) -> Ordering {
        match self.approximately_equal(a, b) {
            true => Ordering::Equal,
            false => a.total_cmp(&b),
        }
    }
}

/// Returns [`Tolerance::epsilon_for()`] using [`Tolerance::DEFAULT`].
pub fn epsilon_for<F: Float>(a: F, b: F) -> F {
    Tolerance::DEFAULT.epsilon_for(a, b)
}
/// Returns [`Tolerance::approximately_equal()`] using [`Tolerance::DEFAULT`].
pub fn approximately_equal<F: Float>(a: F, b: F) -> bool {
    Tolerance::DEFAULT.approximately_equal(a, b)
}
/// Returns [`Tolerance::definitely_greater_than()`] using
/// [`Tolerance::DEFAULT`].
pub fn definitely_greater_than<F: Float>(a: F, b: F) -> bool {
    Tolerance::DEFAULT.definitely_greater_than(a, b)
}
/// Returns [`Tolerance::definitely_less_than()`] using [`Tolerance::DEFAULT`].
pub fn definitely_less_than<F: Float>(a: F, b: F) -> bool {
    Tolerance::DEFAULT.definitely_less_than(a, b)
}
/// Returns [`Tolerance::essentially_equal()`] using [`Tolerance::DEFAULT`].
pub fn essentially_equal<F: Float>(a: F, b: F) -> bool {
    Tolerance::DEFAULT.essentially_equal(a, b)
}
/// Returns [`Tolerance::essentially_zero()`] using [`Tolerance::DEFAULT`].
pub fn essentially_zero<F: Float>(a: F) -> bool {
    Tolerance::DEFAULT.essentially_zero(a)
}
