//! Traits for comparing calibration values with a [`Tolerance`].
//!
//! Scalars compare with the relative-epsilon predicates of [`Tolerance`].
//! Fixed-size arrays compare element-wise, which covers color triples
//! (`[F; 3]`) as well as 3x3 calibration matrices (`[[F; 3]; 3]`).

use std::cmp::Ordering;

use crate::{Float, Tolerance};

/// Trait for values that can be approximately compared for equality.
pub trait ApproxEq {
    /// Returns whether `self` and `other` are approximately equal according to
    /// the tolerance.
    fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool;
}

/// Trait for values that can be compared to zero using the absolute band of a
/// [`Tolerance`].
pub trait ApproxEqZero {
    /// Returns whether `self` is essentially zero according to the tolerance.
    fn approx_eq_zero(&self, tol: Tolerance) -> bool;
}

/// Trait for values that can be approximately ordered.
pub trait ApproxOrd: ApproxEq {
    /// Returns the ordering of `self` and `other`, treating approximately
    /// equal components as equal.
    fn approx_cmp(&self, other: &Self, tol: Tolerance) -> Ordering;
}

macro_rules! impl_scalar {
    ($($ty:ty),*) => {$(
        impl ApproxEq for $ty {
            fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
                tol.approximately_equal(*self, *other)
            }
        }
        impl ApproxEqZero for $ty {
            fn approx_eq_zero(&self, tol: Tolerance) -> bool {
                tol.essentially_zero(*self)
            }
        }
        impl ApproxOrd for $ty {
            fn approx_cmp(&self, other: &Self, tol: Tolerance) -> Ordering {
                tol.compare(*self, *other)
            }
        }
    )*};
}

impl_scalar!(f32, f64);

impl<T: ApproxEq, const N: usize> ApproxEq for [T; N] {
    fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.iter().zip(other).all(|(a, b)| a.approx_eq(b, tol))
    }
}
impl<T: ApproxEqZero, const N: usize> ApproxEqZero for [T; N] {
    fn approx_eq_zero(&self, tol: Tolerance) -> bool {
        self.iter().all(|x| x.approx_eq_zero(tol))
    }
}
impl<T: ApproxOrd, const N: usize> ApproxOrd for [T; N] {
    fn approx_cmp(&self, other: &Self, tol: Tolerance) -> Ordering {
        for (a, b) in self.iter().zip(other) {
            match a.approx_cmp(b, tol) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl<T: ApproxEq + ?Sized> ApproxEq for Box<T> {
    fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        (**self).approx_eq(other, tol)
    }
}
impl<T: ApproxEqZero + ?Sized> ApproxEqZero for Box<T> {
    fn approx_eq_zero(&self, tol: Tolerance) -> bool {
        (**self).approx_eq_zero(tol)
    }
}
impl<T: ApproxOrd + ?Sized> ApproxOrd for Box<T> {
    fn approx_cmp(&self, other: &Self, tol: Tolerance) -> Ordering {
        (**self).approx_cmp(other, tol)
    }
}

impl Tolerance {
    /// Compares `a` and `b` using `T::approx_eq()`.
    pub fn eq<T: ApproxEq>(self, a: T, b: T) -> bool {
        a.approx_eq(&b, self)
    }
    /// Compares `a` and `b` using `T::approx_cmp()`.
    pub fn cmp<T: ApproxOrd>(self, a: T, b: T) -> Ordering {
        a.approx_cmp(&b, self)
    }
    /// Returns whether `a` is essentially zero using `T::approx_eq_zero()`.
    pub fn eq_zero<T: ApproxEqZero>(self, a: T) -> bool {
        a.approx_eq_zero(self)
    }
}

/// Multiplies a 3x3 calibration matrix with a color triple.
///
/// ```
/// # use rules_float::{Tolerance, traits::transform3};
/// let swap_rb = [[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]];
/// assert!(Tolerance::DEFAULT.eq(transform3(&swap_rb, [0.1, 0.2, 0.7_f32]), [0.7, 0.2, 0.1]));
/// ```
pub fn transform3<F: Float>(matrix: &[[F; 3]; 3], rgb: [F; 3]) -> [F; 3] {
    matrix.map(|row| row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2])
}
