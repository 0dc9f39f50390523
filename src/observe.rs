//! Opt-in diagnostics for directional comparisons.
//!
//! The predicates in [`Tolerance`] never log. Callers that want to trace
//! threshold checks wrap a tolerance in [`Observed`], which reports every
//! directional comparison to a [`CompareObserver`] before returning the same
//! result the plain predicate would.

use std::fmt;

use crate::{Float, Tolerance};

/// Which directional predicate was evaluated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CompareKind {
    /// `a - b > epsilon`
    GreaterThan,
    /// `b - a > epsilon`
    LessThan,
}

impl fmt::Display for CompareKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareKind::GreaterThan => write!(f, "definitelyGreaterThan"),
            CompareKind::LessThan => write!(f, "definitelyLessThan"),
        }
    }
}

/// A single directional comparison, with the tolerance it used.
///
/// Displays as `definitelyGreaterThan f32 a:2.000000 b:1.000000 ep:0.5`: the
/// operands with six decimals and the tolerance with eight significant digits.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Comparison<F> {
    /// Predicate that was evaluated.
    pub kind: CompareKind,
    /// Left operand.
    pub a: F,
    /// Right operand.
    pub b: F,
    /// Tolerance the operands were compared with.
    pub epsilon: F,
}

impl<F: Float> fmt::Display for Comparison<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} a:{:.6} b:{:.6} ep:{}",
            self.kind,
            F::NAME,
            self.a,
            self.b,
            Significant(self.epsilon.to_f64()),
        )
    }
}

/// Formats a float with eight significant digits, switching to scientific
/// notation for very small or large magnitudes and dropping trailing zeros.
struct Significant(f64);

impl Significant {
    const DIGITS: i32 = 8;
}

impl fmt::Display for Significant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x.is_nan() {
            return write!(f, "nan");
        }
        if x == 0.0 || x.is_infinite() {
            return write!(f, "{x}");
        }

        // Rounding to the displayed digits can bump the exponent, so take it
        // from the rounded scientific form.
        let sci = format!("{:.*e}", (Self::DIGITS - 1) as usize, x);
        let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let exp: i32 = exp.parse().unwrap_or(0);

        if exp < -4 || exp >= Self::DIGITS {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{sign}{:02}", trim_zeros(mantissa), exp.abs())
        } else {
            let fixed = format!("{:.*}", (Self::DIGITS - 1 - exp) as usize, x);
            write!(f, "{}", trim_zeros(&fixed))
        }
    }
}

fn trim_zeros(s: &str) -> &str {
    match s.contains('.') {
        true => s.trim_end_matches('0').trim_end_matches('.'),
        false => s,
    }
}

/// Receives directional comparisons made through [`Observed`].
pub trait CompareObserver<F: Float> {
    /// Called once per comparison, before the result is returned.
    fn observe(&self, comparison: &Comparison<F>);
}

impl<F: Float, T: Fn(&Comparison<F>)> CompareObserver<F> for T {
    fn observe(&self, comparison: &Comparison<F>) {
        self(comparison);
    }
}

/// Observer that writes each comparison to the [`log`] facade at debug level.
///
/// Formatting is skipped entirely unless debug logging is enabled.
#[cfg(feature = "log")]
#[derive(Debug, Default, Copy, Clone)]
pub struct LogObserver;

#[cfg(feature = "log")]
impl<F: Float> CompareObserver<F> for LogObserver {
    fn observe(&self, comparison: &Comparison<F>) {
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("{comparison}");
        }
    }
}

/// [`Tolerance`] whose directional comparisons are reported to an observer.
///
/// ```
/// # use std::cell::Cell;
/// # use rules_float::{Comparison, Observed, Tolerance};
/// let seen = Cell::new(0);
/// let observed = Observed::new(Tolerance::DEFAULT, |_: &Comparison<f32>| {
///     seen.set(seen.get() + 1);
/// });
///
/// assert!(observed.definitely_greater_than(2.0_f32, 1.0));
/// assert!(!observed.definitely_less_than(2.0_f32, 1.0));
/// assert_eq!(seen.get(), 2);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Observed<O> {
    tol: Tolerance,
    observer: O,
}

impl<O> Observed<O> {
    /// Wraps `tol` so that comparisons are reported to `observer`.
    pub fn new(tol: Tolerance, observer: O) -> Self {
        Self { tol, observer }
    }

    /// Returns the wrapped tolerance.
    pub fn tolerance(&self) -> Tolerance {
        self.tol
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Reports and evaluates [`Tolerance::definitely_greater_than()`].
    pub fn definitely_greater_than<F: Float>(&self, a: F, b: F) -> bool
    where
        O: CompareObserver<F>,
    {
        self.definitely_greater_than_within(a, b, self.tol.epsilon_for(a, b))
    }
    /// Reports and evaluates [`Tolerance::definitely_greater_than_within()`].
    pub fn definitely_greater_than_within<F: Float>(&self, a: F, b: F, epsilon: F) -> bool
    where
        O: CompareObserver<F>,
    {
        self.report(CompareKind::GreaterThan, a, b, epsilon);
        Tolerance::definitely_greater_than_within(a, b, epsilon)
    }

    /// Reports and evaluates [`Tolerance::definitely_less_than()`].
    pub fn definitely_less_than<F: Float>(&self, a: F, b: F) -> bool
    where
        O: CompareObserver<F>,
    {
        self.definitely_less_than_within(a, b, self.tol.epsilon_for(a, b))
    }
    /// Reports and evaluates [`Tolerance::definitely_less_than_within()`].
    pub fn definitely_less_than_within<F: Float>(&self, a: F, b: F, epsilon: F) -> bool
    where
        O: CompareObserver<F>,
    {
        self.report(CompareKind::LessThan, a, b, epsilon);
        Tolerance::definitely_less_than_within(a, b, epsilon)
    }

    fn report<F: Float>(&self, kind: CompareKind, a: F, b: F, epsilon: F)
    where
        O: CompareObserver<F>,
    {
        self.observer.observe(&Comparison {
            kind,
            a,
            b,
            epsilon,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;

    #[test]
    fn test_observer_sees_operands_and_epsilon() {
        let seen = RefCell::new(vec![]);
        let observed = Observed::new(Tolerance::with_factor(1), |c: &Comparison<f64>| {
            seen.borrow_mut().push(*c);
        });

        assert!(observed.definitely_greater_than(4.0_f64, 2.0));
        assert!(!observed.definitely_less_than_within(1.5_f64, 1.0, 0.5));

        assert_eq!(
            *seen.borrow(),
            [
                Comparison {
                    kind: CompareKind::GreaterThan,
                    a: 4.0,
                    b: 2.0,
                    epsilon: 4.0 * f64::EPSILON,
                },
                Comparison {
                    kind: CompareKind::LessThan,
                    a: 1.5,
                    b: 1.0,
                    epsilon: 0.5,
                },
            ],
        );
    }

    #[test]
    fn test_display() {
        let c = Comparison {
            kind: CompareKind::LessThan,
            a: 1.0_f32,
            b: 2.5,
            epsilon: 0.125,
        };
        assert_eq!(c.to_string(), "definitelyLessThan f32 a:1.000000 b:2.500000 ep:0.125");

        let c = Comparison {
            kind: CompareKind::GreaterThan,
            a: 2.0_f32,
            b: 1.0,
            epsilon: 0.5,
        };
        assert_eq!(c.to_string(), "definitelyGreaterThan f32 a:2.000000 b:1.000000 ep:0.5");
    }

    #[test]
    fn test_significant_digits() {
        let fmt = |x: f64| Significant(x).to_string();
        assert_eq!(fmt(0.0), "0");
        assert_eq!(fmt(1.0), "1");
        assert_eq!(fmt(123.456), "123.456");
        assert_eq!(fmt(12345678.0), "12345678");
        assert_eq!(fmt(123456789.0), "1.2345679e+08");
        assert_eq!(fmt(0.0001), "0.0001");
        assert_eq!(fmt(1000.0 * f32::EPSILON as f64), "0.00011920929");
        assert_eq!(fmt(1000.0 * f64::EPSILON), "2.220446e-13");
        assert_eq!(fmt(-2.5e-7), "-2.5e-07");
        assert_eq!(fmt(9.99999999), "10");
        assert_eq!(fmt(f64::INFINITY), "inf");
        assert_eq!(fmt(f64::NAN), "nan");
    }

    #[cfg(feature = "log")]
    mod log_capture {
        use std::sync::Mutex;

        use log::{LevelFilter, Log, Metadata, Record};

        use crate::{LogObserver, Observed, Tolerance};

        struct CaptureLog(Mutex<Vec<String>>);

        impl Log for CaptureLog {
            fn enabled(&self, metadata: &Metadata<'_>) -> bool {
                metadata.level() <= log::max_level()
            }
            fn log(&self, record: &Record<'_>) {
                if self.enabled(record.metadata()) {
                    self.0.lock().unwrap().push(record.args().to_string());
                }
            }
            fn flush(&self) {}
        }

        static CAPTURE: CaptureLog = CaptureLog(Mutex::new(Vec::new()));

        fn take_lines() -> Vec<String> {
            std::mem::take(&mut *CAPTURE.0.lock().unwrap())
        }

        #[test]
        fn test_log_observer_writes_debug_line() {
            // Only this test installs a logger in the test binary.
            let _ = log::set_logger(&CAPTURE);
            let observed = Observed::new(Tolerance::with_factor(1), LogObserver);

            log::set_max_level(LevelFilter::Debug);
            take_lines();
            assert!(observed.definitely_greater_than(2.0_f32, 1.0));
            assert!(!observed.definitely_less_than_within(1.5_f64, 1.0, 0.5));
            assert_eq!(
                take_lines(),
                [
                    "definitelyGreaterThan f32 a:2.000000 b:1.000000 ep:2.3841858e-07",
                    "definitelyLessThan f64 a:1.500000 b:1.000000 ep:0.5",
                ],
            );

            log::set_max_level(LevelFilter::Info);
            assert!(observed.definitely_less_than(1.0_f32, 2.0));
            assert!(!observed.definitely_greater_than(0.1 + 0.2, 0.3_f64));
            assert!(take_lines().is_empty());
        }
    }

    #[proptest_macro::property_test]
    fn proptest_observed_matches_pure(a: f64, b: f64) {
        let count = RefCell::new(0);
        let tol = Tolerance::DEFAULT;
        let observed = Observed::new(tol, |_: &Comparison<f64>| *count.borrow_mut() += 1);

        assert_eq!(observed.definitely_greater_than(a, b), tol.definitely_greater_than(a, b));
        assert_eq!(observed.definitely_less_than(a, b), tol.definitely_less_than(a, b));
        assert_eq!(*count.borrow(), 2);
        assert_eq!(observed.tolerance(), tol);
    }
}
