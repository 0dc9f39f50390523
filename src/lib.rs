//! Epsilon-tolerant floating-point comparison for rules engines.
//!
//! [`Tolerance`] is the basic struct used by everything in this crate. The
//! free functions at the crate root use [`Tolerance::DEFAULT`].
//!
//! All comparisons are generic over [`Float`], which is implemented for `f32`
//! and `f64`. [`RulesFloat`] names the width a build uses for rule values.
//!
//! For comparing your own composite types, see [`ApproxEq`], [`ApproxEqZero`],
//! and [`ApproxOrd`].
//!
//! # Example
//!
//! ```
//! # use rules_float::*;
//! assert_ne!(0.1 + 0.2, 0.3_f64);
//! assert!(approximately_equal(0.1 + 0.2, 0.3_f64));
//! assert!(definitely_greater_than(21.5_f32, 21.0));
//!
//! // Raw ADC reading to degrees Celsius
//! let celsius = map_range(512.0_f32, 0.0, 1024.0, -40.0, 120.0);
//! assert_eq!(celsius, 40.0);
//! assert_eq!(max_decimals_for(celsius), 5);
//! assert_eq!(to_fixed_decimal(celsius, 2), 4000);
//! ```
//!
//! # Features
//!
//! - `log` (enabled by default) provides [`LogObserver`], which writes
//!   directional comparisons made through [`Observed`] to the `log` facade.
//! - `f32` makes [`RulesFloat`] an alias for `f32` instead of `f64`.

pub mod decimals;
pub mod float;
pub mod map;
pub mod math;
pub mod observe;
pub mod tolerance;
pub mod traits;

pub use decimals::{checked_decimal_factor, decimal_factor, max_decimals_for, to_fixed_decimal};
pub use float::{Float, RulesFloat};
pub use map::map_range;
#[cfg(feature = "log")]
pub use observe::LogObserver;
pub use observe::{CompareKind, CompareObserver, Comparison, Observed};
pub use tolerance::{
    Tolerance, approximately_equal, definitely_greater_than, definitely_less_than, epsilon_for,
    essentially_equal, essentially_zero,
};
pub use traits::*;
