//! Math functions evaluated at an explicitly chosen width.
//!
//! Firmware builds that only ever want one width of the math library can
//! route calls through these helpers instead of linking both the `f32` and
//! `f64` implementations.
//!
//! - [`narrow`] takes and returns `f64` but computes in `f32`.
//! - [`widen`] takes and returns `f32` but computes in `f64`.

macro_rules! unary_via {
    ($arg:ty => $via:ty: $($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Computes `", stringify!($name), "` of `x` in `", stringify!($via), "`.")]
            pub fn $name(x: $arg) -> $arg {
                <$via>::$name(x as $via) as $arg
            }
        )*
    };
}

/// Single-precision evaluation of double-precision arguments.
pub mod narrow {
    unary_via!(f64 => f32: ceil, floor, abs, acos, cos, asin, sin, atan, tan, sqrt);

    /// Computes `x` raised to the power `y` in `f32`.
    pub fn pow(x: f64, y: f64) -> f64 {
        (x as f32).powf(y as f32) as f64
    }
}

/// Double-precision evaluation of single-precision arguments.
pub mod widen {
    unary_via!(f32 => f64: ceil, floor, abs, acos, cos, asin, sin, atan, tan, sqrt);

    /// Computes `x` raised to the power `y` in `f64`.
    pub fn pow(x: f32, y: f32) -> f32 {
        (x as f64).powf(y as f64) as f32
    }
}
