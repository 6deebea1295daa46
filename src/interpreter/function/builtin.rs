//! Unary functions that have no direct `f64` method counterpart.

/// Base-10 logarithm.
///
/// # Example
/// ```
/// use bincalc::interpreter::function::builtin::log;
///
/// assert!((log(1000.0) - 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn log(x: f64) -> f64 {
    x.log10()
}

/// Returns `-1`, `0` or `1` according to the sign of `x`.
///
/// Unlike [`f64::signum`], zero maps to zero.
///
/// # Example
/// ```
/// use bincalc::interpreter::function::builtin::sign;
///
/// assert_eq!(sign(-4.2), -1.0);
/// assert_eq!(sign(0.0), 0.0);
/// ```
#[must_use]
pub fn sign(x: f64) -> f64 {
    if x == 0.0 { 0.0 } else { x.signum() }
}

/// Converts degrees to radians.
#[must_use]
pub fn radians(x: f64) -> f64 {
    x.to_radians()
}

/// Converts radians to degrees.
#[must_use]
pub fn degrees(x: f64) -> f64 {
    x.to_degrees()
}
