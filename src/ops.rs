//! Scalar forward operators.
//!
//! # Elementary Functions
//!
//! The numeric leaves of any differentiable computation built on this crate.
//! Every function here is pure and stateless: same inputs, same output, no
//! side effects, safe to call from any number of threads.
//!
//! ## Design Highlights
//!
//! - All scalars are `f64`; comparisons return `bool`.
//! - Operators with a restricted domain ([`ln`], [`inv`]) return a `Result`
//!   instead of asserting, so callers handle violations as normal control flow.
//! - [`sigmoid`] picks its evaluation branch by sign to stay stable for
//!   large-magnitude inputs.
//!
//! The matching backward rules for `ln`, `inv` and `relu` live in
//! [`crate::backprop`].

use crate::error::{Error, Result};

/// Computes `x * y`.
pub fn mul(x: f64, y: f64) -> f64 {
    x * y
}

/// Returns `x` unchanged.
pub fn id(x: f64) -> f64 {
    x
}

/// Computes `x + y`.
pub fn add(x: f64, y: f64) -> f64 {
    x + y
}

/// Negates `x`.
pub fn neg(x: f64) -> f64 {
    -x
}

/// Checks whether `x` is strictly less than `y`.
pub fn lt(x: f64, y: f64) -> bool {
    x < y
}

/// Checks whether `x` equals `y`.
pub fn eq(x: f64, y: f64) -> bool {
    x == y
}

/// Returns the larger of `x` and `y`.
///
/// When the two are equal either is acceptable; this implementation returns
/// `y` on ties.
pub fn max(x: f64, y: f64) -> f64 {
    if lt(y, x) { x } else { y }
}

/// Checks whether `x` and `y` are within `1e-6` of each other.
///
/// # Example
/// ```rust
/// use gradops::ops::is_close;
///
/// assert!(is_close(1.0, 1.0 + 1e-9));
/// assert!(!is_close(1.0, 1.1));
/// ```
pub fn is_close(x: f64, y: f64) -> bool {
    (x - y).abs() < 1e-6
}

/// Computes the logistic sigmoid of `x`, numerically stable on both tails.
///
/// For `x >= 0` this evaluates `1 / (1 + e^-x)`; for `x < 0` it evaluates the
/// algebraically equal `e^x / (1 + e^x)`. Both branches only ever exponentiate
/// a non-positive value, so `exp` cannot overflow no matter how large `|x|` is.
///
/// # Returns
/// A value in `(0, 1)` (up to underflow at the far tails).
///
/// # Example
/// ```rust
/// use gradops::ops::sigmoid;
///
/// assert_eq!(sigmoid(0.0), 0.5);
/// assert!(sigmoid(1000.0) <= 1.0);
/// assert!(sigmoid(-1000.0) >= 0.0);
/// ```
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + exp(-x))
    } else {
        let e = exp(x);
        e / (1.0 + e)
    }
}

/// Applies the ReLU activation (Rectified Linear Unit): `max(0, x)`.
pub fn relu(x: f64) -> f64 {
    max(0.0, x)
}

/// Computes the natural logarithm of `x`.
///
/// # Errors
/// Returns [`Error::Domain`] when `x == 0`. Negative inputs are not rejected
/// and yield `NaN`, matching the guard of the paired [`crate::backprop::log_back`].
pub fn ln(x: f64) -> Result<f64> {
    if x == 0.0 {
        return Err(Error::Domain { op: "ln", arg: x });
    }
    Ok(x.ln())
}

/// Computes the exponential function `e^x`.
///
/// Overflows to `inf` for very large `x`; not special-cased.
pub fn exp(x: f64) -> f64 {
    x.exp()
}

/// Computes the reciprocal `1 / x`.
///
/// # Errors
/// Returns [`Error::Domain`] when `x == 0`.
pub fn inv(x: f64) -> Result<f64> {
    if x == 0.0 {
        return Err(Error::Domain { op: "inv", arg: x });
    }
    Ok(1.0 / x)
}
