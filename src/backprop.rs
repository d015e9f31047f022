//! Backward (gradient-propagation) rules paired with [`crate::ops`].
//!
//! # Backpropagation Primitives
//!
//! Each function here is the backward half of a forward operator in
//! [`crate::ops`]: given the *original* forward input `x` and an upstream
//! gradient `grad`, it returns the downstream gradient
//! `grad * d/dx[forward](x)` via the chain rule.
//!
//! ## Autograd Pattern
//!
//! Forward and backward are separate, independently callable free functions
//! rather than an object carrying hidden state. A tape replaying a forward
//! pass only has to record which backward rule to invoke and the original
//! input — nothing from the forward evaluation itself is needed. That is why
//! every signature takes `x` explicitly instead of caching it.
//!
//! ## Usage Guidelines
//!
//! - Backward rules must be evaluated at the original input, never at the
//!   forward output, to keep the rule algebraically exact.
//! - Domain guards mirror the forward halves: [`log_back`] and [`inv_back`]
//!   reject `x == 0` exactly as [`crate::ops::ln`] and [`crate::ops::inv`] do.

use crate::error::{Error, Result};

/// Backward rule for `ln`: scales the upstream gradient by `d/dx ln(x) = 1/x`.
///
/// # Returns
/// `grad / x`.
///
/// # Errors
/// Returns [`Error::Domain`] when `x == 0`.
///
/// # Example
/// ```rust
/// use gradops::backprop::log_back;
///
/// assert_eq!(log_back(2.0, 10.0).unwrap(), 5.0);
/// assert!(log_back(0.0, 1.0).is_err());
/// ```
pub fn log_back(x: f64, grad: f64) -> Result<f64> {
    if x == 0.0 {
        return Err(Error::Domain {
            op: "log_back",
            arg: x,
        });
    }
    Ok(grad / x)
}

/// Backward rule for `inv`: scales the upstream gradient by
/// `d/dx (1/x) = -1/x²`.
///
/// # Returns
/// `-grad / x²`.
///
/// # Errors
/// Returns [`Error::Domain`] when `x == 0`.
pub fn inv_back(x: f64, grad: f64) -> Result<f64> {
    if x == 0.0 {
        return Err(Error::Domain {
            op: "inv_back",
            arg: x,
        });
    }
    Ok(-grad / (x * x))
}

/// Backward rule for `relu`: a gate controlled by the original input.
///
/// The upstream gradient flows through unchanged where the forward pass was in
/// the active region (`x > 0`) and is blocked everywhere else. `x == 0` takes
/// the zero branch.
///
/// # Example
/// ```rust
/// use gradops::backprop::relu_back;
///
/// assert_eq!(relu_back(1.0, 5.0), 5.0);
/// assert_eq!(relu_back(-1.0, 5.0), 0.0);
/// assert_eq!(relu_back(0.0, 5.0), 0.0);
/// ```
pub fn relu_back(x: f64, grad: f64) -> f64 {
    if x > 0.0 { grad } else { 0.0 }
}
