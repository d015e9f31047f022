//! Sequence combinators and derived operations.
//!
//! # Lifting Scalars Over Sequences
//!
//! Three generic combinators — [`transform`], [`combine`], [`fold`] — lift the
//! scalar operators of [`crate::ops`] (or any caller-supplied function) over
//! ordered sequences, plus four named operations built by partially applying
//! scalar operators into them.
//!
//! Sequences come in as `&[f64]` and go out as freshly allocated `Vec`s; an
//! input slice is never mutated. Order is always preserved, and [`fold`] is a
//! strict left fold, so non-associative combining functions behave
//! deterministically.
//!
//! ## Fallible operators
//!
//! [`transform`] and [`combine`] take infallible functions. For the operators
//! with a restricted domain (`ln`, `inv`), [`try_transform`] and
//! [`try_combine`] short-circuit on the first error and return it to the
//! caller unchanged.

use crate::error::{Error, Result};
use crate::ops::{add, mul, neg};

/// Lifts a unary function over a sequence.
///
/// Returns a function that, given a slice, produces a new `Vec` of the same
/// length where element `i` is `f(input[i])`. Empty input yields empty output.
///
/// The output element type is generic, so predicates like [`crate::ops::lt`]
/// partials lift as readily as numeric operators.
///
/// # Example
/// ```rust
/// use gradops::ops::neg;
/// use gradops::seq::transform;
///
/// let negate = transform(neg);
/// assert_eq!(negate(&[1.0, -2.0, 3.0]), vec![-1.0, 2.0, -3.0]);
/// ```
pub fn transform<B, F>(f: F) -> impl Fn(&[f64]) -> Vec<B>
where
    F: Fn(f64) -> B,
{
    move |ls: &[f64]| ls.iter().map(|&e| f(e)).collect()
}

/// Lifts a fallible unary function over a sequence.
///
/// # Errors
/// The first error returned by `f` is propagated unchanged; no partial
/// result is produced.
pub fn try_transform<F>(f: F) -> impl Fn(&[f64]) -> Result<Vec<f64>>
where
    F: Fn(f64) -> Result<f64>,
{
    move |ls: &[f64]| ls.iter().map(|&e| f(e)).collect()
}

/// Combines two equal-length sequences pairwise with a binary function.
///
/// Element `i` of the output is `f(a[i], b[i])`.
///
/// # Errors
/// Returns [`Error::LengthMismatch`] before producing any output when the
/// lengths differ. Sequences are never truncated or padded to fit.
///
/// # Example
/// ```rust
/// use gradops::ops::add;
/// use gradops::seq::combine;
///
/// let out = combine(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], add).unwrap();
/// assert_eq!(out, vec![5.0, 7.0, 9.0]);
/// ```
pub fn combine<B, F>(a: &[f64], b: &[f64], f: F) -> Result<Vec<B>>
where
    F: Fn(f64, f64) -> B,
{
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect())
}

/// Combines two equal-length sequences pairwise with a fallible binary
/// function.
///
/// # Errors
/// Returns [`Error::LengthMismatch`] when the lengths differ, checked before
/// `f` runs at all; afterwards the first error returned by `f` is propagated
/// unchanged.
pub fn try_combine<F>(a: &[f64], b: &[f64], f: F) -> Result<Vec<f64>>
where
    F: Fn(f64, f64) -> Result<f64>,
{
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect()
}

/// Reduces a sequence to a single value by a strict left fold.
///
/// Returns a function that, given a slice, runs `acc = f(acc, e)` over the
/// elements in order starting from `start`. Empty input returns `start`
/// unchanged. The left-to-right order is part of the contract; this is not an
/// unordered reduction.
///
/// # Example
/// ```rust
/// use gradops::ops::mul;
/// use gradops::seq::fold;
///
/// let product = fold(mul, 1.0);
/// assert_eq!(product(&[1.0, 2.0, 3.0, 4.0]), 24.0);
/// assert_eq!(product(&[]), 1.0);
/// ```
pub fn fold<F>(f: F, start: f64) -> impl Fn(&[f64]) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    move |ls: &[f64]| {
        let mut acc = start;
        for &e in ls {
            acc = f(acc, e);
        }
        acc
    }
}

/// Negates every element of a sequence.
pub fn neg_all(ls: &[f64]) -> Vec<f64> {
    transform(neg)(ls)
}

/// Adds two sequences elementwise.
///
/// # Errors
/// Returns [`Error::LengthMismatch`] when the lengths differ.
pub fn add_all(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    combine(a, b, add)
}

/// Sums all elements of a sequence. Empty input sums to `0.0`.
pub fn sum(ls: &[f64]) -> f64 {
    fold(add, 0.0)(ls)
}

/// Multiplies all elements of a sequence together. Empty input yields `1.0`.
pub fn prod(ls: &[f64]) -> f64 {
    fold(mul, 1.0)(ls)
}
