//! gradops: scalar forward/backward operator primitives for reverse-mode autodiff.
//!
//! This crate is the leaf layer of a reverse-mode automatic differentiation
//! engine: a small library of pure scalar functions, the analytic backward
//! rules matched to a subset of them, and generic combinators that lift the
//! scalar functions over ordered sequences.
//!
//! # Features
//!
//! - Elementary scalar operators with domain checks surfaced as `Result`s,
//!   never process-aborting assertions.
//! - Matched forward/backward pairs: every backward rule is a free function of
//!   the *original* input and the upstream gradient, so a tape only has to
//!   record which rule to invoke.
//! - `transform` / `combine` / `fold` combinators plus the derived sequence
//!   operations built from them.
//!
//! # Goals
//!
//! - Prioritize correctness and numerical stability over black-box abstraction.
//! - Keep every operator stateless and referentially transparent so a graph
//!   layer built on top owes this crate nothing at runtime: a backward rule is
//!   re-derivable from the original input alone.
//!
//! # Modules
//!
//! - [`ops`] — Scalar forward operators.
//! - [`backprop`] — Backward (gradient-propagation) rules paired with `ops`.
//! - [`seq`] — Sequence combinators and derived operations.
//! - [`error`] — Error taxonomy shared by the fallible operators.
//!
//! # Example
//!
//! ```rust
//! use gradops::seq::{add_all, sum};
//!
//! let a = [1.0, 2.0, 3.0];
//! let b = [4.0, 5.0, 6.0];
//! let total = sum(&add_all(&a, &b).unwrap());
//! assert_eq!(total, 21.0);
//! ```

pub mod backprop;
pub mod error;
pub mod ops;
pub mod seq;

pub use error::{Error, Result};
