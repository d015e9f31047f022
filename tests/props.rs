//! Property-based tests for the scalar operators and sequence combinators.
//!
//! Uses proptest to verify invariants that must hold for all inputs:
//! - sigmoid range and tail stability
//! - reciprocal involution
//! - maximum selection and idempotence
//! - combinator length/order preservation and strict left-fold semantics

use proptest::prelude::*;

use gradops::backprop::relu_back;
use gradops::ops::{add, id, inv, is_close, max, mul, neg, relu, sigmoid};
use gradops::seq::{add_all, combine, fold, neg_all, sum, transform};

proptest! {
    #[test]
    fn sigmoid_stays_in_unit_interval(x in -700.0f64..36.0) {
        // above ~36.7 the result rounds to exactly 1.0 in f64, and below
        // ~-745 it underflows to exactly 0.0; inside that window the
        // interval is strictly open
        let y = sigmoid(x);
        prop_assert!(y > 0.0 && y < 1.0);
    }

    #[test]
    fn sigmoid_never_overflows(x in -1e9f64..1e9) {
        let y = sigmoid(x);
        prop_assert!(y.is_finite());
        prop_assert!((0.0..=1.0).contains(&y));
    }

    #[test]
    fn sigmoid_is_monotone(x in -30.0f64..30.0, step in 0.5f64..10.0) {
        prop_assert!(sigmoid(x) <= sigmoid(x + step));
    }

    #[test]
    fn inv_is_an_involution(x in -1e6f64..1e6) {
        prop_assume!(x.abs() > 1e-3);
        let twice = inv(inv(x).unwrap()).unwrap();
        prop_assert!(is_close(twice, x));
    }

    #[test]
    fn max_selects_the_larger(x in -1e9f64..1e9, y in -1e9f64..1e9) {
        let expected = if x >= y { x } else { y };
        prop_assert_eq!(max(x, y), expected);
        prop_assert_eq!(max(x, x), x);
    }

    #[test]
    fn relu_matches_max_with_zero(x in -1e9f64..1e9) {
        prop_assert_eq!(relu(x), max(0.0, x));
        prop_assert!(relu(x) >= 0.0);
    }

    #[test]
    fn relu_back_gates_on_the_original_input(x in -1e6f64..1e6, g in -1e6f64..1e6) {
        let out = relu_back(x, g);
        if x > 0.0 {
            prop_assert_eq!(out, g);
        } else {
            prop_assert_eq!(out, 0.0);
        }
    }

    #[test]
    fn transform_preserves_length_and_order(ls in prop::collection::vec(-1e6f64..1e6, 0..64)) {
        let out = transform(neg)(&ls);
        prop_assert_eq!(out.len(), ls.len());
        for (o, e) in out.iter().zip(&ls) {
            prop_assert_eq!(*o, -e);
        }
    }

    #[test]
    fn transform_id_is_identity(ls in prop::collection::vec(-1e6f64..1e6, 0..64)) {
        prop_assert_eq!(transform(id)(&ls), ls);
    }

    #[test]
    fn neg_all_is_an_involution(ls in prop::collection::vec(-1e6f64..1e6, 0..64)) {
        prop_assert_eq!(neg_all(&neg_all(&ls)), ls);
    }

    #[test]
    fn combine_rejects_mismatched_lengths(
        a in prop::collection::vec(-1e3f64..1e3, 0..32),
        b in prop::collection::vec(-1e3f64..1e3, 0..32),
    ) {
        let out = combine(&a, &b, add);
        if a.len() == b.len() {
            prop_assert!(out.is_ok());
        } else {
            prop_assert!(out.is_err());
        }
    }

    #[test]
    fn fold_add_agrees_with_iterator_sum(ls in prop::collection::vec(-1e6f64..1e6, 0..64)) {
        // std's Sum on f64 is the same strict left-to-right accumulation
        prop_assert_eq!(fold(add, 0.0)(&ls), ls.iter().sum::<f64>());
    }

    #[test]
    fn fold_mul_empty_returns_start(start in -1e6f64..1e6) {
        prop_assert_eq!(fold(mul, start)(&[]), start);
    }

    #[test]
    fn sum_of_add_all_doubles_the_sum(ls in prop::collection::vec(-1e6f64..1e6, 0..64)) {
        // x + x and scaling by two are exact in binary floating point, so
        // pairing a sequence with itself doubles its sum exactly
        let doubled = add_all(&ls, &ls).unwrap();
        prop_assert_eq!(sum(&doubled), 2.0 * sum(&ls));
    }
}
