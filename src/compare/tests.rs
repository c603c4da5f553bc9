// src/compare/tests.rs

use super::*;
use crate::error::TupleError;
use crate::tuple::{Tuple2, Tuple3, Tuple4, TupleN};
use test_log::test;

const NONE3: Option<&Tuple3<f64>> = None;
const NONE_N: Option<&TupleN<f64>> = None;
const NONE_SLICE: Option<&[f64]> = None;

// --- Whole-tuple equality ---

#[test]
fn fixed_against_raw_array() {
    let t = Tuple3::new(1.0, 2.0, 3.0);
    assert!(equals(&t, &[1.0, 2.0, 3.0]));
    assert!(!equals(&t, &[1.0, 2.0, 3.0, 4.0]));
    assert!(!equals(&t, &[1.0, 2.0]));
    assert!(!equals(&t, &[1.0, 2.5, 3.0]));
}

#[test]
fn every_representation_pairing_agrees() {
    let fixed = Tuple4::new(1.0, -2.0, 0.5, 8.0);
    let dynamic = TupleN::new(vec![1.0, -2.0, 0.5, 8.0]);
    let array = [1.0, -2.0, 0.5, 8.0];
    let vec = array.to_vec();
    let slice: &[f64] = &array;
    let positional = (1.0, -2.0, 0.5, 8.0);

    assert!(equals(&fixed, &dynamic));
    assert!(equals(&fixed, &array));
    assert!(equals(&fixed, &vec));
    assert!(equals(&fixed, slice));
    assert!(equals(&fixed, &positional));
    assert!(equals(&dynamic, &array));
    assert!(equals(&dynamic, slice));
    assert!(equals(&dynamic, &positional));
    assert!(equals(&array, &vec));
    assert!(equals(slice, &positional));

    let other = TupleN::new(vec![1.0, -2.0, 0.5, 8.5]);
    assert!(!equals(&fixed, &other));
    assert!(!equals(&other, &positional));
    assert!(!equals(&array, &other));
}

#[test]
fn symmetry_across_pairings() {
    let a = Tuple3::new(1.0, 2.0, f64::INFINITY);
    let cases: Vec<Vec<f64>> = vec![
        vec![1.0, 2.0, f64::INFINITY],
        vec![1.0, 2.0, 3.0],
        vec![1.0, 2.0],
        vec![1.0, 2.0, f64::INFINITY, 0.0],
        vec![1.0, 2.0, f64::NAN],
    ];
    for b in &cases {
        assert_eq!(equals(&a, b), equals(b, &a), "exact symmetry for {b:?}");
        assert_eq!(
            equals_within(0.5, &a, b),
            equals_within(0.5, b, &a),
            "tolerance symmetry for {b:?}"
        );
    }
}

#[test]
fn dimension_mismatch_is_false_not_error() {
    let raw = [1.0, 2.0, 3.0];
    let dynamic = TupleN::new(vec![1.0, 2.0, 3.0, 4.0]);
    assert!(!equals(&raw, &dynamic));
    assert!(!equals_within(f64::INFINITY, &raw, &dynamic));
    assert_eq!(equals_at(0, &raw, &dynamic), Ok(false));
    assert_eq!(equals_at(10, &raw, &dynamic), Ok(false));
}

#[test]
fn empty_tuples_are_equal() {
    let a: Vec<i32> = Vec::new();
    let b: [i32; 0] = [];
    assert!(equals(&a, &b));
}

#[test]
fn nan_breaks_reflexivity() {
    let t = Tuple3::new(1.0, f64::NAN, 3.0);
    assert!(!equals(&t, &t));
    assert!(!equals_within(0.0, &t, &t));
    assert!(!equals_within(f64::INFINITY, &t, &t));
    assert_eq!(equals_at(1, &t, &t), Ok(false));
    assert_eq!(equals_at(0, &t, &t), Ok(true));
}

#[test]
fn reflexive_without_nan() {
    let t = Tuple4::new(0.0, -0.0, f64::INFINITY, f64::MIN_POSITIVE);
    assert!(equals(&t, &t));
    assert!(equals_within(0.0, &t, &t));

    let ints = TupleN::new(vec![i64::MIN, 0, i64::MAX]);
    assert!(equals(&ints, &ints));
}

#[test]
fn signed_zeros_compare_equal() {
    assert!(equals(&Tuple2::new(0.0, -0.0), &(-0.0, 0.0)));
}

// --- Null rule ---

#[test]
fn null_symmetry() {
    let t = Tuple3::new(1.0, 2.0, 3.0);
    let raw = [1.0, 2.0, 3.0];

    assert!(equals(NONE3, NONE_N));
    assert!(equals(NONE_SLICE, NONE3));
    assert!(!equals(NONE3, &raw));
    assert!(!equals(&raw, NONE3));
    assert!(!equals(Some(&t), NONE_SLICE));
    assert!(equals(Some(&t), Some(&raw)));
    assert!(equals(Some(&t), &raw[..]));
}

#[test]
fn null_rule_applies_to_every_two_operand_form() {
    let t = Tuple3::new(1.0, 2.0, 3.0);

    assert!(equals_within(0.1, NONE3, NONE_N));
    assert!(!equals_within(0.1, &t, NONE_N));
    assert_eq!(equals_at(1, NONE3, NONE_N), Ok(true));
    assert_eq!(equals_at(1, NONE3, &t), Ok(false));
    assert_eq!(equals_at_within(0.1, 2, &t, NONE3), Ok(false));
    assert!(equals_v0(NONE3, NONE3));
    assert!(!equals_v2(Some(&t), NONE3));
    assert!(!equals_v1_within(0.5, NONE3, Some(&t)));
}

#[test]
fn null_rule_precedes_index_check() {
    // With an absent side there is no dimensionality to check against.
    assert_eq!(equals_at(99, NONE3, NONE_N), Ok(true));
    assert_eq!(equals_at(99, NONE_N, &[1.0]), Ok(false));
}

// --- Tolerance ---

#[test]
fn tolerance_equality() {
    let a = Tuple3::new(1.0, 2.0, 3.0005);
    let b = Tuple3::new(1.0, 2.0, 3.0);
    assert!(equals_within(0.001, &a, &b));
    assert!(!equals(&a, &b));
    assert!(!equals_within(0.0001, &a, &b));
}

#[test]
fn tolerance_compares_against_the_other_operand() {
    // b's own components are close to each other, but not to a's.
    let a = Tuple4::new(0.0, 0.0, 0.0, 0.0);
    let b = Tuple4::new(5.0, 5.0, 5.0, 5.0);
    assert!(!equals_within(0.5, &a, &b));
    assert!(!equals_within(0.5, &Tuple3::new(0.0, 0.0, 0.0), &(5.0, 5.0, 5.0)));

    let c = Tuple4::new(0.1, -0.1, 0.05, 0.0);
    assert!(equals_within(0.1, &a, &c));
}

#[test]
fn tolerance_monotonicity() {
    let a = TupleN::new(vec![1.0, 2.0, 3.0]);
    let b = [1.05, 1.9, 3.0];
    let tolerances = [0.0, 0.01, 0.05, 0.1, 0.2, 1.0];
    let first = tolerances
        .iter()
        .position(|t| equals_within(*t, &a, &b))
        .expect("some tolerance admits the pair");
    for t in &tolerances[first..] {
        assert!(equals_within(*t, &a, &b), "tolerance {t} should still admit");
    }
    for t in &tolerances[..first] {
        assert!(!equals_within(*t, &a, &b), "tolerance {t} should reject");
    }
}

#[test]
fn zero_tolerance_matches_exact() {
    let pairs: [([f64; 2], [f64; 2]); 4] = [
        ([1.0, 2.0], [1.0, 2.0]),
        ([0.0, 1.0], [-0.0, 1.0]),
        ([f64::INFINITY, 1.0], [f64::INFINITY, 1.0]),
        ([f64::NAN, 1.0], [f64::NAN, 1.0]),
    ];
    for (a, b) in &pairs {
        assert_eq!(equals(a, b), equals_within(0.0, a, b), "{a:?} vs {b:?}");
    }
}

#[test]
fn f32_tolerance() {
    let a = Tuple2::new(1.0f32, 2.0);
    let b = vec![1.25f32, 2.0];
    assert!(equals_within(0.25f32, &a, &b));
    assert!(!equals_within(0.125f32, &a, &b));
}

// --- Per-index equality ---

#[test]
fn equals_at_compares_one_component() {
    let a = Tuple3::new(1.0, 2.0, 3.0);
    let b = [9.0, 2.0, 7.0];
    assert_eq!(equals_at(0, &a, &b), Ok(false));
    assert_eq!(equals_at(1, &a, &b), Ok(true));
    assert_eq!(equals_at(2, &a, &b), Ok(false));
    assert_eq!(equals_at_within(2.0, 2, &a, &b), Ok(false));
    assert_eq!(equals_at_within(4.0, 2, &a, &b), Ok(true));
}

#[test]
fn equals_at_index_out_of_range() {
    let a = Tuple3::new(1.0, 2.0, 3.0);
    let b = Tuple3::new(1.0, 2.0, 3.0);
    assert_eq!(
        equals_at(3, &a, &b),
        Err(TupleError::IndexOutOfRange { index: 3, size: 3 })
    );
    assert_eq!(
        equals_at_within(0.1, 7, &a, &[1.0, 2.0, 3.0]),
        Err(TupleError::IndexOutOfRange { index: 7, size: 3 })
    );
}

#[test]
fn named_components() {
    let a = Tuple4::new(1, 2, 3, 4);
    let b = (1, 0, 3, 0);
    assert!(equals_v0(&a, &b));
    assert!(!equals_v1(&a, &b));
    assert!(equals_v2(&a, &b));
    assert!(!equals_v3(&a, &b));

    let c = Tuple2::new(1.0, 2.0);
    let d = [1.4, 2.6];
    assert!(equals_v0_within(0.5, &c, &d));
    assert!(!equals_v1_within(0.5, &c, &d));

    let e = Tuple3::new(0.0, 0.0, 1.0);
    assert!(equals_v2_within(0.01, &e, &[0.5, 0.5, 1.005]));
    assert!(equals_v3_within(0.0, &[0.0, 0.0, 0.0, 2.0], &(9.0, 9.0, 9.0, 2.0)));
}

#[test]
fn named_components_respect_dimension_check() {
    // Both carry a v0, but a 3-tuple never equals a 4-tuple.
    let a = Tuple3::new(1, 2, 3);
    let b = Tuple4::new(1, 2, 3, 4);
    assert!(!equals_v0(&a, &b));
    assert!(equals_at(0, &a, &[1, 2, 3]).unwrap());
}

#[test]
fn exact_only_scalars() {
    assert!(equals(&Tuple2::new(true, false), &[true, false]));
    assert!(!equals(&TupleN::new(vec!['a', 'b']), &('a', 'c')));
    assert_eq!(equals_at(1, &[1u8, 2], &(0u8, 2u8)), Ok(true));
}

// --- Validity ---

#[test]
fn finiteness() {
    assert!(is_finite(&Tuple3::new(1.0, 2.0, 3.0)));
    assert!(!is_finite(&Tuple3::new(1.0, f64::INFINITY, 3.0)));
    assert!(!is_finite(&[f64::NAN]));
    assert!(!is_finite(&vec![0.0f32, f32::NEG_INFINITY]));
    assert!(is_finite::<[f64]>(&[]));
}

#[test]
fn finiteness_at_index() {
    let t = TupleN::new(vec![1.0, f64::NAN, f64::INFINITY]);
    assert_eq!(is_finite_at(0, &t), Ok(true));
    assert_eq!(is_finite_at(1, &t), Ok(false));
    assert_eq!(is_finite_at(2, &t), Ok(false));
    assert_eq!(
        is_finite_at(3, &t),
        Err(TupleError::IndexOutOfRange { index: 3, size: 3 })
    );
}

#[test]
fn zero_checks() {
    assert!(is_zero(&Tuple3::new(0.0, -0.0, 0.0)));
    assert!(!is_zero(&Tuple3::new(0.0, 1e-300, 0.0)));
    assert!(!is_zero(&[f64::NAN, 0.0]));
    assert!(is_zero(&[0i32, 0, 0, 0]));
    assert!(!is_zero(&(0u64, 1u64)));

    assert!(is_zero_within(1e-9, &Tuple3::new(1e-10, -1e-10, 0.0)));
    assert!(!is_zero_within(1e-9, &Tuple3::new(1e-8, 0.0, 0.0)));
    assert!(!is_zero_within(f64::INFINITY, &[f64::NAN]));
}

#[test]
fn zero_checks_at_index() {
    let t = Tuple4::new(0.0, 0.25, -0.0, f64::NAN);
    assert_eq!(is_zero_at(0, &t), Ok(true));
    assert_eq!(is_zero_at(1, &t), Ok(false));
    assert_eq!(is_zero_at(2, &t), Ok(true));
    assert_eq!(is_zero_at(3, &t), Ok(false));
    assert_eq!(is_zero_at_within(0.5, 1, &t), Ok(true));
    assert_eq!(is_zero_at_within(0.5, 3, &t), Ok(false));
    assert_eq!(
        is_zero_at(4, &t),
        Err(TupleError::IndexOutOfRange { index: 4, size: 4 })
    );
    assert_eq!(
        is_zero_at_within(0.5, 4, &t),
        Err(TupleError::IndexOutOfRange { index: 4, size: 4 })
    );
}
