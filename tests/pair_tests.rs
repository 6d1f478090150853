#![cfg(feature = "pair")]
//! Unit tests for pair utilities.

use arrowline::pair::{PairExt, assoc, dup, fst, pair, snd, swap, unassoc};
use rstest::rstest;

// =============================================================================
// Construction and projection
// =============================================================================

#[rstest]
#[case(0, "zero")]
#[case(-7, "negative")]
#[case(i32::MAX, "max")]
fn pair_projects_back_to_components(#[case] number: i32, #[case] label: &str) {
    let built = pair(number, label);
    assert_eq!(fst(built), number);
    assert_eq!(snd(built), label);
}

#[rstest]
fn projections_take_owned_components() {
    let owned = pair(String::from("left"), vec![1, 2]);
    assert_eq!(fst(owned.clone()), "left");
    assert_eq!(snd(owned), vec![1, 2]);
}

// =============================================================================
// swap
// =============================================================================

#[rstest]
fn swap_exchanges_differently_typed_components() {
    let swapped: (&str, i32) = swap((3, "x"));
    assert_eq!(swapped, ("x", 3));
}

#[rstest]
fn swap_is_its_own_inverse() {
    let original = (String::from("a"), 1.5);
    assert_eq!(swap(swap(original.clone())), original);
}

#[rstest]
fn swap_projection_matches_opposite_component() {
    let value = (1, 'c');
    assert_eq!(fst(swap(value)), snd(value));
    assert_eq!(snd(swap(value)), fst(value));
}

// =============================================================================
// dup and reassociation
// =============================================================================

#[rstest]
fn dup_fills_both_components() {
    assert_eq!(dup("same"), ("same", "same"));
}

#[rstest]
fn assoc_moves_nesting_right() {
    assert_eq!(assoc(((1, 2), 3)), (1, (2, 3)));
}

#[rstest]
fn unassoc_moves_nesting_left() {
    assert_eq!(unassoc((1, (2, 3))), ((1, 2), 3));
}

// =============================================================================
// PairExt
// =============================================================================

#[rstest]
fn pair_ext_methods_delegate_to_free_functions() {
    let value = (42, "answer");
    assert_eq!(value.swap(), ("answer", 42));
    assert_eq!(value.fst(), 42);
    assert_eq!(value.snd(), "answer");
}
