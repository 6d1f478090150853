#![cfg(feature = "arrow")]
//! Integration tests for the arrow combinators and the `Arrow` wrapper.

use arrowline::arrow::{
    Arrow, ArrowExt, arr, compose, constant, fanout, first, identity, second, split, thunk,
};
use rstest::rstest;
use std::cell::RefCell;

fn increment(value: i32) -> i32 {
    value + 1
}

fn double(value: i32) -> i32 {
    value * 2
}

fn show(value: i32) -> String {
    value.to_string()
}

// =============================================================================
// End-to-end scenario
// =============================================================================

mod scenario {
    use super::*;

    #[rstest]
    fn chain_of_three_stages_formats_result() {
        let chain = compose(compose(increment, double), show);
        assert_eq!(chain(3), "8");
    }

    #[rstest]
    fn fanout_applies_both_to_same_input() {
        assert_eq!(fanout(increment, double)(3), (4, 6));
    }

    #[rstest]
    fn split_applies_each_to_its_component() {
        assert_eq!(split(increment, double)((3, 5)), (4, 10));
    }

    #[rstest]
    fn first_leaves_second_component_alone() {
        assert_eq!(first(increment)((3, "x")), (4, "x"));
    }

    #[rstest]
    fn second_leaves_first_component_alone() {
        assert_eq!(second(double)(("x", 3)), ("x", 6));
    }

    #[rstest]
    fn wrapper_chain_matches_prefix_nesting() {
        let chained = increment.arrow().and_then(double).and_then(show);
        assert_eq!(chained.run(3), show(double(increment(3))));
        assert_eq!(chained.run(3), "8");
    }
}

// =============================================================================
// Core combinators
// =============================================================================

mod combinators {
    use super::*;

    #[rstest]
    fn arr_returns_function_unchanged() {
        let lifted = arr(increment);
        assert_eq!(lifted(41), increment(41));
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    #[case(100)]
    fn compose_with_identity_on_either_side_is_neutral(#[case] input: i32) {
        assert_eq!(compose(identity, double)(input), double(input));
        assert_eq!(compose(double, identity)(input), double(input));
    }

    #[rstest]
    fn compose_threads_types_through_stages() {
        let length_of_shown = compose(show, |text: String| text.len());
        assert_eq!(length_of_shown(12345), 5);
    }

    #[rstest]
    fn composed_value_can_be_reused() {
        let pipeline = compose(increment, double);
        assert_eq!(pipeline(1), 4);
        assert_eq!(pipeline(2), 6);
    }

    #[rstest]
    fn composites_reenter_the_algebra() {
        let inner = fanout(increment, double);
        let outer = compose(inner, split(show, show));
        assert_eq!(outer(3), (String::from("4"), String::from("6")));
    }

    #[rstest]
    fn first_moves_non_clone_passthrough() {
        struct Token(u8);

        let (value, token) = first(increment)((1, Token(9)));
        assert_eq!(value, 2);
        assert_eq!(token.0, 9);
    }

    #[rstest]
    fn fanout_of_strings_clones_the_input() {
        let lengths = fanout(|text: String| text.len(), |text: String| text.to_uppercase());
        assert_eq!(lengths(String::from("abc")), (3, String::from("ABC")));
    }

    #[rstest]
    fn thunk_enters_as_unit_input() {
        let answer = compose(thunk(|| 21), double);
        assert_eq!(answer(()), 42);
    }

    #[rstest]
    fn constant_ignores_input() {
        let always_seven = compose(constant::<_, i32>(7), double);
        assert_eq!(always_seven(-100), 14);
    }

    #[rstest]
    fn stages_run_left_to_right() {
        let log = RefCell::new(Vec::new());
        let record = |label: &'static str| {
            let log = &log;
            move |value: i32| {
                log.borrow_mut().push(label);
                value
            }
        };

        let pipeline = compose(
            compose(record("read"), fanout(record("left"), record("right"))),
            split(record("first"), record("second")),
        );
        assert_eq!(pipeline(5), (5, 5));
        assert_eq!(*log.borrow(), vec!["read", "left", "right", "first", "second"]);
    }
}

// =============================================================================
// Arrow wrapper
// =============================================================================

mod wrapper {
    use super::*;

    #[rstest]
    fn new_and_run_is_transparent() {
        let wrapped = Arrow::new(increment);
        assert_eq!(wrapped.run(9), increment(9));
    }

    #[rstest]
    fn into_inner_returns_callable_composite() {
        let plain = Arrow::new(increment).and_then(double).into_inner();
        assert_eq!(plain(3), 8);
    }

    #[rstest]
    fn identity_arrow_is_neutral() {
        let left = Arrow::identity().and_then(double);
        let right = Arrow::new(double).and_then(identity);
        assert_eq!(left.run(7), 14);
        assert_eq!(right.run(7), 14);
    }

    #[rstest]
    fn compose_runs_previous_stage_first() {
        let describe = Arrow::new(show).compose(increment);
        assert_eq!(describe.run(1), "2");
    }

    #[rstest]
    fn first_and_second_methods() {
        assert_eq!(Arrow::new(increment).first().run((3, "x")), (4, "x"));
        assert_eq!(Arrow::new(double).second().run(("x", 3)), ("x", 6));
    }

    #[rstest]
    fn split_and_fanout_methods() {
        assert_eq!(Arrow::new(increment).split(double).run((3, 5)), (4, 10));
        assert_eq!(Arrow::new(increment).fanout(double).run(3), (4, 6));
    }

    #[rstest]
    fn thunk_arrow_is_forced_with_unit() {
        let greeting = Arrow::from_thunk(|| "hello").and_then(|text: &str| text.len());
        assert_eq!(greeting.force(), 5);
        assert_eq!(greeting.run(()), 5);
    }

    #[rstest]
    fn from_conversion_and_extension_agree() {
        let converted: Arrow<fn(i32) -> i32> = (increment as fn(i32) -> i32).into();
        let extended = increment.arrow();
        assert_eq!(converted.run(1), extended.run(1));
    }

    #[rstest]
    fn wrapped_chain_is_reusable() {
        let pipeline = increment
            .arrow()
            .fanout(double)
            .and_then(|(left, right): (i32, i32)| left * right);
        let results: Vec<i32> = (0..4).map(|value| pipeline.run(value)).collect();
        assert_eq!(results, vec![0, 4, 12, 24]);
    }

    #[rstest]
    fn cloned_arrow_behaves_identically() {
        let prefix = String::from("n=");
        let original = Arrow::new(move |value: i32| format!("{prefix}{value}"));
        let cloned = original.clone();
        assert_eq!(original.run(1), cloned.run(1));
        assert_eq!(cloned.run(2), "n=2");
    }
}
