//! The core combinator set over plain functions.
//!
//! Every combinator takes ordinary [`Fn`] values and returns a new `impl Fn`,
//! so results can be called directly or fed back into another combinator.
//! None of them inspects, catches or rewraps what the supplied functions do:
//! a panic raised inside a stage unwinds through the composite unchanged, and
//! a `Result` returned by a stage is just another output value.

use crate::pair::{dup, swap};

/// Lifts a unary function into the algebra.
///
/// Every `Fn(B) -> C` already is a transformation, so `arr` returns its
/// argument unchanged. It exists to mark the leaves of a pipeline.
///
/// # Examples
///
/// ```rust
/// use arrowline::arrow::arr;
///
/// let increment = arr(|value: i32| value + 1);
/// assert_eq!(increment(3), 4);
/// ```
#[inline]
pub const fn arr<F>(function: F) -> F {
    function
}

/// Returns the value unchanged.
///
/// The identity is the unit of [`compose`]:
/// - `compose(identity, f)` is equivalent to `f`
/// - `compose(f, identity)` is equivalent to `f`
///
/// # Examples
///
/// ```rust
/// use arrowline::arrow::{compose, identity};
///
/// let double = |value: i32| value * 2;
/// assert_eq!(compose(identity, double)(5), double(5));
/// assert_eq!(compose(double, identity)(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// # Examples
///
/// ```rust
/// use arrowline::arrow::constant;
///
/// let always_five = constant::<_, &str>(5);
/// assert_eq!(always_five("ignored"), 5);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Turns a zero-argument producer into a transformation from `()`.
///
/// Deferred values enter the algebra like any other stage; the unit input
/// carries no information.
///
/// # Examples
///
/// ```rust
/// use arrowline::arrow::{compose, thunk};
///
/// let read = thunk(|| String::from("1.5"));
/// let parse = compose(read, |text: String| text.parse::<f64>());
/// assert_eq!(parse(()), Ok(1.5));
/// ```
#[inline]
pub fn thunk<O, P>(producer: P) -> impl Fn(()) -> O
where
    P: Fn() -> O,
{
    move |()| producer()
}

/// Sequential composition, written `>>>` in arrow notation.
///
/// `compose(f, g)(b) == g(f(b))`: `f` runs first and its output becomes the
/// input of `g`. This is the left-to-right counterpart of mathematical
/// composition.
///
/// # Laws
///
/// - **Associativity**: `compose(compose(f, g), h) == compose(f, compose(g, h))`
/// - **Left Identity**: `compose(identity, f) == f`
/// - **Right Identity**: `compose(f, identity) == f`
///
/// # Examples
///
/// ```rust
/// use arrowline::arrow::compose;
///
/// let increment = |value: i32| value + 1;
/// let show = |value: i32| value.to_string();
///
/// let describe = compose(increment, show);
/// assert_eq!(describe(41), "42");
/// ```
#[inline]
pub fn compose<B, C, D, F, G>(first: F, second: G) -> impl Fn(B) -> D
where
    F: Fn(B) -> C,
    G: Fn(C) -> D,
{
    move |input| second(first(input))
}

/// Applies a function to the first component of a pair.
///
/// The second component is moved through untouched.
///
/// # Examples
///
/// ```rust
/// use arrowline::arrow::first;
///
/// let increment_first = first(|value: i32| value + 1);
/// assert_eq!(increment_first((3, "x")), (4, "x"));
/// ```
#[inline]
pub fn first<B, C, D, F>(function: F) -> impl Fn((B, D)) -> (C, D)
where
    F: Fn(B) -> C,
{
    move |(input, passthrough)| (function(input), passthrough)
}

/// Applies a function to the second component of a pair.
///
/// Defined as `swap >>> first(f) >>> swap`, so
/// `second(f)(p) == swap(first(f)(swap(p)))` holds by construction.
///
/// # Examples
///
/// ```rust
/// use arrowline::arrow::second;
///
/// let double_second = second(|value: i32| value * 2);
/// assert_eq!(double_second(("x", 3)), ("x", 6));
/// ```
#[inline]
pub fn second<B, C, D, F>(function: F) -> impl Fn((D, B)) -> (D, C)
where
    F: Fn(B) -> C,
{
    compose(
        compose(swap::<D, B>, first::<B, C, D, F>(function)),
        swap::<C, D>,
    )
}

/// Applies two functions to the two components of a pair, written `***`.
///
/// Defined as `first(left) >>> second(right)`. The left function is evaluated
/// before the right one.
///
/// # Laws
///
/// - **Decomposition**: `split(f, g) == compose(first(f), second(g))`
/// - **Independence**: `split(f, g) == compose(second(g), first(f))`
///
/// # Examples
///
/// ```rust
/// use arrowline::arrow::split;
///
/// let both = split(|value: i32| value + 1, |value: i32| value * 2);
/// assert_eq!(both((3, 5)), (4, 10));
/// ```
#[inline]
pub fn split<B, C, D, E, F, G>(left: F, right: G) -> impl Fn((B, D)) -> (C, E)
where
    F: Fn(B) -> C,
    G: Fn(D) -> E,
{
    compose(
        first::<B, C, D, F>(left),
        second::<D, E, C, G>(right),
    )
}

/// Feeds one input to two functions and pairs their results, written `&&&`.
///
/// Defined as `dup >>> split(left, right)`, so
/// `fanout(f, g)(b) == (f(b), g(b))`. The input is duplicated by value, hence
/// the [`Clone`] bound. The left function is evaluated first.
///
/// # Examples
///
/// ```rust
/// use arrowline::arrow::fanout;
///
/// let both = fanout(|value: i32| value + 1, |value: i32| value * 2);
/// assert_eq!(both(3), (4, 6));
/// ```
#[inline]
pub fn fanout<B, C, D, F, G>(left: F, right: G) -> impl Fn(B) -> (C, D)
where
    B: Clone,
    F: Fn(B) -> C,
    G: Fn(B) -> D,
{
    compose(dup::<B>, split::<B, C, B, D, F, G>(left, right))
}
