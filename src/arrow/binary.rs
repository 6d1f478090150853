//! Two-input transformations.
//!
//! Some stages naturally take two independent arguments, such as adding two
//! numbers. Rather than packing both into a pair just to satisfy the unary
//! interface, the functions here compose binary functions directly and
//! convert between the two shapes when a pair does appear.
//!
//! # Laws
//!
//! - **Shape Round Trip**: `untuple(uncurry(h))(a, b) == h(a, b)`
//! - **Split With**: `split_with(f, g, h)(b, d) == uncurry(h)(split(f, g)((b, d)))`
//! - **Fanout With**: `fanout_with(f, g, h)(b) == uncurry(h)(fanout(f, g)(b))`
//!
//! # Examples
//!
//! ```rust
//! use arrowline::arrow::{fanout_with, split_with};
//!
//! let add = |left: i32, right: i32| left + right;
//!
//! let sum_of_both = split_with(|value: i32| value + 1, |value: i32| value * 2, add);
//! assert_eq!(sum_of_both(3, 5), 14);
//!
//! let spread = fanout_with(|value: i32| value + 1, |value: i32| value * 2, add);
//! assert_eq!(spread(3), 10);
//! ```

use std::fmt;

use super::combinators::{compose, fanout, split};

/// Turns a binary function into a unary one over pairs.
///
/// # Examples
///
/// ```rust
/// use arrowline::arrow::uncurry;
///
/// let add = uncurry(|left: i32, right: i32| left + right);
/// assert_eq!(add((2, 3)), 5);
/// ```
#[inline]
pub fn uncurry<A, B, C, H>(binary: H) -> impl Fn((A, B)) -> C
where
    H: Fn(A, B) -> C,
{
    move |(left, right)| binary(left, right)
}

/// Turns a unary function over pairs into a binary one. Inverse of [`uncurry`].
///
/// # Examples
///
/// ```rust
/// use arrowline::arrow::untuple;
///
/// let add = untuple(|(left, right): (i32, i32)| left + right);
/// assert_eq!(add(2, 3), 5);
/// ```
#[inline]
pub fn untuple<A, B, C, F>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn((A, B)) -> C,
{
    move |left, right| function((left, right))
}

/// Runs a binary function, then a unary one on its result.
///
/// # Examples
///
/// ```rust
/// use arrowline::arrow::compose2;
///
/// let describe_sum = compose2(|left: i32, right: i32| left + right, |sum: i32| sum.to_string());
/// assert_eq!(describe_sum(20, 22), "42");
/// ```
#[inline]
pub fn compose2<A, B, C, D, H, K>(binary: H, next: K) -> impl Fn(A, B) -> D
where
    H: Fn(A, B) -> C,
    K: Fn(C) -> D,
{
    move |left, right| next(binary(left, right))
}

/// Applies `left` and `right` to two independent inputs and combines the
/// results with `combine`.
///
/// The left stage is evaluated before the right one.
#[inline]
pub fn split_with<B, C, D, E, R, F, G, H>(left: F, right: G, combine: H) -> impl Fn(B, D) -> R
where
    F: Fn(B) -> C,
    G: Fn(D) -> E,
    H: Fn(C, E) -> R,
{
    untuple(compose(
        split::<B, C, D, E, F, G>(left, right),
        uncurry(combine),
    ))
}

/// Feeds one input to `left` and `right` and combines the results with
/// `combine`.
#[inline]
pub fn fanout_with<B, C, D, R, F, G, H>(left: F, right: G, combine: H) -> impl Fn(B) -> R
where
    B: Clone,
    F: Fn(B) -> C,
    G: Fn(B) -> D,
    H: Fn(C, D) -> R,
{
    compose(fanout::<B, C, D, F, G>(left, right), uncurry(combine))
}

/// Chainable wrapper around a binary function.
///
/// The two-input counterpart of [`Arrow`](super::Arrow).
///
/// # Examples
///
/// ```rust
/// use arrowline::arrow::Arrow2;
///
/// let add_then_show = Arrow2::new(|left: i32, right: i32| left + right)
///     .and_then(|sum: i32| format!("sum={sum}"));
/// assert_eq!(add_then_show.run(1, 2), "sum=3");
///
/// let over_pairs = add_then_show.uncurried();
/// assert_eq!(over_pairs.run((4, 5)), "sum=9");
/// ```
#[derive(Clone, Copy)]
#[must_use]
pub struct Arrow2<H> {
    function: H,
}

impl<H> Arrow2<H> {
    /// Wraps a binary function.
    #[inline]
    pub const fn new(function: H) -> Self {
        Self { function }
    }

    /// Unwraps the binary function.
    #[inline]
    pub fn into_inner(self) -> H {
        self.function
    }

    /// Invokes the wrapped function.
    #[inline]
    pub fn run<A, B, C>(&self, left: A, right: B) -> C
    where
        H: Fn(A, B) -> C,
    {
        (self.function)(left, right)
    }

    /// Runs `next` on the result of the binary function.
    #[inline]
    pub fn and_then<A, B, C, D, K>(self, next: K) -> Arrow2<impl Fn(A, B) -> D>
    where
        H: Fn(A, B) -> C,
        K: Fn(C) -> D,
    {
        Arrow2::new(compose2(self.function, next))
    }

    /// Converts to a unary [`Arrow`](super::Arrow) over pairs.
    #[inline]
    pub fn uncurried<A, B, C>(self) -> super::Arrow<impl Fn((A, B)) -> C>
    where
        H: Fn(A, B) -> C,
    {
        super::Arrow::new(uncurry(self.function))
    }
}

impl<F> super::Arrow<F> {
    /// Converts an arrow over pairs into a binary [`Arrow2`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowline::arrow::Arrow;
    ///
    /// let both = Arrow::new(|value: i32| value + 1)
    ///     .split(|value: i32| value * 2)
    ///     .and_then(|(left, right): (i32, i32)| left - right)
    ///     .untupled();
    /// assert_eq!(both.run(3, 5), -6);
    /// ```
    #[inline]
    pub fn untupled<A, B, C>(self) -> Arrow2<impl Fn(A, B) -> C>
    where
        F: Fn((A, B)) -> C,
    {
        Arrow2::new(untuple(self.into_inner()))
    }

    /// Fan-out followed by a binary combination of the two results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowline::arrow::Arrow;
    ///
    /// let spread = Arrow::new(|value: i32| value + 1)
    ///     .fanout_with(|value: i32| value * 2, |left: i32, right: i32| left * right);
    /// assert_eq!(spread.run(3), 24);
    /// ```
    #[inline]
    pub fn fanout_with<B, C, D, R, G, K>(
        self,
        right: G,
        combine: K,
    ) -> super::Arrow<impl Fn(B) -> R>
    where
        B: Clone,
        F: Fn(B) -> C,
        G: Fn(B) -> D,
        K: Fn(C, D) -> R,
    {
        super::Arrow::new(fanout_with(self.into_inner(), right, combine))
    }
}

impl<H> fmt::Debug for Arrow2<H> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Arrow2").finish_non_exhaustive()
    }
}
