//! The `Arrow` wrapper: left-to-right method syntax for the combinators.

use std::fmt;

use super::combinators::{compose, fanout, first, identity, second, split, thunk};

/// A zero-state envelope that gives a unary function chainable combinator
/// methods.
///
/// `Arrow` adds no behavior of its own. Each method delegates to the free
/// combinator of the same name in [`arrow`](crate::arrow) and returns a new
/// `Arrow`; running a chain is indistinguishable from nesting the prefix
/// calls by hand. Use [`run`](Self::run) to invoke the chain or
/// [`into_inner`](Self::into_inner) to get the composed function back as a
/// plain closure.
///
/// Stages run eagerly and strictly left to right. Panics raised by a stage
/// propagate out of [`run`](Self::run) untouched.
///
/// # Examples
///
/// ```rust
/// use arrowline::arrow::Arrow;
///
/// let pipeline = Arrow::new(|value: i32| value + 1)
///     .and_then(|value: i32| value * 2)
///     .and_then(|value: i32| value.to_string());
///
/// assert_eq!(pipeline.run(3), "8");
/// ```
///
/// ## Starting from a thunk
///
/// ```rust
/// use arrowline::arrow::Arrow;
///
/// let read = Arrow::from_thunk(|| "21")
///     .and_then(|text: &str| text.parse::<i32>())
///     .and_then(|parsed: Result<i32, _>| parsed.map(|value| value * 2));
///
/// assert_eq!(read.force(), Ok(42));
/// ```
#[derive(Clone, Copy)]
#[must_use]
pub struct Arrow<F> {
    function: F,
}

impl<F> Arrow<F> {
    /// Wraps a function.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self { function }
    }

    /// Unwraps the (possibly composed) function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowline::arrow::Arrow;
    ///
    /// let plain = Arrow::new(|value: i32| value + 1)
    ///     .and_then(|value: i32| value * 2)
    ///     .into_inner();
    ///
    /// let doubled: Vec<i32> = vec![1, 2, 3].into_iter().map(plain).collect();
    /// assert_eq!(doubled, vec![4, 6, 8]);
    /// ```
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }

    /// Borrows the wrapped function.
    #[inline]
    pub const fn as_inner(&self) -> &F {
        &self.function
    }

    /// Invokes the wrapped function.
    #[inline]
    pub fn run<I, O>(&self, input: I) -> O
    where
        F: Fn(I) -> O,
    {
        (self.function)(input)
    }

    /// Invokes an arrow whose input is `()`, such as one built from a thunk.
    #[inline]
    pub fn force<O>(&self) -> O
    where
        F: Fn(()) -> O,
    {
        (self.function)(())
    }

    /// Sequential composition (`>>>`): runs `self`, then `next` on its output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowline::arrow::Arrow;
    ///
    /// let length = Arrow::new(|text: &str| text.trim().to_owned())
    ///     .and_then(|trimmed: String| trimmed.len());
    /// assert_eq!(length.run("  four  "), 4);
    /// ```
    #[inline]
    pub fn and_then<I, O, P, G>(self, next: G) -> Arrow<impl Fn(I) -> P>
    where
        F: Fn(I) -> O,
        G: Fn(O) -> P,
    {
        Arrow::new(compose(self.function, next))
    }

    /// Reverse composition (`<<<`): runs `previous`, then `self`.
    ///
    /// `f.compose(g)` is `g.and_then(f)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowline::arrow::Arrow;
    ///
    /// let describe = Arrow::new(|value: i32| format!("<{value}>"))
    ///     .compose(|text: &str| text.len() as i32);
    /// assert_eq!(describe.run("abc"), "<3>");
    /// ```
    #[inline]
    pub fn compose<H, I, O, G>(self, previous: G) -> Arrow<impl Fn(H) -> O>
    where
        G: Fn(H) -> I,
        F: Fn(I) -> O,
    {
        Arrow::new(compose(previous, self.function))
    }

    /// Lifts the arrow to act on the first component of a pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowline::arrow::Arrow;
    ///
    /// let increment = Arrow::new(|value: i32| value + 1).first();
    /// assert_eq!(increment.run((3, "x")), (4, "x"));
    /// ```
    #[inline]
    pub fn first<B, C, D>(self) -> Arrow<impl Fn((B, D)) -> (C, D)>
    where
        F: Fn(B) -> C,
    {
        Arrow::new(first::<B, C, D, F>(self.function))
    }

    /// Lifts the arrow to act on the second component of a pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowline::arrow::Arrow;
    ///
    /// let double = Arrow::new(|value: i32| value * 2).second();
    /// assert_eq!(double.run(("x", 3)), ("x", 6));
    /// ```
    #[inline]
    pub fn second<B, C, D>(self) -> Arrow<impl Fn((D, B)) -> (D, C)>
    where
        F: Fn(B) -> C,
    {
        Arrow::new(second::<B, C, D, F>(self.function))
    }

    /// Parallel composition (`***`): `self` on the first component, `right`
    /// on the second.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowline::arrow::Arrow;
    ///
    /// let both = Arrow::new(|value: i32| value + 1).split(|value: i32| value * 2);
    /// assert_eq!(both.run((3, 5)), (4, 10));
    /// ```
    #[inline]
    pub fn split<B, C, D, E, G>(self, right: G) -> Arrow<impl Fn((B, D)) -> (C, E)>
    where
        F: Fn(B) -> C,
        G: Fn(D) -> E,
    {
        Arrow::new(split(self.function, right))
    }

    /// Fan-out (`&&&`): feeds the same input to `self` and `right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowline::arrow::Arrow;
    ///
    /// let both = Arrow::new(|value: i32| value + 1).fanout(|value: i32| value * 2);
    /// assert_eq!(both.run(3), (4, 6));
    /// ```
    #[inline]
    pub fn fanout<B, C, D, G>(self, right: G) -> Arrow<impl Fn(B) -> (C, D)>
    where
        B: Clone,
        F: Fn(B) -> C,
        G: Fn(B) -> D,
    {
        Arrow::new(fanout(self.function, right))
    }
}

impl<T> Arrow<fn(T) -> T> {
    /// The identity arrow. Composing with it on either side changes nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowline::arrow::Arrow;
    ///
    /// let same = Arrow::identity().and_then(|value: i32| value * 2);
    /// assert_eq!(same.run(21), 42);
    /// ```
    #[inline]
    pub fn identity() -> Self {
        Self::new(identity::<T>)
    }
}

impl Arrow<()> {
    /// Wraps a zero-argument producer as an arrow from `()`.
    #[inline]
    pub fn from_thunk<O, P>(producer: P) -> Arrow<impl Fn(()) -> O>
    where
        P: Fn() -> O,
    {
        Arrow::new(thunk(producer))
    }
}

impl<F> From<F> for Arrow<F> {
    #[inline]
    fn from(function: F) -> Self {
        Self::new(function)
    }
}

impl<F> fmt::Debug for Arrow<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Arrow").finish_non_exhaustive()
    }
}

/// Explicit conversion of any unary function into an [`Arrow`].
///
/// # Examples
///
/// ```rust
/// use arrowline::arrow::ArrowExt;
///
/// fn increment(value: i32) -> i32 {
///     value + 1
/// }
///
/// let chain = increment.arrow().and_then(|value: i32| value * 2);
/// assert_eq!(chain.run(3), 8);
/// ```
pub trait ArrowExt<I, O>: Fn(I) -> O + Sized {
    /// Wraps `self` in an [`Arrow`].
    #[inline]
    fn arrow(self) -> Arrow<Self> {
        Arrow::new(self)
    }
}

impl<I, O, F> ArrowExt<I, O> for F where F: Fn(I) -> O {}

static_assertions::assert_impl_all!(Arrow<fn(i32) -> i32>: Send, Sync, Copy, fmt::Debug);
static_assertions::assert_not_impl_any!(Arrow<std::rc::Rc<i32>>: Send, Sync);
