//! Structural operations on `(A, B)`.

/// Builds a pair from two values.
///
/// # Examples
///
/// ```rust
/// use arrowline::pair::pair;
///
/// assert_eq!(pair(1, "one"), (1, "one"));
/// ```
#[inline]
pub const fn pair<A, B>(first: A, second: B) -> (A, B) {
    (first, second)
}

/// Returns the first component of a pair.
///
/// # Examples
///
/// ```rust
/// use arrowline::pair::fst;
///
/// assert_eq!(fst((4, "x")), 4);
/// ```
#[inline]
pub fn fst<A, B>((first, _): (A, B)) -> A {
    first
}

/// Returns the second component of a pair.
///
/// # Examples
///
/// ```rust
/// use arrowline::pair::snd;
///
/// assert_eq!(snd((4, "x")), "x");
/// ```
#[inline]
pub fn snd<A, B>((_, second): (A, B)) -> B {
    second
}

/// Exchanges the components of a pair.
///
/// `swap` is its own inverse: `swap(swap(p)) == p`.
///
/// # Examples
///
/// ```rust
/// use arrowline::pair::swap;
///
/// let swapped = swap((1, String::from("one")));
/// assert_eq!(swapped, (String::from("one"), 1));
/// assert_eq!(swap(swapped), (1, String::from("one")));
/// ```
#[inline]
pub fn swap<A, B>((first, second): (A, B)) -> (B, A) {
    (second, first)
}

/// Duplicates a value into both components of a pair.
///
/// This is the diagonal used by [`fanout`](crate::arrow::fanout) to feed one
/// input to two transformations.
///
/// # Examples
///
/// ```rust
/// use arrowline::pair::dup;
///
/// assert_eq!(dup(String::from("a")), (String::from("a"), String::from("a")));
/// ```
#[inline]
pub fn dup<A: Clone>(value: A) -> (A, A) {
    (value.clone(), value)
}

/// Moves the nesting of a left-nested pair to the right.
///
/// Chained fanouts produce `((a, b), c)`; `assoc` turns it into `(a, (b, c))`.
///
/// # Examples
///
/// ```rust
/// use arrowline::pair::assoc;
///
/// assert_eq!(assoc(((1, 'b'), "c")), (1, ('b', "c")));
/// ```
#[inline]
pub fn assoc<A, B, C>(((first, second), third): ((A, B), C)) -> (A, (B, C)) {
    (first, (second, third))
}

/// Moves the nesting of a right-nested pair to the left. Inverse of [`assoc`].
///
/// # Examples
///
/// ```rust
/// use arrowline::pair::unassoc;
///
/// assert_eq!(unassoc((1, ('b', "c"))), ((1, 'b'), "c"));
/// ```
#[inline]
pub fn unassoc<A, B, C>((first, (second, third)): (A, (B, C))) -> ((A, B), C) {
    ((first, second), third)
}

/// Method-position access to the pair operations.
///
/// # Examples
///
/// ```rust
/// use arrowline::pair::PairExt;
///
/// let pair = (3, "x");
/// assert_eq!(pair.swap(), ("x", 3));
/// assert_eq!(pair.fst(), 3);
/// assert_eq!(pair.snd(), "x");
/// ```
pub trait PairExt<A, B> {
    /// Exchanges the components. See [`swap`].
    fn swap(self) -> (B, A);

    /// Returns the first component. See [`fst`].
    fn fst(self) -> A;

    /// Returns the second component. See [`snd`].
    fn snd(self) -> B;
}

impl<A, B> PairExt<A, B> for (A, B) {
    #[inline]
    fn swap(self) -> (B, A) {
        swap(self)
    }

    #[inline]
    fn fst(self) -> A {
        fst(self)
    }

    #[inline]
    fn snd(self) -> B {
        snd(self)
    }
}
