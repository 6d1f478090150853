//! The `chain!` macro for n-ary left-to-right composition.

/// Composes functions from left to right.
///
/// `chain!(f, g, h)(x)` is equivalent to `h(g(f(x)))`, i.e.
/// `f >>> g >>> h` in arrow notation. The result is a plain closure, so it
/// can be called directly or handed to any combinator.
///
/// # Syntax
///
/// - `chain!(f)` - Returns `f` unchanged
/// - `chain!(f, g)` - Returns `|x| g(f(x))`
/// - `chain!(f, g, h, ...)` - Composes any number of functions
///
/// # Laws
///
/// - **Associativity**: `chain!(chain!(f, g), h) == chain!(f, chain!(g, h))`
/// - **Identity**: `chain!(identity, f) == f == chain!(f, identity)`
///
/// # Examples
///
/// ```
/// use arrowline::chain;
///
/// let increment = |value: i32| value + 1;
/// let double = |value: i32| value * 2;
/// let show = |value: i32| value.to_string();
///
/// let pipeline = chain!(increment, double, show);
/// assert_eq!(pipeline(3), "8");
/// ```
///
/// ## Mixing with combinators
///
/// ```
/// use arrowline::arrow::{fanout, split};
/// use arrowline::chain;
///
/// let stats = chain!(
///     fanout(|values: Vec<i32>| values.iter().sum::<i32>(), |values: Vec<i32>| values.len()),
///     split(|sum: i32| f64::from(sum), |count: usize| count as f64),
///     |(sum, count): (f64, f64)| sum / count,
/// );
/// assert_eq!(stats(vec![1, 2, 3, 6]), 3.0);
/// ```
#[macro_export]
macro_rules! chain {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $second_function:expr $(,)?) => {{
        let head = $first_function;
        let tail = $second_function;
        move |input| tail(head(input))
    }};

    // chain!(f, g, h, ...) = chain!(f, chain!(g, h, ...))
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let head = $first_function;
        let tail = $crate::chain!($($remaining_functions),+);
        move |input| tail(head(input))
    }};
}
