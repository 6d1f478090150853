//! # arrowline
//!
//! A small arrow algebra for composing pure unary functions into
//! left-to-right pipelines.
//!
//! ## Overview
//!
//! Multi-stage computations (read, transform, combine, format) are usually
//! written as nested calls, `format(combine(transform(read())))`, and
//! juggle intermediate tuples by hand. This library provides:
//!
//! - **Pair Utilities**: `pair`, `fst`, `snd`, `swap`, `dup`, `assoc`, `unassoc`
//! - **Arrow Combinators**: `arr`, `compose` (`>>>`), `first`, `second`,
//!   `split` (`***`), `fanout` (`&&&`)
//! - **Chaining**: the [`Arrow`](arrow::Arrow) wrapper and the [`chain!`] macro
//! - **Binary Arrows**: two-input composition without artificial pairing
//!
//! Combinators never fail on their own and never intercept what the
//! composed functions do.
//!
//! ## Feature Flags
//!
//! - `pair`: Pair utilities
//! - `arrow`: Combinators, `Arrow` wrapper and `chain!` (implies `pair`)
//! - `binary`: Two-input variants and `Arrow2` (implies `arrow`)
//! - `tracing`: Stage instrumentation through the `tracing` crate
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use arrowline::prelude::*;
//!
//! let increment = |value: i32| value + 1;
//! let double = |value: i32| value * 2;
//!
//! let pipeline = increment.arrow().and_then(double).and_then(|value: i32| value.to_string());
//! assert_eq!(pipeline.run(3), "8");
//!
//! assert_eq!(fanout(increment, double)(3), (4, 6));
//! assert_eq!(swap((1, "one")), ("one", 1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use arrowline::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "pair")]
    pub use crate::pair::*;

    #[cfg(feature = "arrow")]
    pub use crate::arrow::*;
}

#[cfg(feature = "pair")]
pub mod pair;

#[cfg(feature = "arrow")]
pub mod arrow;
