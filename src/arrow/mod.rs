//! Arrow combinators over plain functions.
//!
//! An arrow here is any pure unary function `Fn(B) -> C`. This module
//! provides the combinators that build larger arrows out of smaller ones,
//! plus the [`Arrow`] wrapper that lets them be applied left to right.
//!
//! # Overview
//!
//! | Combinator | Notation | Shape |
//! |------------|----------|-------|
//! | [`arr`] | `arr f` | `(B -> C) -> (B -> C)` |
//! | [`compose`] | `f >>> g` | `(B -> C, C -> D) -> (B -> D)` |
//! | [`first`] | `first f` | `(B -> C) -> ((B, D) -> (C, D))` |
//! | [`second`] | `second f` | `(B -> C) -> ((D, B) -> (D, C))` |
//! | [`split`] | `f *** g` | `(B -> C, D -> E) -> ((B, D) -> (C, E))` |
//! | [`fanout`] | `f &&& g` | `(B -> C, B -> D) -> (B -> (C, D))` |
//!
//! Zero-argument producers enter through [`thunk`], which treats them as
//! arrows from `()`.
//!
//! # Laws
//!
//! - **Associativity**: `(f >>> g) >>> h == f >>> (g >>> h)`
//! - **Identity**: `arr(identity) >>> f == f == f >>> arr(identity)`
//! - **Second via First**: `second(f) == swap >>> first(f) >>> swap`
//! - **Split Decomposition**: `f *** g == first(f) >>> second(g) == second(g) >>> first(f)`
//! - **Fanout**: `(f &&& g)(b) == (f(b), g(b))`
//!
//! # Evaluation
//!
//! Composites are evaluated eagerly and synchronously. Each stage finishes
//! before the next one receives its input, and in [`split`] and [`fanout`]
//! the left function runs before the right one. A failure inside a stage,
//! whether a panic or an `Err` output, reaches the caller untouched.
//!
//! # Examples
//!
//! ## Prefix style
//!
//! ```rust
//! use arrowline::arrow::{compose, fanout, first, second, split};
//!
//! let increment = |value: i32| value + 1;
//! let double = |value: i32| value * 2;
//! let show = |value: i32| value.to_string();
//!
//! assert_eq!(compose(compose(increment, double), show)(3), "8");
//! assert_eq!(fanout(increment, double)(3), (4, 6));
//! assert_eq!(split(increment, double)((3, 5)), (4, 10));
//! assert_eq!(first(increment)((3, "x")), (4, "x"));
//! assert_eq!(second(double)(("x", 3)), ("x", 6));
//! ```
//!
//! ## Method style
//!
//! ```rust
//! use arrowline::arrow::ArrowExt;
//!
//! let increment = |value: i32| value + 1;
//! let double = |value: i32| value * 2;
//!
//! let pipeline = increment
//!     .arrow()
//!     .and_then(double)
//!     .and_then(|value: i32| value.to_string());
//! assert_eq!(pipeline.run(3), "8");
//!
//! let spread = increment.arrow().fanout(double).and_then(|(left, right): (i32, i32)| left + right);
//! assert_eq!(spread.run(3), 10);
//! ```

mod chain_macro;
mod combinators;
mod wrapper;

#[cfg(feature = "binary")]
mod binary;
#[cfg(feature = "tracing")]
mod traced;

pub use combinators::{arr, compose, constant, fanout, first, identity, second, split, thunk};
pub use wrapper::{Arrow, ArrowExt};

#[cfg(feature = "binary")]
pub use binary::{Arrow2, compose2, fanout_with, split_with, uncurry, untuple};
#[cfg(feature = "tracing")]
pub use traced::traced;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::chain;
