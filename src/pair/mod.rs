//! Pair utilities.
//!
//! Arrows route data through ordered pairs `(A, B)` whose components have
//! independent, unrelated types. This module provides the structural
//! operations the combinators in [`arrow`](crate::arrow) are built from:
//!
//! - [`pair`]: Build a pair from two values
//! - [`fst`] / [`snd`]: Project the first or second component
//! - [`swap`]: Exchange the components
//! - [`dup`]: Duplicate a value into both components
//! - [`assoc`] / [`unassoc`]: Reassociate nested pairs
//!
//! [`PairExt`] offers the same operations in method position.
//!
//! # Laws
//!
//! - **Swap Involution**: `swap(swap(p)) == p`
//! - **Projection**: `fst(pair(a, b)) == a` and `snd(pair(a, b)) == b`
//! - **Swap Projection**: `fst(swap(p)) == snd(p)`
//! - **Reassociation**: `unassoc(assoc(p)) == p` and `assoc(unassoc(q)) == q`
//!
//! # Examples
//!
//! ```rust
//! use arrowline::pair::{dup, fst, snd, swap};
//!
//! let point = (3, "x");
//! assert_eq!(swap(point), ("x", 3));
//! assert_eq!(fst(point), 3);
//! assert_eq!(snd(point), "x");
//! assert_eq!(dup(7), (7, 7));
//! ```

mod tuple;

pub use tuple::{PairExt, assoc, dup, fst, pair, snd, swap, unassoc};
