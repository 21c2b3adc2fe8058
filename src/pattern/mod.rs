//! # Pattern Module
//!
//! The pattern module provides the segment-matching primitive and the sequential
//! composition algebra that every route in pathrouter is built from.
//!
//! ## Overview
//!
//! A [`Pattern<T>`] wraps a pure function over a slice of path segments and a
//! mutable cursor. On success it advances the cursor by exactly the number of
//! segments it consumed and yields a typed capture `T`. On failure it yields
//! `None` and the caller restores the cursor.
//!
//! Patterns are produced by [`Component`]s:
//!
//! - [`Literal`] - one or more fixed sub-segments (`"api/v2/books"`), optionally case-insensitive
//! - [`Parameter`] - exactly one segment, captured as a `String`
//! - [`OptionalParameter`] - zero or one segment, captured as `Option<String>`
//! - [`Empty`] - zero-width, always succeeds
//!
//! ## Composition
//!
//! Patterns are chained left to right with [`Pattern::then`]. The output type of
//! the chain is computed at compile time by the [`Concat`] trait:
//!
//! | left | right | result |
//! |---|---|---|
//! | `()` | `()` | `()` |
//! | `()` | `V` | `V` |
//! | `()` | `(V1, .., Vn)` | `(V1, .., Vn)` |
//! | `V` | `()` | `V` |
//! | `V1` | `V2` | `(V1, V2)` |
//! | `(V1, .., Vn)` | `V` | `(V1, .., Vn, V)` |
//! | `V` | `(V1, .., Vn)` | `(V, V1, .., Vn)` |
//!
//! Literals never occupy a tuple slot and tuples always flatten, so
//! `users/{id}/posts/{post}` produces `(String, String)`, not `((String,), String)`.
//!
//! ## Example
//!
//! ```rust
//! use pathrouter::pattern::{seq, Literal, OptionalParameter, Parameter};
//! use pathrouter::PathMatcher;
//!
//! let matcher = PathMatcher::new(
//!     seq()
//!         .then(Literal::new("owners"))
//!         .then(Parameter)
//!         .then(OptionalParameter),
//! );
//!
//! assert_eq!(
//!     matcher.match_segments(&["owners", "rust-lang", "cargo"]),
//!     Some(("rust-lang".to_string(), Some("cargo".to_string())))
//! );
//! assert_eq!(
//!     matcher.match_segments(&["owners", "rust-lang"]),
//!     Some(("rust-lang".to_string(), None))
//! );
//! ```
//!
//! ## Limits
//!
//! Typed tuples flatten up to eight captures. Routes that need more use
//! [`crate::sequence::Sequence`], which accumulates an unbounded positional
//! [`crate::sequence::Captures`] list instead.

mod components;
mod compose;
mod core;

pub use components::{CaseSensitivity, Empty, Literal, OptionalParameter, Parameter, SEPARATOR};
pub use compose::{CaptureValue, Concat};
pub use core::{seq, Component, MatchFn, Pattern};
