//! # pathrouter
//!
//! **pathrouter** is a composable, type-safe matcher and router for
//! hierarchical paths: deep links, custom-scheme URLs, in-app navigation.
//!
//! ## Overview
//!
//! A path is a sequence of segments (`/users/42/posts` is `["users", "42",
//! "posts"]`). Patterns are built from small components and composed left to
//! right; the type of the value a pattern captures is computed at compile time,
//! so a handler registered for `users/{id}/posts/{post}` receives a
//! `(String, String)` and nothing else.
//!
//! ## Architecture
//!
//! - **[`pattern`]** - `Pattern<T>`, the `Component` trait, the composition
//!   algebra and the built-in components (`Literal`, `Parameter`,
//!   `OptionalParameter`, `Empty`)
//! - **[`matcher`]** - `PathMatcher<T>`, which requires a pattern to consume
//!   the whole path
//! - **[`sequence`]** - runtime-built patterns and route templates with an
//!   unbounded capture list
//! - **[`router`]** - ordered first-match dispatch over segments
//!   (`PathHandler`), URLs (`UrlRouter`) and a copy-on-write table
//!   (`SharedRouter`)
//! - **[`segments`]** - path splitting and URL segment derivation
//! - **[`runtime_config`]** - dispatch logging thresholds from the environment
//! - **[`logging`]** - `tracing-subscriber` initialisation
//!
//! ## Quick Start
//!
//! ```rust
//! use pathrouter::pattern::{seq, Literal, Parameter};
//! use pathrouter::UrlRouter;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let opened = Arc::new(AtomicUsize::new(0));
//! let mut router = UrlRouter::new();
//!
//! let counter = Arc::clone(&opened);
//! router.add(
//!     seq().then(Literal::new("users")).then(Parameter),
//!     move |_link, id: String| {
//!         counter.store(id.parse().unwrap_or(0), Ordering::SeqCst);
//!     },
//! );
//!
//! assert!(router.handle_str("https://example.com/users/42")?);
//! assert_eq!(opened.load(Ordering::SeqCst), 42);
//! assert!(!router.handle_str("https://example.com/teams/42")?);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Matching Rules
//!
//! - Matching is all or nothing. A failed attempt leaves the cursor where it
//!   started, whatever partial progress was made.
//! - A route matches only if its pattern consumes every segment.
//! - Absence is not an error: no match is `None` / `false`, never a panic and
//!   never an `Err`.
//! - Query strings and fragments are passed through to URL handlers but never
//!   matched.

pub mod logging;
pub mod matcher;
pub mod pattern;
pub mod router;
pub mod runtime_config;
pub mod segments;
pub mod sequence;

pub use matcher::PathMatcher;
pub use pattern::{seq, Component, Empty, Literal, OptionalParameter, Parameter, Pattern};
pub use router::{DeepLink, PathHandler, Routes, SharedRouter, UrlRouter};
pub use sequence::{Captures, Sequence};
