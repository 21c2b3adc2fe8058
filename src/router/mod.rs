//! # Router Module
//!
//! The router module provides ordered, first-match-wins dispatch on top of
//! [`crate::PathMatcher`]. It is the piece a deep-link entry point talks to:
//! register every destination once at startup, then hand each incoming path or
//! URL to the router.
//!
//! ## Overview
//!
//! - [`Routes<C>`] - the generic ordered entry list every router wraps
//! - [`PathHandler`] - routes raw segment lists; handlers receive the capture
//! - [`UrlRouter`] - routes full URLs; handlers receive the [`DeepLink`] and the capture
//! - [`SharedRouter<C>`] - copy-on-write table for registration during dispatch
//!
//! ## Dispatch Semantics
//!
//! Entries are tried in registration order and the first one whose pattern
//! matches **and consumes every segment** runs. At most one handler runs per
//! dispatch; if none match, nothing runs and dispatch reports a miss.
//!
//! Because every entry requires full consumption, a shorter pattern registered
//! first does not shadow a longer one: `users/{id}` cannot claim
//! `users/1/posts/2` because it would leave two segments unconsumed. Order only
//! matters between entries that can both fully match the same path.
//!
//! ## Example
//!
//! ```rust
//! use pathrouter::pattern::{seq, Literal, Parameter};
//! use pathrouter::PathHandler;
//! use std::sync::{Arc, Mutex};
//!
//! let hits = Arc::new(Mutex::new(Vec::new()));
//! let mut router = PathHandler::new();
//!
//! let log = Arc::clone(&hits);
//! router.add(seq().then(Literal::new("users")).then(Parameter), move |id| {
//!     log.lock().unwrap().push(format!("user {id}"));
//! });
//! let log = Arc::clone(&hits);
//! router.add(
//!     seq()
//!         .then(Literal::new("users"))
//!         .then(Parameter)
//!         .then(Literal::new("posts"))
//!         .then(Parameter),
//!     move |(user, post)| {
//!         log.lock().unwrap().push(format!("post {post} by {user}"));
//!     },
//! );
//!
//! assert!(router.handle(&["users", "1", "posts", "2"]));
//! assert_eq!(*hits.lock().unwrap(), vec!["post 2 by 1".to_string()]);
//! ```
//!
//! ## Concurrency
//!
//! Matching is pure and synchronous. [`Routes`], [`PathHandler`] and
//! [`UrlRouter`] are `Send + Sync` and follow "build, then freeze, then
//! serve": register everything, then share the router (e.g. behind an `Arc`)
//! and dispatch from any thread. When routes must be added while dispatch is
//! live, use [`SharedRouter`], which swaps immutable snapshots.

mod core;
mod deep_link;
mod handler;
mod shared;

pub use core::{RouteEntry, Routes};
pub use deep_link::{DeepLink, QueryVec, UrlRouter, MAX_INLINE_QUERY_PARAMS};
pub use handler::PathHandler;
pub use shared::SharedRouter;
