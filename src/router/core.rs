//! Router core module - ordered, first-match-wins dispatch.
//!
//! Every [`RouteEntry`] closes over its own [`PathMatcher<T>`] and a handler
//! taking exactly that `T`. The capture type never leaves the closure, so
//! entries with different capture types share one list without any
//! type erasure of the captured value and without downcasting.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::matcher::PathMatcher;
use crate::pattern::Component;
use crate::runtime_config::RouterConfig;
use crate::segments::as_segments;

/// Compiled full-match predicate fused with its handler.
///
/// Returns `true` if the path matched and the handler ran.
type DispatchFn<C> = dyn Fn(&[&str], &C) -> bool + Send + Sync;

/// A registered (pattern, handler) pair.
pub struct RouteEntry<C> {
    label: Arc<str>,
    dispatch: Box<DispatchFn<C>>,
}

impl<C> RouteEntry<C> {
    /// Fuse a matcher and a handler into one entry.
    ///
    /// # Arguments
    ///
    /// * `label` - Name used in logs (e.g. `"users/{id}"` or `"user_profile"`)
    /// * `matcher` - Full-consumption matcher producing `T`
    /// * `handler` - Called with the dispatch context and the capture
    pub fn new<T, H>(label: impl Into<Arc<str>>, matcher: PathMatcher<T>, handler: H) -> Self
    where
        T: 'static,
        H: Fn(&C, T) + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            dispatch: Box::new(move |segments: &[&str], ctx: &C| {
                match matcher.match_strs(segments) {
                    Some(captured) => {
                        handler(ctx, captured);
                        true
                    }
                    None => false,
                }
            }),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Run the handler if this entry fully matches `segments`.
    #[inline]
    pub fn try_dispatch(&self, segments: &[&str], ctx: &C) -> bool {
        (self.dispatch)(segments, ctx)
    }
}

impl<C> fmt::Debug for RouteEntry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Ordered, append-only list of route entries.
///
/// `C` is the context handed to every handler alongside its capture: `()` for
/// plain segment routing, [`super::DeepLink`] for URL routing.
///
/// Entries are `Arc`-shared, so cloning a `Routes` is cheap and the clone
/// dispatches to the same handlers. [`super::SharedRouter`] relies on this for
/// copy-on-write registration.
pub struct Routes<C> {
    entries: Vec<Arc<RouteEntry<C>>>,
    config: RouterConfig,
}

impl<C> Clone for Routes<C> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            config: self.config,
        }
    }
}

impl<C> Default for Routes<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for Routes<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Routes")
            .field("entries", &self.entries)
            .field("config", &self.config)
            .finish()
    }
}

impl<C> Routes<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            entries: Vec::new(),
            config,
        }
    }

    /// Register a route labelled by its position (`route#0`, `route#1`, ...).
    pub fn add<P, H>(&mut self, pattern: P, handler: H) -> &mut Self
    where
        P: Component,
        H: Fn(&C, P::Output) + Send + Sync + 'static,
    {
        let label = format!("route#{}", self.entries.len());
        self.add_labeled(label, pattern, handler)
    }

    /// Register a route with an explicit label for logs.
    pub fn add_labeled<P, H>(
        &mut self,
        label: impl Into<Arc<str>>,
        pattern: P,
        handler: H,
    ) -> &mut Self
    where
        P: Component,
        H: Fn(&C, P::Output) + Send + Sync + 'static,
    {
        self.push_entry(Arc::new(RouteEntry::new(
            label,
            PathMatcher::new(pattern),
            handler,
        )))
    }

    /// Append an already-built entry.
    pub fn push_entry(&mut self, entry: Arc<RouteEntry<C>>) -> &mut Self {
        log_registered(entry.label(), self.entries.len());
        self.entries.push(entry);
        self
    }

    /// Append without logging. Used when building a snapshot that may be
    /// discarded and rebuilt.
    pub(crate) fn append_silent(&mut self, entry: Arc<RouteEntry<C>>) {
        self.entries.push(entry);
    }

    /// Dispatch to the first route, in registration order, that fully
    /// matches `segments`.
    ///
    /// # Returns
    ///
    /// * `Some(index)` - index of the route whose handler ran
    /// * `None` - no route matched; nothing ran
    pub fn dispatch<S: AsRef<str>>(&self, segments: &[S], ctx: &C) -> Option<usize> {
        self.dispatch_strs(&as_segments(segments), ctx)
    }

    /// Allocation-free form of [`Routes::dispatch`].
    pub fn dispatch_strs(&self, segments: &[&str], ctx: &C) -> Option<usize> {
        debug!(
            segments = ?segments,
            segments_count = segments.len(),
            routes_count = self.entries.len(),
            "Route match attempt"
        );

        let match_start = Instant::now();
        let matched = self
            .entries
            .iter()
            .position(|entry| entry.try_dispatch(segments, ctx));
        let match_duration = match_start.elapsed();

        match matched {
            Some(index) => {
                let label = self.entries[index].label();
                if match_duration > self.config.slow_match_threshold {
                    warn!(
                        label = %label,
                        index,
                        segments = ?segments,
                        duration_us = match_duration.as_micros(),
                        "Slow route dispatch detected"
                    );
                } else if self.config.log_matches {
                    info!(
                        label = %label,
                        index,
                        duration_us = match_duration.as_micros(),
                        "Route matched"
                    );
                } else {
                    debug!(
                        label = %label,
                        index,
                        duration_us = match_duration.as_micros(),
                        "Route matched"
                    );
                }
            }
            None => {
                // A miss is ordinary input, not a fault.
                debug!(
                    segments = ?segments,
                    duration_us = match_duration.as_micros(),
                    "No route matched"
                );
            }
        }
        matched
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in registration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label())
    }

    #[must_use]
    pub fn config(&self) -> RouterConfig {
        self.config
    }
}

pub(crate) fn log_registered(label: &str, index: usize) {
    info!(
        label = %label,
        index = index,
        routes_count = index + 1,
        "Route registered"
    );
}
