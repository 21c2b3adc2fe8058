use arc_swap::ArcSwap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::matcher::PathMatcher;
use crate::pattern::Component;

use super::core::{log_registered, RouteEntry, Routes};

/// Route table that accepts registrations while other threads dispatch.
///
/// Dispatch loads the current snapshot lock-free and runs against it; a
/// registration clones the entry list (an `Arc` clone per entry), appends, and
/// swaps the new snapshot in. An in-flight dispatch therefore never observes a
/// half-registered route, and registration order is preserved because every
/// swap starts from the latest snapshot.
pub struct SharedRouter<C> {
    routes: ArcSwap<Routes<C>>,
}

impl<C> SharedRouter<C> {
    #[must_use]
    pub fn new(routes: Routes<C>) -> Self {
        Self {
            routes: ArcSwap::from_pointee(routes),
        }
    }

    /// Register a route, visible to every dispatch that starts afterwards.
    ///
    /// Returns the index the route was given in the table.
    pub fn register<P, H>(&self, label: &str, pattern: P, handler: H) -> usize
    where
        P: Component,
        H: Fn(&C, P::Output) + Send + Sync + 'static,
    {
        let entry = Arc::new(RouteEntry::new(label, PathMatcher::new(pattern), handler));
        // rcu may rerun the closure when another registration wins the swap
        let replaced = self.routes.rcu(|current| {
            let mut next: Routes<C> = (**current).clone();
            next.append_silent(Arc::clone(&entry));
            next
        });
        let index = replaced.len();
        log_registered(label, index);
        debug!(label = %label, "Route table snapshot swapped");
        index
    }

    /// Dispatch against the current snapshot.
    pub fn dispatch<S: AsRef<str>>(&self, segments: &[S], ctx: &C) -> Option<usize> {
        self.routes.load().dispatch(segments, ctx)
    }

    /// The current snapshot. Later registrations do not affect it.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Routes<C>> {
        self.routes.load_full()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.load().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.load().is_empty()
    }
}

impl SharedRouter<()> {
    /// Dispatch plain segments when handlers need no context.
    pub fn handle<S: AsRef<str>>(&self, segments: &[S]) -> bool {
        self.dispatch(segments, &()).is_some()
    }
}

impl<C> Default for SharedRouter<C> {
    fn default() -> Self {
        Self::new(Routes::new())
    }
}

impl<C> From<Routes<C>> for SharedRouter<C> {
    fn from(routes: Routes<C>) -> Self {
        Self::new(routes)
    }
}

impl<C> fmt::Debug for SharedRouter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedRouter")
            .field("routes", &self.routes.load_full())
            .finish()
    }
}
