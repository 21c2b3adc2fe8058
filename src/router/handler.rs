use crate::pattern::Component;
use crate::runtime_config::RouterConfig;
use crate::segments::split_path;

use super::core::Routes;

/// Segment-facing router: handlers receive only the capture.
///
/// ```rust
/// use pathrouter::pattern::{seq, Literal, Parameter};
/// use pathrouter::PathHandler;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let opened = Arc::new(AtomicBool::new(false));
/// let mut handler = PathHandler::new();
///
/// let flag = Arc::clone(&opened);
/// handler.add(seq().then(Literal::new("settings")), move |()| {
///     flag.store(true, Ordering::SeqCst);
/// });
/// handler.add(seq().then(Literal::new("users")).then(Parameter), |_id: String| {});
///
/// assert!(handler.handle(&["settings"]));
/// assert!(opened.load(Ordering::SeqCst));
/// assert!(!handler.handle(&["settings", "privacy"]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathHandler {
    routes: Routes<()>,
}

impl PathHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            routes: Routes::with_config(config),
        }
    }

    /// Register `handler` for paths fully matched by `pattern`.
    pub fn add<P, H>(&mut self, pattern: P, handler: H) -> &mut Self
    where
        P: Component,
        H: Fn(P::Output) + Send + Sync + 'static,
    {
        self.routes.add(pattern, move |_: &(), captured| handler(captured));
        self
    }

    pub fn add_labeled<P, H>(&mut self, label: &str, pattern: P, handler: H) -> &mut Self
    where
        P: Component,
        H: Fn(P::Output) + Send + Sync + 'static,
    {
        self.routes
            .add_labeled(label, pattern, move |_: &(), captured| handler(captured));
        self
    }

    /// Run the first matching handler. Returns whether any handler ran.
    pub fn handle<S: AsRef<str>>(&self, segments: &[S]) -> bool {
        self.routes.dispatch(segments, &()).is_some()
    }

    /// Split `path` and run the first matching handler.
    pub fn handle_path(&self, path: &str) -> bool {
        self.routes.dispatch_strs(&split_path(path), &()).is_some()
    }

    #[must_use]
    pub fn routes(&self) -> &Routes<()> {
        &self.routes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl From<PathHandler> for Routes<()> {
    fn from(handler: PathHandler) -> Self {
        handler.routes
    }
}
