//! # Path Matcher
//!
//! [`PathMatcher`] is the top-level gate around a compiled [`Pattern`]: it runs
//! the pattern from the first segment and accepts the result only if every
//! segment was consumed.
//!
//! ```rust
//! use pathrouter::pattern::{seq, Literal, Parameter};
//! use pathrouter::PathMatcher;
//!
//! let user = PathMatcher::new(seq().then(Literal::new("users")).then(Parameter));
//!
//! assert_eq!(user.match_segments(&["users", "42"]), Some("42".to_string()));
//! assert_eq!(user.match_segments(&["users"]), None);
//! // A valid prefix is not enough
//! assert_eq!(user.match_segments(&["users", "42", "x"]), None);
//! ```

use crate::pattern::{Component, Pattern};
use crate::segments::{as_segments, split_path};

/// A compiled pattern that must account for the whole path.
pub struct PathMatcher<T> {
    pattern: Pattern<T>,
}

impl<T> Clone for PathMatcher<T> {
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern.clone(),
        }
    }
}

impl<T> std::fmt::Debug for PathMatcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathMatcher")
            .field("pattern", &self.pattern)
            .finish()
    }
}

impl<T: 'static> PathMatcher<T> {
    /// Compile a component (usually a chain built with [`crate::pattern::seq`]).
    #[must_use]
    pub fn new<C>(component: C) -> Self
    where
        C: Component<Output = T>,
    {
        Self {
            pattern: component.pattern(),
        }
    }

    /// Match a list of already-decoded segments.
    ///
    /// # Returns
    ///
    /// * `Some(capture)` - the pattern matched and consumed every segment
    /// * `None` - structural mismatch, including unconsumed trailing segments
    #[must_use]
    pub fn match_segments<S: AsRef<str>>(&self, segments: &[S]) -> Option<T> {
        self.match_strs(&as_segments(segments))
    }

    /// Match a borrowed segment slice; the allocation-free form used by routers.
    #[inline]
    #[must_use]
    pub fn match_strs(&self, segments: &[&str]) -> Option<T> {
        let mut cursor = 0;
        let captured = self.pattern.attempt(segments, &mut cursor)?;
        (cursor == segments.len()).then_some(captured)
    }

    /// Split `path` with [`split_path`] and match the result.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<T> {
        self.match_strs(&split_path(path))
    }

    /// The underlying pattern, e.g. to embed it in a larger chain.
    #[must_use]
    pub fn pattern(&self) -> &Pattern<T> {
        &self.pattern
    }
}
