//! Pattern core - the matching function every component compiles to.

use std::fmt;
use std::sync::Arc;

use super::compose::{concatenate, Concat};
use super::components::Empty;

/// Signature of a compiled matching function.
///
/// Receives the full segment slice and the cursor. On success the cursor has
/// been advanced past every consumed segment; on failure its value is
/// unspecified and the caller restores it.
pub type MatchFn<T> = dyn Fn(&[&str], &mut usize) -> Option<T> + Send + Sync;

/// A compiled, immutable segment matcher producing `T` on success.
///
/// Cloning is an `Arc` clone, so a pattern can be shared by any number of
/// matchers and routes.
pub struct Pattern<T> {
    match_fn: Arc<MatchFn<T>>,
}

impl<T> Clone for Pattern<T> {
    fn clone(&self) -> Self {
        Self {
            match_fn: Arc::clone(&self.match_fn),
        }
    }
}

impl<T> fmt::Debug for Pattern<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("output", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Pattern<T> {
    /// Wrap a raw matching function.
    ///
    /// This is the extension point for custom components: the function must
    /// only move the cursor forward, and only by the number of segments it
    /// actually consumed.
    pub fn from_fn<F>(match_fn: F) -> Self
    where
        F: Fn(&[&str], &mut usize) -> Option<T> + Send + Sync + 'static,
    {
        Self {
            match_fn: Arc::new(match_fn),
        }
    }

    /// Attempt to match starting at `*cursor`.
    ///
    /// Returns `None` on a structural mismatch. The cursor value after a
    /// failed attempt carries no meaning; [`Pattern::then`] and
    /// [`crate::PathMatcher`] restore it themselves.
    #[inline]
    pub fn attempt(&self, segments: &[&str], cursor: &mut usize) -> Option<T> {
        (self.match_fn)(segments, cursor)
    }

    /// Sequence `next` after this pattern.
    ///
    /// The composed pattern snapshots the cursor, runs `self`, then runs
    /// `next` from wherever `self` stopped. If either side fails the cursor is
    /// restored to the snapshot taken before `self` ran. Captures combine
    /// according to [`Concat`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use pathrouter::pattern::{seq, Literal, Parameter};
    ///
    /// // Pattern<(String, String)>
    /// let post = seq()
    ///     .then(Literal::new("users"))
    ///     .then(Parameter)
    ///     .then(Literal::new("posts"))
    ///     .then(Parameter);
    ///
    /// let mut cursor = 0;
    /// let captured = post.attempt(&["users", "1", "posts", "2"], &mut cursor);
    /// assert_eq!(captured, Some(("1".to_string(), "2".to_string())));
    /// assert_eq!(cursor, 4);
    /// ```
    #[must_use]
    pub fn then<C>(self, next: C) -> Pattern<<T as Concat<C::Output>>::Output>
    where
        C: Component,
        T: Concat<C::Output>,
        <T as Concat<C::Output>>::Output: 'static,
    {
        concatenate(self, next.pattern())
    }

    /// Transform the capture of a successful match.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Pattern<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Pattern::from_fn(move |segments, cursor| self.attempt(segments, cursor).map(&f))
    }

    /// Transform the capture, treating `None` from `f` as a mismatch.
    ///
    /// Useful for typed identifiers: `Parameter.pattern().try_map(|s| s.parse::<u64>().ok())`
    /// rejects `/users/abc` the same way a missing segment would, so dispatch
    /// falls through to the next route.
    #[must_use]
    pub fn try_map<U, F>(self, f: F) -> Pattern<U>
    where
        U: 'static,
        F: Fn(T) -> Option<U> + Send + Sync + 'static,
    {
        Pattern::from_fn(move |segments, cursor| {
            let start = *cursor;
            let mapped = self.attempt(segments, cursor).and_then(&f);
            if mapped.is_none() {
                *cursor = start;
            }
            mapped
        })
    }
}

impl Pattern<()> {
    /// The zero-width pattern: consumes nothing and always succeeds.
    #[must_use]
    pub fn empty() -> Self {
        Pattern::from_fn(|_, _| Some(()))
    }
}

/// Start a pattern chain from [`Empty`].
///
/// `seq()` on its own matches only the empty path once wrapped in a
/// [`crate::PathMatcher`].
#[must_use]
pub fn seq() -> Pattern<()> {
    Empty.pattern()
}

/// Anything that yields exactly one [`Pattern`].
///
/// Implemented by every built-in component and by `Pattern<T>` itself, so a
/// composed pattern can be reused as a component of a larger one.
///
/// # Custom Components
///
/// ```rust
/// use pathrouter::pattern::{seq, Component, Literal, Pattern};
/// use pathrouter::PathMatcher;
///
/// /// Captures one segment that parses as a number.
/// struct Numeric;
///
/// impl Component for Numeric {
///     type Output = u64;
///
///     fn pattern(&self) -> Pattern<u64> {
///         Pattern::from_fn(|segments, cursor| {
///             let value = segments.get(*cursor)?.parse().ok()?;
///             *cursor += 1;
///             Some(value)
///         })
///     }
/// }
///
/// let matcher = PathMatcher::new(seq().then(Literal::new("orders")).then(Numeric));
/// assert_eq!(matcher.match_segments(&["orders", "17"]), Some(17));
/// assert_eq!(matcher.match_segments(&["orders", "seventeen"]), None);
/// ```
pub trait Component {
    /// The capture produced by a successful match.
    type Output: 'static;

    /// Compile this component into a pattern.
    fn pattern(&self) -> Pattern<Self::Output>;
}

impl<T: 'static> Component for Pattern<T> {
    type Output = T;

    fn pattern(&self) -> Pattern<T> {
        self.clone()
    }
}
