//! Segment slices, path splitting and URL path derivation.
//!
//! Matching works on `&[&str]`. Callers usually hold `Vec<String>` or a raw
//! path, so this module converts both into a stack-allocated [`SegmentVec`]
//! without copying segment text.

use smallvec::SmallVec;
use tracing::debug;
use url::Url;

use crate::pattern::SEPARATOR;

/// Maximum number of segments before heap allocation.
/// Deep links rarely exceed a handful of segments.
pub const MAX_INLINE_SEGMENTS: usize = 16;

/// Borrowed segment list used on the dispatch path.
pub type SegmentVec<'a> = SmallVec<[&'a str; MAX_INLINE_SEGMENTS]>;

/// Borrow any slice of string-like segments as `&str`s.
#[inline]
#[must_use]
pub fn as_segments<S: AsRef<str>>(segments: &[S]) -> SegmentVec<'_> {
    segments.iter().map(|segment| segment.as_ref()).collect()
}

/// Split a path into segments.
///
/// The leading separator is dropped and empty segments are discarded, so
/// `/users/42`, `users/42`, `/users/42/` and `//users//42` all yield
/// `["users", "42"]`, and `/` or `""` yield no segments at all.
/// No percent-decoding is performed.
#[must_use]
pub fn split_path(path: &str) -> SegmentVec<'_> {
    path.split(SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Derive decoded path segments from a URL.
///
/// Scheme, authority, query and fragment are ignored. Each segment of the
/// path is percent-decoded after splitting, so an encoded separator (`%2F`)
/// stays inside its segment. A segment that does not decode to UTF-8 is kept
/// verbatim.
///
/// For custom-scheme deep links the first label is the host, not a segment:
/// `myapp://users/42` yields `["42"]`, exactly as the URL library parses it.
#[must_use]
pub fn url_segments(url: &Url) -> Vec<String> {
    split_path(url.path())
        .into_iter()
        .map(|raw| match urlencoding::decode(raw) {
            Ok(decoded) => decoded.into_owned(),
            Err(err) => {
                debug!(segment = %raw, error = %err, "Segment is not valid UTF-8 after decoding; keeping it verbatim");
                raw.to_owned()
            }
        })
        .collect()
}
