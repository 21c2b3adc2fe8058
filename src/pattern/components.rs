//! Built-in path components.

use std::sync::Arc;

use super::core::{Component, Pattern};

/// Separator between path segments, used to split multi-segment literals.
pub const SEPARATOR: char = '/';

/// How a [`Literal`] compares its sub-segments against the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    /// Byte-for-byte equality
    #[default]
    Sensitive,
    /// Unicode lowercase folding on both sides
    Insensitive,
}

impl CaseSensitivity {
    /// Compare one expected sub-segment with one input segment.
    #[inline]
    #[must_use]
    pub fn compare(self, expected: &str, actual: &str) -> bool {
        match self {
            CaseSensitivity::Sensitive => expected == actual,
            CaseSensitivity::Insensitive => expected
                .chars()
                .flat_map(char::to_lowercase)
                .eq(actual.chars().flat_map(char::to_lowercase)),
        }
    }
}

/// Matches fixed text, one or more segments long.
///
/// The value is split on [`SEPARATOR`] and empty pieces are discarded, so
/// `"api/v2/books"`, `"/api/v2/books/"` and `"//api//v2//books"` all require
/// the three segments `api`, `v2`, `books` in order. Produces no capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    sub_segments: Arc<[Box<str>]>,
    case: CaseSensitivity,
}

impl Literal {
    /// Case-sensitive literal.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self::with_case(value, CaseSensitivity::Sensitive)
    }

    /// Literal that ignores case, e.g. `API/V1` matches `api/v1`.
    #[must_use]
    pub fn case_insensitive(value: &str) -> Self {
        Self::with_case(value, CaseSensitivity::Insensitive)
    }

    #[must_use]
    pub fn with_case(value: &str, case: CaseSensitivity) -> Self {
        let sub_segments = value
            .split(SEPARATOR)
            .filter(|part| !part.is_empty())
            .map(Box::<str>::from)
            .collect();
        Self { sub_segments, case }
    }

    /// The sub-segments this literal consumes, in order.
    #[must_use]
    pub fn sub_segments(&self) -> &[Box<str>] {
        &self.sub_segments
    }

    #[must_use]
    pub fn case(&self) -> CaseSensitivity {
        self.case
    }
}

impl Component for Literal {
    type Output = ();

    fn pattern(&self) -> Pattern<()> {
        let expected = Arc::clone(&self.sub_segments);
        let case = self.case;
        Pattern::from_fn(move |segments, cursor| {
            let start = *cursor;
            for part in expected.iter() {
                match segments.get(*cursor) {
                    Some(actual) if case.compare(part, actual) => *cursor += 1,
                    _ => {
                        *cursor = start;
                        return None;
                    }
                }
            }
            Some(())
        })
    }
}

/// Captures exactly one segment verbatim.
///
/// Fails without consuming anything when no segment is left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parameter;

impl Component for Parameter {
    type Output = String;

    fn pattern(&self) -> Pattern<String> {
        Pattern::from_fn(|segments, cursor| {
            let value = segments.get(*cursor)?;
            *cursor += 1;
            Some((*value).to_owned())
        })
    }
}

/// Captures the next segment if there is one. Never fails.
///
/// When the input is exhausted the capture is `None` and the cursor does not
/// move. The parameter is greedy: if a segment is present it is always taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionalParameter;

impl Component for OptionalParameter {
    type Output = Option<String>;

    fn pattern(&self) -> Pattern<Option<String>> {
        Pattern::from_fn(|segments, cursor| {
            let value = segments.get(*cursor).map(|value| (*value).to_owned());
            if value.is_some() {
                *cursor += 1;
            }
            Some(value)
        })
    }
}

/// Zero-width component: consumes nothing, always succeeds, captures nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl Component for Empty {
    type Output = ();

    fn pattern(&self) -> Pattern<()> {
        Pattern::empty()
    }
}
