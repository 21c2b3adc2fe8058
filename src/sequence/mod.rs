//! # Sequence Module
//!
//! Runtime-built patterns with an unbounded, positionally indexed capture list.
//!
//! ## Overview
//!
//! Typed chains built with [`crate::pattern::seq`] flatten their captures into
//! tuples, which caps them at eight captures and fixes the shape at compile
//! time. A [`Sequence`] trades that precision for flexibility: it is a list of
//! [`SegmentSpec`]s that can be assembled at runtime (from configuration, a
//! route table, a template string) and compiles to a `Pattern<Captures>`.
//!
//! The fold goes through the same pairwise composition as typed chains, so
//! cursor restoration and void elision behave identically: literals never take
//! a slot, every parameter takes exactly one.
//!
//! ## Templates
//!
//! [`Sequence::parse`] accepts the familiar placeholder syntax:
//!
//! - `users` - literal segment
//! - `{id}` - required parameter named `id`
//! - `{tab?}` - optional parameter named `tab`
//!
//! ```rust
//! use pathrouter::sequence::Sequence;
//! use pathrouter::PathMatcher;
//!
//! let matcher = PathMatcher::new(Sequence::parse("/users/{id}/posts/{post?}")?);
//!
//! let captures = matcher.match_path("/users/42/posts").unwrap();
//! assert_eq!(captures.get_named("id"), Some("42"));
//! assert_eq!(captures.get_named("post"), None);
//! assert_eq!(captures.len(), 2);
//! # Ok::<(), pathrouter::sequence::TemplateError>(())
//! ```

mod captures;

use std::fmt;
use std::sync::Arc;

use crate::pattern::{
    seq, CaseSensitivity, Component, Literal, OptionalParameter, Parameter, Pattern, SEPARATOR,
};

pub use captures::{Capture, Captures, MAX_INLINE_CAPTURES};

/// One declared segment of a [`Sequence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentSpec {
    Literal(Literal),
    Parameter { name: Option<Arc<str>> },
    OptionalParameter { name: Option<Arc<str>> },
}

impl SegmentSpec {
    fn compile(&self, acc: Pattern<Captures>) -> Pattern<Captures> {
        match self {
            SegmentSpec::Literal(literal) => acc.then(literal.clone()),
            SegmentSpec::Parameter { name } => {
                let name = name.clone();
                acc.then(Parameter.pattern().map(move |value| Capture {
                    name: name.clone(),
                    value: Some(value),
                }))
            }
            SegmentSpec::OptionalParameter { name } => {
                let name = name.clone();
                acc.then(OptionalParameter.pattern().map(move |value| Capture {
                    name: name.clone(),
                    value,
                }))
            }
        }
    }
}

/// Error returned by [`Sequence::parse`] for a malformed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// `{` without a matching `}` in the same segment
    UnclosedPlaceholder {
        /// The offending segment
        segment: String,
    },
    /// `{}` or `{?}`
    EmptyPlaceholder {
        /// The offending segment
        segment: String,
    },
    /// Braces in the middle of a segment, e.g. `user-{id}` or `{a}{b}`
    ///
    /// A placeholder must span a whole segment.
    MisplacedBrace {
        /// The offending segment
        segment: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UnclosedPlaceholder { segment } => {
                write!(f, "Route template error: unclosed placeholder in segment '{}'", segment)
            }
            TemplateError::EmptyPlaceholder { segment } => {
                write!(
                    f,
                    "Route template error: placeholder '{}' has no name. \
                    Expected {{name}} or {{name?}}",
                    segment
                )
            }
            TemplateError::MisplacedBrace { segment } => {
                write!(
                    f,
                    "Route template error: segment '{}' mixes text and braces. \
                    A placeholder must span a whole segment",
                    segment
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Runtime list of segment specs compiling to `Pattern<Captures>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    specs: Vec<SegmentSpec>,
}

impl Sequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a route template with case-sensitive literals.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if a placeholder is malformed.
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        Self::parse_with_case(template, CaseSensitivity::Sensitive)
    }

    /// Parse a route template, comparing literal segments with `case`.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if a placeholder is malformed.
    pub fn parse_with_case(template: &str, case: CaseSensitivity) -> Result<Self, TemplateError> {
        let mut sequence = Self::new();
        for segment in template.split(SEPARATOR).filter(|s| !s.is_empty()) {
            let spec = match segment.strip_prefix('{') {
                Some(rest) => {
                    let inner = rest.strip_suffix('}').ok_or_else(|| {
                        TemplateError::UnclosedPlaceholder {
                            segment: segment.to_string(),
                        }
                    })?;
                    if inner.contains(['{', '}']) {
                        return Err(TemplateError::MisplacedBrace {
                            segment: segment.to_string(),
                        });
                    }
                    let (name, optional) = match inner.strip_suffix('?') {
                        Some(name) => (name, true),
                        None => (inner, false),
                    };
                    if name.is_empty() {
                        return Err(TemplateError::EmptyPlaceholder {
                            segment: segment.to_string(),
                        });
                    }
                    let name = Some(Arc::from(name));
                    if optional {
                        SegmentSpec::OptionalParameter { name }
                    } else {
                        SegmentSpec::Parameter { name }
                    }
                }
                None if segment.contains(['{', '}']) => {
                    return Err(TemplateError::MisplacedBrace {
                        segment: segment.to_string(),
                    });
                }
                None => SegmentSpec::Literal(Literal::with_case(segment, case)),
            };
            sequence.specs.push(spec);
        }
        Ok(sequence)
    }

    #[must_use]
    pub fn literal(mut self, value: &str) -> Self {
        self.specs.push(SegmentSpec::Literal(Literal::new(value)));
        self
    }

    #[must_use]
    pub fn literal_case_insensitive(mut self, value: &str) -> Self {
        self.specs
            .push(SegmentSpec::Literal(Literal::case_insensitive(value)));
        self
    }

    #[must_use]
    pub fn parameter(mut self, name: &str) -> Self {
        self.specs.push(SegmentSpec::Parameter {
            name: Some(Arc::from(name)),
        });
        self
    }

    #[must_use]
    pub fn optional_parameter(mut self, name: &str) -> Self {
        self.specs.push(SegmentSpec::OptionalParameter {
            name: Some(Arc::from(name)),
        });
        self
    }

    pub fn push(&mut self, spec: SegmentSpec) {
        self.specs.push(spec);
    }

    #[must_use]
    pub fn specs(&self) -> &[SegmentSpec] {
        &self.specs
    }

    /// Fold the specs left to right into one pattern.
    #[must_use]
    pub fn compile(&self) -> Pattern<Captures> {
        let start = seq().map(|()| Captures::new());
        self.specs
            .iter()
            .fold(start, |acc, spec| spec.compile(acc))
    }
}

impl Component for Sequence {
    type Output = Captures;

    fn pattern(&self) -> Pattern<Captures> {
        self.compile()
    }
}

impl std::str::FromStr for Sequence {
    type Err = TemplateError;

    fn from_str(template: &str) -> Result<Self, Self::Err> {
        Self::parse(template)
    }
}
