//! Property-based tests for pattern matching.
//!
//! These tests use proptest to generate random segment lists and verify the
//! structural laws every pattern obeys:
//! 1. Prefix: a pattern that consumes `k` segments fails on any shorter prefix
//! 2. Literal exactness: a literal matches exactly its own sub-segments
//! 3. Sequencing: consumed counts add up and failures leave the cursor untouched
//! 4. Parameter / OptionalParameter arity
//! 5. Dispatch runs at most one handler, the first full match

#![allow(clippy::unwrap_used, clippy::expect_used)]

use parking_lot::Mutex;
use pathrouter::pattern::{seq, Component, Literal, OptionalParameter, Parameter, Pattern};
use pathrouter::{PathHandler, PathMatcher};
use proptest::prelude::*;
use std::sync::Arc;

// -- Strategies --

/// A single non-empty segment.
fn segment_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{1,6}").expect("valid regex")
}

fn segments_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 0..=max)
}

#[derive(Debug, Clone)]
enum Piece {
    Literal(String),
    Parameter,
    Optional,
}

fn piece_strategy() -> impl Strategy<Value = Piece> {
    prop_oneof![
        segment_strategy().prop_map(Piece::Literal),
        Just(Piece::Parameter),
        Just(Piece::Optional),
    ]
}

/// Build a pattern whose capture is the number of segments it consumed.
fn counting_pattern(pieces: &[Piece]) -> Pattern<usize> {
    pieces.iter().fold(seq().map(|()| 0_usize), |acc, piece| {
        let step: Pattern<usize> = match piece {
            Piece::Literal(text) => Literal::new(text).pattern().map(|()| 1),
            Piece::Parameter => Parameter.pattern().map(|_| 1),
            Piece::Optional => OptionalParameter.pattern().map(|value| usize::from(value.is_some())),
        };
        Pattern::from_fn(move |segments, cursor| {
            let start = *cursor;
            let total = acc.attempt(segments, cursor).and_then(|consumed| {
                step.attempt(segments, cursor).map(|more| consumed + more)
            });
            if total.is_none() {
                *cursor = start;
            }
            total
        })
    })
}

fn attempt<T: 'static>(pattern: &Pattern<T>, segments: &[String]) -> (Option<T>, usize) {
    let borrowed: Vec<&str> = segments.iter().map(String::as_str).collect();
    let mut cursor = 0;
    let captured = pattern.attempt(&borrowed, &mut cursor);
    (captured, cursor)
}

proptest! {
    #[test]
    fn prop_shorter_prefix_fails_when_required_pieces_remain(
        pieces in prop::collection::vec(piece_strategy(), 1..6),
        segments in segments_strategy(8),
    ) {
        let pattern = counting_pattern(&pieces);
        if let (Some(consumed), cursor) = attempt(&pattern, &segments) {
            prop_assert_eq!(consumed, cursor);
            let required = pieces.iter().filter(|p| !matches!(p, Piece::Optional)).count();
            // A strict prefix shorter than the required piece count can never match
            for len in 0..required.min(segments.len()) {
                let (shorter, _) = attempt(&pattern, &segments[..len]);
                prop_assert!(shorter.is_none());
            }
        }
    }

    #[test]
    fn prop_failure_leaves_cursor_at_start(
        pieces in prop::collection::vec(piece_strategy(), 1..6),
        segments in segments_strategy(8),
        start in 0_usize..4,
    ) {
        let pattern = counting_pattern(&pieces);
        let borrowed: Vec<&str> = segments.iter().map(String::as_str).collect();
        let mut cursor = start.min(borrowed.len());
        let before = cursor;
        match pattern.attempt(&borrowed, &mut cursor) {
            Some(consumed) => {
                prop_assert_eq!(cursor, before + consumed);
            }
            None => {
                prop_assert_eq!(cursor, before);
            }
        }
    }

    #[test]
    fn prop_literal_matches_exactly_its_sub_segments(
        parts in prop::collection::vec(segment_strategy(), 1..5),
        input in segments_strategy(6),
    ) {
        let matcher = PathMatcher::new(seq().then(Literal::new(&parts.join("/"))));
        prop_assert_eq!(matcher.match_segments(&parts), Some(()));
        prop_assert_eq!(matcher.match_segments(&input).is_some(), input == parts);
    }

    #[test]
    fn prop_case_insensitive_literal_ignores_ascii_case(
        parts in prop::collection::vec(segment_strategy(), 1..5),
    ) {
        let upper: Vec<String> = parts.iter().map(|p| p.to_uppercase()).collect();
        let matcher = PathMatcher::new(seq().then(Literal::case_insensitive(&parts.join("/"))));
        prop_assert!(matcher.match_segments(&upper).is_some());
    }

    #[test]
    fn prop_parameter_fails_exactly_when_input_exhausted(segments in segments_strategy(3)) {
        let (captured, cursor) = attempt(&Parameter.pattern(), &segments);
        match segments.first() {
            Some(first) => {
                prop_assert_eq!(captured.as_ref(), Some(first));
                prop_assert_eq!(cursor, 1);
            }
            None => {
                prop_assert!(captured.is_none());
                prop_assert_eq!(cursor, 0);
            }
        }
    }

    #[test]
    fn prop_optional_parameter_never_breaks_a_match(
        head in segment_strategy(),
        rest in segments_strategy(1),
    ) {
        let matcher = PathMatcher::new(seq().then(Parameter).then(OptionalParameter));
        let mut input = vec![head.clone()];
        input.extend(rest.iter().cloned());
        prop_assert_eq!(
            matcher.match_segments(&input),
            Some((head, rest.first().cloned()))
        );
    }

    #[test]
    fn prop_matcher_rejects_unconsumed_segments(
        segments in prop::collection::vec(segment_strategy(), 2..6),
    ) {
        let matcher = PathMatcher::new(seq().then(Literal::new(&segments[0])).then(Parameter));
        let expected = (segments.len() == 2).then(|| segments[1].clone());
        prop_assert_eq!(matcher.match_segments(&segments), expected);
    }

    #[test]
    fn prop_dispatch_runs_first_full_match_only(
        literals in prop::collection::vec(segment_strategy(), 1..6),
        pick in 0_usize..6,
    ) {
        let hits = Arc::new(Mutex::new(Vec::new()));
        let mut handler = PathHandler::new();
        for (index, literal) in literals.iter().enumerate() {
            let sink = Arc::clone(&hits);
            handler.add(seq().then(Literal::new(literal)), move |()| sink.lock().push(index));
        }

        let target = &literals[pick % literals.len()];
        let first = literals.iter().position(|l| l == target).unwrap();
        prop_assert!(handler.handle(&[target.as_str()]));
        prop_assert_eq!(hits.lock().clone(), vec![first]);
    }
}
