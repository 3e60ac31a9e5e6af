//! Import tests for the scrib format (scrib → symbol tree)
//!
//! These tests verify that scrib sources are parsed into the expected symbol
//! structure. Rendering is covered by the markdown tests.

use crate::common::parse;
use scrib_babel::ast::{BracketKind, EmphasisKind, Symbol};

#[test]
fn test_plain_line_is_all_raw_chars() {
    let doc = parse("plain text");
    assert_eq!(doc.lines.len(), 1);

    let line = &doc.lines[0];
    assert_eq!(line.symbols.len(), "plain text".chars().count());
    assert!(line
        .symbols
        .iter()
        .all(|s| matches!(s, Symbol::Raw(_))));
}

#[test]
fn test_lines_parse_independently() {
    let doc = parse("first [x]\nsecond #tag\n");
    assert_eq!(doc.lines.len(), 2);

    assert!(doc.lines[0]
        .symbols
        .iter()
        .any(|s| matches!(s, Symbol::Bracket(_))));
    assert!(doc.lines[1]
        .symbols
        .iter()
        .any(|s| matches!(s, Symbol::Hashtag(_))));
}

#[test]
fn test_link_bracket_structure() {
    let doc = parse("[page name]");
    let line = &doc.lines[0];
    assert_eq!(line.symbols.len(), 1);

    match &line.symbols[0] {
        Symbol::Bracket(bracket) => {
            assert_eq!(bracket.kind, BracketKind::Link);
            assert_eq!(bracket.raw, "[page name]");
            assert_eq!(bracket.symbols.len(), "page name".chars().count());
        }
        other => panic!("Expected bracket symbol, got {other:?}"),
    }
}

#[test]
fn test_emphasis_variants() {
    for (input, expected_kind, expected_level) in [
        ("[* b]", EmphasisKind::Bold, 1),
        ("[** b]", EmphasisKind::Bold, 2),
        ("[- b]", EmphasisKind::Strike, 1),
        ("[_ b]", EmphasisKind::Underline, 1),
        ("[___ b]", EmphasisKind::Underline, 3),
    ] {
        let doc = parse(input);
        match &doc.lines[0].symbols[0] {
            Symbol::Bracket(bracket) => {
                assert_eq!(
                    bracket.kind,
                    BracketKind::Emphasis {
                        kind: expected_kind,
                        level: expected_level
                    },
                    "input: {input:?}"
                );
            }
            other => panic!("Expected bracket symbol, got {other:?}"),
        }
    }
}

#[test]
fn test_hashtag_owns_consumed_chars() {
    let doc = parse("see #rust now");
    let hashtag = doc.lines[0]
        .symbols
        .iter()
        .find_map(|s| match s {
            Symbol::Hashtag(h) => Some(h),
            _ => None,
        })
        .expect("hashtag token");
    assert_eq!(hashtag.raw(), "#rust");
    assert_eq!(hashtag.tag(), "rust");
}

#[test]
fn test_malformed_brackets_keep_exact_source() {
    for input in ["[", "[abc", "[[abc", "[* abc", "[*abc", "[]"] {
        let doc = parse(input);
        let rebuilt: String = doc.lines[0]
            .symbols
            .iter()
            .map(|s| s.raw_text())
            .collect();
        assert_eq!(rebuilt, input, "input: {input:?}");
    }
}

#[test]
fn test_interior_is_empty_for_degraded_brackets() {
    for input in ["[", "[]", "[abc", "[[abc", "[* abc"] {
        let doc = parse(input);
        match &doc.lines[0].symbols[0] {
            Symbol::Bracket(bracket) => {
                assert!(
                    bracket.symbols.is_empty(),
                    "interior should be discarded for {input:?}"
                );
            }
            other => panic!("Expected bracket symbol, got {other:?}"),
        }
    }
}
