use pathmux::pathmatch::{compile, CompileErrorKind, MatchError, Tokenizer, TokenKind};
use proptest::prelude::*;

fn assert_capture(pattern: &str, path: &str, name: &str, expected: &str) {
    let matcher = compile(pattern).expect("pattern should compile");
    let values = matcher
        .match_path(path)
        .unwrap_or_else(|e| panic!("{pattern} should match {path}: {e}"));
    assert_eq!(values.get(name), expected, "{pattern} vs {path}");
}

#[test]
fn test_named_segment_scenario() {
    assert_capture("/foo/bar/baz/{id}/view", "/foo/bar/baz/abc123/view", "id", "abc123");
}

#[test]
fn test_anchored_regex_scenario() {
    assert_capture(
        "/foo/bar/baz/{id:^[0-9]+}/view",
        "/foo/bar/baz/0123456/view",
        "id",
        "0123456",
    );
}

#[test]
fn test_fully_anchored_regex_scenario() {
    let matcher = compile("/foo/bar/baz/{id:^[0-9a-z]+$}").unwrap();
    for id in ["012abc", "abcdef", "012345"] {
        let path = format!("/foo/bar/baz/{id}");
        assert_eq!(matcher.match_path(&path).unwrap().get("id"), id);
    }

    let err = matcher.match_path("/foo/bar/baz").unwrap_err();
    assert!(matches!(
        err,
        MatchError::LiteralMismatch { .. } | MatchError::SegmentMismatch { .. }
    ));
}

#[test]
fn test_regex_consumes_embedded_slashes() {
    assert_capture(
        "/foo/bar/baz/{id:.*$}",
        "/foo/bar/baz/abc123/hello/world",
        "id",
        "abc123/hello/world",
    );
}

#[test]
fn test_unanchored_regex_with_trailing_literal() {
    let matcher = compile("/foo/bar/baz/{id:[0-9a-z]+}/view").unwrap();
    assert_eq!(
        matcher.match_path("/foo/bar/baz/abcdef/view").unwrap().get("id"),
        "abcdef"
    );
    assert!(matcher.match_path("/foo/bar/baz").is_err());
}

#[test]
fn test_empty_last_segment_rejected() {
    let matcher = compile("/a/{id}").unwrap();
    assert_eq!(
        matcher.match_path("/a/").unwrap_err(),
        MatchError::SegmentMismatch {
            name: "id".to_string()
        }
    );
    assert_eq!(matcher.match_path("/a/x").unwrap().get("id"), "x");
}

#[test]
fn test_segment_does_not_cross_slash() {
    let matcher = compile("/foo/bar/{id}").unwrap();
    assert!(matcher.match_path("/foo/bar/123").is_ok());
    assert_eq!(
        matcher.match_path("/foo/bar/123/").unwrap_err(),
        MatchError::TrailingInput {
            remaining: "/".to_string()
        }
    );
}

#[test]
fn test_multiline_pattern_error_position() {
    let err = compile("/a\n/b/{id").unwrap_err();
    assert_eq!(err.kind, CompileErrorKind::Syntax);
    assert_eq!((err.position.line, err.position.column), (2, 7));
}

#[test]
fn test_token_stream_scenario() {
    let mut tokenizer = Tokenizer::new(b"/foo/bar/baz/{id}/view");
    let expected = [
        (TokenKind::Literal, "/foo/bar/baz/", 1, 1),
        (TokenKind::OpenBrace, "{", 1, 14),
        (TokenKind::Literal, "id", 1, 15),
        (TokenKind::CloseBrace, "}", 1, 17),
        (TokenKind::Literal, "/view", 1, 18),
        (TokenKind::Eof, "", 1, 23),
    ];
    for (kind, literal, line, column) in expected {
        let token = tokenizer.next_token().unwrap();
        assert_eq!(token.kind, kind);
        assert_eq!(token.literal, literal);
        assert_eq!((token.position.line, token.position.column), (line, column));
    }
}

#[test]
fn test_matcher_shared_across_threads() {
    let matcher = std::sync::Arc::new(compile("/jobs/{id}").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let matcher = std::sync::Arc::clone(&matcher);
            std::thread::spawn(move || {
                let values = matcher.match_path(&format!("/jobs/{i}")).unwrap();
                values.get("id") == i.to_string()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

proptest! {
    #[test]
    fn literal_pattern_matches_only_itself(
        pattern in "[a-z0-9/_.-]{1,16}",
        input in "[a-z0-9/_.-]{0,16}",
    ) {
        let matcher = compile(&pattern).unwrap();
        prop_assert!(matcher.match_path(&pattern).unwrap().is_empty());
        prop_assert_eq!(matcher.match_path(&input).is_ok(), input == pattern);
    }

    #[test]
    fn match_is_deterministic(
        pattern in "(/[a-z]{1,4}|/\\{[a-z]{1,3}\\}|/\\{[a-z]{1,3}:[0-9a-z^$+*.]{1,5}\\})*",
        input in "(/[a-z0-9]{0,4}){0,5}",
    ) {
        // Generated regex bodies may be invalid; both compiles must agree
        let first = compile(&pattern);
        let second = compile(&pattern);
        prop_assert_eq!(first.is_ok(), second.is_ok());
        if let (Ok(a), Ok(b)) = (first, second) {
            prop_assert_eq!(a.match_path(&input), b.match_path(&input));
            prop_assert_eq!(a.match_path(&input), a.match_path(&input));
        }
    }

    #[test]
    fn named_segments_round_trip(
        values in proptest::collection::vec("[A-Za-z0-9_.~-]{1,12}", 1..6),
    ) {
        let names: Vec<String> = (0..values.len()).map(|i| format!("p{i}")).collect();
        let pattern: String = names.iter().map(|n| format!("/{{{n}}}")).collect();
        let path: String = values.iter().map(|v| format!("/{v}")).collect();

        let captured = compile(&pattern).unwrap().match_path(&path).unwrap();
        prop_assert_eq!(captured.len(), values.len());
        for (name, value) in names.iter().zip(&values) {
            prop_assert_eq!(captured.get(name), value.as_str());
        }
    }

    #[test]
    fn arbitrary_paths_never_panic(path in "\\PC{0,32}") {
        for pattern in ["/a/{id}", "/{x:^[0-9]+}/v", "/{rest:.*$}", ""] {
            let matcher = compile(pattern).unwrap();
            matcher.match_path(&path).ok();
        }
    }
}
