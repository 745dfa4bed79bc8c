// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn bare_kind_has_no_params() {
    let inv = parse_invocation("clear").unwrap();
    assert_eq!(inv.kind, "clear");
    assert!(inv.params.is_empty());
}

#[test]
fn bare_and_quoted_values() {
    let inv = parse_invocation(r#"print message="hello world" level=info"#).unwrap();
    assert_eq!(inv.kind, "print");
    assert_eq!(inv.params.get("message"), Some("hello world"));
    assert_eq!(inv.params.get("level"), Some("info"));
}

#[test]
fn surrounding_and_repeated_whitespace_is_ignored() {
    let inv = parse_invocation("  delay \t seconds=2   ").unwrap();
    assert_eq!(inv.kind, "delay");
    assert_eq!(inv.params.get("seconds"), Some("2"));
    assert_eq!(inv.params.len(), 1);
}

#[test]
fn quoted_escapes() {
    let inv = parse_invocation(r#"print message="say \"hi\"\\n\tdone \q""#).unwrap();
    assert_eq!(inv.params.get("message"), Some("say \"hi\"\\n\tdone \\q"));
}

#[test]
fn empty_values() {
    let inv = parse_invocation(r#"print message="" note="#).unwrap();
    assert_eq!(inv.params.get("message"), Some(""));
    assert_eq!(inv.params.get("note"), Some(""));
}

#[test]
fn bare_value_may_contain_equals() {
    let inv = parse_invocation("set expr=a=b").unwrap();
    assert_eq!(inv.params.get("expr"), Some("a=b"));
}

#[parameterized(
    kind_starts_with_digit = { "9lives", LineError::InvalidKind("9lives".to_string()) },
    kind_with_symbol = { "pr!nt message=x", LineError::InvalidKind("pr!nt".to_string()) },
    missing_equals = { "print message", LineError::MissingEquals("message".to_string()) },
    equals_after_space = { "print message =x", LineError::MissingEquals("message".to_string()) },
    empty_key = { "print =x", LineError::EmptyKey },
    invalid_key = { "print $msg=x", LineError::InvalidKey("$msg".to_string()) },
    duplicate_key = { "print a=1 a=2", LineError::DuplicateKey("a".to_string()) },
    unterminated = { r#"print message="oops"#, LineError::UnterminatedQuote("message".to_string()) },
    dangling_escape = { r#"print message="oops\"#, LineError::UnterminatedQuote("message".to_string()) },
    trailing_after_quote = { r#"print message="a"b"#, LineError::TrailingCharacters("message".to_string()) },
)]
fn malformed(line: &str, expected: LineError) {
    assert_eq!(parse_invocation(line).unwrap_err(), expected);
}
