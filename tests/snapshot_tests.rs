//! Tokenizer snapshot export and import.

use downup::{TokenKind, Tokenizer};

#[test]
fn snapshots_are_independent() {
    let mut lexer = Tokenizer::new("# a b");
    lexer.next_token();
    let snapshot = lexer.snapshot();

    let mut first = Tokenizer::from_snapshot(snapshot.clone()).unwrap();
    let mut second = Tokenizer::from_snapshot(snapshot).unwrap();
    while first.next_token().kind != TokenKind::EndOfInput {}

    assert_eq!(second.next_token().kind, TokenKind::Whitespace);
    assert_eq!(second.next_token().literal, "a");
    assert_eq!(lexer.next_token().kind, TokenKind::Whitespace);
}

#[cfg(feature = "serde")]
#[test]
fn snapshot_survives_json() {
    let mut lexer = Tokenizer::new("**bold** text");
    lexer.next_token();

    let blob = serde_json::to_string(&lexer.snapshot()).unwrap();
    let snapshot: downup::Snapshot = serde_json::from_str(&blob).unwrap();
    let mut restored = Tokenizer::from_snapshot(snapshot).unwrap();

    assert_eq!(restored.next_token().literal, "bold");
    assert_eq!(restored.next_token().literal, "**");
}

#[cfg(feature = "serde")]
#[test]
fn tampered_json_is_rejected() {
    let blob = r#"{"source":"é","position":1,"read_position":2}"#;
    let snapshot: downup::Snapshot = serde_json::from_str(blob).unwrap();
    assert!(matches!(
        Tokenizer::from_snapshot(snapshot),
        Err(downup::Error::InvalidSnapshot(_))
    ));
}
