//! Emphasis, strong emphasis and strikethrough.

use crate::error::Result;
use crate::mobject::Fragment;
use crate::parser::{Parser, Span};
use crate::tags::Payload;
use crate::token::{Token, TokenKind};

/// Tag for a delimiter run, if the run forms emphasis at all.
fn tag_for(token: &Token) -> Option<&'static str> {
    match (token.kind, token.run_len()) {
        (TokenKind::Asterisk | TokenKind::Underscore, 1) => Some("em"),
        (TokenKind::Asterisk | TokenKind::Underscore, 2) => Some("strong"),
        (TokenKind::Tilde, 2) => Some("s"),
        _ => None,
    }
}

/// Delimiter run up to the next run with the identical literal; the text in
/// between is parsed inline.
pub fn read(p: &mut Parser) -> Result<Fragment> {
    let Some(tag) = tag_for(p.current()) else {
        return Ok(p.take_literal());
    };
    let next = p.peek().kind;
    if next.is_whitespace() || next.is_line_end() {
        return Ok(p.take_literal());
    }
    // snake_case_words stay as written.
    if p.current().kind == TokenKind::Underscore && p.previous() == Some(TokenKind::Content) {
        return Ok(p.take_literal());
    }

    let delimiter = p.current().literal.clone();
    let raw = match p.parse_between(&delimiter, &delimiter) {
        Span::Closed(raw) => raw,
        Span::Unclosed(scanned) => return Ok(Fragment::Text(scanned)),
        Span::Mismatch => return Ok(p.take_literal()),
    };

    if !p.tags().contains(tag) {
        return Ok(Fragment::Text(format!("{delimiter}{raw}{delimiter}")));
    }
    let text = p.sub_parse_inline(&raw)?;
    Ok(Fragment::Text(
        p.render_tag(tag, &Payload::Text { text })?.unwrap_or_default(),
    ))
}
