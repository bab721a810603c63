//! Block-level productions.
//!
//! Block constructs only trigger at the start of a line in document scope
//! (see [`Parser::at_line_start`]). Everywhere else their marker tokens fall
//! through to the inline productions or are copied verbatim. Handles:
//! - Thematic breaks
//! - Headings
//! - Lists
//! - Blockquotes
//! - Tables
//! - Fenced code blocks

pub mod fence;
pub mod heading;
pub mod list;
pub mod quote;
pub mod table;

use crate::error::Result;
use crate::inline;
use crate::limits::{MIN_FENCE_LEN, MIN_RULE_LEN};
use crate::mobject::Fragment;
use crate::parser::Parser;
use crate::tags::Payload;
use crate::token::TokenKind;

/// `-`: thematic break or unordered list item.
pub fn read_minus(p: &mut Parser) -> Result<Fragment> {
    if p.at_line_start()
        && p.current().run_len() >= MIN_RULE_LEN
        && p.peek().kind.is_line_end()
    {
        return thematic_break(p);
    }
    list::read_unordered(p)
}

/// `*`: unordered list item at line start, emphasis otherwise.
pub fn read_asterisk(p: &mut Parser) -> Result<Fragment> {
    if list::starts_unordered_item(p) {
        return list::read_unordered(p);
    }
    inline::emphasis::read(p)
}

/// Backticks: fenced code block at line start, code span otherwise.
pub fn read_backtick(p: &mut Parser) -> Result<Fragment> {
    if p.at_line_start() && p.current().run_len() >= MIN_FENCE_LEN {
        return fence::read(p);
    }
    inline::code_span::read(p)
}

/// Render the `hr` tag for the current marker token.
///
/// Only the marker is consumed; the line end after it passes through.
pub(crate) fn thematic_break(p: &mut Parser) -> Result<Fragment> {
    match p.render_tag("hr", &Payload::Break)? {
        Some(html) => {
            p.next_token();
            Ok(Fragment::Text(html))
        }
        None => Ok(p.take_literal()),
    }
}

/// Whether the current token is `kind` with a literal of exactly one character
/// followed by whitespace.
pub(crate) fn is_single_marker(p: &Parser, kind: TokenKind) -> bool {
    p.current().kind == kind && p.current().literal.len() == 1 && p.peek().kind.is_whitespace()
}
