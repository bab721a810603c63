//! Ordered and unordered lists.
//!
//! Consecutive item lines are collected first; each item's raw text is then
//! parsed for inline constructs. Ordered items keep input order and are never
//! renumbered.

use crate::error::Result;
use crate::mobject::Fragment;
use crate::parser::Parser;
use crate::tags::Payload;
use crate::token::TokenKind;

use super::is_single_marker;

/// Whether the current token opens an unordered item (`-`, `+` or `*`).
pub fn starts_unordered_item(p: &Parser) -> bool {
    p.at_line_start()
        && [TokenKind::Minus, TokenKind::Plus, TokenKind::Asterisk]
            .into_iter()
            .any(|kind| is_single_marker(p, kind))
}

/// Whether the current token opens an ordered item (`N.`).
pub fn starts_ordered_item(p: &Parser) -> bool {
    p.at_line_start()
        && p.current().kind == TokenKind::Number
        && p.current().literal.ends_with('.')
        && p.peek().kind.is_whitespace()
}

pub fn read_unordered(p: &mut Parser) -> Result<Fragment> {
    read_list(p, "ul", starts_unordered_item)
}

pub fn read_ordered(p: &mut Parser) -> Result<Fragment> {
    read_list(p, "ol", starts_ordered_item)
}

fn read_list(p: &mut Parser, tag: &str, starts_item: fn(&Parser) -> bool) -> Result<Fragment> {
    if !starts_item(p) || !p.tags().contains(tag) {
        return Ok(p.take_literal());
    }

    let mut raw_items = Vec::new();
    loop {
        p.next_token();
        while p.current().kind.is_whitespace() {
            p.next_token();
        }
        raw_items.push(p.read_line());
        p.skip_line_end();
        if !starts_item(p) {
            break;
        }
    }

    let mut items = Vec::with_capacity(raw_items.len());
    for raw in &raw_items {
        items.push(p.sub_parse_inline(raw.trim_end())?);
    }
    Ok(Fragment::Text(
        p.render_tag(tag, &Payload::List { items })?.unwrap_or_default(),
    ))
}
