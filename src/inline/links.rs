//! Links and images.
//!
//! Both resolve to a [`Mobject`]: the markdown accessor returns the literal
//! source and the html accessor renders the `a` or `img` tag on demand.

use crate::error::Result;
use crate::mobject::{Format, Fragment, Mobject};
use crate::parser::{Parser, Span};
use crate::tags::{self, Payload, TagRenderer};
use crate::token::TokenKind;

/// `[text](href)`. The text is parsed inline, so it may hold images.
pub fn read_link(p: &mut Parser) -> Result<Fragment> {
    let parts = match link_parts(p) {
        Parts::Link(parts) => parts,
        Parts::Literal(text) => return Ok(Fragment::Text(text)),
    };

    let text = p.sub_parse_inline(&parts.text)?;
    let payload = Payload::Link {
        text,
        href: parts.destination,
    };
    Ok(Fragment::Object(lazy("link", "a", payload, parts.source, p.tag_renderer("a"))))
}

/// `![alt](src)`. A `!` not directly followed by `[` is plain text.
pub fn read_image(p: &mut Parser) -> Result<Fragment> {
    if p.peek().kind != TokenKind::LeftBracket {
        return Ok(p.take_literal());
    }

    p.next_token();
    let parts = match link_parts(p) {
        Parts::Link(parts) => parts,
        Parts::Literal(text) => return Ok(Fragment::Text(format!("!{text}"))),
    };

    let payload = Payload::Image {
        alt: parts.text,
        src: parts.destination,
    };
    let source = format!("!{}", parts.source);
    Ok(Fragment::Object(lazy("image", "img", payload, source, p.tag_renderer("img"))))
}

struct LinkParts {
    text: String,
    destination: String,
    /// `[text](destination)` as written.
    source: String,
}

enum Parts {
    Link(LinkParts),
    /// Malformed; everything consumed, as written.
    Literal(String),
}

/// Bracketed text immediately followed by a parenthesized destination.
fn link_parts(p: &mut Parser) -> Parts {
    let text = match p.parse_between("[", "]") {
        Span::Closed(text) => text,
        Span::Unclosed(scanned) => return Parts::Literal(scanned),
        Span::Mismatch => return Parts::Literal(p.next_token().literal),
    };
    if p.current().kind != TokenKind::LeftParen {
        return Parts::Literal(format!("[{text}]"));
    }
    let destination = match p.parse_between("(", ")") {
        Span::Closed(destination) => destination,
        Span::Unclosed(scanned) => return Parts::Literal(format!("[{text}]{scanned}")),
        Span::Mismatch => return Parts::Literal(format!("[{text}]")),
    };
    let source = format!("[{text}]({destination})");
    Parts::Link(LinkParts {
        text,
        destination,
        source,
    })
}

/// Result whose html form is rendered only when requested, falling back to
/// the literal source when no renderer is registered.
fn lazy(
    kind: &str,
    tag: &'static str,
    payload: Payload,
    source: String,
    renderer: Option<TagRenderer>,
) -> Mobject {
    let markdown = source.clone();
    Mobject::new(kind)
        .with(Format::Html, move || {
            Ok(tags::render(renderer.as_ref(), tag, &payload)?.unwrap_or_else(|| source.clone()))
        })
        .with(Format::Markdown, move || Ok(markdown.clone()))
}
