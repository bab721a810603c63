//! Code spans.

use crate::error::Result;
use crate::escape::escape_text;
use crate::mobject::Fragment;
use crate::parser::{Parser, Span};
use crate::tags::Payload;

/// Backtick run up to the next run of the same length. The content is
/// HTML-escaped but not parsed.
pub fn read(p: &mut Parser) -> Result<Fragment> {
    let delimiter = p.current().literal.clone();

    let code = match p.parse_between(&delimiter, &delimiter) {
        Span::Closed(code) => code,
        Span::Unclosed(scanned) => return Ok(Fragment::Text(scanned)),
        Span::Mismatch => return Ok(p.take_literal()),
    };

    let payload = Payload::Code {
        code: escape_text(&code).into_owned(),
    };
    match p.render_tag("code", &payload)? {
        Some(html) => Ok(Fragment::Text(html)),
        None => Ok(Fragment::Text(format!("{delimiter}{code}{delimiter}"))),
    }
}
