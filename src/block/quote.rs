//! Blockquotes: consecutive lines starting with `>`.

use crate::error::Result;
use crate::mobject::Fragment;
use crate::parser::Parser;
use crate::tags::Payload;
use crate::token::TokenKind;

/// Strip the `>` marker (and one following space) from each line, then parse
/// the joined body as a nested document.
pub fn read(p: &mut Parser) -> Result<Fragment> {
    if !p.at_line_start() || !p.tags().contains("blockquote") {
        return Ok(p.take_literal());
    }

    let mut lines = Vec::new();
    while p.at_line_start() && p.current().kind == TokenKind::GreaterThan {
        p.next_token();
        let line = p.read_line();
        lines.push(match line.strip_prefix(' ') {
            Some(stripped) => stripped.to_owned(),
            None => line,
        });
        p.skip_line_end();
    }

    let body = lines.join("\n");
    let text = p.sub_parse_document(&body)?;
    Ok(Fragment::Text(
        p.render_tag("blockquote", &Payload::Text { text })?.unwrap_or_default(),
    ))
}
