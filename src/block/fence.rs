//! Fenced code blocks.

use crate::error::Result;
use crate::escape::escape_text;
use crate::inline;
use crate::mobject::Fragment;
use crate::parser::Parser;
use crate::tags::Payload;
use crate::token::TokenKind;

/// Backtick run of three or more at line start, an info string, then raw
/// lines up to a line holding exactly the same run.
///
/// An info string containing a backtick makes the run a code span instead.
/// An unterminated fence is emitted as written, up to end of input.
pub fn read(p: &mut Parser) -> Result<Fragment> {
    if !p.tags().contains("pre") {
        return Ok(p.take_literal());
    }

    let checkpoint = p.checkpoint();
    let fence = p.next_token().literal;
    let info = p.read_line();
    if info.contains('`') {
        p.rewind(checkpoint);
        return inline::code_span::read(p);
    }
    let opening_end = p.skip_line_end();

    let mut code = String::new();
    loop {
        if p.current().kind == TokenKind::EndOfInput {
            p.record(format!("code fence `{fence}` not closed before end of input"));
            return Ok(Fragment::Text(format!("{fence}{info}{opening_end}{code}")));
        }
        if is_closing_fence(p, &fence) {
            p.next_token();
            p.skip_line_end();
            break;
        }
        code.push_str(&p.read_line());
        code.push_str(&p.skip_line_end());
    }

    let payload = Payload::CodeBlock {
        language: info.split_whitespace().next().map(str::to_owned),
        code: escape_text(&code).into_owned(),
    };
    Ok(Fragment::Text(p.render_tag("pre", &payload)?.unwrap_or_default()))
}

fn is_closing_fence(p: &Parser, fence: &str) -> bool {
    p.at_line_start()
        && p.current().kind == TokenKind::Backtick
        && p.current().literal == fence
        && p.peek().kind.is_line_end()
}
