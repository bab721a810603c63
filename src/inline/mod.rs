//! Inline productions.
//!
//! Inline constructs resolve a delimited span from the current token. When
//! the span is not closed, the opener and everything scanned after it are
//! emitted as written, unparsed.

pub mod code_span;
pub mod emphasis;
pub mod links;

use crate::error::Result;
use crate::escape::escape_char_into;
use crate::mobject::Fragment;
use crate::parser::Parser;

/// `\x` renders the HTML-escaped character `x`.
pub fn read_escaped(p: &mut Parser) -> Result<Fragment> {
    let token = p.next_token();
    let mut chars = token.literal.chars();
    chars.next();
    let mut out = String::with_capacity(4);
    match chars.next() {
        Some(c) => escape_char_into(&mut out, c),
        None => out.push_str(&token.literal),
    }
    Ok(Fragment::Text(out))
}
