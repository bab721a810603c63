//! Headings: `#` runs at the start of a line.

use crate::error::Result;
use crate::limits::MAX_HEADING_LEVEL;
use crate::mobject::Fragment;
use crate::parser::Parser;
use crate::tags::Payload;

/// `#` run of 1..=7 followed by whitespace renders as `h{n}`; a lone `#`
/// on its own line renders as `hr`. Everything else is literal.
pub fn read(p: &mut Parser) -> Result<Fragment> {
    if !p.at_line_start() {
        return Ok(p.take_literal());
    }

    let level = p.current().run_len();
    if level == 1 && p.peek().kind.is_line_end() {
        return super::thematic_break(p);
    }
    if level > MAX_HEADING_LEVEL || !p.peek().kind.is_whitespace() {
        return Ok(p.take_literal());
    }

    let tag = format!("h{level}");
    if !p.tags().contains(&tag) {
        // No renderer for this level: the line stays as written.
        return Ok(Fragment::Text(p.read_line()));
    }

    p.next_token();
    let raw = p.read_line();
    let text = p.sub_parse_inline(raw.trim())?;
    p.skip_line_end();

    let payload = Payload::Heading {
        level: level as u8,
        text,
    };
    Ok(Fragment::Text(p.render_tag(&tag, &payload)?.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use crate::tags::{Payload, TagRegistry};
    use crate::{Parser, Tokenizer};

    fn inline(input: &str) -> String {
        Parser::new(Tokenizer::new(input)).parse_at(1).unwrap()
    }

    #[test]
    fn test_atx_heading_h1() {
        assert_eq!(inline("# Title"), "<h1>Title</h1>\n");
    }

    #[test]
    fn test_atx_heading_h6() {
        assert_eq!(inline("###### Title"), "<h6>Title</h6>\n");
    }

    #[test]
    fn test_heading_consumes_line_end() {
        assert_eq!(inline("## A\nbody"), "<h2>A</h2>\nbody");
    }

    #[test]
    fn test_heading_text_is_trimmed_and_parsed() {
        assert_eq!(inline("#   *big*  "), "<h1><em>big</em></h1>\n");
    }

    #[test]
    fn test_atx_heading_h7_without_renderer() {
        assert_eq!(inline("####### Seven\nx"), "####### Seven\nx");
    }

    #[test]
    fn test_atx_heading_h7_with_renderer() {
        let mut tags = TagRegistry::new();
        tags.insert("h7", |p: &Payload| match p {
            Payload::Heading { text, .. } => Ok(format!("<div class=\"h7\">{text}</div>\n")),
            _ => Err("unexpected payload".into()),
        });
        let mut parser = Parser::with_tags(Tokenizer::new("####### Seven"), tags);
        assert_eq!(parser.parse_at(1).unwrap(), "<div class=\"h7\">Seven</div>\n");
    }

    #[test]
    fn test_eight_hashes_literal() {
        assert_eq!(inline("######## Title"), "######## Title");
        assert_eq!(inline("########"), "########");
    }

    #[test]
    fn test_atx_heading_no_space_after_hashes() {
        assert_eq!(inline("#hashtag"), "#hashtag");
    }

    #[test]
    fn test_lone_hash_is_rule() {
        assert_eq!(inline("#"), "<hr>");
        assert_eq!(inline("#\nafter"), "<hr>\nafter");
    }

    #[test]
    fn test_hash_mid_line_literal() {
        assert_eq!(inline("issue # 4"), "issue # 4");
    }
}
