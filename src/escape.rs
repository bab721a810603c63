//! HTML escaping utilities.
//!
//! Fast-path optimized: scans for the first escapable character and returns
//! the input borrowed when there is none.

use std::borrow::Cow;

use memchr::{memchr, memchr2, memchr3};

/// Lookup table for escapable characters in text content.
const TEXT_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table
};

/// Lookup table for escapable characters in attributes.
const ATTR_ESCAPE_TABLE: [bool; 256] = {
    let mut table = TEXT_ESCAPE_TABLE;
    table[b'\'' as usize] = true;
    table
};

/// Escape HTML text content.
///
/// Escapes `<`, `>`, `&` and `"`.
///
/// # Example
/// ```
/// use downup::escape::escape_text;
///
/// assert_eq!(escape_text("<script>"), "&lt;script&gt;");
/// assert_eq!(escape_text("plain"), "plain");
/// ```
pub fn escape_text(input: &str) -> Cow<'_, str> {
    match first_text_escape(input.as_bytes()) {
        None => Cow::Borrowed(input),
        Some(first) => {
            let mut out = String::with_capacity(input.len() + input.len() / 8);
            escape_with_table(&mut out, input, first, &TEXT_ESCAPE_TABLE);
            Cow::Owned(out)
        }
    }
}

/// Escape an HTML attribute value (`'` as well as the text characters).
pub fn escape_attr(input: &str) -> Cow<'_, str> {
    match first_attr_escape(input.as_bytes()) {
        None => Cow::Borrowed(input),
        Some(first) => {
            let mut out = String::with_capacity(input.len() + input.len() / 8);
            escape_with_table(&mut out, input, first, &ATTR_ESCAPE_TABLE);
            Cow::Owned(out)
        }
    }
}

/// Append the escaped form of a single character.
#[inline]
pub fn escape_char_into(out: &mut String, c: char) {
    match c {
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '&' => out.push_str("&amp;"),
        '"' => out.push_str("&quot;"),
        _ => out.push(c),
    }
}

/// Decode entities in a link destination, then escape it for an attribute.
pub fn escape_url(input: &str) -> String {
    let decoded = html_escape::decode_html_entities(input);
    escape_attr(&decoded).into_owned()
}

/// Copy `input` into `out`, escaping from byte `first` onwards.
///
/// Every escapable character is ASCII, so segment boundaries always fall on
/// character boundaries.
fn escape_with_table(out: &mut String, input: &str, first: usize, table: &[bool; 256]) {
    let bytes = input.as_bytes();
    out.push_str(&input[..first]);

    let mut pos = first;
    while pos < bytes.len() {
        let scan_start = pos;
        while pos < bytes.len() && !table[bytes[pos] as usize] {
            pos += 1;
        }
        if pos > scan_start {
            out.push_str(&input[scan_start..pos]);
        }
        if pos < bytes.len() {
            out.push_str(match bytes[pos] {
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'&' => "&amp;",
                b'"' => "&quot;",
                _ => "&#39;",
            });
            pos += 1;
        }
    }
}

#[inline]
fn first_text_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr(b'"', input);
    min_opt(a, b)
}

#[inline]
fn first_attr_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr2(b'"', b'\'', input);
    min_opt(a, b)
}

#[inline]
fn min_opt(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text_basic() {
        assert!(matches!(escape_text("Hello, World!"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_text_mixed() {
        assert_eq!(
            escape_text("<a href=\"test\">link & stuff</a>"),
            "&lt;a href=&quot;test&quot;&gt;link &amp; stuff&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_text_keeps_single_quote() {
        assert_eq!(escape_text("it's"), "it's");
    }

    #[test]
    fn test_escape_attr_all() {
        assert_eq!(escape_attr("<>&\"'"), "&lt;&gt;&amp;&quot;&#39;");
    }

    #[test]
    fn test_escape_at_boundaries() {
        assert_eq!(escape_text("<"), "&lt;");
        assert_eq!(escape_text("hello<"), "hello&lt;");
        assert_eq!(escape_text("<hello"), "&lt;hello");
        assert_eq!(escape_text("<<<"), "&lt;&lt;&lt;");
    }

    #[test]
    fn test_escape_unicode() {
        assert_eq!(escape_text("Grüße <tag>"), "Grüße &lt;tag&gt;");
    }

    #[test]
    fn test_escape_char() {
        let mut out = String::new();
        escape_char_into(&mut out, '<');
        escape_char_into(&mut out, '*');
        assert_eq!(out, "&lt;*");
    }

    #[test]
    fn test_escape_url_decodes_entities_first() {
        assert_eq!(escape_url("a?b=1&amp;c=2"), "a?b=1&amp;c=2");
        assert_eq!(escape_url("a?b=1&c=2"), "a?b=1&amp;c=2");
        assert_eq!(escape_url("./README.md"), "./README.md");
    }
}
