//! Delimited spans and line helpers shared by the productions.

use super::Parser;
use crate::token::TokenKind;

/// Outcome of [`Parser::parse_between`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Closer found; holds the raw text between the delimiters.
    Closed(String),
    /// Input ended first; holds the opener followed by everything scanned.
    Unclosed(String),
    /// The current token is not the requested opener; nothing was consumed.
    Mismatch,
}

impl Parser {
    /// Collect the raw text between an `open` and a `close` literal.
    ///
    /// Both delimiters are consumed. When they differ, nested pairs are
    /// balanced, so `[a [b] c]` yields `a [b] c`.
    pub fn parse_between(&mut self, open: &str, close: &str) -> Span {
        if self.current().literal != open {
            let found = self.current().literal.clone();
            self.record(format!("expected `{open}`, found `{found}`"));
            return Span::Mismatch;
        }
        self.next_token();

        let nests = open != close;
        let mut depth = 0usize;
        let mut content = String::new();
        loop {
            let token = self.current();
            if token.kind == TokenKind::EndOfInput {
                self.record(format!("`{open}` not closed by `{close}` before end of input"));
                return Span::Unclosed(format!("{open}{content}"));
            }
            if token.literal == close {
                if depth == 0 {
                    self.next_token();
                    return Span::Closed(content);
                }
                depth -= 1;
            } else if nests && token.literal == open {
                depth += 1;
            }
            content.push_str(&self.next_token().literal);
        }
    }

    /// Consume tokens up to (not including) the next line end.
    pub fn read_line(&mut self) -> String {
        let mut line = String::new();
        while !self.current().kind.is_line_end() {
            line.push_str(&self.next_token().literal);
        }
        line
    }

    /// Consume one line ending (`\n`, `\r` or `\r\n`) and return it.
    ///
    /// Returns an empty string at end of input or mid-line.
    pub fn skip_line_end(&mut self) -> String {
        if self.current().kind != TokenKind::EndOfLine {
            return String::new();
        }
        let mut end = self.next_token().literal;
        if end == "\r"
            && self.current().kind == TokenKind::EndOfLine
            && self.current().literal == "\n"
        {
            end.push('\n');
            self.next_token();
        }
        end
    }
}

#[cfg(test)]
mod tests {
    use crate::{Parser, Tokenizer};

    use super::*;

    fn parser(input: &str) -> Parser {
        Parser::new(Tokenizer::new(input))
    }

    #[test]
    fn closed_span() {
        let mut p = parser("[docs](x)");
        assert_eq!(p.parse_between("[", "]"), Span::Closed("docs".to_owned()));
        assert_eq!(p.current().literal, "(");
        assert!(p.errors().is_empty());
    }

    #[test]
    fn nested_pairs_balance() {
        let mut p = parser("[a [b] c] tail");
        assert_eq!(p.parse_between("[", "]"), Span::Closed("a [b] c".to_owned()));
        assert_eq!(p.current().kind, TokenKind::Whitespace);
    }

    #[test]
    fn same_delimiter_does_not_nest() {
        let mut p = parser("**a** b");
        assert_eq!(p.parse_between("**", "**"), Span::Closed("a".to_owned()));
    }

    #[test]
    fn unclosed_span_returns_opener_and_text() {
        let mut p = parser("(never closed");
        assert_eq!(
            p.parse_between("(", ")"),
            Span::Unclosed("(never closed".to_owned())
        );
        assert_eq!(p.errors().len(), 1);
    }

    #[test]
    fn mismatch_consumes_nothing() {
        let mut p = parser("x]");
        assert_eq!(p.parse_between("[", "]"), Span::Mismatch);
        assert_eq!(p.current().literal, "x");
        assert_eq!(p.errors().len(), 1);
    }

    #[test]
    fn read_line_stops_at_line_end() {
        let mut p = parser("a b\r\nc");
        assert_eq!(p.read_line(), "a b");
        assert_eq!(p.skip_line_end(), "\r\n");
        assert_eq!(p.current().literal, "c");
        assert_eq!(p.skip_line_end(), "");
    }
}
