//! Character-level tokenizer.
//!
//! Scans the source one character at a time. `position` always addresses the
//! character held in `ch`; `read_position` is the index just past it. At end
//! of input `ch` is `None` and [`Tokenizer::next_token`] keeps returning
//! [`TokenKind::EndOfInput`].

use crate::error::{Error, Result};
use crate::token::{is_delimiter, Token, TokenKind};

/// Stateful scanner turning source text into [`Token`]s.
///
/// # Example
/// ```
/// use downup::{Tokenizer, TokenKind};
///
/// let mut lexer = Tokenizer::new("## Something");
/// assert_eq!(lexer.next_token().kind, TokenKind::Heading);
/// assert_eq!(lexer.next_token().kind, TokenKind::Whitespace);
/// assert_eq!(lexer.next_token().literal, "Something");
/// assert_eq!(lexer.next_token().kind, TokenKind::EndOfInput);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer {
    source: String,
    position: usize,
    read_position: usize,
    ch: Option<char>,
}

/// Cursor state of a tokenizer, used to rewind within the same source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Position {
    position: usize,
    read_position: usize,
    ch: Option<char>,
}

/// Opaque, self-contained copy of a tokenizer's state.
///
/// A snapshot owns its own copy of the source, so every tokenizer rebuilt
/// from it is independent of the original and of each other.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    source: String,
    position: usize,
    read_position: usize,
}

impl Tokenizer {
    /// Create a tokenizer positioned on the first character of `source`.
    pub fn new(source: impl Into<String>) -> Self {
        let mut lexer = Self {
            source: source.into(),
            position: 0,
            read_position: 0,
            ch: None,
        };
        lexer.read_char();
        lexer
    }

    /// The full source text.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Export the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            source: self.source.clone(),
            position: self.position,
            read_position: self.read_position,
        }
    }

    /// Rebuild a tokenizer from a snapshot.
    ///
    /// Fails if the recorded positions do not fall on character boundaries
    /// of the recorded source.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        let Snapshot {
            source,
            position,
            read_position,
        } = snapshot;

        if read_position > source.len() || position > read_position {
            return Err(Error::InvalidSnapshot("position out of bounds"));
        }
        if !source.is_char_boundary(position) || !source.is_char_boundary(read_position) {
            return Err(Error::InvalidSnapshot("position inside a character"));
        }

        let ch = source[position..read_position].chars().next();
        let consistent = match ch {
            Some(c) => c.len_utf8() == read_position - position,
            None => read_position == source.len(),
        };
        if !consistent {
            return Err(Error::InvalidSnapshot(
                "cursor does not address a single character",
            ));
        }

        Ok(Self {
            source,
            position,
            read_position,
            ch,
        })
    }

    #[inline]
    pub(crate) fn position(&self) -> Position {
        Position {
            position: self.position,
            read_position: self.read_position,
            ch: self.ch,
        }
    }

    #[inline]
    pub(crate) fn seek(&mut self, pos: Position) {
        self.position = pos.position;
        self.read_position = pos.read_position;
        self.ch = pos.ch;
    }

    /// Advance to the next character.
    fn read_char(&mut self) {
        self.position = self.read_position;
        self.ch = self.source[self.read_position..].chars().next();
        if let Some(c) = self.ch {
            self.read_position += c.len_utf8();
        }
    }

    /// Look at the character after the current one without consuming it.
    #[inline]
    pub fn peek_char(&self) -> Option<char> {
        self.source[self.read_position..].chars().next()
    }

    /// Extend the current token while the next character satisfies `pred`.
    ///
    /// Leaves `ch` on the last character of the run.
    fn read_while<F>(&mut self, mut pred: F)
    where
        F: FnMut(char) -> bool,
    {
        while self.peek_char().is_some_and(&mut pred) {
            self.read_char();
        }
    }

    /// Scan and return the next token.
    pub fn next_token(&mut self) -> Token {
        let Some(ch) = self.ch else {
            return Token::end_of_input();
        };
        let start = self.position;

        let kind = if let Some(marker) = TokenKind::run_marker(ch) {
            self.read_while(|c| c == ch);
            marker
        } else {
            match ch {
                ' ' => {
                    self.read_while(|c| c == ' ');
                    TokenKind::Whitespace
                }
                '\t' => TokenKind::Tab,
                '\n' | '\r' => TokenKind::EndOfLine,
                '0'..='9' => {
                    self.read_while(|c| c.is_ascii_digit());
                    if self.peek_char() == Some('.') {
                        self.read_char();
                        self.read_while(|c| c.is_ascii_digit());
                    }
                    TokenKind::Number
                }
                '\\' if self.peek_char().is_some() => {
                    self.read_char();
                    TokenKind::Escaped
                }
                c if !is_delimiter(c) => {
                    self.read_while(|c| !is_delimiter(c));
                    TokenKind::Content
                }
                c => TokenKind::lookup(c),
            }
        };

        let token = Token::new(kind, &self.source[start..self.read_position]);
        self.read_char();
        token
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    /// Yields tokens up to, but not including, end of input.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::EndOfInput).then_some(token)
    }
}
