//! Token kinds and the lookup tables the tokenizer classifies with.

/// Classification of a lexical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of ordinary text.
    Content,
    /// Run of spaces.
    Whitespace,
    /// A single tab character.
    Tab,
    /// Run of `#`.
    Heading,
    /// A single `\n` or `\r`.
    EndOfLine,
    /// Returned forever once the source is exhausted.
    EndOfInput,
    /// Digits, optionally followed by `.` and more digits.
    Number,
    /// Run of `-`.
    Minus,
    /// Run of `+`.
    Plus,
    /// Run of `*`.
    Asterisk,
    /// Run of `_`.
    Underscore,
    /// Run of `~`.
    Tilde,
    /// Run of `.`.
    Period,
    /// `>`
    GreaterThan,
    /// Run of backticks.
    Backtick,
    /// Run of `|`.
    Pipe,
    /// Backslash followed by one character.
    Escaped,
    /// `!`
    Bang,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
}

impl TokenKind {
    /// Kind of a repeated-marker run starting with `c`, if `c` is a marker.
    #[inline]
    pub fn run_marker(c: char) -> Option<Self> {
        match c {
            '#' => Some(Self::Heading),
            '-' => Some(Self::Minus),
            '+' => Some(Self::Plus),
            '*' => Some(Self::Asterisk),
            '_' => Some(Self::Underscore),
            '~' => Some(Self::Tilde),
            '.' => Some(Self::Period),
            '`' => Some(Self::Backtick),
            '|' => Some(Self::Pipe),
            _ => None,
        }
    }

    /// Kind of a single delimiter character; unrecognized characters are content.
    #[inline]
    pub fn lookup(c: char) -> Self {
        if c.is_ascii() {
            SINGLE_TABLE[c as usize]
        } else {
            Self::Content
        }
    }

    /// Spaces and tabs.
    #[inline]
    pub fn is_whitespace(self) -> bool {
        matches!(self, Self::Whitespace | Self::Tab)
    }

    /// End of line or end of input.
    #[inline]
    pub fn is_line_end(self) -> bool {
        matches!(self, Self::EndOfLine | Self::EndOfInput)
    }
}

/// Single-character token kinds, indexed by ASCII value.
const SINGLE_TABLE: [TokenKind; 128] = {
    let mut table = [TokenKind::Content; 128];
    table[b'!' as usize] = TokenKind::Bang;
    table[b'[' as usize] = TokenKind::LeftBracket;
    table[b']' as usize] = TokenKind::RightBracket;
    table[b'(' as usize] = TokenKind::LeftParen;
    table[b')' as usize] = TokenKind::RightParen;
    table[b'{' as usize] = TokenKind::LeftBrace;
    table[b'}' as usize] = TokenKind::RightBrace;
    table[b'>' as usize] = TokenKind::GreaterThan;
    table[b' ' as usize] = TokenKind::Whitespace;
    table[b'\t' as usize] = TokenKind::Tab;
    table[b'\n' as usize] = TokenKind::EndOfLine;
    table[b'\r' as usize] = TokenKind::EndOfLine;
    table
};

/// Characters that end a content run.
const DELIMITER_TABLE: [bool; 128] = {
    let mut table = [false; 128];
    let delimiters = b"! \n\r\t[](){}\"'`*_~.>|\\";
    let mut i = 0;
    while i < delimiters.len() {
        table[delimiters[i] as usize] = true;
        i += 1;
    }
    table
};

/// Whether `c` terminates a run of content.
#[inline]
pub fn is_delimiter(c: char) -> bool {
    c.is_ascii() && DELIMITER_TABLE[c as usize]
}

/// A classified lexical unit. `literal` is exactly the consumed source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-input token.
    pub fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, String::new())
    }

    /// Length of the literal in characters (run length for marker tokens).
    #[inline]
    pub fn run_len(&self) -> usize {
        self.literal.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_single_characters() {
        assert_eq!(TokenKind::lookup('['), TokenKind::LeftBracket);
        assert_eq!(TokenKind::lookup(')'), TokenKind::RightParen);
        assert_eq!(TokenKind::lookup('!'), TokenKind::Bang);
        assert_eq!(TokenKind::lookup('>'), TokenKind::GreaterThan);
        assert_eq!(TokenKind::lookup('\n'), TokenKind::EndOfLine);
        assert_eq!(TokenKind::lookup('\r'), TokenKind::EndOfLine);
        assert_eq!(TokenKind::lookup('"'), TokenKind::Content);
        assert_eq!(TokenKind::lookup('é'), TokenKind::Content);
    }

    #[test]
    fn run_markers() {
        assert_eq!(TokenKind::run_marker('#'), Some(TokenKind::Heading));
        assert_eq!(TokenKind::run_marker('|'), Some(TokenKind::Pipe));
        assert_eq!(TokenKind::run_marker('a'), None);
        assert_eq!(TokenKind::run_marker('!'), None);
    }

    #[test]
    fn delimiter_set() {
        for c in "! \n\r\t[](){}\"'`*_~.>|\\".chars() {
            assert!(is_delimiter(c), "{c:?} should be a delimiter");
        }
        for c in "a#-+<:=1ü".chars() {
            assert!(!is_delimiter(c), "{c:?} should not be a delimiter");
        }
    }

    #[test]
    fn whitespace_class() {
        assert!(TokenKind::Tab.is_whitespace());
        assert!(TokenKind::Whitespace.is_whitespace());
        assert!(!TokenKind::EndOfLine.is_whitespace());
        assert!(TokenKind::EndOfInput.is_line_end());
    }

    #[test]
    fn structure() {
        let token = Token::new(TokenKind::Content, "something");
        assert_eq!(token.kind, TokenKind::Content);
        assert_eq!(token.literal, "something");
        assert_eq!(Token::end_of_input().literal, "");
    }
}
