//! downup: an extensible markup-to-HTML renderer
//!
//! Source text flows through two stages:
//! 1. a [`Tokenizer`] that classifies characters into [`Token`]s whose
//!    literals concatenate back to the exact input
//! 2. a recursive-descent [`Parser`] that dispatches on token kind to
//!    productions, which render through a table of tag renderers
//!
//! Productions that cannot match re-emit their literal source, so malformed
//! input never fails: it is rendered as written and reported as a
//! [`Diagnostic`].
//!
//! # Extending
//! Grammar, renderers and post-processing are all replaceable per parser:
//! [`Parser::register_reader`], [`Parser::register_tag`] and
//! [`Parser::register_processor`].

pub mod block;
pub mod error;
pub mod escape;
pub mod inline;
pub mod lexer;
pub mod limits;
pub mod mobject;
pub mod paragraph;
pub mod parser;
pub mod tags;
pub mod token;

// Re-export primary types
pub use error::{Diagnostic, Error, Result, TagError};
pub use lexer::{Snapshot, Tokenizer};
pub use limits::TOP_LEVEL;
pub use mobject::{Format, Fragment, Mobject};
pub use parser::{Checkpoint, Parser, Processor, Reader, Scope, Span};
pub use tags::{Alignment, Payload, Table, TagRegistry, TagRenderer};
pub use token::{Token, TokenKind};

/// Parsing/rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Format that multi-representation results resolve to.
    pub format: Format,
    /// Deepest recursive sub-parse before nested text is left unparsed.
    pub max_nesting: usize,
    /// Wrap plain-text runs in `<p>` after a top-level parse.
    pub paragraphs: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            format: Format::Html,
            max_nesting: limits::MAX_NESTING_DEPTH,
            paragraphs: true,
        }
    }
}

/// Render markup to HTML with the default options.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = downup::to_html("# Hello\n\nWorld").unwrap();
/// assert_eq!(html, "<h1>Hello</h1>\n\n<p>World</p>");
/// ```
pub fn to_html(input: &str) -> Result<String> {
    render(input, &Options::default())
}

/// Render markup with options.
pub fn render(input: &str, options: &Options) -> Result<String> {
    Parser::with_options(Tokenizer::new(input), options).parse()
}
