//! Recursive-descent parser driven by a token-kind dispatch table.
//!
//! The parser keeps exactly two tokens buffered (`current` and `peek`). Its
//! main loop looks up a production (a [`Reader`]) for the current token's
//! kind; productions consume tokens, may re-enter the pipeline on extracted
//! sub-strings through a fresh child parser, and return a [`Fragment`].
//! Tokens without a production are copied through verbatim.

mod span;

pub use span::Span;

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::block;
use crate::error::{Diagnostic, Result};
use crate::inline;
use crate::lexer::{Position, Tokenizer};
use crate::limits::TOP_LEVEL;
use crate::mobject::{Format, Fragment};
use crate::paragraph;
use crate::tags::{self, Payload, TagRegistry, TagRenderer};
use crate::token::{Token, TokenKind};
use crate::Options;

/// Production bound to a token kind.
pub type Reader = Rc<dyn Fn(&mut Parser) -> Result<Fragment>>;

/// Whole-text transform run once after a top-level parse.
pub type Processor = Rc<dyn Fn(&str) -> Result<String>>;

/// Which grammar a parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Block and inline constructs.
    Document,
    /// Inline constructs only; block productions never trigger.
    Inline,
}

/// Saved parser position, restored with [`Parser::rewind`].
#[derive(Debug, Clone)]
pub struct Checkpoint {
    position: Position,
    current: Token,
    peek: Token,
    previous: Option<TokenKind>,
}

/// Markup parser.
///
/// # Example
/// ```
/// use downup::{Parser, Tokenizer};
///
/// let mut parser = Parser::new(Tokenizer::new("# Title"));
/// assert_eq!(parser.parse().unwrap(), "<h1>Title</h1>\n");
/// ```
pub struct Parser {
    tokenizer: Tokenizer,
    current: Token,
    peek: Token,
    /// Kind of the most recently consumed token.
    previous: Option<TokenKind>,
    errors: Vec<Diagnostic>,
    format: Format,
    readers: FxHashMap<TokenKind, Reader>,
    processors: Vec<Processor>,
    tags: TagRegistry,
    scope: Scope,
    depth: usize,
    max_nesting: usize,
}

impl Parser {
    /// Create a parser with the default grammar and renderers.
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self::with_options(tokenizer, &Options::default())
    }

    /// Create a parser whose renderers are `overrides` merged over the defaults.
    pub fn with_tags(tokenizer: Tokenizer, overrides: TagRegistry) -> Self {
        let mut parser = Self::new(tokenizer);
        parser.tags.extend(overrides);
        parser
    }

    /// Create a parser configured by `options`.
    pub fn with_options(tokenizer: Tokenizer, options: &Options) -> Self {
        let mut processors: Vec<Processor> = Vec::new();
        if options.paragraphs {
            processors.push(Rc::new(wrap_paragraphs));
        }
        Self::assemble(
            tokenizer,
            options.format,
            default_readers(),
            processors,
            TagRegistry::defaults(),
            Scope::Document,
            options.max_nesting,
        )
    }

    fn assemble(
        mut tokenizer: Tokenizer,
        format: Format,
        readers: FxHashMap<TokenKind, Reader>,
        processors: Vec<Processor>,
        tags: TagRegistry,
        scope: Scope,
        max_nesting: usize,
    ) -> Self {
        let current = tokenizer.next_token();
        let peek = tokenizer.next_token();
        Self {
            tokenizer,
            current,
            peek,
            previous: None,
            errors: Vec::new(),
            format,
            readers,
            processors,
            tags,
            scope,
            depth: TOP_LEVEL,
            max_nesting,
        }
    }

    // --- Extension points ---

    /// Bind a production to a token kind, replacing any existing one.
    ///
    /// The production must consume at least the current token.
    pub fn register_reader<F>(&mut self, kind: TokenKind, reader: F)
    where
        F: Fn(&mut Parser) -> Result<Fragment> + 'static,
    {
        self.readers.insert(kind, Rc::new(reader));
    }

    /// Remove the production for a token kind, so it is copied through verbatim.
    pub fn unregister_reader(&mut self, kind: TokenKind) -> Option<Reader> {
        self.readers.remove(&kind)
    }

    /// Register a tag renderer, replacing any existing one.
    pub fn register_tag<F>(&mut self, name: impl Into<String>, renderer: F)
    where
        F: Fn(&Payload) -> std::result::Result<String, crate::TagError> + 'static,
    {
        self.tags.insert(name, renderer);
    }

    /// Remove a tag renderer; productions for it fall back to literal markup.
    pub fn unregister_tag(&mut self, name: &str) -> Option<TagRenderer> {
        self.tags.remove(name)
    }

    /// Append a post-process pass, run after the existing ones.
    pub fn register_processor<F>(&mut self, processor: F)
    where
        F: Fn(&str) -> Result<String> + 'static,
    {
        self.processors.push(Rc::new(processor));
    }

    /// Select the format result wrappers resolve to.
    pub fn set_format(&mut self, format: Format) {
        self.format = format;
    }

    // --- Main loop ---

    /// Parse the whole input at top level, running the post-process pipeline.
    pub fn parse(&mut self) -> Result<String> {
        self.parse_at(TOP_LEVEL)
    }

    /// Parse the whole input at `depth`.
    ///
    /// Post-processing only runs when `depth` is [`TOP_LEVEL`]; any other
    /// value returns the unwrapped output.
    pub fn parse_at(&mut self, depth: usize) -> Result<String> {
        self.depth = depth;
        let mut text = String::with_capacity(self.tokenizer.source().len() + 16);

        while self.current.kind != TokenKind::EndOfInput {
            let Some(reader) = self.readers.get(&self.current.kind).cloned() else {
                text.push_str(&self.current.literal);
                self.next_token();
                continue;
            };

            let before = self.progress_marker();
            let fragment = reader(self)?;
            text.push_str(&fragment.resolve(self.format)?);

            if self.progress_marker() == before {
                self.record(format!(
                    "production for {:?} consumed no tokens",
                    self.current.kind
                ));
                text.push_str(&self.current.literal);
                self.next_token();
            }
        }

        if depth == TOP_LEVEL {
            for processor in &self.processors {
                text = processor(&text)?;
            }
        }
        Ok(text)
    }

    // --- Token access ---

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn peek(&self) -> &Token {
        &self.peek
    }

    /// Kind of the token consumed last, `None` at the start of input.
    #[inline]
    pub fn previous(&self) -> Option<TokenKind> {
        self.previous
    }

    /// Advance one token, returning the one consumed.
    pub fn next_token(&mut self) -> Token {
        let next = self.tokenizer.next_token();
        let peek = std::mem::replace(&mut self.peek, next);
        let consumed = std::mem::replace(&mut self.current, peek);
        self.previous = Some(consumed.kind);
        consumed
    }

    /// Consume the current token and return its literal unchanged.
    pub fn take_literal(&mut self) -> Fragment {
        Fragment::Text(self.next_token().literal)
    }

    /// Whether the current token starts a line where block constructs apply.
    pub fn at_line_start(&self) -> bool {
        self.scope == Scope::Document
            && matches!(self.previous, None | Some(TokenKind::EndOfLine))
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.tokenizer.position(),
            current: self.current.clone(),
            peek: self.peek.clone(),
            previous: self.previous,
        }
    }

    /// Return to a checkpoint taken on this parser.
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.tokenizer.seek(checkpoint.position);
        self.current = checkpoint.current;
        self.peek = checkpoint.peek;
        self.previous = checkpoint.previous;
    }

    /// Changes whenever a token is consumed, and is restored by a rewind.
    fn progress_marker(&self) -> (Position, TokenKind) {
        (self.tokenizer.position(), self.current.kind)
    }

    // --- State ---

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn tags(&self) -> &TagRegistry {
        &self.tags
    }

    /// Diagnostics recorded so far, including those of nested parses.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Record a grammar diagnostic.
    pub fn record(&mut self, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(message);
        tracing::debug!(depth = self.depth, "{diagnostic}");
        self.errors.push(diagnostic);
    }

    // --- Rendering ---

    /// Shared handle to the renderer for `name`.
    pub fn tag_renderer(&self, name: &str) -> Option<TagRenderer> {
        self.tags.get(name).cloned()
    }

    /// Render `payload` with the renderer for `name`.
    ///
    /// `Ok(None)` means no renderer is registered and the caller should fall
    /// back to literal markup.
    pub fn render_tag(&self, name: &str, payload: &Payload) -> Result<Option<String>> {
        tags::render(self.tags.get(name), name, payload)
    }

    // --- Recursive sub-parses ---

    /// Parse `text` for inline constructs in a child parser.
    pub fn sub_parse_inline(&mut self, text: &str) -> Result<String> {
        self.sub_parse(text, Scope::Inline)
    }

    /// Parse `text` as a nested document (block and inline) in a child parser.
    pub fn sub_parse_document(&mut self, text: &str) -> Result<String> {
        self.sub_parse(text, Scope::Document)
    }

    fn sub_parse(&mut self, text: &str, scope: Scope) -> Result<String> {
        let depth = self.depth.saturating_add(1);
        if depth > self.max_nesting {
            self.record(format!(
                "nesting exceeds {} levels; text left unparsed",
                self.max_nesting
            ));
            return Ok(text.to_owned());
        }

        tracing::trace!(depth, ?scope, len = text.len(), "sub-parse");
        let mut child = Self::assemble(
            Tokenizer::new(text),
            self.format,
            self.readers.clone(),
            Vec::new(),
            self.tags.clone(),
            scope,
            self.max_nesting,
        );
        let rendered = child.parse_at(depth);
        self.errors.append(&mut child.errors);
        rendered
    }
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("current", &self.current)
            .field("peek", &self.peek)
            .field("format", &self.format)
            .field("scope", &self.scope)
            .field("depth", &self.depth)
            .field("errors", &self.errors.len())
            .finish_non_exhaustive()
    }
}

fn wrap_paragraphs(text: &str) -> Result<String> {
    Ok(paragraph::wrap(text))
}

fn reader<F>(f: F) -> Reader
where
    F: Fn(&mut Parser) -> Result<Fragment> + 'static,
{
    Rc::new(f)
}

/// The default dispatch table.
fn default_readers() -> FxHashMap<TokenKind, Reader> {
    let entries = [
        (TokenKind::Heading, reader(block::heading::read)),
        (TokenKind::Minus, reader(block::read_minus)),
        (TokenKind::Plus, reader(block::list::read_unordered)),
        (TokenKind::Asterisk, reader(block::read_asterisk)),
        (TokenKind::Number, reader(block::list::read_ordered)),
        (TokenKind::GreaterThan, reader(block::quote::read)),
        (TokenKind::Pipe, reader(block::table::read)),
        (TokenKind::Backtick, reader(block::read_backtick)),
        (TokenKind::Underscore, reader(inline::emphasis::read)),
        (TokenKind::Tilde, reader(inline::emphasis::read)),
        (TokenKind::Escaped, reader(inline::read_escaped)),
        (TokenKind::LeftBracket, reader(inline::links::read_link)),
        (TokenKind::Bang, reader(inline::links::read_image)),
    ];
    entries.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser(input: &str) -> Parser {
        Parser::new(Tokenizer::new(input))
    }

    #[test]
    fn two_tokens_buffered_at_construction() {
        let p = parser("a b");
        assert_eq!(p.current().literal, "a");
        assert_eq!(p.peek().kind, TokenKind::Whitespace);
        assert_eq!(p.previous(), None);
    }

    #[test]
    fn next_token_shifts_window() {
        let mut p = parser("a b");
        let consumed = p.next_token();
        assert_eq!(consumed.literal, "a");
        assert_eq!(p.current().kind, TokenKind::Whitespace);
        assert_eq!(p.peek().literal, "b");
        assert_eq!(p.previous(), Some(TokenKind::Content));
    }

    #[test]
    fn tokens_without_productions_pass_through() {
        let mut p = parser("plain text, nothing else");
        assert_eq!(p.parse_at(1).unwrap(), "plain text, nothing else");
        assert!(p.errors().is_empty());
    }

    #[test]
    fn checkpoint_and_rewind() {
        let mut p = parser("a b c");
        let cp = p.checkpoint();
        p.next_token();
        p.next_token();
        assert_eq!(p.current().literal, "b");
        p.rewind(cp);
        assert_eq!(p.current().literal, "a");
        assert_eq!(p.peek().kind, TokenKind::Whitespace);
    }

    #[test]
    fn at_line_start_tracks_previous_token() {
        let mut p = parser("a\nb");
        assert!(p.at_line_start());
        p.next_token();
        assert!(!p.at_line_start());
        p.next_token();
        assert!(p.at_line_start());
    }

    #[test]
    fn stalled_production_is_recorded_and_skipped() {
        let mut p = parser("x.y");
        p.register_reader(TokenKind::Period, |_| Ok(Fragment::from("")));
        assert_eq!(p.parse_at(1).unwrap(), "x.y");
        assert_eq!(p.errors().len(), 1);
    }

    #[test]
    fn reader_that_rewinds_everything_is_skipped() {
        let mut p = parser("a{b");
        p.register_reader(TokenKind::LeftBrace, |p| {
            let cp = p.checkpoint();
            p.next_token();
            p.rewind(cp);
            Ok(Fragment::from(""))
        });
        assert_eq!(p.parse_at(1).unwrap(), "a{b");
        assert_eq!(p.errors().len(), 1);
    }

    #[test]
    fn nesting_limit_leaves_text_unparsed() {
        let options = Options {
            max_nesting: 1,
            ..Options::default()
        };
        let mut p = Parser::with_options(Tokenizer::new("> > *deep*"), &options);
        let out = p.parse_at(1).unwrap();
        assert!(out.contains("*deep*"), "{out}");
        assert!(p.errors().iter().any(|d| d.message.contains("nesting")));
    }

    #[test]
    fn deepest_depth_does_not_overflow() {
        let mut p = parser("*a*");
        assert_eq!(p.parse_at(usize::MAX).unwrap(), "<em>a</em>");
        assert!(p.errors().iter().any(|d| d.message.contains("nesting")));
    }

    #[test]
    fn debug_is_compact() {
        let p = parser("x");
        let debug = format!("{p:?}");
        assert!(debug.starts_with("Parser {"));
        assert!(debug.contains("format: Html"));
    }
}
