//! Tag renderer registry and the default HTML table.
//!
//! Productions never write markup themselves: they build a [`Payload`] and
//! hand it to the renderer registered under an element name (`h1`, `a`,
//! `table`, ...). Callers override or extend the table per parser.

use std::fmt::Write;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::{Error, TagError};
use crate::escape::{escape_attr, escape_url};

/// Column alignment for table cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// No alignment specified.
    #[default]
    None,
    /// Left-aligned (`:---`).
    Left,
    /// Center-aligned (`:---:`).
    Center,
    /// Right-aligned (`---:`).
    Right,
}

impl Alignment {
    /// Value of the HTML `align` attribute, if any.
    pub fn attr(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Left => Some("left"),
            Self::Center => Some("center"),
            Self::Right => Some("right"),
        }
    }
}

/// Parsed table handed to the `table` renderer. Cells are already rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    /// Row promoted to header by a separator row.
    pub header: Option<Vec<String>>,
    /// Per-column alignment from the separator row.
    pub alignments: SmallVec<[Alignment; 8]>,
    /// Body rows.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Alignment of column `col` (none past the separator's width).
    pub fn alignment(&self, col: usize) -> Alignment {
        self.alignments.get(col).copied().unwrap_or_default()
    }
}

/// Structured input of a tag renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// `h1` ... `h7`.
    Heading { level: u8, text: String },
    /// `em`, `strong`, `s`, `blockquote`.
    Text { text: String },
    /// `code`; the content is already HTML-escaped.
    Code { code: String },
    /// `pre`; the content is already HTML-escaped.
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    /// `a`; `text` is rendered, `href` is raw.
    Link { text: String, href: String },
    /// `img`; both fields are raw.
    Image { alt: String, src: String },
    /// `ul`, `ol`; items are rendered.
    List { items: Vec<String> },
    /// `table`.
    Table(Table),
    /// `hr`.
    Break,
}

impl Payload {
    /// Short variant name, for error messages.
    pub fn variant(&self) -> &'static str {
        match self {
            Self::Heading { .. } => "heading",
            Self::Text { .. } => "text",
            Self::Code { .. } => "code",
            Self::CodeBlock { .. } => "code block",
            Self::Link { .. } => "link",
            Self::Image { .. } => "image",
            Self::List { .. } => "list",
            Self::Table(_) => "table",
            Self::Break => "break",
        }
    }
}

/// Function turning a payload into markup for one element type.
pub type TagRenderer = Rc<dyn Fn(&Payload) -> Result<String, TagError>>;

/// Mapping from element name to renderer.
///
/// Cloning produces an independent table: renderers registered on the copy
/// are not visible in the original.
#[derive(Clone, Default)]
pub struct TagRegistry {
    renderers: FxHashMap<String, TagRenderer>,
}

impl TagRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default HTML renderers.
    pub fn defaults() -> Self {
        let mut registry = Self::new();
        for level in 1..=6u8 {
            registry.insert(format!("h{level}"), heading);
        }
        registry.insert("hr", |_: &Payload| Ok("<hr>".to_owned()));
        registry.insert("em", |p: &Payload| wrap_text(p, "em"));
        registry.insert("strong", |p: &Payload| wrap_text(p, "strong"));
        registry.insert("s", |p: &Payload| wrap_text(p, "s"));
        registry.insert("a", link);
        registry.insert("img", image);
        registry.insert("code", code_span);
        registry.insert("pre", code_block);
        registry.insert("ul", |p: &Payload| list(p, "ul"));
        registry.insert("ol", |p: &Payload| list(p, "ol"));
        registry.insert("blockquote", blockquote);
        registry.insert("table", table);
        registry
    }

    /// Register a renderer, replacing any previous one for `name`.
    pub fn insert<F>(&mut self, name: impl Into<String>, renderer: F)
    where
        F: Fn(&Payload) -> Result<String, TagError> + 'static,
    {
        self.renderers.insert(name.into(), Rc::new(renderer));
    }

    /// Register an already shared renderer.
    pub fn insert_rc(&mut self, name: impl Into<String>, renderer: TagRenderer) {
        self.renderers.insert(name.into(), renderer);
    }

    /// Merge `overrides` over this table.
    pub fn extend(&mut self, overrides: TagRegistry) {
        self.renderers.extend(overrides.renderers);
    }

    /// Remove the renderer for `name`.
    pub fn remove(&mut self, name: &str) -> Option<TagRenderer> {
        self.renderers.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&TagRenderer> {
        self.renderers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl std::fmt::Debug for TagRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("TagRegistry").field("tags", &names).finish()
    }
}

impl<N, F> FromIterator<(N, F)> for TagRegistry
where
    N: Into<String>,
    F: Fn(&Payload) -> Result<String, TagError> + 'static,
{
    fn from_iter<I: IntoIterator<Item = (N, F)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (name, renderer) in iter {
            registry.insert(name, renderer);
        }
        registry
    }
}

/// Apply an optional renderer, labeling its failure with the tag name.
///
/// `Ok(None)` means no renderer was registered.
pub(crate) fn render(
    renderer: Option<&TagRenderer>,
    tag: &str,
    payload: &Payload,
) -> crate::error::Result<Option<String>> {
    let Some(renderer) = renderer else {
        return Ok(None);
    };
    renderer(payload).map(Some).map_err(|source| Error::Render {
        tag: tag.to_owned(),
        source,
    })
}

fn unexpected(payload: &Payload, tag: &str) -> TagError {
    format!("`{tag}` cannot render a {} payload", payload.variant()).into()
}

// --- Default HTML renderers ---

fn heading(payload: &Payload) -> Result<String, TagError> {
    let Payload::Heading { level, text } = payload else {
        return Err(unexpected(payload, "heading"));
    };
    Ok(format!("<h{level}>{text}</h{level}>\n"))
}

fn wrap_text(payload: &Payload, tag: &str) -> Result<String, TagError> {
    let Payload::Text { text } = payload else {
        return Err(unexpected(payload, tag));
    };
    Ok(format!("<{tag}>{text}</{tag}>"))
}

fn link(payload: &Payload) -> Result<String, TagError> {
    let Payload::Link { text, href } = payload else {
        return Err(unexpected(payload, "a"));
    };
    Ok(format!("<a href=\"{}\">{text}</a>", escape_url(href)))
}

fn image(payload: &Payload) -> Result<String, TagError> {
    let Payload::Image { alt, src } = payload else {
        return Err(unexpected(payload, "img"));
    };
    Ok(format!(
        "<img src=\"{}\" alt=\"{}\"></img>",
        escape_url(src),
        escape_attr(alt)
    ))
}

fn code_span(payload: &Payload) -> Result<String, TagError> {
    let Payload::Code { code } = payload else {
        return Err(unexpected(payload, "code"));
    };
    Ok(format!("<code>{code}</code>"))
}

fn code_block(payload: &Payload) -> Result<String, TagError> {
    let Payload::CodeBlock { language, code } = payload else {
        return Err(unexpected(payload, "pre"));
    };
    let mut out = String::with_capacity(code.len() + 32);
    match language {
        Some(lang) if !lang.is_empty() => {
            let _ = write!(out, "<pre><code class=\"language-{}\">", escape_attr(lang));
        }
        _ => out.push_str("<pre><code>"),
    }
    out.push_str(code);
    out.push_str("</code></pre>\n");
    Ok(out)
}

fn list(payload: &Payload, tag: &str) -> Result<String, TagError> {
    let Payload::List { items } = payload else {
        return Err(unexpected(payload, tag));
    };
    let mut out = format!("<{tag}>\n");
    for item in items {
        let _ = writeln!(out, "<li>{item}</li>");
    }
    let _ = writeln!(out, "</{tag}>");
    Ok(out)
}

fn blockquote(payload: &Payload) -> Result<String, TagError> {
    let Payload::Text { text } = payload else {
        return Err(unexpected(payload, "blockquote"));
    };
    Ok(format!("<blockquote>\n{}\n</blockquote>\n", text.trim_end_matches('\n')))
}

fn table(payload: &Payload) -> Result<String, TagError> {
    let Payload::Table(table) = payload else {
        return Err(unexpected(payload, "table"));
    };

    let mut out = String::from("<table>\n");
    if let Some(header) = &table.header {
        out.push_str("<thead>\n");
        write_row(&mut out, table, header, "th");
        out.push_str("</thead>\n");
    }
    if !table.rows.is_empty() {
        out.push_str("<tbody>\n");
        for row in &table.rows {
            write_row(&mut out, table, row, "td");
        }
        out.push_str("</tbody>\n");
    }
    out.push_str("</table>\n");
    Ok(out)
}

fn write_row(out: &mut String, table: &Table, cells: &[String], tag: &str) {
    out.push_str("<tr>\n");
    for (col, cell) in cells.iter().enumerate() {
        match table.alignment(col).attr() {
            Some(align) => {
                let _ = writeln!(out, "<{tag} align=\"{align}\">{cell}</{tag}>");
            }
            None => {
                let _ = writeln!(out, "<{tag}>{cell}</{tag}>");
            }
        }
    }
    out.push_str("</tr>\n");
}
