//! Multi-representation results.
//!
//! Most productions return a plain string. When more than one rendering of a
//! result must survive to the caller (a table's literal source and its HTML,
//! say) the production returns a [`Mobject`] instead, and the parser resolves
//! it to whichever [`Format`] is active.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Output format a [`Mobject`] is resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    /// Rendered markup.
    #[default]
    Html,
    /// Original markup, for lossless round-trips.
    Markdown,
}

impl Format {
    pub fn name(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "markdown",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(Error::UnknownFormat(s.to_owned())),
        }
    }
}

type Accessor = Box<dyn Fn() -> Result<String>>;

/// Result exposing one accessor per output format.
///
/// Accessors are evaluated lazily, so a representation that is never
/// requested is never rendered.
///
/// # Example
/// ```
/// use downup::{Format, Mobject};
///
/// let object = Mobject::new("note")
///     .with(Format::Html, || Ok("<b>hi</b>".to_owned()))
///     .with(Format::Markdown, || Ok("**hi**".to_owned()));
/// assert_eq!(object.as_html().unwrap(), "<b>hi</b>");
/// assert_eq!(object.resolve(Format::Markdown).unwrap(), "**hi**");
/// ```
pub struct Mobject {
    kind: String,
    accessors: SmallVec<[(Format, Accessor); 2]>,
}

impl Mobject {
    /// Create a wrapper with no accessors.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            accessors: SmallVec::new(),
        }
    }

    /// Add (or replace) the accessor for `format`.
    #[must_use]
    pub fn with<F>(mut self, format: Format, accessor: F) -> Self
    where
        F: Fn() -> Result<String> + 'static,
    {
        self.accessors.retain(|(f, _)| *f != format);
        self.accessors.push((format, Box::new(accessor)));
        self
    }

    /// Type name of the wrapped result.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Whether an accessor exists for `format`.
    pub fn supports(&self, format: Format) -> bool {
        self.accessors.iter().any(|(f, _)| *f == format)
    }

    /// Resolve to a concrete string in `format`.
    pub fn resolve(&self, format: Format) -> Result<String> {
        match self.accessors.iter().find(|(f, _)| *f == format) {
            Some((_, accessor)) => accessor(),
            None => Err(Error::MissingAccessor {
                kind: self.kind.clone(),
                format,
            }),
        }
    }

    pub fn as_html(&self) -> Result<String> {
        self.resolve(Format::Html)
    }

    pub fn as_markdown(&self) -> Result<String> {
        self.resolve(Format::Markdown)
    }
}

impl fmt::Debug for Mobject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formats: SmallVec<[Format; 2]> = self.accessors.iter().map(|(f, _)| *f).collect();
        f.debug_struct("Mobject")
            .field("kind", &self.kind)
            .field("formats", &formats)
            .finish()
    }
}

/// Value returned by a production.
#[derive(Debug)]
pub enum Fragment {
    /// Already rendered text.
    Text(String),
    /// Result still to be resolved by the consumer.
    Object(Mobject),
}

impl Fragment {
    /// Resolve to a string in `format`.
    pub fn resolve(self, format: Format) -> Result<String> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Object(object) => object.resolve(format),
        }
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<Mobject> for Fragment {
    fn from(object: Mobject) -> Self {
        Self::Object(object)
    }
}
