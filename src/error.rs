//! Error types.
//!
//! Malformed markup never produces an [`Error`]: it is reported as a
//! [`Diagnostic`] and rendered literally. Errors are reserved for failures
//! that originate outside the grammar (caller-supplied renderers, unknown
//! output formats, corrupt snapshots).

use std::fmt;

use crate::mobject::Format;

/// Failure returned by a tag renderer.
pub type TagError = Box<dyn std::error::Error + Send + Sync>;

/// Error surfaced to the caller of [`Parser::parse`](crate::Parser::parse).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A tag renderer returned an error.
    #[error("renderer for `{tag}` failed")]
    Render {
        /// Name of the tag being rendered.
        tag: String,
        /// Error returned by the renderer.
        #[source]
        source: TagError,
    },

    /// A result wrapper has no accessor for the requested format.
    #[error("`{kind}` has no {format} representation")]
    MissingAccessor {
        /// Type name of the result wrapper.
        kind: String,
        /// Requested format.
        format: Format,
    },

    /// Output format name not recognized.
    #[error("unknown output format `{0}`")]
    UnknownFormat(String),

    /// Tokenizer snapshot does not describe a valid position in its source.
    #[error("invalid tokenizer snapshot: {0}")]
    InvalidSnapshot(&'static str),
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Grammar mismatch recorded while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_error_keeps_source() {
        let err = Error::Render {
            tag: "h1".to_owned(),
            source: "boom".into(),
        };
        assert_eq!(err.to_string(), "renderer for `h1` failed");
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("boom"));
    }

    #[test]
    fn missing_accessor_message() {
        let err = Error::MissingAccessor {
            kind: "table".to_owned(),
            format: Format::Markdown,
        };
        assert_eq!(err.to_string(), "`table` has no markdown representation");
    }
}
