//! Error types for brackdom
//!
//! Every failure is a syntax error: the parser is fail-fast and never returns
//! a partial tree. [`ErrorKind`] tells callers which rule was broken, [`Span`]
//! tells them where.

use std::fmt;
use thiserror::Error;

/// Position in the sanitized input
///
/// `offset` counts characters, not bytes, so it lines up with
/// [`Node::end_offset`](crate::Node::end_offset).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }

    /// Position of the first character of an input
    pub const fn start() -> Self {
        Self::new(0, 1, 1)
    }
}

/// Span representing a range in the sanitized input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    /// Zero-width span at a single position
    pub const fn point(pos: Pos) -> Self {
        Self::new(pos, pos)
    }
}

/// Error kind for detailed categorization
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("opening tag expected")]
    ExpectedOpeningTag,
    #[error("opening tag expected, found a closing tag")]
    UnexpectedClosingTag,
    #[error("invalid character {ch:?}")]
    InvalidCharacter { ch: char },
    #[error("empty tag name")]
    EmptyTagName,
    #[error("no closing tag for `{name}`")]
    UnclosedTag { name: String },
    #[error("closing tag `[/{found}]` does not match `[{expected}]`")]
    MismatchedClosingTag { expected: String, found: String },
    #[error("whitespace expected before attribute")]
    MissingAttributeSeparator,
    #[error("attribute name expected")]
    EmptyAttributeName,
    #[error("`=` expected after attribute name")]
    MissingAssignment,
    #[error("quotation mark expected")]
    MissingQuote,
    #[error("unclosed quotation mark")]
    UnterminatedQuote,
    #[error("max depth exceeded: {max}")]
    MaxDepthExceeded { max: u16 },
    #[error("max size exceeded: {max}")]
    MaxSizeExceeded { max: usize },
}

/// Main error type for brackdom
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("error at {}: {message}", .span.start)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
    message: String,
}

/// Every [`Error`] reports malformed markup.
pub type SyntaxError = Error;

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Create error at specific position
    pub fn at(kind: ErrorKind, pos: Pos) -> Self {
        Self::new(kind, Span::point(pos))
    }
}

/// Result type alias for brackdom
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_display() {
        let pos = Pos::new(42, 10, 5);
        assert_eq!(pos.to_string(), "42:10:5");
    }

    #[test]
    fn test_error_creation() {
        let err = Error::at(ErrorKind::EmptyTagName, Pos::start());
        assert_eq!(err.kind(), &ErrorKind::EmptyTagName);
        assert_eq!(err.span(), Span::point(Pos::new(0, 1, 1)));
    }

    #[test]
    fn test_error_display() {
        let err = Error::at(
            ErrorKind::UnclosedTag {
                name: "p".to_string(),
            },
            Pos::new(7, 1, 8),
        );
        assert_eq!(err.to_string(), "error at 7:1:8: no closing tag for `p`");
    }

    #[test]
    fn test_custom_message() {
        let err = Error::with_message(
            ErrorKind::ExpectedOpeningTag,
            Span::point(Pos::start()),
            "opening tag expected, found 'x'",
        );
        assert_eq!(err.message(), "opening tag expected, found 'x'");
        assert!(err.to_string().ends_with("found 'x'"));
    }
}
