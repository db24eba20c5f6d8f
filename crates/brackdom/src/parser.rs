//! Markup parser implementation
//!
//! Tags are matched with an explicit stack of open frames instead of call
//! recursion, so a document's nesting depth and sibling count are limited
//! only by [`Config`] and memory.

use tracing::{debug, trace};

use crate::attributes::{is_name_char, parse_header};
use crate::cursor::Cursor;
use crate::error::{Error, ErrorKind, Pos, Result, Span};
use crate::input::Input;
use crate::model::{Attributes, Element, Node};

/// Default limit of simultaneously open tags
pub const DEFAULT_MAX_DEPTH: u16 = 1024;
/// Default limit of sanitized input size (64 MiB)
pub const DEFAULT_MAX_SIZE: usize = 64 * 1024 * 1024;

/// Configuration for the markup parser
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum nesting depth (0 means unlimited)
    pub max_depth: u16,
    /// Maximum sanitized input size in bytes (0 means unlimited)
    pub max_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl Config {
    /// Create a new config with unlimited depth and size
    pub const fn unlimited() -> Self {
        Self {
            max_depth: 0,
            max_size: 0,
        }
    }

    /// Create a new config with specific limits
    pub const fn new(max_depth: u16, max_size: usize) -> Self {
        Self {
            max_depth,
            max_size,
        }
    }
}

/// Opening tag whose closing tag has not been reached yet
#[derive(Debug)]
struct Frame<'a> {
    name: &'a str,
    content: &'a str,
    attributes: Attributes,
    children: Vec<Node>,
    start: Pos,
}

impl Frame<'_> {
    fn close(self, end_offset: usize) -> Node {
        let element = Element::from_parts(
            self.name.to_string(),
            self.content.trim().to_string(),
            self.attributes,
        );
        Node::new(element, end_offset, self.children)
    }
}

/// Bracket-tag markup parser
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    config: Config,
    len: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser with default configuration
    pub fn new(input: impl Into<Input<'a>>) -> Self {
        Self::with_config(input, Config::default())
    }

    /// Create a new parser with custom configuration
    pub fn with_config(input: impl Into<Input<'a>>, config: Config) -> Self {
        let input = input.into();
        Self {
            cursor: Cursor::new(input.as_str()),
            config,
            len: input.len(),
        }
    }

    /// Move forward to a character offset of the sanitized input
    pub fn seek(&mut self, offset: usize) {
        self.cursor.advance_to(offset);
    }

    /// Current character offset
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Parse every remaining top-level node
    pub fn parse(&mut self) -> Result<Vec<Node>> {
        self.check_size()?;

        let mut nodes = Vec::new();
        while !self.cursor.is_eof() {
            let node = self.parse_node()?;
            nodes.push(node);
        }

        debug!(roots = nodes.len(), "parsed document");
        Ok(nodes)
    }

    /// Parse one node, including all its descendants, at or after the cursor
    ///
    /// Only whitespace may precede the opening tag. On success the cursor
    /// sits right after the node's closing tag.
    pub fn parse_node(&mut self) -> Result<Node> {
        self.check_size()?;

        let mut open = self.open_tag(1)?;
        let mut ancestors: Vec<Frame<'a>> = Vec::new();

        // At the top of each turn the cursor is at `[` or at end of input.
        loop {
            if self.cursor.is_eof() {
                return Err(self.unclosed(open.name, open.start));
            }

            if self.cursor.peek(1) != Some('/') {
                let child = self.open_tag(ancestors.len() + 2)?;
                ancestors.push(std::mem::replace(&mut open, child));
                continue;
            }

            self.close_tag(&open)?;
            let node = open.close(self.cursor.offset());
            trace!(tag = node.tag(), end_offset = node.end_offset(), "closed tag");

            match ancestors.pop() {
                Some(mut parent) => {
                    parent.children.push(node);
                    open = parent;
                    self.skip_interleaved_text();
                }
                None => return Ok(node),
            }
        }
    }

    fn open_tag(&mut self, depth: usize) -> Result<Frame<'a>> {
        self.cursor.skip_whitespace();
        let start = self.cursor.position();

        match self.cursor.current() {
            Some('[') => self.cursor.advance(),
            Some(c) => {
                return Err(self.error_here(
                    ErrorKind::ExpectedOpeningTag,
                    format!("opening tag expected, found {c:?}"),
                ))
            }
            None => {
                return Err(self.error_here(
                    ErrorKind::ExpectedOpeningTag,
                    "opening tag expected, found end of input",
                ))
            }
        }

        if self.cursor.current() == Some('/') {
            return Err(Error::at(ErrorKind::UnexpectedClosingTag, start));
        }

        if self.config.max_depth > 0 && depth > usize::from(self.config.max_depth) {
            return Err(Error::at(
                ErrorKind::MaxDepthExceeded {
                    max: self.config.max_depth,
                },
                start,
            ));
        }

        let name = self.cursor.eat_while(is_name_char);
        match self.cursor.current() {
            Some(c) if c == ']' || c.is_whitespace() => {}
            Some(c) => {
                return Err(Error::at(
                    ErrorKind::InvalidCharacter { ch: c },
                    self.cursor.position(),
                ))
            }
            None => return Err(self.unclosed(name, start)),
        }
        if name.is_empty() {
            return Err(Error::at(ErrorKind::EmptyTagName, start));
        }

        let attributes = if self.cursor.current() == Some(']') {
            Attributes::new()
        } else {
            let header_start = self.cursor.position();
            let header = self.cursor.eat_while(|c| c != ']');
            if self.cursor.is_eof() {
                return Err(self.unclosed(name, start));
            }
            parse_header(Cursor::starting_at(header, header_start))?
        };
        self.cursor.advance();

        let content = self.cursor.eat_while(|c| c != '[');
        trace!(tag = name, depth, "opened tag");

        Ok(Frame {
            name,
            content,
            attributes,
            children: Vec::new(),
            start,
        })
    }

    /// Consume `[/name]`, which must match the innermost open tag
    fn close_tag(&mut self, open: &Frame<'a>) -> Result<()> {
        let start = self.cursor.position();
        self.cursor.advance();
        self.cursor.advance();

        let name = self.cursor.eat_while(|c| c != ']');
        if !self.cursor.consume(']') {
            return Err(self.unclosed(open.name, open.start));
        }

        if name != open.name {
            return Err(Error::new(
                ErrorKind::MismatchedClosingTag {
                    expected: open.name.to_string(),
                    found: name.to_string(),
                },
                Span::new(start, self.cursor.position()),
            ));
        }
        Ok(())
    }

    /// Text after a child tag is not part of the parent's content
    fn skip_interleaved_text(&mut self) {
        let text = self.cursor.eat_while(|c| c != '[');
        if !text.trim().is_empty() {
            trace!(len = text.len(), "discarded text between child tags");
        }
    }

    fn check_size(&self) -> Result<()> {
        if self.config.max_size > 0 && self.len > self.config.max_size {
            return Err(Error::at(
                ErrorKind::MaxSizeExceeded {
                    max: self.config.max_size,
                },
                Pos::start(),
            ));
        }
        Ok(())
    }

    fn unclosed(&self, name: &str, start: Pos) -> Error {
        Error::new(
            ErrorKind::UnclosedTag {
                name: name.to_string(),
            },
            Span::new(start, self.cursor.position()),
        )
    }

    fn error_here(&self, kind: ErrorKind, message: impl Into<String>) -> Error {
        Error::with_message(kind, Span::point(self.cursor.position()), message)
    }
}
