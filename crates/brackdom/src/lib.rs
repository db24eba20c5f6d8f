//! brackdom - parser for bracket-tag markup
//!
//! Turns `[tag attr="value"]content[/tag]` markup into a forest of [`Node`]s.
//! Every node records the character offset right after its closing tag, in
//! the input with leading and trailing whitespace removed.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), brackdom::Error> {
//! let nodes = brackdom::parse(r#"[link url="https://example.com"]Click[/link]"#)?;
//! let link = &nodes[0];
//! assert_eq!(link.tag(), "link");
//! assert_eq!(link.content(), "Click");
//! assert_eq!(link.attribute("url"), Some("https://example.com"));
//! assert_eq!(link.end_offset(), 44);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use tracing::{debug, instrument};

pub mod attributes;
pub use attributes::parse_attributes;

pub mod cursor;
pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span, SyntaxError};

pub mod input;
pub use input::Input;

pub mod model;
pub use model::{Attributes, Descendants, Element, Node, MAX_SERIALIZE_DEPTH};

pub mod parser;
pub use parser::{Config, Parser};

/// Parse markup into a forest of root nodes
pub fn parse(text: &str) -> Result<Vec<Node>> {
    parse_with_config(text, Config::default())
}

/// Parse markup with custom limits
#[instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn parse_with_config(text: &str, config: Config) -> Result<Vec<Node>> {
    Parser::with_config(text, config)
        .parse()
        .inspect_err(|err| debug!(%err, "parse failed"))
}

/// Parse the single node starting at or after a character offset
///
/// `offset` indexes the sanitized text, the same space as
/// [`Node::end_offset`], so `parse_node(text, node.end_offset())` reads the
/// next sibling of `node`.
pub fn parse_node(text: &str, offset: usize) -> Result<Node> {
    let mut parser = Parser::new(text);
    parser.seek(offset);
    parser.parse_node()
}
