//! Attribute header parser
//!
//! The header is everything between a tag name and the `]` that ends the
//! opening tag, for example ` url="https://example.com" target='_blank'`.
//! Every pair must be preceded by whitespace. Values are quoted with `"` or
//! `'` and taken verbatim; there is no escaping.

use crate::cursor::Cursor;
use crate::error::{Error, ErrorKind, Result};
use crate::model::Attributes;

/// Parse a standalone attribute header
///
/// Error positions are relative to `header`.
pub fn parse_attributes(header: &str) -> Result<Attributes> {
    parse_header(Cursor::new(header))
}

/// Parse a header whose cursor already carries its position in the document
pub(crate) fn parse_header(mut cursor: Cursor<'_>) -> Result<Attributes> {
    let mut attrs = Attributes::new();

    while let Some(c) = cursor.current() {
        if !c.is_whitespace() {
            return Err(Error::at(
                ErrorKind::MissingAttributeSeparator,
                cursor.position(),
            ));
        }
        cursor.skip_whitespace();

        let key_pos = cursor.position();
        let key = cursor.eat_while(is_name_char);
        match cursor.current() {
            Some(c) if c != '=' && !c.is_whitespace() => {
                return Err(Error::at(
                    ErrorKind::InvalidCharacter { ch: c },
                    cursor.position(),
                ));
            }
            _ => {}
        }
        if key.is_empty() {
            return Err(Error::at(ErrorKind::EmptyAttributeName, key_pos));
        }

        cursor.skip_whitespace();
        if !cursor.consume('=') {
            return Err(Error::at(ErrorKind::MissingAssignment, cursor.position()));
        }

        cursor.skip_whitespace();
        let quote = match cursor.current() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Err(Error::at(ErrorKind::MissingQuote, cursor.position())),
        };
        let quote_pos = cursor.position();
        cursor.advance();

        let value = cursor.eat_while(|c| c != quote);
        if !cursor.consume(quote) {
            return Err(Error::at(ErrorKind::UnterminatedQuote, quote_pos));
        }

        attrs.insert(key.to_lowercase(), value.to_string());
    }

    Ok(attrs)
}

/// Characters allowed in tag and attribute names
///
/// Letters of any script, ASCII digits, `-` and `_`. Number forms such as
/// `½` or `Ⅻ` are not name characters even where Unicode calls them
/// alphabetic.
pub(crate) fn is_name_char(c: char) -> bool {
    (c.is_alphabetic() && !c.is_numeric()) || c.is_ascii_digit() || c == '-' || c == '_'
}
