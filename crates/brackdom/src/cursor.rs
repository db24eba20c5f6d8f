//! Character cursor for input navigation
//!
//! The cursor walks a `&str` one `char` at a time. It keeps the byte position
//! for slicing and a separate character offset, because node offsets are
//! reported in characters.

use crate::error::Pos;

/// Cursor for navigating text input with position tracking
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    offset: usize,
    line: u32,
    col: u32,
}

impl<'a> Cursor<'a> {
    /// Create cursor at the start of `input`
    pub const fn new(input: &'a str) -> Self {
        Self::starting_at(input, Pos::start())
    }

    /// Create cursor over a slice that begins at `origin` of a larger input
    ///
    /// Positions reported by the cursor are then relative to the larger input.
    pub const fn starting_at(input: &'a str, origin: Pos) -> Self {
        Self {
            input,
            pos: 0,
            offset: origin.offset,
            line: origin.line,
            col: origin.col,
        }
    }

    /// Get current char without consuming
    pub fn current(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Peek at char ahead without consuming
    pub fn peek(&self, ahead: usize) -> Option<char> {
        self.remaining().chars().nth(ahead)
    }

    /// Advance cursor by one char
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
            self.offset += 1;
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
    }

    /// Advance until the character offset reaches `offset` or input ends
    pub fn advance_to(&mut self, offset: usize) {
        while self.offset < offset && !self.is_eof() {
            self.advance();
        }
    }

    /// Skip whitespace
    pub fn skip_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }

    /// Consume chars while `pred` holds and return them
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
        self.slice_from(start)
    }

    /// Consume char if it matches
    pub fn consume(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Get current position
    pub const fn position(&self) -> Pos {
        Pos::new(self.offset, self.line, self.col)
    }

    /// Get current character offset
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Get current byte index, usable with [`Cursor::slice_from`]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Check if at end of input
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Get remaining text
    pub fn remaining(&self) -> &'a str {
        self.input.get(self.pos..).unwrap_or_default()
    }

    /// Get slice from byte index `start` to current position
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.input.get(start..self.pos).unwrap_or_default()
    }
}
