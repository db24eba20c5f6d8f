//! Sanitized markup input

/// Markup with leading and trailing whitespace removed
///
/// All offsets reported by the parser are character indices into this text,
/// not into the raw string handed to [`Input::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Input<'a> {
    source: &'a str,
}

impl<'a> Input<'a> {
    /// Sanitize raw markup
    pub fn new(raw: &'a str) -> Self {
        Self { source: raw.trim() }
    }

    /// Get the sanitized text
    pub const fn as_str(&self) -> &'a str {
        self.source
    }

    /// Get length in bytes
    pub const fn len(&self) -> usize {
        self.source.len()
    }

    /// Get length in characters, the upper bound of every node end offset
    pub fn char_len(&self) -> usize {
        self.source.chars().count()
    }

    /// Check if empty after sanitizing
    pub const fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s)
    }
}
