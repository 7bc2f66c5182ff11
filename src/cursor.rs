use crate::error::NoMatch;

/// Immutable position in a piece of source text
///
/// Cursors are `Copy`. Advancing returns a new cursor and leaves the old one
/// untouched, so any number of parsers can hold positions into the same text.
/// `position` is a byte offset and always sits on a char boundary.
///
/// Build cursors with [`TextCursor::new`] and move them with
/// [`next`](TextCursor::next). A hand-built `Valid` cursor whose position is
/// not on a char boundary makes `value` and `next` panic.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextCursor<'code> {
    Valid { text: &'code str, position: usize },
    EndOfFile { text: &'code str },
}

impl<'code> TextCursor<'code> {
    pub fn new(text: &'code str) -> Self {
        if text.is_empty() {
            return TextCursor::EndOfFile { text };
        }
        TextCursor::Valid { text, position: 0 }
    }

    /// Get the character at the current cursor position
    pub fn value(&self) -> Result<char, NoMatch> {
        match self {
            TextCursor::Valid { text, position } => text[*position..]
                .chars()
                .next()
                .ok_or(NoMatch::at(*position)),
            TextCursor::EndOfFile { text } => Err(NoMatch::at(text.len())),
        }
    }

    /// Advance past the current character
    ///
    /// If already at the end, returns a cursor still positioned at the end
    pub fn next(self) -> Self {
        match self {
            TextCursor::Valid { text, position } => {
                let width = text[position..].chars().next().map_or(1, char::len_utf8);
                if position + width >= text.len() {
                    TextCursor::EndOfFile { text }
                } else {
                    TextCursor::Valid {
                        text,
                        position: position + width,
                    }
                }
            }
            TextCursor::EndOfFile { text } => TextCursor::EndOfFile { text },
        }
    }

    pub fn position(&self) -> usize {
        match self {
            TextCursor::Valid { position, .. } => *position,
            TextCursor::EndOfFile { text } => text.len(),
        }
    }

    pub fn eos(&self) -> bool {
        matches!(self, TextCursor::EndOfFile { .. })
    }

    /// The whole text this cursor points into
    pub fn source(&self) -> &'code str {
        match self {
            TextCursor::Valid { text, .. } => text,
            TextCursor::EndOfFile { text } => text,
        }
    }

    /// The unconsumed remainder of the text
    pub fn rest(&self) -> &'code str {
        &self.source()[self.position()..]
    }
}
