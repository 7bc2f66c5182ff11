use thiserror::Error;

/// A parser did not match at the given position
///
/// This is the only failure inside the combinator layer. It never means
/// input was consumed: whoever receives it still holds the cursor they
/// started from. The position is where matching stopped, which for nested
/// parsers can be past the starting point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("no match at byte offset {position}")]
pub struct NoMatch {
    position: usize,
}

impl NoMatch {
    pub fn at(position: usize) -> Self {
        NoMatch { position }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Keep whichever failure made it furthest into the input
    pub fn furthest(self, other: NoMatch) -> NoMatch {
        if other.position > self.position {
            other
        } else {
            self
        }
    }
}

/// A document was rejected
///
/// Grammar mismatches and unconsumed trailing input are reported the same
/// way. The location is informational only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input at line {line}, byte offset {offset} (absolute position: {position})")]
pub struct ParseError {
    position: usize,
    line: usize,
    offset: usize,
}

impl ParseError {
    pub fn new(source: &str, position: usize) -> Self {
        let position = position.min(source.len());
        let mut line = 1;
        let mut line_start = 0;

        for (i, byte) in source.bytes().enumerate() {
            if i >= position {
                break;
            }
            if byte == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        ParseError {
            position,
            line,
            offset: position - line_start,
        }
    }

    /// Absolute byte offset into the input
    pub fn position(&self) -> usize {
        self.position
    }

    /// 1-based line number
    pub fn line(&self) -> usize {
        self.line
    }

    /// Byte offset within the line
    pub fn offset(&self) -> usize {
        self.offset
    }
}
