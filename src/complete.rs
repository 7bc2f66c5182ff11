use crate::cursor::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Extension trait to run a parser over a whole string
pub trait CompleteExt: Parser {
    /// Parse `text` and require that nothing is left over
    ///
    /// Both a failed match and unconsumed trailing input become a
    /// [`ParseError`]; no partial result is ever returned.
    fn parse_str(&self, text: &str) -> Result<Self::Output, ParseError> {
        let (value, rest) = self
            .parse(TextCursor::new(text))
            .map_err(|err| ParseError::new(text, err.position()))?;

        if !rest.eos() {
            return Err(ParseError::new(text, rest.position()));
        }

        Ok(value)
    }
}

/// Implement CompleteExt for all parsers
impl<P> CompleteExt for P where P: Parser {}
