use crate::cursor::TextCursor;
use crate::error::NoMatch;
use crate::many::repeat;
use crate::parser::{Outcome, Parser};

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Behaves exactly like `many`, except that collecting nothing is a failure.
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<P> Parser for Some<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let (results, next_cursor, stop) = repeat(&self.parser, cursor);

        if results.is_empty() {
            return Err(stop.unwrap_or(NoMatch::at(cursor.position())));
        }

        Ok((results, next_cursor))
    }
}

/// Convenience function to create a Some parser
pub fn some<P>(parser: P) -> Some<P>
where
    P: Parser,
{
    Some::new(parser)
}
