use crate::cursor::TextCursor;
use crate::error::NoMatch;
use crate::parser::{Outcome, Parser};

/// Ordered choice over a list of parsers
///
/// Every alternative is tried against the same original cursor, in order.
/// The first one that matches wins, even if a later one would consume more.
/// An empty list never matches.
pub struct OneOf<P> {
    parsers: Vec<P>,
}

impl<P> OneOf<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        OneOf { parsers }
    }
}

impl<P> Parser for OneOf<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let mut furthest = NoMatch::at(cursor.position());

        for parser in &self.parsers {
            match parser.parse(cursor) {
                Ok(result) => return Ok(result),
                Err(err) => furthest = furthest.furthest(err),
            }
        }

        Err(furthest)
    }
}

/// Convenience function to create a OneOf parser
///
/// Alternatives of different concrete types can be mixed by boxing them
/// first (see [`BoxedExt`](crate::parser::BoxedExt)).
pub fn one_of<P, I>(parsers: I) -> OneOf<P>
where
    P: Parser,
    I: IntoIterator<Item = P>,
{
    OneOf::new(parsers.into_iter().collect())
}
