use crate::cursor::TextCursor;
use crate::parser::{Outcome, Parser};

/// Parser combinator that runs a list of parsers one after another
///
/// Each parser starts where the previous one stopped. The output holds every
/// result in order. The first failure fails the whole sequence.
pub struct SequenceAll<P> {
    parsers: Vec<P>,
}

impl<P> SequenceAll<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        SequenceAll { parsers }
    }
}

impl<P> Parser for SequenceAll<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, mut cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let mut results = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            let (value, next_cursor) = parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a SequenceAll parser
pub fn sequence_all<P, I>(parsers: I) -> SequenceAll<P>
where
    P: Parser,
    I: IntoIterator<Item = P>,
{
    SequenceAll::new(parsers.into_iter().collect())
}
