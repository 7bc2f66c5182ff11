use crate::cursor::TextCursor;
use crate::parser::{Outcome, Parser};

/// Parser combinator that concatenates a sequence of characters into a `String`
pub struct JoinedText<P> {
    parser: P,
}

impl<P> JoinedText<P> {
    pub fn new(parser: P) -> Self {
        JoinedText { parser }
    }
}

impl<P> Parser for JoinedText<P>
where
    P: Parser,
    P::Output: IntoIterator<Item = char>,
{
    type Output = String;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let (chars, cursor) = self.parser.parse(cursor)?;
        Ok((chars.into_iter().collect(), cursor))
    }
}

/// Convenience function to create a JoinedText parser
pub fn joined_text<P>(parser: P) -> JoinedText<P>
where
    P: Parser,
    P::Output: IntoIterator<Item = char>,
{
    JoinedText::new(parser)
}
