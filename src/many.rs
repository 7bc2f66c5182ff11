use crate::cursor::TextCursor;
use crate::error::NoMatch;
use crate::parser::{Outcome, Parser};

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Repetition is greedy and never fails. A match that consumes nothing ends
/// the repetition without being collected, so a parser that can succeed on
/// empty input cannot make this loop forever.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

/// Apply `parser` as often as it matches and consumes input
///
/// Returns the collected values, the cursor after the last consuming match,
/// and the failure that ended the repetition (`None` on a zero-width match).
pub(crate) fn repeat<'code, P>(
    parser: &P,
    mut cursor: TextCursor<'code>,
) -> (Vec<P::Output>, TextCursor<'code>, Option<NoMatch>)
where
    P: Parser,
{
    let mut results = Vec::new();

    loop {
        match parser.parse(cursor) {
            Ok((value, next_cursor)) => {
                if next_cursor.position() == cursor.position() {
                    log::trace!(
                        "repetition stopped on zero-width match at byte {}",
                        cursor.position()
                    );
                    return (results, cursor, None);
                }
                results.push(value);
                cursor = next_cursor;
            }
            Err(err) => return (results, cursor, Some(err)),
        }
    }
}

impl<P> Parser for Many<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let (results, cursor, _) = repeat(&self.parser, cursor);
        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many<P>(parser: P) -> Many<P>
where
    P: Parser,
{
    Many::new(parser)
}
