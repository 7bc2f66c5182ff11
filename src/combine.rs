use crate::cursor::TextCursor;
use crate::parser::{Outcome, Parser};

/// Parser combinator that runs two parsers in sequence and merges their results
///
/// The second parser starts where the first one stopped. If either fails the
/// whole combinator fails, and the caller keeps its original cursor. This is
/// the single sequencing primitive: `keep_left` and `keep_right` are built
/// from it.
pub struct Combine<P1, P2, F> {
    parser1: P1,
    parser2: P2,
    combiner: F,
}

impl<P1, P2, F> Combine<P1, P2, F> {
    pub fn new(combiner: F, parser1: P1, parser2: P2) -> Self {
        Combine {
            parser1,
            parser2,
            combiner,
        }
    }
}

impl<P1, P2, F, U> Parser for Combine<P1, P2, F>
where
    P1: Parser,
    P2: Parser,
    F: Fn(P1::Output, P2::Output) -> U,
{
    type Output = U;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let (value1, cursor) = self.parser1.parse(cursor)?;
        let (value2, cursor) = self.parser2.parse(cursor)?;
        Ok(((self.combiner)(value1, value2), cursor))
    }
}

/// Convenience function to create a Combine parser
pub fn combine<P1, P2, F, U>(combiner: F, parser1: P1, parser2: P2) -> Combine<P1, P2, F>
where
    P1: Parser,
    P2: Parser,
    F: Fn(P1::Output, P2::Output) -> U,
{
    Combine::new(combiner, parser1, parser2)
}

/// Combine parser that keeps the result of its first parser
pub type KeepLeft<P1, P2> = Combine<
    P1,
    P2,
    fn(<P1 as Parser>::Output, <P2 as Parser>::Output) -> <P1 as Parser>::Output,
>;

/// Combine parser that keeps the result of its second parser
pub type KeepRight<P1, P2> = Combine<
    P1,
    P2,
    fn(<P1 as Parser>::Output, <P2 as Parser>::Output) -> <P2 as Parser>::Output,
>;

/// Sequence two parsers and keep only the result of the first
pub fn keep_left<P1, P2>(parser1: P1, parser2: P2) -> KeepLeft<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    let combiner: fn(P1::Output, P2::Output) -> P1::Output = |left, _| left;
    Combine::new(combiner, parser1, parser2)
}

/// Sequence two parsers and keep only the result of the second
pub fn keep_right<P1, P2>(parser1: P1, parser2: P2) -> KeepRight<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    let combiner: fn(P1::Output, P2::Output) -> P2::Output = |_, right| right;
    Combine::new(combiner, parser1, parser2)
}

/// Extension trait to add sequencing methods to parsers
pub trait CombineExt: Parser + Sized {
    fn combine<P, F, U>(self, other: P, combiner: F) -> Combine<Self, P, F>
    where
        P: Parser,
        F: Fn(Self::Output, P::Output) -> U,
    {
        Combine::new(combiner, self, other)
    }

    fn keep_left<P>(self, other: P) -> KeepLeft<Self, P>
    where
        P: Parser,
    {
        keep_left(self, other)
    }

    fn keep_right<P>(self, other: P) -> KeepRight<Self, P>
    where
        P: Parser,
    {
        keep_right(self, other)
    }
}

/// Implement CombineExt for all parsers
impl<P> CombineExt for P where P: Parser {}
